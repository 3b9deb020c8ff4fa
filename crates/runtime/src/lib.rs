//! A renderer-agnostic runtime for ctxmenu.
//!
//! The runtime owns the lifecycle of the context menu overlay: mounting the
//! single panel, opening and closing sessions, clamping the panel to the
//! viewport after layout, and dispatching selections.
pub use ctxmenu_core as core;

pub mod clamp;
pub mod headless;
pub mod overlay;
pub mod panel;

mod session;
mod state;

pub use clamp::clamp;
pub use headless::Headless;
pub use overlay::{OverlayManager, Subscriber, SubscriptionId};
pub use panel::{Host, Panel, PanelEvent};
pub use session::{SelectCallback, SessionId, TriggerContext};
pub use state::PresentationState;
