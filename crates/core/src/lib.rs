//! The core library of [ctxmenu].
//!
//! This library holds basic types that can be reused and re-exported in
//! different runtime implementations: geometry, the menu model, the element
//! and event abstractions, and the resolver mapping an element to its menu.
//!
//! [ctxmenu]: https://docs.rs/ctxmenu
pub mod element;
pub mod error;
pub mod event;
pub mod menu;
pub mod resolver;
pub mod settings;
pub mod source;

mod options;
mod point;
mod rectangle;
mod size;

pub use element::{Element, Node, NodeRef};
pub use error::{ConfigurationError, MeasurementUnavailable, ResolutionMiss};
pub use event::{Status, TriggerEvent};
pub use menu::{Content, Items, MenuId, MenuItem};
pub use options::Options;
pub use point::Point;
pub use rectangle::Rectangle;
pub use settings::Settings;
pub use size::Size;
pub use source::MenuSource;
