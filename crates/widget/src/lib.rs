//! Attach context menus to the elements of a host tree.
//!
//! A [`Binding`] connects one element to a [`MenuSource`] and to the shared
//! [`OverlayManager`]. Every trigger on the element resolves its items again,
//! so menus can change between events.
//!
//! [`MenuSource`]: crate::core::MenuSource
//! [`OverlayManager`]: crate::runtime::OverlayManager
pub use ctxmenu_runtime as runtime;
pub use runtime::core;

pub mod binding;

pub use binding::{Binding, BindingConfig};
