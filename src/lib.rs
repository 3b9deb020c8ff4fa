//! ctxmenu shows a context menu for the elements of a host tree.
//!
//! A caller binds a [`MenuSource`] to an element. When a trigger event (e.g.
//! a right click) reaches that element, the items for its identity are
//! resolved and displayed in a single floating panel near the pointer. The
//! panel is clamped to the viewport once it has been laid out. Choosing an
//! item calls back into the caller with the item, the element and the event.
//!
//! # Overview
//! The engine is split into three crates, re-exported here:
//!
//! - [`core`] holds the menu model, the element and event abstractions, and
//!   the [`resolver`] mapping an element to its items.
//! - [`runtime`] owns the [`OverlayManager`], which mounts the panel once and
//!   drives it through every session.
//! - [`widget`] attaches [`Binding`]s to elements.
//!
//! A [`ContextMenu`] ties them together:
//!
//! ```
//! use ctxmenu::{BindingConfig, ContextMenu, Element, MenuItem, MenuSource, NodeRef};
//! use ctxmenu::{Headless, Point, Size, TriggerEvent};
//!
//! let context_menu = ContextMenu::new(Headless::new(
//!     Size::new(1024.0, 768.0),
//!     Size::new(200.0, 150.0),
//! ));
//!
//! let card = Element::new("div");
//! card.set_attribute("data-component", "Card");
//!
//! let node: NodeRef = card.clone();
//! let _binding = context_menu.bind(
//!     &node,
//!     Some(BindingConfig::new(MenuSource::map([(
//!         "Card",
//!         vec![MenuItem::new("edit", "Edit")],
//!     )]))),
//!     None,
//! );
//!
//! let mut event = TriggerEvent::new(Point::new(300.0, 400.0));
//! let _ = Element::dispatch_trigger(&card, &mut event);
//!
//! assert!(event.is_default_prevented());
//! assert!(context_menu.manager().state().visible);
//! ```
//!
//! [`resolver`]: core::resolver
pub use ctxmenu_core as core;
pub use ctxmenu_runtime as runtime;
pub use ctxmenu_widget as widget;

pub use crate::core::menu::{divider, item};
pub use crate::core::{
    ConfigurationError, Content, Element, Items, MeasurementUnavailable, MenuId, MenuItem,
    MenuSource, Node, NodeRef, Options, Point, Rectangle, ResolutionMiss, Settings, Size, Status,
    TriggerEvent,
};
pub use crate::runtime::{
    Headless, Host, OverlayManager, Panel, PanelEvent, PresentationState, SelectCallback,
    SessionId, TriggerContext,
};
pub use crate::widget::{Binding, BindingConfig};

use std::rc::Rc;

/// The owner of the context menu overlay of a host.
///
/// Every binding created through the same [`ContextMenu`] shares one panel.
#[derive(Debug, Clone)]
pub struct ContextMenu {
    manager: Rc<OverlayManager>,
}

impl ContextMenu {
    /// Creates a new [`ContextMenu`] with the default [`Settings`].
    pub fn new(host: impl Host + 'static) -> Self {
        Self::with_settings(host, Settings::default())
    }

    /// Creates a new [`ContextMenu`] with the given [`Settings`].
    pub fn with_settings(host: impl Host + 'static, settings: Settings) -> Self {
        log::debug!("context menu: {settings:?}");

        Self {
            manager: Rc::new(OverlayManager::with_settings(host, settings)),
        }
    }

    /// Binds a context menu to `element`.
    ///
    /// See [`Binding::bind`].
    pub fn bind(
        &self,
        element: &NodeRef,
        config: Option<BindingConfig>,
        arg: Option<&str>,
    ) -> Binding {
        Binding::bind(element, config, arg, &self.manager)
    }

    /// Returns the [`OverlayManager`] shared by every binding.
    pub fn manager(&self) -> &Rc<OverlayManager> {
        &self.manager
    }
}
