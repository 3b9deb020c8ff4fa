//! Bind a context menu to an element.
//!
//! A bound element shows its menu when a trigger event reaches it, as long as
//! its [`MenuSource`] resolves to at least one item. Otherwise the event is
//! left untouched, so the host's native menu or an ancestor's binding can
//! handle it.
//!
//! ```ignore
//! let config = BindingConfig::new(MenuSource::map([
//!     ("Card", vec![MenuItem::new("edit", "Edit")]),
//! ]))
//! .on_select(|item, element, event| {
//!     log::info!("{} chosen at {:?}", item.id, event.position);
//! });
//!
//! let binding = Binding::bind(&element, Some(config), None, &manager);
//! ```
use crate::core::resolver;
use crate::core::{
    ConfigurationError, MenuItem, MenuSource, Node, NodeRef, Options, Settings, Status,
    TriggerEvent,
};
use crate::runtime::{OverlayManager, SelectCallback, TriggerContext};

use std::fmt;
use std::rc::{Rc, Weak};

/// The configuration of a [`Binding`].
#[derive(Clone, Default)]
pub struct BindingConfig {
    /// Where the items of the menu come from.
    ///
    /// A binding without a source is inert.
    pub menus: Option<MenuSource>,

    /// The callback notified when an item is chosen.
    pub on_select: Option<SelectCallback>,

    /// The maximum width of the panel, if any.
    pub max_width: Option<f32>,

    /// The minimum width of the panel, if any.
    pub min_width: Option<f32>,
}

impl BindingConfig {
    /// Creates a new [`BindingConfig`] with the given [`MenuSource`].
    pub fn new(menus: impl Into<MenuSource>) -> Self {
        Self {
            menus: Some(menus.into()),
            ..Self::default()
        }
    }

    /// Sets the callback notified when an item is chosen.
    #[must_use]
    pub fn on_select(
        mut self,
        on_select: impl Fn(&MenuItem, &NodeRef, &TriggerEvent) + 'static,
    ) -> Self {
        self.on_select = Some(Rc::new(on_select));
        self
    }

    /// Sets the maximum width of the panel.
    #[must_use]
    pub fn max_width(mut self, max_width: f32) -> Self {
        self.max_width = Some(max_width);
        self
    }

    /// Sets the minimum width of the panel.
    #[must_use]
    pub fn min_width(mut self, min_width: f32) -> Self {
        self.min_width = Some(min_width);
        self
    }
}

impl fmt::Debug for BindingConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BindingConfig")
            .field("menus", &self.menus)
            .field("on_select", &self.on_select.as_ref().map(|_| ".."))
            .field("max_width", &self.max_width)
            .field("min_width", &self.min_width)
            .finish()
    }
}

/// The link between an element and its context menu.
///
/// The trigger listener lives as long as the element does; dropping a
/// [`Binding`] does not detach it.
#[derive(Debug)]
pub struct Binding {
    error: Option<ConfigurationError>,
}

impl Binding {
    /// Binds a context menu to `element`.
    ///
    /// `arg` is the stacking order of the panel. When absent, the default
    /// stacking order in the [`Settings`] of the manager is used.
    ///
    /// An invalid configuration is logged and produces an inert binding that
    /// never attaches a listener.
    pub fn bind(
        element: &NodeRef,
        config: Option<BindingConfig>,
        arg: Option<&str>,
        manager: &Rc<OverlayManager>,
    ) -> Self {
        let trigger = match Trigger::new(config, arg, manager.settings()) {
            Ok(trigger) => trigger,
            Err(error) => {
                log::warn!("context menu: binding of {element:?} is inert, {error}");

                return Self { error: Some(error) };
            }
        };

        let element_ref = Rc::downgrade(element);
        let manager_ref = Rc::downgrade(manager);

        element.add_trigger_listener(Rc::new(move |event: &mut TriggerEvent| {
            trigger.on_trigger(&element_ref, &manager_ref, event)
        }));

        log::debug!("context menu: bound to {element:?}");

        Self { error: None }
    }

    /// Returns `true` if a trigger listener was attached.
    pub fn is_active(&self) -> bool {
        self.error.is_none()
    }

    /// Returns why the binding is inert, if it is.
    pub fn error(&self) -> Option<&ConfigurationError> {
        self.error.as_ref()
    }
}

/// The validated state captured by a trigger listener.
struct Trigger {
    menus: MenuSource,
    on_select: Option<SelectCallback>,
    options: Options,
}

impl Trigger {
    fn new(
        config: Option<BindingConfig>,
        arg: Option<&str>,
        settings: &Settings,
    ) -> Result<Self, ConfigurationError> {
        let BindingConfig {
            menus,
            on_select,
            max_width,
            min_width,
        } = config.ok_or(ConfigurationError::MissingMenus)?;

        let menus = menus.ok_or(ConfigurationError::MissingMenus)?;
        menus.validate()?;

        let z_index = match arg.map(str::trim) {
            Some(arg) if !arg.is_empty() => arg
                .parse()
                .map_err(|_| ConfigurationError::InvalidStackingOrder(arg.to_owned()))?,
            _ => settings.z_index,
        };

        Ok(Self {
            menus,
            on_select,
            options: Options {
                z_index,
                max_width,
                min_width,
            },
        })
    }

    fn on_trigger(
        &self,
        element: &Weak<dyn Node>,
        manager: &Weak<OverlayManager>,
        event: &mut TriggerEvent,
    ) -> Status {
        let (Some(element), Some(manager)) = (element.upgrade(), manager.upgrade()) else {
            return Status::Ignored;
        };

        let identity = if self.menus.requires_identity() {
            element.attribute(&manager.settings().identity_attribute)
        } else {
            None
        };

        let items = resolver::resolve(identity.as_deref(), &self.menus);

        if items.is_empty() {
            return Status::Ignored;
        }

        event.prevent_default();
        event.stop_propagation();

        let context = TriggerContext::new(element, event.clone(), self.on_select.clone());
        let _ = manager.show(event.position, items, self.options, context);

        Status::Captured
    }
}
