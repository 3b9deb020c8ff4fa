//! The single overlay that displays every context menu.
//!
//! An [`OverlayManager`] owns the [`PresentationState`], the mounted
//! [`Panel`] and the [`TriggerContext`] of the open session. At most one
//! menu is open at a time: every [`show`] starts a new session and abandons
//! the previous one.
//!
//! Positions are clamped to the viewport after the panel has been laid out,
//! so [`show`] only schedules the correction. The host calls
//! [`on_frame_rendered`] once the new position has been committed:
//!
//! ```ignore
//! let manager = OverlayManager::new(host);
//!
//! manager.show(event.position, items, Options::default(), context);
//! // ... the host renders a frame ...
//! manager.on_frame_rendered();
//! ```
//!
//! [`show`]: OverlayManager::show
//! [`on_frame_rendered`]: OverlayManager::on_frame_rendered
use crate::clamp::clamp;
use crate::core::menu::{self, Items, MenuId};
use crate::core::{MeasurementUnavailable, Options, Point, Settings};
use crate::panel::{Host, Panel, PanelEvent};
use crate::session::{SessionId, TriggerContext};
use crate::state::PresentationState;

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

#[cfg(test)]
mod tests;

/// A function notified after every change of the [`PresentationState`].
pub type Subscriber = Rc<dyn Fn(&PresentationState)>;

/// Identifies a [`Subscriber`] registered with [`OverlayManager::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Owns the context menu overlay.
///
/// All methods take `&self`, so a manager can be shared by every binding with
/// an [`Rc`]. No internal borrow is held while user callbacks run.
pub struct OverlayManager {
    settings: Settings,
    host: RefCell<Box<dyn Host>>,
    panel: RefCell<Option<Box<dyn Panel>>>,
    state: RefCell<PresentationState>,
    context: RefCell<Option<TriggerContext>>,
    pending_clamps: RefCell<Vec<SessionId>>,
    subscribers: RefCell<Vec<(SubscriptionId, Subscriber)>>,
    next_subscription: Cell<u64>,
}

impl OverlayManager {
    /// Creates a new [`OverlayManager`] with the default [`Settings`].
    ///
    /// Nothing is mounted until the first menu is shown.
    pub fn new(host: impl Host + 'static) -> Self {
        Self::with_settings(host, Settings::default())
    }

    /// Creates a new [`OverlayManager`] with the given [`Settings`].
    pub fn with_settings(host: impl Host + 'static, settings: Settings) -> Self {
        Self {
            settings,
            host: RefCell::new(Box::new(host)),
            panel: RefCell::new(None),
            state: RefCell::new(PresentationState::default()),
            context: RefCell::new(None),
            pending_clamps: RefCell::new(Vec::new()),
            subscribers: RefCell::new(Vec::new()),
            next_subscription: Cell::new(0),
        }
    }

    /// Returns the [`Settings`] of the manager.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Mounts the panel if it has not been mounted yet.
    ///
    /// The host is asked for a panel exactly once during the lifetime of the
    /// manager; the panel is never unmounted.
    pub fn ensure_instance(&self) {
        if self.is_mounted() {
            return;
        }

        let mut panel = self.host.borrow_mut().mount_panel();
        panel.update(&self.state.borrow());

        *self.panel.borrow_mut() = Some(panel);

        log::debug!("context menu: panel mounted");
    }

    /// Returns whether the panel has been mounted.
    pub fn is_mounted(&self) -> bool {
        self.panel.borrow().is_some()
    }

    /// Opens a menu with the given items at `position`.
    ///
    /// Any open session is abandoned without notice. A clamp pass is
    /// scheduled for the next [`on_frame_rendered`] call.
    ///
    /// [`on_frame_rendered`]: Self::on_frame_rendered
    pub fn show(
        &self,
        position: Point,
        items: Items,
        options: Options,
        context: TriggerContext,
    ) -> SessionId {
        self.ensure_instance();

        let session = {
            let mut state = self.state.borrow_mut();
            let session = state.session.next();

            if state.visible {
                log::debug!("context menu: session {} abandoned", state.session);
            }

            *state = PresentationState {
                visible: true,
                position,
                menus: items,
                options,
                session,
            };

            session
        };

        *self.context.borrow_mut() = Some(context);
        self.pending_clamps.borrow_mut().push(session);

        log::trace!("context menu: session {session} shown at {position:?}");

        self.notify();

        session
    }

    /// Runs the clamp passes scheduled since the last render.
    ///
    /// The host must call this after the panel has been laid out at its
    /// latest position. A pass scheduled by a session that has since been
    /// replaced is discarded.
    pub fn on_frame_rendered(&self) {
        let scheduled = std::mem::take(&mut *self.pending_clamps.borrow_mut());

        for session in scheduled {
            if session != self.current_session() {
                log::debug!("context menu: discarding stale clamp of session {session}");
                continue;
            }

            match self.clamp_to_viewport() {
                Ok(true) => self.notify(),
                Ok(false) => {}
                Err(error) => log::trace!("context menu: clamp skipped, {error}"),
            }
        }
    }

    /// Returns `true` if clamping moved the panel.
    fn clamp_to_viewport(&self) -> Result<bool, MeasurementUnavailable> {
        let bounds = self
            .panel
            .borrow()
            .as_ref()
            .and_then(|panel| panel.bounds())
            .ok_or(MeasurementUnavailable)?;

        let viewport = self.host.borrow().viewport();

        let mut state = self.state.borrow_mut();
        let clamped = clamp(state.position, bounds, viewport, self.settings.margin);

        if clamped == state.position {
            return Ok(false);
        }

        log::trace!(
            "context menu: clamped from {:?} to {clamped:?}",
            state.position
        );
        state.position = clamped;

        Ok(true)
    }

    /// Dispatches the selection of the item at `path`.
    ///
    /// `path` lists the [`MenuId`] of every item from the top level down to
    /// the chosen one, e.g. `[sort, name]` for "Name" in the "Sort by"
    /// submenu. The item handler runs first, then the callback of the
    /// session, and finally the menu is hidden unless a callback opened a
    /// new one.
    ///
    /// Returns `false` without dispatching if the menu is hidden, if the
    /// path leads nowhere, or if any item along it is disabled or a divider.
    pub fn select(&self, path: &[MenuId]) -> bool {
        let (item, context, session) = {
            let state = self.state.borrow();

            if !state.visible {
                log::debug!("context menu: selection of {path:?} while hidden");
                return false;
            }

            let Some(trail) = menu::walk(path, &state.menus) else {
                log::debug!("context menu: selection of unknown item {path:?}");
                return false;
            };

            if !trail.iter().all(|item| item.is_selectable()) {
                log::debug!("context menu: item {path:?} is not selectable");
                return false;
            }

            let Some(&item) = trail.last() else {
                return false;
            };

            let Some(context) = self.context.borrow().clone() else {
                return false;
            };

            (item.clone(), context, state.session)
        };

        if let Some(handler) = &item.handler {
            handler(&context.element, &context.event);
        }

        if let Some(on_select) = &context.on_select {
            on_select(&item, &context.element, &context.event);
        }

        if self.current_session() == session {
            self.set_visible(false);
        }

        true
    }

    /// Shows or hides the panel, keeping its position and items.
    ///
    /// Hiding this way is a dismissal: no callback is invoked.
    pub fn set_visible(&self, visible: bool) {
        {
            let mut state = self.state.borrow_mut();

            if state.visible == visible {
                return;
            }

            state.visible = visible;
        }

        self.notify();
    }

    /// Handles a signal of the [`Panel`].
    pub fn on_panel_event(&self, event: PanelEvent) {
        match event {
            PanelEvent::VisibilityChanged(visible) => self.set_visible(visible),
            PanelEvent::ItemSelected(path) => {
                let _ = self.select(&path);
            }
        }
    }

    /// Returns a snapshot of the [`PresentationState`].
    pub fn state(&self) -> PresentationState {
        self.state.borrow().clone()
    }

    /// Returns the latest session, open or not.
    pub fn current_session(&self) -> SessionId {
        self.state.borrow().session
    }

    /// Returns the [`TriggerContext`] of the latest session.
    pub fn context(&self) -> Option<TriggerContext> {
        self.context.borrow().clone()
    }

    /// Registers a function notified after every change of the state.
    pub fn subscribe(&self, subscriber: impl Fn(&PresentationState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription.get());
        self.next_subscription.set(id.0 + 1);

        self.subscribers
            .borrow_mut()
            .push((id, Rc::new(subscriber)));

        id
    }

    /// Removes a subscriber. Returns `false` if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.borrow_mut();
        let before = subscribers.len();

        subscribers.retain(|(subscription, _)| *subscription != id);

        subscribers.len() != before
    }

    fn notify(&self) {
        let state = self.state();

        if let Some(panel) = self.panel.borrow_mut().as_mut() {
            panel.update(&state);
        }

        let subscribers: Vec<Subscriber> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, subscriber)| Rc::clone(subscriber))
            .collect();

        for subscriber in subscribers {
            subscriber(&state);
        }
    }
}

impl fmt::Debug for OverlayManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverlayManager")
            .field("settings", &self.settings)
            .field("mounted", &self.is_mounted())
            .field("state", &self.state.borrow())
            .field("pending_clamps", &self.pending_clamps.borrow())
            .finish_non_exhaustive()
    }
}
