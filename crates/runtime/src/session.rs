use crate::core::{MenuItem, NodeRef, TriggerEvent};

use std::fmt;
use std::rc::Rc;

/// The callback receiving the chosen item, the element and the trigger event.
pub type SelectCallback = Rc<dyn Fn(&MenuItem, &NodeRef, &TriggerEvent)>;

/// Identifies one open-menu interaction, from `show` to selection or dismissal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SessionId(u64);

impl SessionId {
    /// The session of a manager that has never shown a menu.
    pub const NONE: Self = Self(0);

    pub(crate) fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The origin of the current session.
#[derive(Clone)]
pub struct TriggerContext {
    /// The element the menu was opened on.
    pub element: NodeRef,
    /// The event that opened the menu.
    pub event: TriggerEvent,
    /// The callback notified when an item is chosen.
    pub on_select: Option<SelectCallback>,
}

impl TriggerContext {
    /// Creates a new [`TriggerContext`].
    pub fn new(element: NodeRef, event: TriggerEvent, on_select: Option<SelectCallback>) -> Self {
        Self {
            element,
            event,
            on_select,
        }
    }
}

impl fmt::Debug for TriggerContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TriggerContext")
            .field("element", &self.element)
            .field("event", &self.event)
            .field("on_select", &self.on_select.as_ref().map(|_| ".."))
            .finish()
    }
}
