//! Handle trigger events of a user interface.
use crate::Point;

/// An event requesting a context menu, e.g. a secondary mouse click.
#[derive(Debug, Clone, PartialEq)]
pub struct TriggerEvent {
    /// Pointer position in client (viewport) coordinates.
    pub position: Point,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl TriggerEvent {
    /// Creates a new [`TriggerEvent`] at the given client position.
    pub fn new(position: impl Into<Point>) -> Self {
        Self {
            position: position.into(),
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    /// Suppresses the host's default action (e.g. the native context menu).
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Returns whether the default action has been suppressed.
    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Stops the event from bubbling to ancestors.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    /// Returns whether propagation has been stopped.
    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

/// The status of a [`TriggerEvent`] after being processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The event was **NOT** handled by any listener.
    Ignored,

    /// The event was handled and a menu was shown.
    Captured,
}

impl Status {
    /// Merges two [`Status`] into one.
    ///
    /// `Captured` takes precedence over `Ignored`:
    ///
    /// ```
    /// use ctxmenu_core::event::Status;
    ///
    /// assert_eq!(Status::Ignored.merge(Status::Ignored), Status::Ignored);
    /// assert_eq!(Status::Ignored.merge(Status::Captured), Status::Captured);
    /// assert_eq!(Status::Captured.merge(Status::Ignored), Status::Captured);
    /// assert_eq!(Status::Captured.merge(Status::Captured), Status::Captured);
    /// ```
    pub fn merge(self, b: Self) -> Self {
        match self {
            Status::Ignored => b,
            Status::Captured => Status::Captured,
        }
    }
}
