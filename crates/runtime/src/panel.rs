//! The contracts between the overlay manager and the host.
use crate::PresentationState;
use crate::core::{MenuId, Rectangle, Size};

/// The rendered menu.
///
/// A panel draws the items of the last [`PresentationState`] it received at
/// a fixed position. It never calls back into the manager directly; the host
/// forwards its signals as [`PanelEvent`]s.
pub trait Panel {
    /// Applies a new presentation state.
    fn update(&mut self, state: &PresentationState);

    /// Measures the panel as laid out by the last render pass.
    ///
    /// Returns `None` while the panel has no layout.
    fn bounds(&self) -> Option<Rectangle>;
}

/// The document the panel lives in.
pub trait Host {
    /// Returns the size of the viewport.
    fn viewport(&self) -> Size;

    /// Creates the container of the panel under the document body and mounts
    /// a panel into it.
    ///
    /// The manager calls this at most once.
    fn mount_panel(&mut self) -> Box<dyn Panel>;
}

/// A signal emitted by a [`Panel`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelEvent {
    /// The panel wants to be shown or hidden, e.g. after an outside click.
    VisibilityChanged(bool),

    /// An item was chosen.
    ///
    /// Holds the [`MenuId`] of every item from the top level down to the
    /// chosen one.
    ItemSelected(Vec<MenuId>),
}
