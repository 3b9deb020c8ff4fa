use crate::core::menu::{self, Items};
use crate::core::{Options, Point};
use crate::session::SessionId;

/// What the panel renders.
///
/// Only the [`OverlayManager`] writes it; panels and subscribers receive
/// snapshots.
///
/// [`OverlayManager`]: crate::OverlayManager
#[derive(Debug, Clone)]
pub struct PresentationState {
    /// Whether the panel is shown.
    pub visible: bool,
    /// Top-left corner of the panel in viewport coordinates.
    pub position: Point,
    /// The items to display.
    pub menus: Items,
    /// Presentation hints of the binding that opened the menu.
    pub options: Options,
    /// The session the state belongs to.
    pub session: SessionId,
}

impl Default for PresentationState {
    fn default() -> Self {
        Self {
            visible: false,
            position: Point::ORIGIN,
            menus: menu::empty(),
            options: Options::default(),
            session: SessionId::NONE,
        }
    }
}
