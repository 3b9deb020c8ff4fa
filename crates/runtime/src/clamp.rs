//! Keep a rendered panel inside the viewport.
use crate::core::{Point, Rectangle, Size};

/// Returns the corrected position of a panel measured at `bounds`.
///
/// A panel whose right edge overflows the viewport is moved so that it ends
/// `margin` pixels before it; the bottom edge is handled the same way.
/// The left and top edges are never corrected, and the result is not
/// measured again.
pub fn clamp(position: Point, bounds: Rectangle, viewport: Size, margin: f32) -> Point {
    let mut clamped = position;

    if bounds.right() > viewport.width {
        clamped.x = viewport.width - bounds.width - margin;
    }

    if bounds.bottom() > viewport.height {
        clamped.y = viewport.height - bounds.height - margin;
    }

    clamped
}
