//! Screen pixels → device space.
//!
//! Screen space has its origin at the top-left with +Y down. Device space spans
//! `[-1, 1]` on both axes with +Y up. Platforms may report pointer positions
//! outside the window while a button is held, so results are clamped.

use crate::geom::Point2D;

/// Maps a horizontal pixel coordinate to device space.
#[inline]
pub fn to_device_x(screen_x: f32, screen_width: f32) -> f32 {
    ((screen_x / screen_width) * 2.0 - 1.0).clamp(-1.0, 1.0)
}

/// Maps a vertical pixel coordinate to device space, flipping the axis.
#[inline]
pub fn to_device_y(screen_y: f32, screen_height: f32) -> f32 {
    (-((screen_y / screen_height) * 2.0 - 1.0)).clamp(-1.0, 1.0)
}

/// Maps a pixel position within a `width × height` surface to device space.
#[inline]
pub fn to_device(screen_x: f32, screen_y: f32, width: f32, height: f32) -> Point2D {
    Point2D::new(to_device_x(screen_x, width), to_device_y(screen_y, height))
}
