//! Small value types shared between the runtime and renderers.
//!
//! Pointer input is delivered in logical pixels (origin top-left, +Y down);
//! the swapchain is sized in physical pixels.

mod color;
mod viewport;

pub use color::ColorRgba;
pub use viewport::Viewport;
