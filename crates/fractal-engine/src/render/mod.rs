//! GPU rendering subsystem.
//!
//! The explorer draws one full-screen quad per frame. All fractal math and the
//! selection overlay live in `shaders/fractal.wgsl`; the CPU side only keeps
//! the uniform buffer in sync with the parameters it is handed.

mod ctx;
mod fractal;
mod quad;

pub use ctx::{RenderCtx, RenderTarget};
pub use fractal::{FractalParams, FractalRenderer, FractalStyle, FractalUniform};
