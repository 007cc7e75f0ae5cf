//! Fractal engine crate.
//!
//! Platform + GPU runtime for the explorer: window and event loop, wgpu
//! device/surface, platform-agnostic input, and the fractal renderer that
//! keeps the shader uniforms in sync with the camera it is given.

pub mod device;
pub mod window;
pub mod input;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
