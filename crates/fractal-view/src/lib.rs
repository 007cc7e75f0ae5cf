//! Fractal view crate.
//!
//! Owns the interactive part of the explorer: pointer mapping into device
//! space, the square zoom selection, and the committed camera. It knows nothing
//! about windows or GPUs; the renderer consumes [`ViewState`] snapshots.

pub mod camera;
pub mod controller;
pub mod geom;
pub mod mapper;

pub use camera::{Camera, CameraState};
pub use controller::{Button, ButtonAction, DragState, ViewState, ZoomController};
pub use geom::{Point2D, Rectangle};
