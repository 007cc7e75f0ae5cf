//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! `platform::winit` translates window events into `InputEvent`s.

pub(crate) mod platform;
mod state;
mod types;

pub(crate) use state::InputState;
pub use types::{
    ElementState,
    InputEvent,
    Key,
    Modifiers,
    MouseButton,
    PointerButtonEvent,
    PointerMoveEvent,
};
