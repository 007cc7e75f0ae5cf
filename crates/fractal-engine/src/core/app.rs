use winit::event::WindowEvent;
use winit::window::WindowId;

use crate::input::InputEvent;

use super::ctx::{FrameCtx, WindowCtx};

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by the explorer.
///
/// All callbacks run on the event-loop thread, in event order.
pub trait App {
    /// Called synchronously for every translated input event, before the
    /// next frame is drawn.
    fn on_input(&mut self, window: &WindowCtx<'_>, event: &InputEvent) -> AppControl {
        let _ = (window, event);
        AppControl::Continue
    }

    /// Called for raw window events.
    fn on_window_event(&mut self, window_id: WindowId, event: &WindowEvent) -> AppControl {
        let _ = (window_id, event);
        AppControl::Continue
    }

    /// Called once per rendered frame.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
