use crate::camera::{Camera, CameraState};
use crate::geom::{Point2D, Rectangle};
use crate::mapper;

/// Pointer button identifier as seen by the controller.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Button {
    Primary,
    Secondary,
    Middle,
    Other(u16),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ButtonAction {
    Press,
    Release,
}

/// Drag state machine.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum DragState {
    /// Pointer is free. `anchor` follows the pointer and seeds the next drag.
    Idle { anchor: Point2D },
    /// Primary button is held; the selection spans `anchor` → `current`.
    Dragging { anchor: Point2D, current: Point2D },
}

impl DragState {
    #[inline]
    pub fn anchor(self) -> Point2D {
        match self {
            DragState::Idle { anchor } | DragState::Dragging { anchor, .. } => anchor,
        }
    }

    #[inline]
    pub fn is_dragging(self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }
}

impl Default for DragState {
    fn default() -> Self {
        DragState::Idle { anchor: Point2D::origin() }
    }
}

/// Everything the renderer needs to draw one frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewState {
    pub rect: Rectangle,
    /// Whether the selection overlay should be drawn.
    pub selecting: bool,
    pub camera: Camera,
    /// Framebuffer height / width.
    pub aspect: f32,
}

/// Interactive zoom-selection controller.
///
/// Input handlers run synchronously on the event-loop thread. Each change
/// marks the controller dirty; the render loop collects the new state with
/// [`take_update`](Self::take_update) before drawing.
#[derive(Debug, Clone)]
pub struct ZoomController {
    drag: DragState,
    rect: Rectangle,
    selecting: bool,
    camera: CameraState,
    dirty: bool,
}

impl ZoomController {
    pub fn new(home: Camera) -> Self {
        Self {
            drag: DragState::default(),
            rect: Rectangle::default(),
            selecting: false,
            camera: CameraState::new(home),
            // First frame must upload.
            dirty: true,
        }
    }

    #[inline]
    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    #[inline]
    pub fn rect(&self) -> Rectangle {
        self.rect
    }

    #[inline]
    pub fn is_selecting(&self) -> bool {
        self.selecting
    }

    #[inline]
    pub fn camera(&self) -> Camera {
        self.camera.camera()
    }

    #[inline]
    pub fn camera_state(&self) -> &CameraState {
        &self.camera
    }

    pub fn view(&self) -> ViewState {
        ViewState {
            rect: self.rect,
            selecting: self.selecting,
            camera: self.camera.camera(),
            aspect: self.camera.aspect(),
        }
    }

    /// Returns the current view once per change.
    pub fn take_update(&mut self) -> Option<ViewState> {
        if !self.dirty {
            return None;
        }
        self.dirty = false;
        Some(self.view())
    }

    /// Tracks a new framebuffer size. Zero-sized surfaces are ignored.
    pub fn on_resize(&mut self, width: f32, height: f32) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        if self.camera.set_aspect(height / width) {
            self.dirty = true;
        }
    }

    /// Handles a pointer move in pixels on a `width × height` surface.
    pub fn on_pointer_move(&mut self, screen_x: f32, screen_y: f32, width: f32, height: f32) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        let pos = mapper::to_device(screen_x, screen_y, width, height);

        match self.drag {
            DragState::Idle { .. } => {
                self.drag = DragState::Idle { anchor: pos };
            }
            DragState::Dragging { anchor, .. } => {
                self.drag = DragState::Dragging { anchor, current: pos };
                self.rect = Rectangle::square_from_drag(anchor, pos);
                self.selecting = true;
                self.dirty = true;
            }
        }
    }

    /// Handles a button transition. Only the primary button drives selection.
    pub fn on_button(&mut self, button: Button, action: ButtonAction) {
        if button != Button::Primary {
            return;
        }

        match (self.drag, action) {
            (DragState::Idle { anchor }, ButtonAction::Press) => {
                self.drag = DragState::Dragging { anchor, current: anchor };
                self.rect = Rectangle::at(anchor);
                self.selecting = true;
                self.dirty = true;
            }
            (DragState::Dragging { current, .. }, ButtonAction::Release) => {
                self.camera.commit(self.rect);
                // Next drag starts where this one ended.
                self.drag = DragState::Idle { anchor: current };
                self.selecting = false;
                self.dirty = true;
            }
            _ => {}
        }
    }

    /// Steps back to the camera before the last zoom.
    pub fn zoom_out(&mut self) -> bool {
        let changed = self.camera.zoom_out();
        self.dirty |= changed;
        changed
    }

    /// Returns to the home camera.
    pub fn reset(&mut self) -> bool {
        let changed = self.camera.reset();
        self.dirty |= changed;
        changed
    }
}

impl Default for ZoomController {
    fn default() -> Self {
        Self::new(Camera::home())
    }
}
