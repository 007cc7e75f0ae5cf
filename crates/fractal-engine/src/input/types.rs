/// Keys the explorer binds.
///
/// Anything else arrives as `Key::Unknown` carrying the platform key code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Backspace,
    Home,
    R,
    Z,
    Unknown(u32),
}

/// Press phase, shared by keys and pointer buttons.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ElementState {
    Pressed,
    Released,
}

/// Pointer button. Extra mouse buttons keep their platform index.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

/// Held modifier keys.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Shortcut modifier: Ctrl, or Cmd on macOS.
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// Pointer position in logical pixels (top-left origin, +Y down).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerMoveEvent {
    pub x: f32,
    pub y: f32,
}

/// Pointer button transition at the last known pointer position.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerButtonEvent {
    pub button: MouseButton,
    pub state: ElementState,
    pub x: f32,
    pub y: f32,
}

/// Events delivered to `App::on_input`.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    ModifiersChanged(Modifiers),
    Key {
        key: Key,
        state: ElementState,
        modifiers: Modifiers,
    },
    PointerMoved(PointerMoveEvent),
    PointerButton(PointerButtonEvent),
}
