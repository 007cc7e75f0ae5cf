use super::types::{InputEvent, Modifiers, PointerButtonEvent, PointerMoveEvent};

/// Pointer and modifier state for the window.
///
/// winit reports button and key events without a position or modifier set;
/// the translator fills both in from here.
#[derive(Debug, Default)]
pub(crate) struct InputState {
    pub modifiers: Modifiers,

    /// Last pointer position in logical pixels. Nothing clears it when the
    /// cursor leaves, so a release outside the window carries the position
    /// where the drag was last seen.
    pub pointer_pos: Option<(f32, f32)>,
}

impl InputState {
    pub fn apply_event(&mut self, ev: &InputEvent) {
        match *ev {
            InputEvent::ModifiersChanged(m) => self.modifiers = m,
            InputEvent::PointerMoved(PointerMoveEvent { x, y })
            | InputEvent::PointerButton(PointerButtonEvent { x, y, .. }) => {
                self.pointer_pos = Some((x, y));
            }
            InputEvent::Key { .. } => {}
        }
    }

    /// Position reported with button events; the origin before any move.
    pub fn pointer_or_origin(&self) -> (f32, f32) {
        self.pointer_pos.unwrap_or((0.0, 0.0))
    }
}
