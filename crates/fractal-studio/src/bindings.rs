//! Input bindings: engine events → explorer actions.

use fractal_engine::core::AppControl;
use fractal_engine::input::{ElementState, InputEvent, Key, MouseButton};
use fractal_view::{Button, ButtonAction, ZoomController};

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Action {
    /// Pointer moved to `(x, y)` in logical pixels.
    Move { x: f32, y: f32 },
    /// Button transition at `(x, y)` in logical pixels.
    Button { button: Button, action: ButtonAction, x: f32, y: f32 },
    ZoomOut,
    Reset,
    Quit,
}

/// Maps an input event to an explorer action, if it is bound.
pub fn action_for(event: &InputEvent) -> Option<Action> {
    match event {
        InputEvent::PointerMoved(m) => Some(Action::Move { x: m.x, y: m.y }),

        InputEvent::PointerButton(b) => {
            let action = match b.state {
                ElementState::Pressed => ButtonAction::Press,
                ElementState::Released => ButtonAction::Release,
            };
            match (b.button, action) {
                (MouseButton::Right, ButtonAction::Press) => Some(Action::ZoomOut),
                (button, action) => Some(Action::Button {
                    button: map_button(button),
                    action,
                    x: b.x,
                    y: b.y,
                }),
            }
        }

        InputEvent::Key { key, state: ElementState::Pressed, modifiers } => match key {
            Key::Backspace => Some(Action::ZoomOut),
            Key::Z if modifiers.command() => Some(Action::ZoomOut),
            Key::R | Key::Home => Some(Action::Reset),
            Key::Escape => Some(Action::Quit),
            _ => None,
        },

        _ => None,
    }
}

/// Applies `action` to the controller. `size` is the logical window size.
pub fn apply(controller: &mut ZoomController, action: Action, size: (f32, f32)) -> AppControl {
    match action {
        Action::Move { x, y } => controller.on_pointer_move(x, y, size.0, size.1),
        Action::Button { button, action, x, y } => {
            // A click can arrive without a preceding move (e.g. right after
            // the window gains focus); anchor it where it happened.
            controller.on_pointer_move(x, y, size.0, size.1);
            controller.on_button(button, action);
        }
        Action::ZoomOut => {
            if !controller.zoom_out() {
                log::debug!("zoom out ignored: already at the outermost view");
            }
        }
        Action::Reset => {
            controller.reset();
        }
        Action::Quit => return AppControl::Exit,
    }
    AppControl::Continue
}

fn map_button(b: MouseButton) -> Button {
    match b {
        MouseButton::Left => Button::Primary,
        MouseButton::Right => Button::Secondary,
        MouseButton::Middle => Button::Middle,
        MouseButton::Other(v) => Button::Other(v),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fractal_engine::input::{Modifiers, PointerButtonEvent, PointerMoveEvent};
    use fractal_view::Camera;

    const SIZE: (f32, f32) = (900.0, 900.0);

    fn button_at(button: MouseButton, state: ElementState, x: f32, y: f32) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent { button, state, x, y })
    }

    fn key(key: Key, modifiers: Modifiers) -> InputEvent {
        InputEvent::Key { key, state: ElementState::Pressed, modifiers }
    }

    fn moved(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerMoved(PointerMoveEvent { x, y })
    }

    fn feed(c: &mut ZoomController, ev: InputEvent) -> AppControl {
        match action_for(&ev) {
            Some(a) => apply(c, a, SIZE),
            None => AppControl::Continue,
        }
    }

    // ── action_for ────────────────────────────────────────────────────────

    #[test]
    fn left_button_drives_primary() {
        assert_eq!(
            action_for(&button_at(MouseButton::Left, ElementState::Pressed, 1.0, 2.0)),
            Some(Action::Button { button: Button::Primary, action: ButtonAction::Press, x: 1.0, y: 2.0 })
        );
    }

    #[test]
    fn right_click_zooms_out() {
        assert_eq!(
            action_for(&button_at(MouseButton::Right, ElementState::Pressed, 0.0, 0.0)),
            Some(Action::ZoomOut)
        );
    }

    #[test]
    fn undo_requires_command_modifier_on_z() {
        assert_eq!(action_for(&key(Key::Z, Modifiers::default())), None);
        let shift = Modifiers { shift: true, ..Modifiers::default() };
        assert_eq!(action_for(&key(Key::Z, shift)), None);
        let ctrl = Modifiers { ctrl: true, ..Modifiers::default() };
        assert_eq!(action_for(&key(Key::Z, ctrl)), Some(Action::ZoomOut));
        let cmd = Modifiers { meta: true, ..Modifiers::default() };
        assert_eq!(action_for(&key(Key::Z, cmd)), Some(Action::ZoomOut));
    }

    #[test]
    fn key_release_is_unbound() {
        let ev = InputEvent::Key {
            key: Key::R,
            state: ElementState::Released,
            modifiers: Modifiers::default(),
        };
        assert_eq!(action_for(&ev), None);
    }

    // ── end to end ────────────────────────────────────────────────────────

    #[test]
    fn drag_then_zoom_out_then_reset() {
        let mut c = ZoomController::default();

        feed(&mut c, moved(450.0, 450.0));
        feed(&mut c, button_at(MouseButton::Left, ElementState::Pressed, 450.0, 450.0));
        feed(&mut c, moved(900.0, 0.0));
        feed(&mut c, button_at(MouseButton::Left, ElementState::Released, 900.0, 0.0));
        assert_eq!(c.camera(), Camera::new([-0.5, 0.0], 1.5));

        feed(&mut c, button_at(MouseButton::Right, ElementState::Pressed, 900.0, 0.0));
        assert_eq!(c.camera(), Camera::home());

        feed(&mut c, moved(0.0, 900.0));
        feed(&mut c, button_at(MouseButton::Left, ElementState::Pressed, 0.0, 900.0));
        feed(&mut c, moved(450.0, 450.0));
        feed(&mut c, button_at(MouseButton::Left, ElementState::Released, 450.0, 450.0));
        assert_ne!(c.camera(), Camera::home());

        feed(&mut c, key(Key::Home, Modifiers::default()));
        assert_eq!(c.camera(), Camera::home());
        assert_eq!(c.camera_state().depth(), 0);
    }

    #[test]
    fn press_without_prior_move_anchors_at_click() {
        let mut c = ZoomController::default();

        feed(&mut c, button_at(MouseButton::Left, ElementState::Pressed, 450.0, 450.0));
        feed(&mut c, moved(900.0, 0.0));
        feed(&mut c, button_at(MouseButton::Left, ElementState::Released, 900.0, 0.0));
        assert_eq!(c.camera(), Camera::new([-0.5, 0.0], 1.5));
    }

    #[test]
    fn escape_quits() {
        let mut c = ZoomController::default();
        assert_eq!(feed(&mut c, key(Key::Escape, Modifiers::default())), AppControl::Exit);
    }
}
