use raylib::prelude::*;

use crate::core::player::FrameInput;

/// Polls keyboard and mouse into one frame of intent.
/// WASD / arrows move and turn, mouse X looks, Space or left click shoots.
pub fn process_events(window: &RaylibHandle, mouse_sens: f32) -> FrameInput {
    let down = |a: KeyboardKey, b: KeyboardKey| window.is_key_down(a) || window.is_key_down(b);
    let mouse = window.get_mouse_delta();
    FrameInput {
        forward: down(KeyboardKey::KEY_W, KeyboardKey::KEY_UP),
        backward: down(KeyboardKey::KEY_S, KeyboardKey::KEY_DOWN),
        turn_left: down(KeyboardKey::KEY_A, KeyboardKey::KEY_LEFT),
        turn_right: down(KeyboardKey::KEY_D, KeyboardKey::KEY_RIGHT),
        turn_delta: mouse.x * mouse_sens,
        shoot: window.is_key_down(KeyboardKey::KEY_SPACE)
            || window.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT),
    }
}
