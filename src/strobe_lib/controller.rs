// src/strobe_lib/controller.rs

use winit::{
    event::{ElementState, KeyEvent, WindowEvent},
    keyboard::{KeyCode, PhysicalKey},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    TogglePause,
    ToggleDebug,
}

pub fn action_for_key(code: KeyCode) -> Option<KeyAction> {
    match code {
        KeyCode::Escape => Some(KeyAction::Quit),
        KeyCode::Space => Some(KeyAction::TogglePause),
        KeyCode::KeyD => Some(KeyAction::ToggleDebug),
        _ => None,
    }
}

/// Fresh key presses only; releases and auto-repeat are ignored.
pub fn action_for_key_event(event: &KeyEvent) -> Option<KeyAction> {
    if event.state != ElementState::Pressed || event.repeat {
        return None;
    }
    match event.physical_key {
        PhysicalKey::Code(code) => action_for_key(code),
        PhysicalKey::Unidentified(_) => None,
    }
}

pub fn action_for_window_event(event: &WindowEvent) -> Option<KeyAction> {
    match event {
        WindowEvent::KeyboardInput { event: key_event, .. } => action_for_key_event(key_event),
        WindowEvent::CloseRequested => Some(KeyAction::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognised_keys() {
        assert_eq!(action_for_key(KeyCode::Escape), Some(KeyAction::Quit));
        assert_eq!(action_for_key(KeyCode::Space), Some(KeyAction::TogglePause));
        assert_eq!(action_for_key(KeyCode::KeyD), Some(KeyAction::ToggleDebug));
        assert_eq!(action_for_key(KeyCode::KeyW), None);
    }

    #[test]
    fn close_request_quits() {
        assert_eq!(action_for_window_event(&WindowEvent::CloseRequested), Some(KeyAction::Quit));
        assert_eq!(action_for_window_event(&WindowEvent::Focused(true)), None);
    }
}
