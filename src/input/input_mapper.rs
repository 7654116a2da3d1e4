//! Input mapping from raw events to semantic actions
//!
//! Maps keyboard and mouse input to high-level actions like ToggleEditMode, Exit, etc.
//! Movement keys (WASD) and right-drag look are NOT mapped here - they go directly to CameraController.

use winit::event::{ElementState, MouseButton};
use winit::keyboard::KeyCode;

/// Actions triggered by special input (not movement)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Open or close the studio panel (Q key)
    ToggleEditMode,
    /// Dismiss the blocking alert (Escape while an alert is shown)
    CloseAlert,
    /// Exit application (Escape otherwise)
    Exit,
    /// Toggle fullscreen mode (F key)
    ToggleFullscreen,
    /// Delete the selected object (Delete key)
    DeleteSelected,
    /// Toggle input smoothing (G key)
    ToggleSmoothing,
    /// Pick under the crosshair, spawning when nothing is hit (left click in edit mode)
    SelectOrSpawn,
}

/// UI state the mapping depends on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputContext {
    pub edit_mode: bool,
    pub alert_open: bool,
    /// The egui panel is under the pointer or has keyboard focus
    pub ui_wants_input: bool,
}

/// Maps raw input events to semantic actions
///
/// Movement keys are NOT mapped here - they go directly to the
/// CameraController. This mapper handles "special" keys only.
pub struct InputMapper;

impl InputMapper {
    /// Map keyboard input to an action
    ///
    /// Returns `Some(action)` for special keys, `None` for movement keys
    pub fn map_keyboard(key: KeyCode, state: ElementState, ctx: InputContext) -> Option<InputAction> {
        // Only handle key presses, not releases
        if state != ElementState::Pressed {
            return None;
        }

        if key == KeyCode::Escape {
            return if ctx.alert_open {
                Some(InputAction::CloseAlert)
            } else {
                Some(InputAction::Exit)
            };
        }

        // Typing into a text field must not trigger shortcuts
        if ctx.ui_wants_input {
            return None;
        }

        match key {
            KeyCode::KeyQ => Some(InputAction::ToggleEditMode),
            KeyCode::KeyF => Some(InputAction::ToggleFullscreen),
            KeyCode::Delete => Some(InputAction::DeleteSelected),
            KeyCode::KeyG => Some(InputAction::ToggleSmoothing),
            _ => None, // Movement keys handled by controller
        }
    }

    /// Map mouse button to an action
    ///
    /// Only a left press in edit mode, outside the panel and with no alert
    /// open, does anything.
    pub fn map_mouse_button(button: MouseButton, state: ElementState, ctx: InputContext) -> Option<InputAction> {
        if button == MouseButton::Left
            && state == ElementState::Pressed
            && ctx.edit_mode
            && !ctx.alert_open
            && !ctx.ui_wants_input
        {
            Some(InputAction::SelectOrSpawn)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edit() -> InputContext {
        InputContext {
            edit_mode: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_escape_closes_alert_first() {
        let ctx = InputContext {
            alert_open: true,
            ..Default::default()
        };
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::Escape, ElementState::Pressed, ctx),
            Some(InputAction::CloseAlert)
        );
    }

    #[test]
    fn test_escape_without_alert_exits() {
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::Escape, ElementState::Pressed, edit()),
            Some(InputAction::Exit)
        );
    }

    #[test]
    fn test_movement_keys_not_mapped() {
        // WASD should return None (handled by controller)
        for key in [KeyCode::KeyW, KeyCode::KeyA, KeyCode::KeyS, KeyCode::KeyD] {
            let action = InputMapper::map_keyboard(key, ElementState::Pressed, edit());
            assert_eq!(action, None, "Key {:?} should not be mapped", key);
        }
    }

    #[test]
    fn test_key_release_ignored() {
        let action = InputMapper::map_keyboard(KeyCode::KeyQ, ElementState::Released, edit());
        assert_eq!(action, None);
    }

    #[test]
    fn test_special_keys() {
        let ctx = InputContext::default();
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::KeyQ, ElementState::Pressed, ctx),
            Some(InputAction::ToggleEditMode)
        );
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::KeyF, ElementState::Pressed, ctx),
            Some(InputAction::ToggleFullscreen)
        );
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::Delete, ElementState::Pressed, ctx),
            Some(InputAction::DeleteSelected)
        );
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::KeyG, ElementState::Pressed, ctx),
            Some(InputAction::ToggleSmoothing)
        );
    }

    #[test]
    fn test_shortcuts_suppressed_while_typing() {
        let ctx = InputContext {
            ui_wants_input: true,
            ..edit()
        };
        assert_eq!(InputMapper::map_keyboard(KeyCode::KeyQ, ElementState::Pressed, ctx), None);
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::Escape, ElementState::Pressed, ctx),
            Some(InputAction::Exit)
        );
    }

    #[test]
    fn test_click_in_edit_mode() {
        assert_eq!(
            InputMapper::map_mouse_button(MouseButton::Left, ElementState::Pressed, edit()),
            Some(InputAction::SelectOrSpawn)
        );
    }

    #[test]
    fn test_click_ignored_in_view_mode() {
        let action =
            InputMapper::map_mouse_button(MouseButton::Left, ElementState::Pressed, InputContext::default());
        assert_eq!(action, None);
    }

    #[test]
    fn test_click_on_panel_or_alert_ignored() {
        let over_ui = InputContext {
            ui_wants_input: true,
            ..edit()
        };
        let alert = InputContext {
            alert_open: true,
            ..edit()
        };
        assert_eq!(InputMapper::map_mouse_button(MouseButton::Left, ElementState::Pressed, over_ui), None);
        assert_eq!(InputMapper::map_mouse_button(MouseButton::Left, ElementState::Pressed, alert), None);
        assert_eq!(InputMapper::map_mouse_button(MouseButton::Right, ElementState::Pressed, edit()), None);
    }
}
