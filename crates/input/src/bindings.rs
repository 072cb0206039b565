//! Default keyboard bindings for the single-pilot station.

use winit::keyboard::KeyCode;

use crate::events::{HELMS, WEAPONS};

/// A key that fires a categorized hotkey when pressed.
#[derive(Debug, Clone, PartialEq)]
pub struct HotkeyBinding {
    pub key: KeyCode,
    pub category: String,
    pub hotkey: String,
}

/// Two keys driving one axis: `negative` held gives -1, `positive` gives +1.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisBinding {
    pub negative: KeyCode,
    pub positive: KeyCode,
    pub category: String,
    pub action: String,
}

/// Keyboard layout for the cockpit.
#[derive(Debug, Clone)]
pub struct Bindings {
    pub hotkeys: Vec<HotkeyBinding>,
    pub axes: Vec<AxisBinding>,
    /// Debug key that holds the camera in a top-down view.
    pub overhead_view: KeyCode,
}

impl Default for Bindings {
    fn default() -> Self {
        let bind_key = |key, category: &str, hotkey: &str| HotkeyBinding {
            key,
            category: category.to_string(),
            hotkey: hotkey.to_string(),
        };
        let bind_axis = |negative, positive, category: &str, action: &str| AxisBinding {
            negative,
            positive,
            category: category.to_string(),
            action: action.to_string(),
        };
        Self {
            hotkeys: vec![
                bind_key(KeyCode::KeyA, HELMS, "TURN_LEFT"),
                bind_key(KeyCode::KeyD, HELMS, "TURN_RIGHT"),
                bind_key(KeyCode::KeyC, WEAPONS, "NEXT_ENEMY_TARGET"),
                bind_key(KeyCode::Tab, WEAPONS, "NEXT_TARGET"),
                bind_key(KeyCode::KeyQ, WEAPONS, "AIM_MISSILE_LEFT"),
                bind_key(KeyCode::KeyE, WEAPONS, "AIM_MISSILE_RIGHT"),
                bind_key(KeyCode::KeyL, WEAPONS, "TOGGLE_AIM_LOCK"),
            ],
            axes: vec![
                bind_axis(KeyCode::KeyS, KeyCode::KeyW, HELMS, "IMPULSE"),
                bind_axis(KeyCode::ArrowLeft, KeyCode::ArrowRight, HELMS, "ROTATE"),
                bind_axis(KeyCode::KeyZ, KeyCode::KeyX, HELMS, "STRAFE"),
                bind_axis(KeyCode::ControlLeft, KeyCode::ShiftLeft, HELMS, "BOOST"),
            ],
            overhead_view: KeyCode::KeyV,
        }
    }
}

impl Bindings {
    /// Binding for `key`, if any.
    pub fn hotkey_for(&self, key: KeyCode) -> Option<&HotkeyBinding> {
        self.hotkeys.iter().find(|b| b.key == key)
    }
}
