//! Keyboard and pointer state for the cockpit, and the categorized events it
//! produces.

pub mod bindings;
pub mod events;

use glam::Vec2;
use std::collections::HashSet;

pub use bindings::{AxisBinding, Bindings, HotkeyBinding};
pub use events::{AxisAction, HotkeyResult, InputEvent, HELMS, WEAPONS};

/// Manages input state for the current frame.
#[derive(Debug, Default)]
pub struct InputState {
    /// Keys currently held down.
    keys_held: HashSet<KeyCode>,
    /// Keys pressed this frame.
    keys_pressed: HashSet<KeyCode>,
    /// Keys released this frame.
    keys_released: HashSet<KeyCode>,

    /// Mouse buttons currently held.
    mouse_held: HashSet<MouseButton>,
    /// Mouse buttons pressed this frame.
    mouse_pressed: HashSet<MouseButton>,
    /// Mouse buttons released this frame.
    mouse_released: HashSet<MouseButton>,

    /// Pointer position in window coordinates.
    mouse_position: Vec2,
    /// Pointer moved this frame.
    mouse_moved: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear per-frame state. Call at the start of each frame.
    pub fn begin_frame(&mut self) {
        self.keys_pressed.clear();
        self.keys_released.clear();
        self.mouse_pressed.clear();
        self.mouse_released.clear();
        self.mouse_moved = false;
    }

    /// Process a keyboard event.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) {
        match state {
            ElementState::Pressed => {
                if !self.keys_held.contains(&key) {
                    self.keys_pressed.insert(key);
                }
                self.keys_held.insert(key);
            }
            ElementState::Released => {
                self.keys_held.remove(&key);
                self.keys_released.insert(key);
            }
        }
    }

    /// Process a mouse button event.
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        match state {
            ElementState::Pressed => {
                if !self.mouse_held.contains(&button) {
                    self.mouse_pressed.insert(button);
                }
                self.mouse_held.insert(button);
            }
            ElementState::Released => {
                self.mouse_held.remove(&button);
                self.mouse_released.insert(button);
            }
        }
    }

    /// Process cursor position update.
    pub fn process_cursor_position(&mut self, position: (f64, f64)) {
        let position = Vec2::new(position.0 as f32, position.1 as f32);
        if position != self.mouse_position {
            self.mouse_moved = true;
        }
        self.mouse_position = position;
    }

    /// Check if a key is currently held.
    pub fn is_key_held(&self, key: KeyCode) -> bool {
        self.keys_held.contains(&key)
    }

    /// Check if a key was pressed this frame.
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// Check if a key was released this frame.
    pub fn is_key_released(&self, key: KeyCode) -> bool {
        self.keys_released.contains(&key)
    }

    pub fn is_mouse_held(&self, button: MouseButton) -> bool {
        self.mouse_held.contains(&button)
    }

    pub fn is_mouse_pressed(&self, button: MouseButton) -> bool {
        self.mouse_pressed.contains(&button)
    }

    pub fn is_mouse_released(&self, button: MouseButton) -> bool {
        self.mouse_released.contains(&button)
    }

    pub fn mouse_position(&self) -> Vec2 {
        self.mouse_position
    }

    pub fn is_mouse_moved(&self) -> bool {
        self.mouse_moved
    }

    /// Value of a two-key axis: -1, 0 or +1.
    pub fn axis_value(&self, axis: &AxisBinding) -> f32 {
        let mut value = 0.0;
        if self.is_key_held(axis.negative) {
            value -= 1.0;
        }
        if self.is_key_held(axis.positive) {
            value += 1.0;
        }
        value
    }

    /// Events produced by this frame's key changes.
    ///
    /// Hotkeys fire on press. Axes report their new value only on the frame one
    /// of their keys changes, so a joystick on the same axis is not overridden
    /// by a resting keyboard.
    pub fn collect_events(&self, bindings: &Bindings) -> Vec<InputEvent> {
        let mut events = Vec::new();
        for axis in &bindings.axes {
            let changed = [axis.negative, axis.positive]
                .iter()
                .any(|&k| self.is_key_pressed(k) || self.is_key_released(k));
            if changed {
                events.push(InputEvent::Axis(AxisAction::new(
                    axis.category.as_str(),
                    axis.action.as_str(),
                    self.axis_value(axis),
                )));
            }
        }
        for binding in &bindings.hotkeys {
            if self.is_key_pressed(binding.key) {
                events.push(InputEvent::Hotkey(HotkeyResult::new(
                    binding.category.as_str(),
                    binding.hotkey.as_str(),
                )));
            }
        }
        if !events.is_empty() {
            log::trace!("Collected {} input events", events.len());
        }
        events
    }
}

// Re-export for convenience
pub use winit::event::{ElementState, MouseButton};
pub use winit::keyboard::KeyCode;
