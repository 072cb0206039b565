//! Categorized input events delivered to cockpit screens.
//!
//! Categories and action names are plain strings because they come from the
//! user-editable hotkey configuration; screens match on the pairs they know.

/// Helm station category.
pub const HELMS: &str = "HELMS";
/// Weapons station category.
pub const WEAPONS: &str = "WEAPONS";

/// A continuous control axis moved.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisAction {
    pub category: String,
    pub action: String,
    /// Axis position, in [-1, 1] for bipolar axes or [0, 1] for throttles.
    pub value: f32,
}

impl AxisAction {
    pub fn new(category: impl Into<String>, action: impl Into<String>, value: f32) -> Self {
        Self {
            category: category.into(),
            action: action.into(),
            value,
        }
    }
}

/// A discrete hotkey fired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotkeyResult {
    pub category: String,
    pub hotkey: String,
}

impl HotkeyResult {
    pub fn new(category: impl Into<String>, hotkey: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            hotkey: hotkey.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Axis(AxisAction),
    Hotkey(HotkeyResult),
}

impl InputEvent {
    pub fn category(&self) -> &str {
        match self {
            InputEvent::Axis(axis) => &axis.category,
            InputEvent::Hotkey(key) => &key.category,
        }
    }
}

impl From<AxisAction> for InputEvent {
    fn from(axis: AxisAction) -> Self {
        InputEvent::Axis(axis)
    }
}

impl From<HotkeyResult> for InputEvent {
    fn from(key: HotkeyResult) -> Self {
        InputEvent::Hotkey(key)
    }
}
