//! Readouts for the single-pilot HUD.
//! Values are formatted here; layout and drawing belong to the renderer.

use engine_core::{wrap_degrees, Entity};

use crate::aim::AimCoordinator;
use crate::vehicle::VehicleState;

/// Distance unit suffix used in speed readouts.
pub const DISTANCE_UNIT_1K: &str = "U";

/// All HUD data for a frame
#[derive(Debug, Clone, PartialEq)]
pub struct HudReadout {
    pub energy: String,
    pub heading: String,
    pub speed: String,
    pub shields: String,

    // Panel visibility
    pub warp_controls_visible: bool,
    pub jump_controls_visible: bool,
    pub combat_maneuver_visible: bool,
    pub missile_aim_visible: bool,

    /// Dial bearing, wrapped for display.
    pub missile_aim_bearing: f32,
    pub target: Option<Entity>,
}

impl HudReadout {
    /// Build the readout. `target` must already reflect this frame's sync.
    pub fn new(vehicle: &VehicleState, aim: &AimCoordinator, target: Option<Entity>) -> Self {
        Self {
            energy: format!("{}", vehicle.energy_level as i32),
            heading: format!("{:.1}", heading_display(vehicle.heading)),
            speed: format!(
                "{:.1}{}/min",
                speed_per_minute(vehicle.velocity.length()),
                DISTANCE_UNIT_1K
            ),
            shields: format!(
                "{}% {}%",
                vehicle.shield_percentage(0) as i32,
                vehicle.shield_percentage(1) as i32
            ),
            warp_controls_visible: vehicle.has_warp_drive,
            jump_controls_visible: vehicle.has_jump_drive,
            combat_maneuver_visible: vehicle.can_combat_maneuver,
            missile_aim_visible: aim.dial_visible(),
            missile_aim_bearing: aim.display_bearing(),
            target,
        }
    }
}

/// Heading as shown to the pilot: 0 points up the radar, clockwise.
pub fn heading_display(heading: f32) -> f32 {
    wrap_degrees(heading + 90.0)
}

/// Speed in thousands of units per minute, from units per second.
pub fn speed_per_minute(units_per_second: f32) -> f32 {
    units_per_second / 1000.0 * 60.0
}
