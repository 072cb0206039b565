//! Manual missile aiming.
//!
//! Three pieces have to agree: the aim dial (bearing), the weapon tubes (which
//! own the manual-aim mode) and the aim lock. Locked means the tubes aim
//! automatically: the dial still turns, but nothing reaches the tubes.

use engine_core::wrap_degrees;

/// Weapon tube state relevant to aiming.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MissileTubes {
    manual_aim: bool,
    target_angle: f32,
}

impl MissileTubes {
    pub fn manual_aim(&self) -> bool {
        self.manual_aim
    }

    pub fn set_manual_aim(&mut self, manual: bool) {
        self.manual_aim = manual;
    }

    /// Store the manual firing angle. Ignored by the tubes until manual aim is on.
    pub fn set_missile_target_angle(&mut self, angle: f32) {
        self.target_angle = angle;
    }

    pub fn missile_target_angle(&self) -> f32 {
        self.target_angle
    }

    /// Angle the tubes currently show, `None` while aiming automatically.
    pub fn displayed_target_angle(&self) -> Option<f32> {
        self.manual_aim.then_some(self.target_angle)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AimCoordinator {
    /// Degrees, unbounded. Only the display wraps.
    bearing: f32,
    locked: bool,
    tubes: MissileTubes,
}

impl Default for AimCoordinator {
    fn default() -> Self {
        Self {
            bearing: 0.0,
            locked: true,
            tubes: MissileTubes::default(),
        }
    }
}

impl AimCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bearing(&self) -> f32 {
        self.bearing
    }

    /// Bearing wrapped to [0, 360) for display.
    pub fn display_bearing(&self) -> f32 {
        wrap_degrees(self.bearing)
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn tubes(&self) -> &MissileTubes {
        &self.tubes
    }

    pub fn tubes_mut(&mut self) -> &mut MissileTubes {
        &mut self.tubes
    }

    /// The aim dial is only shown while the tubes are in manual aim.
    pub fn dial_visible(&self) -> bool {
        self.tubes.manual_aim()
    }

    /// Turn the dial by `delta` degrees. Returns whether the new bearing
    /// reached the tubes, which it does not while locked.
    pub fn adjust_bearing(&mut self, delta: f32) -> bool {
        self.set_bearing(self.bearing + delta)
    }

    /// Set the dial to `bearing` degrees. Returns whether the tubes took it.
    pub fn set_bearing(&mut self, bearing: f32) -> bool {
        self.bearing = bearing;
        if self.locked {
            return false;
        }
        self.tubes.set_missile_target_angle(self.bearing);
        true
    }

    /// Engage or release the aim lock. Releasing hands aiming to the operator,
    /// starting from the vehicle's current `heading`. Locking leaves the dial
    /// where it was.
    pub fn set_locked(&mut self, locked: bool, heading: f32) {
        self.locked = locked;
        self.tubes.set_manual_aim(!locked);
        if !locked {
            self.bearing = heading;
            self.tubes.set_missile_target_angle(self.bearing);
        }
        log::debug!(
            "Missile aim {} at {:.1}",
            if locked { "locked" } else { "unlocked" },
            self.display_bearing()
        );
    }

    pub fn toggle_lock(&mut self, heading: f32) {
        self.set_locked(!self.locked, heading);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_locked_with_dial_hidden() {
        let aim = AimCoordinator::new();
        assert!(aim.is_locked());
        assert!(!aim.dial_visible());
        assert_eq!(aim.tubes().displayed_target_angle(), None);
    }

    #[test]
    fn locked_dial_turns_without_reaching_tubes() {
        let mut aim = AimCoordinator::new();
        assert!(!aim.adjust_bearing(5.0));
        assert_eq!(aim.bearing(), 5.0);
        assert!(!aim.dial_visible());
        assert_eq!(aim.tubes().missile_target_angle(), 0.0);
        assert_eq!(aim.tubes().displayed_target_angle(), None);

        aim.tubes_mut().set_manual_aim(true);
        assert_eq!(aim.tubes().displayed_target_angle(), Some(0.0));
    }

    #[test]
    fn unlock_hands_control_from_heading() {
        let mut aim = AimCoordinator::new();
        aim.set_locked(false, 120.0);
        assert!(aim.dial_visible());
        assert_eq!(aim.bearing(), 120.0);

        assert!(aim.adjust_bearing(-5.0));
        assert_eq!(aim.tubes().displayed_target_angle(), Some(115.0));
    }

    #[test]
    fn adjustment_without_manual_aim_stays_internal() {
        let mut aim = AimCoordinator::new();
        aim.set_locked(false, 0.0);
        aim.tubes_mut().set_manual_aim(false);

        assert!(aim.adjust_bearing(5.0));
        assert_eq!(aim.bearing(), 5.0);
        assert!(!aim.dial_visible());
        assert_eq!(aim.tubes().displayed_target_angle(), None);

        aim.tubes_mut().set_manual_aim(true);
        assert!(aim.dial_visible());
        assert_eq!(aim.tubes().displayed_target_angle(), Some(5.0));
    }

    #[test]
    fn out_of_range_bearing_wraps_for_display_only() {
        let mut aim = AimCoordinator::new();
        aim.set_locked(false, 0.0);
        for _ in 0..3 {
            aim.adjust_bearing(-5.0);
        }
        assert_eq!(aim.bearing(), -15.0);
        assert_eq!(aim.display_bearing(), 345.0);

        aim.set_bearing(725.0);
        assert_eq!(aim.display_bearing(), 5.0);
    }

    #[test]
    fn toggle_relocks() {
        let mut aim = AimCoordinator::new();
        aim.toggle_lock(10.0);
        assert!(!aim.is_locked());
        aim.toggle_lock(30.0);
        assert!(aim.is_locked());
        assert!(!aim.tubes().manual_aim());
    }

    #[test]
    fn locking_keeps_the_dial_bearing() {
        let mut aim = AimCoordinator::new();
        aim.set_locked(false, 120.0);
        aim.adjust_bearing(5.0);

        aim.set_locked(true, 300.0);
        assert_eq!(aim.bearing(), 125.0);
        assert_eq!(aim.tubes().missile_target_angle(), 125.0);

        aim.set_locked(false, 300.0);
        assert_eq!(aim.bearing(), 300.0);
        assert_eq!(aim.tubes().displayed_target_angle(), Some(300.0));
    }
}
