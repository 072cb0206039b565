//! Routes categorized input events to vehicle commands.
//!
//! The router keeps no state of its own. An event whose (category, action)
//! pair is known is reported as consumed even when no vehicle is bound; the
//! input is simply absorbed. Unknown pairs return `false` so the caller can
//! offer the event to other handlers.

use engine_core::{vector_to_angle, SpaceObjects, Vec2};
use input::{AxisAction, HotkeyResult, InputEvent, HELMS, WEAPONS};

use crate::aim::AimCoordinator;
use crate::config::CockpitConfig;
use crate::targets::{CycleMode, PickFilter, TargetRegistry};
use crate::vehicle::{ShipCommand, Vehicle};

/// Cockpit state a hotkey may act on.
pub struct RouteContext<'a> {
    pub objects: &'a SpaceObjects,
    pub targets: &'a mut TargetRegistry,
    pub aim: &'a mut AimCoordinator,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HotkeyAction {
    TurnLeft,
    TurnRight,
    NextEnemyTarget,
    NextTarget,
    AimMissileLeft,
    AimMissileRight,
    ToggleAimLock,
    EnableAimLock,
    DisableAimLock,
}

impl HotkeyAction {
    fn parse(key: &HotkeyResult) -> Option<Self> {
        let action = match (key.category.as_str(), key.hotkey.as_str()) {
            (HELMS, "TURN_LEFT") => Self::TurnLeft,
            (HELMS, "TURN_RIGHT") => Self::TurnRight,
            (WEAPONS, "NEXT_ENEMY_TARGET") => Self::NextEnemyTarget,
            (WEAPONS, "NEXT_TARGET") => Self::NextTarget,
            (WEAPONS, "AIM_MISSILE_LEFT") => Self::AimMissileLeft,
            (WEAPONS, "AIM_MISSILE_RIGHT") => Self::AimMissileRight,
            (WEAPONS, "TOGGLE_AIM_LOCK") => Self::ToggleAimLock,
            (WEAPONS, "ENABLE_AIM_LOCK") => Self::EnableAimLock,
            (WEAPONS, "DISABLE_AIM_LOCK") => Self::DisableAimLock,
            _ => return None,
        };
        Some(action)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputRouter {
    turn_step: f32,
    aim_step: f32,
    radar_pick_radius: f32,
}

impl Default for InputRouter {
    fn default() -> Self {
        Self::from_config(&CockpitConfig::default())
    }
}

impl InputRouter {
    pub fn from_config(config: &CockpitConfig) -> Self {
        Self {
            turn_step: config.turn_step,
            aim_step: config.aim_step,
            radar_pick_radius: config.radar_pick_radius,
        }
    }

    pub fn route(
        &self,
        event: &InputEvent,
        ctx: &mut RouteContext<'_>,
        vehicle: Option<&mut dyn Vehicle>,
    ) -> bool {
        match event {
            InputEvent::Axis(axis) => self.route_axis(axis, vehicle),
            InputEvent::Hotkey(key) => self.route_hotkey(key, ctx, vehicle),
        }
    }

    pub fn route_axis(&self, axis: &AxisAction, vehicle: Option<&mut dyn Vehicle>) -> bool {
        let command = match (axis.category.as_str(), axis.action.as_str()) {
            (HELMS, "IMPULSE") => ShipCommand::Impulse(axis.value),
            (HELMS, "ROTATE") => ShipCommand::TurnSpeed(axis.value),
            (HELMS, "STRAFE") => ShipCommand::CombatManeuverStrafe(axis.value),
            (HELMS, "BOOST") => ShipCommand::CombatManeuverBoost(axis.value),
            _ => {
                log::trace!("Axis {}/{} not handled", axis.category, axis.action);
                return false;
            }
        };
        if let Some(vehicle) = vehicle {
            vehicle.command(command);
        }
        true
    }

    pub fn route_hotkey(
        &self,
        key: &HotkeyResult,
        ctx: &mut RouteContext<'_>,
        vehicle: Option<&mut dyn Vehicle>,
    ) -> bool {
        let Some(action) = HotkeyAction::parse(key) else {
            log::trace!("Hotkey {}/{} not handled", key.category, key.hotkey);
            return false;
        };
        let Some(vehicle) = vehicle else {
            return true;
        };

        let heading = vehicle.state().heading;
        match action {
            HotkeyAction::TurnLeft => {
                vehicle.command(ShipCommand::TargetRotation(heading - self.turn_step));
            }
            HotkeyAction::TurnRight => {
                vehicle.command(ShipCommand::TargetRotation(heading + self.turn_step));
            }
            HotkeyAction::NextEnemyTarget => {
                ctx.targets.cycle_next(ctx.objects, vehicle, CycleMode::Enemy);
            }
            HotkeyAction::NextTarget => {
                ctx.targets.cycle_next(ctx.objects, vehicle, CycleMode::Any);
            }
            HotkeyAction::AimMissileLeft => {
                ctx.aim.adjust_bearing(-self.aim_step);
            }
            HotkeyAction::AimMissileRight => {
                ctx.aim.adjust_bearing(self.aim_step);
            }
            HotkeyAction::ToggleAimLock => ctx.aim.toggle_lock(heading),
            HotkeyAction::EnableAimLock => ctx.aim.set_locked(true, heading),
            HotkeyAction::DisableAimLock => ctx.aim.set_locked(false, heading),
        }
        true
    }

    /// Primary click on the radar: pick the target under the pointer, or turn
    /// toward the point if there is none.
    pub fn radar_click(
        &self,
        point: Vec2,
        ctx: &mut RouteContext<'_>,
        vehicle: Option<&mut dyn Vehicle>,
    ) -> bool {
        let Some(vehicle) = vehicle else {
            return false;
        };
        ctx.targets.pick_nearest(
            ctx.objects,
            point,
            self.radar_pick_radius,
            PickFilter::Targetable,
            vehicle,
        )
    }

    /// Dragging or releasing on the radar steers toward the point.
    pub fn radar_steer(&self, point: Vec2, vehicle: Option<&mut dyn Vehicle>) {
        if let Some(vehicle) = vehicle {
            let heading = vector_to_angle(point - vehicle.state().position);
            vehicle.command(ShipCommand::TargetRotation(heading));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vehicle::{PlayerShip, VehicleState};
    use engine_core::{Body, Faction, ScanState};

    struct Fixture {
        objects: SpaceObjects,
        targets: TargetRegistry,
        aim: AimCoordinator,
        ship: PlayerShip,
    }

    impl Fixture {
        fn new() -> Self {
            let mut objects = SpaceObjects::new();
            let entity = objects.spawn(Body::default(), Faction(1), true);
            let mut state = VehicleState::new(entity);
            state.heading = 90.0;
            let mut ship = PlayerShip::new(state, Faction(1));
            ship.declare_hostile(Faction(2));
            Self {
                objects,
                targets: TargetRegistry::new(),
                aim: AimCoordinator::new(),
                ship,
            }
        }

        fn route(&mut self, event: InputEvent, bound: bool) -> bool {
            let router = InputRouter::default();
            let mut ctx = RouteContext {
                objects: &self.objects,
                targets: &mut self.targets,
                aim: &mut self.aim,
            };
            let vehicle: Option<&mut dyn Vehicle> = if bound { Some(&mut self.ship) } else { None };
            router.route(&event, &mut ctx, vehicle)
        }
    }

    fn axis(category: &str, action: &str, value: f32) -> InputEvent {
        AxisAction::new(category, action, value).into()
    }

    fn hotkey(category: &str, key: &str) -> InputEvent {
        HotkeyResult::new(category, key).into()
    }

    #[test]
    fn helm_axes_map_to_commands() {
        let mut f = Fixture::new();
        assert!(f.route(axis(HELMS, "IMPULSE", 0.75), true));
        assert!(f.route(axis(HELMS, "ROTATE", -0.5), true));
        assert!(f.route(axis(HELMS, "STRAFE", 1.0), true));
        assert!(f.route(axis(HELMS, "BOOST", 0.25), true));
        assert_eq!(
            f.ship.pending_commands(),
            &[
                ShipCommand::Impulse(0.75),
                ShipCommand::TurnSpeed(-0.5),
                ShipCommand::CombatManeuverStrafe(1.0),
                ShipCommand::CombatManeuverBoost(0.25),
            ]
        );
    }

    #[test]
    fn unknown_events_fall_through() {
        let mut f = Fixture::new();
        assert!(!f.route(axis(HELMS, "WARP", 1.0), true));
        assert!(!f.route(axis(WEAPONS, "IMPULSE", 1.0), true));
        assert!(!f.route(hotkey(HELMS, "NEXT_TARGET"), true));
        assert!(!f.route(hotkey("ENGINEERING", "REPAIR"), false));
        assert!(f.ship.pending_commands().is_empty());
    }

    #[test]
    fn turn_hotkeys_step_heading() {
        let mut f = Fixture::new();
        assert!(f.route(hotkey(HELMS, "TURN_LEFT"), true));
        assert!(f.route(hotkey(HELMS, "TURN_RIGHT"), true));
        assert_eq!(
            f.ship.pending_commands(),
            &[ShipCommand::TargetRotation(85.0), ShipCommand::TargetRotation(95.0)]
        );
    }

    #[test]
    fn target_hotkeys_cycle_registry() {
        let mut f = Fixture::new();
        let enemy = f.objects.spawn(Body::at(Vec2::new(100.0, 0.0)), Faction(2), true);
        let neutral = f.objects.spawn(Body::at(Vec2::new(200.0, 0.0)), Faction(3), true);
        f.ship.record_scan(enemy, ScanState::SimpleScan);

        assert!(f.route(hotkey(WEAPONS, "NEXT_ENEMY_TARGET"), true));
        assert_eq!(f.targets.get(), Some(enemy));
        assert!(f.route(hotkey(WEAPONS, "NEXT_TARGET"), true));
        assert_eq!(f.targets.get(), Some(neutral));
    }

    #[test]
    fn aim_hotkeys_respect_lock() {
        let mut f = Fixture::new();
        assert!(f.route(hotkey(WEAPONS, "AIM_MISSILE_RIGHT"), true));
        assert_eq!(f.aim.bearing(), 5.0);
        assert_eq!(f.aim.tubes().missile_target_angle(), 0.0);

        assert!(f.route(hotkey(WEAPONS, "DISABLE_AIM_LOCK"), true));
        assert_eq!(f.aim.bearing(), 90.0);
        assert!(f.route(hotkey(WEAPONS, "AIM_MISSILE_RIGHT"), true));
        assert!(f.route(hotkey(WEAPONS, "AIM_MISSILE_RIGHT"), true));
        assert!(f.route(hotkey(WEAPONS, "AIM_MISSILE_LEFT"), true));
        assert_eq!(f.aim.bearing(), 95.0);
        assert_eq!(f.aim.tubes().displayed_target_angle(), Some(95.0));

        assert!(f.route(hotkey(WEAPONS, "TOGGLE_AIM_LOCK"), true));
        assert!(f.aim.is_locked());
        assert!(!f.aim.dial_visible());
        assert_eq!(f.aim.bearing(), 95.0);
    }

    #[test]
    fn unbound_vehicle_absorbs_known_events() {
        let mut f = Fixture::new();
        let enemy = f.objects.spawn(Body::at(Vec2::new(100.0, 0.0)), Faction(2), true);
        f.ship.record_scan(enemy, ScanState::FullScan);

        let events = [
            axis(HELMS, "IMPULSE", 1.0),
            axis(HELMS, "ROTATE", 1.0),
            hotkey(HELMS, "TURN_LEFT"),
            hotkey(WEAPONS, "NEXT_ENEMY_TARGET"),
            hotkey(WEAPONS, "NEXT_TARGET"),
            hotkey(WEAPONS, "DISABLE_AIM_LOCK"),
            hotkey(WEAPONS, "AIM_MISSILE_LEFT"),
        ];
        for event in events {
            assert!(f.route(event, false));
        }
        assert!(f.ship.pending_commands().is_empty());
        assert_eq!(f.targets.get(), None);
        assert!(f.aim.is_locked());
        assert_eq!(f.aim.bearing(), 0.0);
    }

    #[test]
    fn radar_click_picks_or_steers() {
        let mut f = Fixture::new();
        let contact = f.objects.spawn(Body::at(Vec2::new(1000.0, 0.0)), Faction(2), true);
        let router = InputRouter::default();
        let mut ctx = RouteContext {
            objects: &f.objects,
            targets: &mut f.targets,
            aim: &mut f.aim,
        };

        assert!(router.radar_click(Vec2::new(1100.0, 50.0), &mut ctx, Some(&mut f.ship)));
        assert!(!router.radar_click(Vec2::new(-1000.0, 0.0), &mut ctx, Some(&mut f.ship)));
        assert_eq!(ctx.targets.get(), Some(contact));
        router.radar_steer(Vec2::new(0.0, -10.0), Some(&mut f.ship));

        match f.ship.pending_commands() {
            [ShipCommand::SetTarget(Some(picked)), ShipCommand::TargetRotation(back), ShipCommand::TargetRotation(down)] =>
            {
                assert_eq!(*picked, contact);
                assert!((back.abs() - 180.0).abs() < 1e-3);
                assert!((down + 90.0).abs() < 1e-3);
            }
            other => panic!("unexpected commands {other:?}"),
        }
    }
}
