//! The single-pilot station: helm, weapons and a follow camera on one screen.
//!
//! Per frame the screen first adopts the vehicle's authoritative target, then
//! derives the HUD, then moves the camera. Input events arrive between frames
//! and go through the router.

use engine_core::{SpaceObjects, Vec2};
use input::{Bindings, InputEvent, InputState, MouseButton};

use crate::aim::AimCoordinator;
use crate::camera_follow::{CameraFollow, CameraPose};
use crate::config::CockpitConfig;
use crate::hud::HudReadout;
use crate::router::{InputRouter, RouteContext};
use crate::targets::TargetRegistry;
use crate::vehicle::Vehicle;

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameOutput {
    /// `None` while no vehicle is bound.
    pub hud: Option<HudReadout>,
    pub camera: CameraPose,
}

/// Where the circular short-range radar sits in the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarLayout {
    /// Centre in window coordinates.
    pub center: Vec2,
    /// Radius in pixels.
    pub radius: f32,
}

impl RadarLayout {
    /// World point under `pointer` for a radar centred on `origin` showing
    /// `range` units edge to centre. `None` off the radar disc.
    pub fn to_world(&self, pointer: Vec2, origin: Vec2, range: f32) -> Option<Vec2> {
        let offset = pointer - self.center;
        if self.radius <= 0.0 || offset.length() > self.radius {
            return None;
        }
        Some(origin + offset * (range / self.radius))
    }
}

pub struct CockpitScreen {
    config: CockpitConfig,
    bindings: Bindings,
    router: InputRouter,
    targets: TargetRegistry,
    aim: AimCoordinator,
    camera: CameraFollow,
}

impl CockpitScreen {
    pub fn new(config: CockpitConfig) -> Self {
        Self {
            router: InputRouter::from_config(&config),
            camera: CameraFollow::new(config.follow),
            bindings: Bindings::default(),
            targets: TargetRegistry::new(),
            aim: AimCoordinator::new(),
            config,
        }
    }

    pub fn with_bindings(mut self, bindings: Bindings) -> Self {
        self.bindings = bindings;
        self
    }

    pub fn config(&self) -> &CockpitConfig {
        &self.config
    }

    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    pub fn targets(&self) -> &TargetRegistry {
        &self.targets
    }

    pub fn aim(&self) -> &AimCoordinator {
        &self.aim
    }

    pub fn camera(&self) -> &CameraFollow {
        &self.camera
    }

    /// Run the per-frame update.
    pub fn frame(
        &mut self,
        objects: &SpaceObjects,
        vehicle: Option<&dyn Vehicle>,
        input: &InputState,
    ) -> FrameOutput {
        let view = self.config.camera_view();
        let Some(vehicle) = vehicle else {
            return FrameOutput {
                hud: None,
                camera: self.camera.update(None, view, false),
            };
        };

        // Target sync has to land before anything reads the target this frame.
        self.targets.sync_from_vehicle(vehicle, objects);
        let hud = HudReadout::new(vehicle.state(), &self.aim, self.targets.get());

        let overhead = self.config.debug_overhead && input.is_key_held(self.bindings.overhead_view);
        let camera = self.camera.update(Some(vehicle.state()), view, overhead);

        FrameOutput {
            hud: Some(hud),
            camera,
        }
    }

    /// Route one event. Returns whether it was consumed.
    pub fn on_event(
        &mut self,
        event: &InputEvent,
        objects: &SpaceObjects,
        vehicle: Option<&mut dyn Vehicle>,
    ) -> bool {
        let mut ctx = RouteContext {
            objects,
            targets: &mut self.targets,
            aim: &mut self.aim,
        };
        self.router.route(event, &mut ctx, vehicle)
    }

    /// Route every event this frame's key changes produce. Returns the events
    /// nobody here consumed.
    pub fn handle_input(
        &mut self,
        input: &InputState,
        objects: &SpaceObjects,
        vehicle: Option<&mut dyn Vehicle>,
    ) -> Vec<InputEvent> {
        let events = input.collect_events(&self.bindings);
        let mut unhandled = Vec::new();
        match vehicle {
            Some(vehicle) => {
                for event in events {
                    let reborrowed: &mut dyn Vehicle = &mut *vehicle;
                    if !self.on_event(&event, objects, Some(reborrowed)) {
                        unhandled.push(event);
                    }
                }
            }
            None => {
                for event in events {
                    if !self.on_event(&event, objects, None) {
                        unhandled.push(event);
                    }
                }
            }
        }
        unhandled
    }

    /// Drive the radar callbacks from the pointer: press picks, a held drag
    /// steers, release steers. Pointer activity off the radar is ignored.
    pub fn handle_radar_pointer(
        &mut self,
        input: &InputState,
        layout: &RadarLayout,
        objects: &SpaceObjects,
        vehicle: Option<&mut dyn Vehicle>,
    ) {
        let Some(vehicle) = vehicle else {
            return;
        };
        let state = vehicle.state();
        let Some(point) = layout.to_world(
            input.mouse_position(),
            state.position,
            state.short_range_radar_range,
        ) else {
            return;
        };

        if input.is_mouse_pressed(MouseButton::Left) {
            let reborrowed: &mut dyn Vehicle = &mut *vehicle;
            self.on_radar_click(point, objects, Some(reborrowed));
        } else if input.is_mouse_held(MouseButton::Left) && input.is_mouse_moved() {
            let reborrowed: &mut dyn Vehicle = &mut *vehicle;
            self.on_radar_drag(point, Some(reborrowed));
        }
        if input.is_mouse_released(MouseButton::Left) {
            self.on_radar_release(point, Some(vehicle));
        }
    }

    pub fn on_radar_click(
        &mut self,
        point: Vec2,
        objects: &SpaceObjects,
        vehicle: Option<&mut dyn Vehicle>,
    ) -> bool {
        let mut ctx = RouteContext {
            objects,
            targets: &mut self.targets,
            aim: &mut self.aim,
        };
        self.router.radar_click(point, &mut ctx, vehicle)
    }

    pub fn on_radar_drag(&mut self, point: Vec2, vehicle: Option<&mut dyn Vehicle>) {
        self.router.radar_steer(point, vehicle);
    }

    pub fn on_radar_release(&mut self, point: Vec2, vehicle: Option<&mut dyn Vehicle>) {
        self.router.radar_steer(point, vehicle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera_follow::CameraView;
    use crate::vehicle::{PlayerShip, ShipCommand, VehicleState};
    use engine_core::{Body, Faction, ScanState};
    use input::{ElementState, KeyCode, MouseButton};

    fn setup() -> (SpaceObjects, PlayerShip, Vec<engine_core::Entity>) {
        let mut objects = SpaceObjects::new();
        let entity = objects.spawn(Body::default(), Faction(1), true);
        let mut ship = PlayerShip::new(VehicleState::new(entity), Faction(1));
        ship.declare_hostile(Faction(2));
        let mut enemies = Vec::new();
        for x in [300.0, 600.0] {
            let enemy = objects.spawn(Body::at(Vec2::new(x, 0.0)), Faction(2), true);
            ship.record_scan(enemy, ScanState::FriendOrFoeIdentified);
            enemies.push(enemy);
        }
        (objects, ship, enemies)
    }

    fn config() -> CockpitConfig {
        CockpitConfig {
            debug_overhead: true,
            ..Default::default()
        }
    }

    #[test]
    fn cycled_target_shows_now_and_reverts_until_vehicle_catches_up() {
        let (objects, mut ship, enemies) = setup();
        let mut screen = CockpitScreen::new(config());
        let mut input = InputState::new();

        input.process_keyboard(KeyCode::KeyC, ElementState::Pressed);
        let unhandled = screen.handle_input(&input, &objects, Some(&mut ship));
        assert!(unhandled.is_empty());
        assert_eq!(screen.targets().get(), Some(enemies[0]));

        // Next frame: the vehicle has not applied the command yet.
        input.begin_frame();
        let out = screen.frame(&objects, Some(&ship), &input);
        assert_eq!(out.hud.unwrap().target, None);

        ship.apply_commands();
        let out = screen.frame(&objects, Some(&ship), &input);
        assert_eq!(out.hud.unwrap().target, Some(enemies[0]));
    }

    #[test]
    fn unhandled_events_are_returned() {
        let (objects, mut ship, _) = setup();
        let mut bindings = Bindings::default();
        bindings.hotkeys.push(input::HotkeyBinding {
            key: KeyCode::KeyR,
            category: "ENGINEERING".to_string(),
            hotkey: "REPAIR".to_string(),
        });
        let mut screen = CockpitScreen::new(config()).with_bindings(bindings);
        let mut input = InputState::new();
        input.process_keyboard(KeyCode::KeyR, ElementState::Pressed);
        input.process_keyboard(KeyCode::KeyW, ElementState::Pressed);

        let unhandled = screen.handle_input(&input, &objects, Some(&mut ship));
        assert_eq!(unhandled.len(), 1);
        assert_eq!(unhandled[0].category(), "ENGINEERING");
        assert_eq!(ship.pending_commands(), &[ShipCommand::Impulse(1.0)]);
    }

    #[test]
    fn no_vehicle_keeps_camera_and_hides_hud() {
        let (objects, ship, _) = setup();
        let mut screen = CockpitScreen::new(config());
        let input = InputState::new();
        for _ in 0..3 {
            screen.frame(&objects, Some(&ship), &input);
        }
        let held = screen.camera().pose();

        let out = screen.frame(&objects, None, &input);
        assert!(out.hud.is_none());
        assert_eq!(out.camera, held);
    }

    #[test]
    fn overhead_key_needs_debug_setting() {
        let (objects, ship, _) = setup();
        let mut input = InputState::new();
        input.process_keyboard(KeyCode::KeyV, ElementState::Pressed);

        let mut debug = CockpitScreen::new(config());
        assert_eq!(debug.frame(&objects, Some(&ship), &input).camera.pitch, 90.0);

        let mut release = CockpitScreen::new(CockpitConfig {
            debug_overhead: false,
            ..Default::default()
        });
        assert_eq!(release.frame(&objects, Some(&ship), &input).camera.pitch, 30.0);
    }

    #[test]
    fn first_person_preference_snaps_camera() {
        let (objects, ship, _) = setup();
        let mut screen = CockpitScreen::new(CockpitConfig {
            first_person: true,
            ..Default::default()
        });
        let out = screen.frame(&objects, Some(&ship), &InputState::new());
        let expected = crate::camera_follow::desired_pose(
            CameraView::FirstPerson,
            ship.state(),
            screen.camera().settings(),
        );
        assert_eq!(out.camera, expected);
    }

    #[test]
    fn radar_pointer_entry_points() {
        let (objects, mut ship, enemies) = setup();
        let mut screen = CockpitScreen::new(config());

        assert!(screen.on_radar_click(Vec2::new(590.0, 10.0), &objects, Some(&mut ship)));
        assert_eq!(screen.targets().get(), Some(enemies[1]));
        screen.on_radar_drag(Vec2::new(0.0, 100.0), Some(&mut ship));
        screen.on_radar_release(Vec2::new(-100.0, 0.0), None);
        assert_eq!(ship.pending_commands().len(), 2);
    }

    #[test]
    fn radar_layout_maps_disc_to_radar_range() {
        let layout = RadarLayout {
            center: Vec2::new(400.0, 300.0),
            radius: 250.0,
        };
        let origin = Vec2::new(1000.0, -500.0);
        assert_eq!(
            layout.to_world(Vec2::new(400.0, 300.0), origin, 5000.0),
            Some(origin)
        );
        assert_eq!(
            layout.to_world(Vec2::new(650.0, 300.0), origin, 5000.0),
            Some(Vec2::new(6000.0, -500.0))
        );
        assert_eq!(layout.to_world(Vec2::new(651.0, 300.0), origin, 5000.0), None);
    }

    #[test]
    fn pointer_on_radar_picks_then_steers() {
        let (objects, mut ship, enemies) = setup();
        let mut screen = CockpitScreen::new(config());
        let layout = RadarLayout {
            center: Vec2::new(400.0, 300.0),
            radius: 250.0,
        };
        let mut input = InputState::new();

        // 20 world units per pixel: this lands 40 units from the far enemy.
        input.process_cursor_position((430.0, 302.0));
        input.process_mouse_button(MouseButton::Left, ElementState::Pressed);
        screen.handle_radar_pointer(&input, &layout, &objects, Some(&mut ship));
        assert_eq!(screen.targets().get(), Some(enemies[1]));
        assert_eq!(ship.pending_commands(), &[ShipCommand::SetTarget(Some(enemies[1]))]);

        // Held without moving.
        input.begin_frame();
        screen.handle_radar_pointer(&input, &layout, &objects, Some(&mut ship));
        assert_eq!(ship.pending_commands().len(), 1);

        input.begin_frame();
        input.process_cursor_position((400.0, 350.0));
        screen.handle_radar_pointer(&input, &layout, &objects, Some(&mut ship));
        assert_eq!(ship.pending_commands().len(), 2);
        assert!(matches!(ship.pending_commands()[1], ShipCommand::TargetRotation(_)));

        // Released off the disc.
        input.begin_frame();
        input.process_cursor_position((20.0, 20.0));
        input.process_mouse_button(MouseButton::Left, ElementState::Released);
        screen.handle_radar_pointer(&input, &layout, &objects, Some(&mut ship));
        assert_eq!(ship.pending_commands().len(), 2);
        assert_eq!(screen.targets().get(), Some(enemies[1]));
    }
}
