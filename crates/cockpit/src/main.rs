//! Headless single-pilot session: a scripted pilot flies, cycles targets and
//! aims missiles against a scattered set of contacts while the cockpit logs
//! what the HUD and camera would show.

use anyhow::Result;
use cockpit::{CockpitConfig, CockpitScreen, PlayerShip, RadarLayout, Vehicle, VehicleState};
use engine_core::{
    angle_difference, vector_from_angle, Body, Faction, FrameClock, ScanState, SpaceObjects, Vec2,
};
use input::{ElementState, InputState, KeyCode, MouseButton};
use rand::{Rng, SeedableRng};

const HUMAN_NAVY: Faction = Faction(1);
const KRAYLOR: Faction = Faction(2);
const INDEPENDENT: Faction = Faction(3);

/// Full-impulse speed, units per second.
const MAX_SPEED: f32 = 90.0;
/// Turn rate, degrees per second.
const TURN_RATE: f32 = 10.0;
/// Contacts closer than this get identified by the ship's sensors.
const IDENTIFY_RANGE: f32 = 3500.0;

const FRAMES: u64 = 300;

const RADAR: RadarLayout = RadarLayout {
    center: Vec2::new(400.0, 325.0),
    radius: 325.0,
};

/// Key presses and releases by frame.
const SCRIPT: &[(u64, KeyCode, ElementState)] = &[
    (5, KeyCode::KeyW, ElementState::Pressed),
    (20, KeyCode::KeyC, ElementState::Pressed),
    (21, KeyCode::KeyC, ElementState::Released),
    (60, KeyCode::KeyC, ElementState::Pressed),
    (61, KeyCode::KeyC, ElementState::Released),
    (90, KeyCode::KeyL, ElementState::Pressed),
    (91, KeyCode::KeyL, ElementState::Released),
    (100, KeyCode::KeyE, ElementState::Pressed),
    (101, KeyCode::KeyE, ElementState::Released),
    (110, KeyCode::KeyE, ElementState::Pressed),
    (111, KeyCode::KeyE, ElementState::Released),
    (130, KeyCode::Tab, ElementState::Pressed),
    (131, KeyCode::Tab, ElementState::Released),
    (150, KeyCode::KeyA, ElementState::Pressed),
    (151, KeyCode::KeyA, ElementState::Released),
    (170, KeyCode::KeyV, ElementState::Pressed),
    (185, KeyCode::KeyV, ElementState::Released),
    (240, KeyCode::KeyW, ElementState::Released),
];

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = CockpitConfig::load();
    if std::env::args().any(|arg| arg == "--save-config") {
        let path = config.save()?;
        log::info!("Wrote config to {:?}", path);
    }
    log::info!("Starting single-pilot station ({:?} view)", config.camera_view());

    let mut objects = SpaceObjects::new();
    let ship_entity = objects.spawn_named(
        "Player",
        Body::default().with_radius(120.0),
        HUMAN_NAVY,
        true,
    );
    let mut ship = PlayerShip::new(VehicleState::new(ship_entity), HUMAN_NAVY);
    ship.declare_hostile(KRAYLOR);
    scatter_contacts(&mut objects, 12, 7);
    log::info!("{} objects in play", objects.len());

    let mut screen = CockpitScreen::new(config);
    let mut input = InputState::new();
    let mut clock = FrameClock::new();

    for frame in 0..FRAMES {
        input.begin_frame();
        for &(_, key, state) in SCRIPT.iter().filter(|(at, _, _)| *at == frame) {
            input.process_keyboard(key, state);
        }

        let unhandled = screen.handle_input(&input, &objects, Some(&mut ship));
        for event in unhandled {
            log::debug!("Unhandled input {:?}", event);
        }

        if frame == 200 {
            // Click the radar near the second contact, then let go.
            if let Some(body) = objects.candidates().get(2).and_then(|c| objects.body(c.entity)) {
                let state = ship.state();
                let scale = RADAR.radius / state.short_range_radar_range;
                let pointer = RADAR.center + (body.position + Vec2::new(40.0, -30.0) - state.position) * scale;
                input.process_cursor_position((pointer.x as f64, pointer.y as f64));
                input.process_mouse_button(MouseButton::Left, ElementState::Pressed);
            }
        } else if frame == 201 {
            input.process_mouse_button(MouseButton::Left, ElementState::Released);
        }
        screen.handle_radar_pointer(&input, &RADAR, &objects, Some(&mut ship));

        clock.advance(clock.fixed_step());
        while clock.should_step() {
            step_simulation(&mut objects, &mut ship, clock.step_seconds());
        }

        let out = screen.frame(&objects, Some(&ship), &input);
        if frame % 30 == 0 {
            if let Some(hud) = &out.hud {
                let target = hud
                    .target
                    .and_then(|t| objects.callsign(t))
                    .unwrap_or_else(|| "-".to_string());
                log::info!(
                    "frame {:>3} | energy {} | heading {} | speed {} | shields {} | target {} | aim {}",
                    frame,
                    hud.energy,
                    hud.heading,
                    hud.speed,
                    hud.shields,
                    target,
                    if hud.missile_aim_visible {
                        format!("{:.0}", hud.missile_aim_bearing)
                    } else {
                        "auto".to_string()
                    },
                );
            }
            log::info!(
                "          camera ({:.0}, {:.0}, {:.0}) yaw {:.1} pitch {:.0}",
                out.camera.position.x,
                out.camera.position.y,
                out.camera.position.z,
                out.camera.yaw,
                out.camera.pitch,
            );
        }
    }

    log::info!(
        "Session over after {} frames ({:.1}s)",
        clock.frame_count(),
        clock.elapsed_seconds()
    );
    Ok(())
}

fn scatter_contacts(objects: &mut SpaceObjects, count: usize, seed: u64) {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    for i in 0..count {
        let position = Vec2::new(rng.gen_range(-6000.0..6000.0), rng.gen_range(-6000.0..6000.0));
        let (name, faction, targetable) = match rng.gen_range(0..4) {
            0 | 1 => (format!("Kraylor-{i}"), KRAYLOR, true),
            2 => (format!("Trader-{i}"), INDEPENDENT, true),
            _ => (format!("Rock-{i}"), Faction::default(), false),
        };
        let body = Body::at(position).with_heading(rng.gen_range(0.0..360.0));
        objects.spawn_named(name, body, faction, targetable);
    }
}

/// Minimal stand-in for the ship's own flight model.
fn step_simulation(objects: &mut SpaceObjects, ship: &mut PlayerShip, dt: f32) {
    ship.apply_commands();
    let helm = ship.helm();
    let entity = ship.state().entity;

    objects.update_body(entity, |body| {
        let turn = match helm.target_rotation {
            Some(heading) => angle_difference(body.heading, heading).clamp(-TURN_RATE * dt, TURN_RATE * dt),
            None => helm.turn_speed * TURN_RATE * dt,
        };
        body.heading += turn;
        body.velocity = vector_from_angle(body.heading) * helm.impulse * MAX_SPEED;
        body.position += body.velocity * dt;
    });
    if let Some(body) = objects.body(entity) {
        ship.state_mut().update_from_body(&body);
    }

    let position = ship.state().position;
    for contact in objects.candidates() {
        if contact.entity != entity && contact.position.distance(position) < IDENTIFY_RANGE {
            ship.record_scan(contact.entity, ScanState::FriendOrFoeIdentified);
        }
    }
}
