//! The vehicle the operator is bound to, as seen from the cockpit.
//!
//! The cockpit reads a `VehicleState` snapshot and a few relations, and sends
//! `ShipCommand`s back. It never moves the vehicle itself.

use engine_core::{Body, Candidate, Entity, Faction, ScanState, Vec2};
use std::collections::{HashMap, HashSet};

/// Per-frame snapshot of the bound vehicle.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleState {
    pub entity: Entity,
    pub position: Vec2,
    /// Heading in degrees.
    pub heading: f32,
    pub radius: f32,
    pub velocity: Vec2,
    pub energy_level: f32,
    /// Shield charge per segment in percent, front first.
    pub shields: Vec<f32>,
    pub has_warp_drive: bool,
    pub has_jump_drive: bool,
    pub can_combat_maneuver: bool,
    pub short_range_radar_range: f32,
}

impl VehicleState {
    pub fn new(entity: Entity) -> Self {
        Self {
            entity,
            position: Vec2::ZERO,
            heading: 0.0,
            radius: 100.0,
            velocity: Vec2::ZERO,
            energy_level: 1000.0,
            shields: vec![100.0, 100.0],
            has_warp_drive: false,
            has_jump_drive: true,
            can_combat_maneuver: true,
            short_range_radar_range: 5000.0,
        }
    }

    /// Copy the spatial part of `body` into the snapshot.
    pub fn update_from_body(&mut self, body: &Body) {
        self.position = body.position;
        self.heading = body.heading;
        self.radius = body.radius;
        self.velocity = body.velocity;
    }

    pub fn shield_percentage(&self, segment: usize) -> f32 {
        self.shields.get(segment).copied().unwrap_or(0.0)
    }
}

/// Command verbs the cockpit can issue to its vehicle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShipCommand {
    SetTarget(Option<Entity>),
    /// Forward/back thrust in [-1, 1].
    Impulse(f32),
    /// Turn rate in [-1, 1].
    TurnSpeed(f32),
    CombatManeuverStrafe(f32),
    CombatManeuverBoost(f32),
    /// Absolute heading to steer toward, degrees.
    TargetRotation(f32),
}

/// A vehicle that can be flown from the cockpit.
pub trait Vehicle {
    fn state(&self) -> &VehicleState;

    /// The vehicle's authoritative current target.
    fn target(&self) -> Option<Entity>;

    fn is_enemy(&self, candidate: &Candidate) -> bool;

    fn scanned_state_for(&self, entity: Entity) -> ScanState;

    /// Whether the vehicle may lock weapons on `candidate`.
    fn can_target(&self, candidate: &Candidate) -> bool {
        candidate.targetable && candidate.entity != self.state().entity
    }

    fn command(&mut self, command: ShipCommand);
}

/// Helm settings last applied from commands.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HelmState {
    pub impulse: f32,
    pub turn_speed: f32,
    pub strafe: f32,
    pub boost: f32,
    pub target_rotation: Option<f32>,
}

/// In-process vehicle. Commands queue up and take effect on `apply_commands`,
/// the way a remote ship only reflects them once the simulation has run.
#[derive(Debug, Clone)]
pub struct PlayerShip {
    state: VehicleState,
    faction: Faction,
    hostile: HashSet<Faction>,
    scans: HashMap<Entity, ScanState>,
    target: Option<Entity>,
    helm: HelmState,
    outbox: Vec<ShipCommand>,
}

impl PlayerShip {
    pub fn new(state: VehicleState, faction: Faction) -> Self {
        Self {
            state,
            faction,
            hostile: HashSet::new(),
            scans: HashMap::new(),
            target: None,
            helm: HelmState::default(),
            outbox: Vec::new(),
        }
    }

    pub fn state_mut(&mut self) -> &mut VehicleState {
        &mut self.state
    }

    pub fn declare_hostile(&mut self, faction: Faction) {
        self.hostile.insert(faction);
    }

    /// Record scan progress against `entity`. Scans never regress.
    pub fn record_scan(&mut self, entity: Entity, state: ScanState) {
        let entry = self.scans.entry(entity).or_default();
        *entry = (*entry).max(state);
    }

    pub fn helm(&self) -> HelmState {
        self.helm
    }

    /// Commands issued since the last `apply_commands`.
    pub fn pending_commands(&self) -> &[ShipCommand] {
        &self.outbox
    }

    /// Apply queued commands and return them in issue order.
    pub fn apply_commands(&mut self) -> Vec<ShipCommand> {
        let commands = std::mem::take(&mut self.outbox);
        for command in &commands {
            match *command {
                ShipCommand::SetTarget(target) => self.target = target,
                ShipCommand::Impulse(v) => self.helm.impulse = v.clamp(-1.0, 1.0),
                ShipCommand::TurnSpeed(v) => {
                    self.helm.turn_speed = v.clamp(-1.0, 1.0);
                    self.helm.target_rotation = None;
                }
                ShipCommand::CombatManeuverStrafe(v) => self.helm.strafe = v.clamp(-1.0, 1.0),
                ShipCommand::CombatManeuverBoost(v) => self.helm.boost = v.clamp(-1.0, 1.0),
                ShipCommand::TargetRotation(heading) => {
                    self.helm.target_rotation = Some(heading);
                    self.helm.turn_speed = 0.0;
                }
            }
        }
        commands
    }
}

impl Vehicle for PlayerShip {
    fn state(&self) -> &VehicleState {
        &self.state
    }

    fn target(&self) -> Option<Entity> {
        self.target
    }

    fn is_enemy(&self, candidate: &Candidate) -> bool {
        candidate.entity != self.state.entity
            && candidate.faction != self.faction
            && self.hostile.contains(&candidate.faction)
    }

    fn scanned_state_for(&self, entity: Entity) -> ScanState {
        self.scans.get(&entity).copied().unwrap_or_default()
    }

    fn command(&mut self, command: ShipCommand) {
        self.outbox.push(command);
    }
}
