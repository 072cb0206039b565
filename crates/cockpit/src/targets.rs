//! Weapons target selection for the cockpit.
//!
//! The registry holds a weak key to the current target. It is overwritten by
//! the vehicle's authoritative target every frame and changed locally by
//! pointer picks and the cycling hotkeys, which also push the new selection
//! out to the vehicle.

use engine_core::{vector_to_angle, Candidate, Entity, ScanState, SpaceObjects, Vec2};

use crate::vehicle::{ShipCommand, Vehicle};

/// Which objects a pointer pick may land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickFilter {
    /// Objects the vehicle can lock weapons on.
    Targetable,
    /// Any object other than the vehicle itself.
    Selectable,
}

/// Which objects the cycling hotkeys step through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleMode {
    /// Hostile objects scanned at least to friend-or-foe identification.
    Enemy,
    /// Every targetable object.
    Any,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TargetRegistry {
    current: Option<Entity>,
}

impl TargetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<Entity> {
        self.current
    }

    pub fn set(&mut self, target: Option<Entity>) {
        self.current = target;
    }

    /// Adopt the vehicle's authoritative target. Dead targets are dropped.
    pub fn sync_from_vehicle(&mut self, vehicle: &dyn Vehicle, objects: &SpaceObjects) {
        self.current = vehicle.target().filter(|&entity| objects.contains(entity));
    }

    /// Closest object to `point` matching `filter`, strictly inside `max_radius`.
    /// Ties go to the object met first in population order.
    pub fn closest_to(
        objects: &SpaceObjects,
        point: Vec2,
        max_radius: f32,
        filter: PickFilter,
        vehicle: &dyn Vehicle,
    ) -> Option<Entity> {
        let mut best: Option<(Entity, f32)> = None;
        for candidate in objects.candidates() {
            if !pick_filter_matches(filter, &candidate, vehicle) {
                continue;
            }
            let dist = candidate.position.distance(point);
            if dist >= max_radius {
                continue;
            }
            if best.map_or(true, |(_, best_dist)| dist < best_dist) {
                best = Some((candidate.entity, dist));
            }
        }
        best.map(|(entity, _)| entity)
    }

    /// Pointer pick. Selects the closest match and sends it to the vehicle; if
    /// nothing is in reach the target is kept and the vehicle is turned toward
    /// `point` instead. Returns whether a target was picked.
    pub fn pick_nearest(
        &mut self,
        objects: &SpaceObjects,
        point: Vec2,
        max_radius: f32,
        filter: PickFilter,
        vehicle: &mut dyn Vehicle,
    ) -> bool {
        match Self::closest_to(objects, point, max_radius, filter, vehicle) {
            Some(entity) => {
                self.current = Some(entity);
                vehicle.command(ShipCommand::SetTarget(Some(entity)));
                log::debug!("Picked target {:?} near {:?}", entity, point);
                true
            }
            None => {
                let heading = vector_to_angle(point - vehicle.state().position);
                vehicle.command(ShipCommand::TargetRotation(heading));
                false
            }
        }
    }

    /// Step to the next matching object after the current target, wrapping
    /// around to the start of the population. Leaves the target unchanged when
    /// nothing else matches.
    pub fn cycle_next(
        &mut self,
        objects: &SpaceObjects,
        vehicle: &mut dyn Vehicle,
        mode: CycleMode,
    ) -> Option<Entity> {
        let candidates = objects.candidates();
        let current = self.current;
        let matches = |c: &Candidate| cycle_filter_matches(mode, c, &*vehicle);

        // Pass 1: strictly after the current target.
        let after_current = current
            .and_then(|cur| candidates.iter().position(|c| c.entity == cur))
            .map(|index| index + 1);
        let forward = after_current.and_then(|start| candidates[start..].iter().find(|c| matches(*c)));

        // Pass 2: wrap around from the start.
        let next = forward
            .or_else(|| {
                candidates
                    .iter()
                    .find(|c| Some(c.entity) != current && matches(*c))
            })?
            .entity;

        self.current = Some(next);
        vehicle.command(ShipCommand::SetTarget(Some(next)));
        log::debug!("Cycled {:?} target to {:?}", mode, next);
        Some(next)
    }
}

fn pick_filter_matches(filter: PickFilter, candidate: &Candidate, vehicle: &dyn Vehicle) -> bool {
    if candidate.entity == vehicle.state().entity {
        return false;
    }
    match filter {
        PickFilter::Targetable => vehicle.can_target(candidate),
        PickFilter::Selectable => true,
    }
}

fn cycle_filter_matches(mode: CycleMode, candidate: &Candidate, vehicle: &dyn Vehicle) -> bool {
    let state = vehicle.state();
    if candidate.entity == state.entity {
        return false;
    }
    if candidate.position.distance(state.position) >= state.short_range_radar_range {
        return false;
    }
    if !vehicle.can_target(candidate) {
        return false;
    }
    match mode {
        CycleMode::Any => true,
        CycleMode::Enemy => {
            vehicle.is_enemy(candidate)
                && vehicle.scanned_state_for(candidate.entity) >= ScanState::FriendOrFoeIdentified
        }
    }
}
