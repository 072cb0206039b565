//! The live population of space objects.
//!
//! Objects live in a `hecs::World`; `SpaceObjects` adds a stable insertion
//! order on top so that target cycling walks the population the same way every
//! frame. Everything outside this module refers to objects by `Entity` only.

use glam::Vec2;
use hecs::{Entity, EntityBuilder, NoSuchEntity, World};

use crate::components::{Body, Callsign, Faction, Targetable};

/// Read-only snapshot of one object, as consumed by target selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub entity: Entity,
    pub position: Vec2,
    pub faction: Faction,
    pub targetable: bool,
}

/// Ordered population of space objects.
#[derive(Default)]
pub struct SpaceObjects {
    world: World,
    /// Spawn order. Despawned entities are removed, survivors keep their order.
    order: Vec<Entity>,
}

impl SpaceObjects {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn an object at the end of the iteration order.
    pub fn spawn(&mut self, body: Body, faction: Faction, targetable: bool) -> Entity {
        let mut builder = EntityBuilder::new();
        builder.add(body).add(faction);
        self.spawn_built(builder, targetable)
    }

    /// Spawn an object with a radar callsign.
    pub fn spawn_named(
        &mut self,
        name: impl Into<String>,
        body: Body,
        faction: Faction,
        targetable: bool,
    ) -> Entity {
        let mut builder = EntityBuilder::new();
        builder.add(body).add(faction).add(Callsign(name.into()));
        self.spawn_built(builder, targetable)
    }

    fn spawn_built(&mut self, mut builder: EntityBuilder, targetable: bool) -> Entity {
        if targetable {
            builder.add(Targetable);
        }
        let entity = self.world.spawn(builder.build());
        self.order.push(entity);
        entity
    }

    pub fn despawn(&mut self, entity: Entity) -> Result<(), NoSuchEntity> {
        self.world.despawn(entity)?;
        self.order.retain(|&e| e != entity);
        log::debug!("Despawned space object {:?}", entity);
        Ok(())
    }

    /// Whether `entity` is still alive in the population.
    pub fn contains(&self, entity: Entity) -> bool {
        self.world.contains(entity)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Snapshot of one object, `None` if it is gone or has no body.
    pub fn candidate(&self, entity: Entity) -> Option<Candidate> {
        let object = self.world.entity(entity).ok()?;
        let position = object.get::<&Body>()?.position;
        let faction = object.get::<&Faction>().map(|f| *f).unwrap_or_default();
        Some(Candidate {
            entity,
            position,
            faction,
            targetable: object.has::<Targetable>(),
        })
    }

    /// Snapshot of the whole population in iteration order.
    ///
    /// Taken once per query so every pass of a scan sees the same frame.
    pub fn candidates(&self) -> Vec<Candidate> {
        self.order
            .iter()
            .filter_map(|&entity| self.candidate(entity))
            .collect()
    }

    pub fn body(&self, entity: Entity) -> Option<Body> {
        self.world.get::<&Body>(entity).ok().map(|body| *body)
    }

    /// Run `f` on the body of `entity`. Returns false if the object is gone.
    pub fn update_body(&mut self, entity: Entity, f: impl FnOnce(&mut Body)) -> bool {
        match self.world.get::<&mut Body>(entity) {
            Ok(mut body) => {
                f(&mut *body);
                true
            }
            Err(_) => false,
        }
    }

    pub fn callsign(&self, entity: Entity) -> Option<String> {
        self.world
            .get::<&Callsign>(entity)
            .ok()
            .map(|name| name.0.clone())
    }

    pub fn set_targetable(&mut self, entity: Entity, targetable: bool) -> Result<(), NoSuchEntity> {
        if !self.world.contains(entity) {
            return Err(NoSuchEntity);
        }
        if targetable {
            self.world.insert_one(entity, Targetable)?;
        } else {
            // Removing an absent marker is fine.
            let _ = self.world.remove_one::<Targetable>(entity);
        }
        Ok(())
    }
}
