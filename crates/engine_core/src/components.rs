//! Components attached to objects in the space population.

use glam::Vec2;

/// Spatial state of an object on the play plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub position: Vec2,
    /// Heading in degrees, 0 pointing along +X.
    pub heading: f32,
    pub radius: f32,
    pub velocity: Vec2,
}

impl Default for Body {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            heading: 0.0,
            radius: 100.0,
            velocity: Vec2::ZERO,
        }
    }
}

impl Body {
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    pub fn with_heading(mut self, heading: f32) -> Self {
        self.heading = heading;
        self
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }
}

/// Faction an object belongs to. Hostility between factions is decided by the
/// observing vehicle, not stored here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Faction(pub u16);

/// Marker: the object may be selected as a weapons target.
#[derive(Debug, Clone, Copy, Default)]
pub struct Targetable;

/// Display name shown next to radar blips.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Callsign(pub String);

/// Scan progress of an object as seen by one vehicle. Ordered, so thresholds
/// can be compared with `>=`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScanState {
    #[default]
    NotScanned,
    FriendOrFoeIdentified,
    SimpleScan,
    FullScan,
}
