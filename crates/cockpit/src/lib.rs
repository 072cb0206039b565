//! Single-pilot cockpit control: target selection, input routing, missile aim
//! and the follow camera for one operator flying a whole ship.

pub mod aim;
pub mod camera_follow;
pub mod config;
pub mod hud;
pub mod router;
pub mod screen;
pub mod targets;
pub mod vehicle;

pub use aim::{AimCoordinator, MissileTubes};
pub use camera_follow::{desired_pose, CameraFollow, CameraPose, CameraView, FollowSettings};
pub use config::{CockpitConfig, ConfigError};
pub use hud::HudReadout;
pub use router::{InputRouter, RouteContext};
pub use screen::{CockpitScreen, FrameOutput, RadarLayout};
pub use targets::{CycleMode, PickFilter, TargetRegistry};
pub use vehicle::{HelmState, PlayerShip, ShipCommand, Vehicle, VehicleState};
