//! Core simulation types shared by the cockpit crates.
//!
//! This crate provides the foundational pieces the cockpit reads from:
//! - The live population of space objects and its candidate snapshots
//! - Components attached to those objects
//! - Heading math in degrees
//! - Frame timing

pub mod components;
pub mod heading;
pub mod time;
pub mod world;

pub use components::*;
pub use heading::*;
pub use time::*;
pub use world::*;

// Re-export commonly used types
pub use glam::{Vec2, Vec3};
pub use hecs::{Entity, NoSuchEntity};
