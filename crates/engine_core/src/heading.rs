//! Heading math in degrees on the play plane.
//!
//! Headings follow the plane convention: 0 degrees points along +X and angles
//! grow toward +Y.

use glam::Vec2;

/// Unit vector pointing along `degrees`.
pub fn vector_from_angle(degrees: f32) -> Vec2 {
    let radians = degrees.to_radians();
    Vec2::new(radians.cos(), radians.sin())
}

/// Heading in degrees of `v`. Zero vectors map to 0.
pub fn vector_to_angle(v: Vec2) -> f32 {
    v.y.atan2(v.x).to_degrees()
}

/// Signed shortest rotation from `from` to `to`, in (-180, 180].
pub fn angle_difference(from: f32, to: f32) -> f32 {
    let diff = (to - from).rem_euclid(360.0);
    if diff > 180.0 {
        diff - 360.0
    } else {
        diff
    }
}

/// Wrap an angle into [0, 360).
pub fn wrap_degrees(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}
