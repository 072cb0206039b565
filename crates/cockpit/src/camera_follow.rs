//! Camera that follows the bound vehicle.
//!
//! Chase view trails the vehicle and is low-pass filtered once per frame.
//! First-person view sits in the cockpit and snaps to the vehicle every frame.
//! Angles are degrees; pose positions use (x, y) on the play plane and z for
//! height above it.

use engine_core::{angle_difference, vector_from_angle, Vec3};
use serde::{Deserialize, Serialize};

use crate::vehicle::VehicleState;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CameraView {
    #[default]
    Chase,
    FirstPerson,
}

impl CameraView {
    /// View selected by the persisted `first_person` preference.
    pub fn from_preference(first_person: bool) -> Self {
        if first_person {
            CameraView::FirstPerson
        } else {
            CameraView::Chase
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
}

/// Tunables for both views.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FollowSettings {
    /// Distance behind the vehicle in chase view.
    pub chase_distance: f32,
    pub chase_height: f32,
    pub chase_pitch: f32,
    /// Fraction of the remaining gap closed per frame in chase view.
    pub smoothing: f32,
    /// First-person eye offset ahead of center, in vehicle radii.
    pub cockpit_offset: f32,
    /// First-person eye height, in vehicle radii.
    pub cockpit_height: f32,
    /// Height of the top-down debug view.
    pub overhead_height: f32,
}

impl Default for FollowSettings {
    fn default() -> Self {
        Self {
            chase_distance: 420.0,
            chase_height: 420.0,
            chase_pitch: 30.0,
            smoothing: 0.1,
            cockpit_offset: 1.5,
            cockpit_height: 0.1,
            overhead_height: 3000.0,
        }
    }
}

/// Pose the camera is heading for this frame.
pub fn desired_pose(view: CameraView, vehicle: &VehicleState, settings: &FollowSettings) -> CameraPose {
    let (distance, height, pitch) = match view {
        CameraView::Chase => (
            settings.chase_distance,
            settings.chase_height,
            settings.chase_pitch,
        ),
        CameraView::FirstPerson => (
            -(vehicle.radius * settings.cockpit_offset),
            vehicle.radius * settings.cockpit_height,
            0.0,
        ),
    };
    let planar = vehicle.position + vector_from_angle(vehicle.heading) * -distance;
    CameraPose {
        position: Vec3::new(planar.x, planar.y, height),
        yaw: vehicle.heading,
        pitch,
    }
}

#[derive(Debug, Clone, Default)]
pub struct CameraFollow {
    /// Last followed pose. The overhead view never writes here.
    pose: CameraPose,
    settings: FollowSettings,
}

impl CameraFollow {
    pub fn new(settings: FollowSettings) -> Self {
        Self {
            pose: CameraPose::default(),
            settings,
        }
    }

    pub fn pose(&self) -> CameraPose {
        self.pose
    }

    pub fn settings(&self) -> &FollowSettings {
        &self.settings
    }

    /// Advance one frame and return the pose to render.
    ///
    /// With no vehicle the last pose is held. `overhead` shows a top-down view
    /// for this frame only; following resumes from the held pose afterwards.
    pub fn update(
        &mut self,
        vehicle: Option<&VehicleState>,
        view: CameraView,
        overhead: bool,
    ) -> CameraPose {
        let Some(vehicle) = vehicle else {
            return self.pose;
        };

        if overhead {
            return CameraPose {
                position: Vec3::new(
                    vehicle.position.x,
                    vehicle.position.y,
                    self.settings.overhead_height,
                ),
                yaw: self.pose.yaw,
                pitch: 90.0,
            };
        }

        let desired = desired_pose(view, vehicle, &self.settings);
        match view {
            CameraView::FirstPerson => self.pose = desired,
            CameraView::Chase => {
                let s = self.settings.smoothing;
                self.pose.position = self.pose.position * (1.0 - s) + desired.position * s;
                self.pose.yaw += angle_difference(self.pose.yaw, desired.yaw) * s;
                self.pose.pitch = desired.pitch;
            }
        }
        self.pose
    }
}
