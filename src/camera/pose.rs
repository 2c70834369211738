use glam::{EulerRot, Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::util::damping::{approach_f32, approach_vec3};

/// Orbit camera pose: where the pivot is, how the rig is turned around it,
/// and how far back the camera sits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// Euler angles in radians: x = pitch, y = yaw, z = roll.
    pub rotation: Vec3,
    /// Orbit pivot in world space.
    pub position: Vec3,
    /// Camera offset along the orbit node's local +Z axis.
    pub distance: f32,
}

/// Which channels of a [`Pose`] an approach step may touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Channels {
    /// Orbit rotation.
    pub rotation: bool,
    /// Pivot position.
    pub position: bool,
    /// Camera distance.
    pub distance: bool,
}

impl Channels {
    /// Every channel enabled.
    pub const ALL: Self = Self {
        rotation: true,
        position: true,
        distance: true,
    };
}

impl Pose {
    /// Build a pose from its parts.
    #[must_use]
    pub const fn new(rotation: Vec3, position: Vec3, distance: f32) -> Self {
        Self {
            rotation,
            position,
            distance,
        }
    }

    /// Orbit orientation: yaw about Y, then pitch about X, then roll about Z.
    #[must_use]
    pub fn orientation(&self) -> Quat {
        Quat::from_euler(
            EulerRot::YXZ,
            self.rotation.y,
            self.rotation.x,
            self.rotation.z,
        )
    }

    /// Camera eye position in world space.
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        self.position + self.orientation() * Vec3::new(0.0, 0.0, self.distance)
    }

    /// Step the enabled channels toward `target` by `factor` of the gap.
    pub fn approach(&mut self, target: &Pose, factor: f32, channels: Channels) {
        if channels.rotation {
            self.rotation =
                approach_vec3(self.rotation, target.rotation, factor);
        }
        if channels.position {
            self.position =
                approach_vec3(self.position, target.position, factor);
        }
        if channels.distance {
            self.distance =
                approach_f32(self.distance, target.distance, factor);
        }
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::ZERO, 0.0)
    }
}
