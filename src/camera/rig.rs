//! Scene-graph transforms for the camera rig.
//!
//! The rig is two nodes: an orbit node at the pivot carrying the rotation,
//! and a camera node parented to it, pushed back along local +Z by the
//! distance. Callers copy these into their own scene graph each frame.

use glam::{Mat4, Quat, Vec3};

use super::pose::Pose;

/// Local transform of one rig node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeTransform {
    /// Local rotation.
    pub rotation: Quat,
    /// Local translation.
    pub translation: Vec3,
}

impl NodeTransform {
    /// Local matrix (rotation then translation).
    #[must_use]
    pub fn to_mat4(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.translation)
    }
}

/// The live orbit and camera nodes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigNodes {
    /// Orbit node: pivot translation and orbit rotation, in world space.
    pub orbit: NodeTransform,
    /// Camera node, local to `orbit`.
    pub camera: NodeTransform,
}

impl RigNodes {
    /// Nodes for a pose.
    #[must_use]
    pub fn from_pose(pose: &Pose) -> Self {
        Self {
            orbit: NodeTransform {
                rotation: pose.orientation(),
                translation: pose.position,
            },
            camera: NodeTransform {
                rotation: Quat::IDENTITY,
                translation: Vec3::new(0.0, 0.0, pose.distance),
            },
        }
    }

    /// World transform of the camera node (orbit × camera).
    #[must_use]
    pub fn camera_world(&self) -> Mat4 {
        self.orbit.to_mat4() * self.camera.to_mat4()
    }

    /// View matrix (inverse of the camera's world transform).
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        self.camera_world().inverse()
    }
}
