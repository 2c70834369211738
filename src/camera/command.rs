//! Programmatic camera vocabulary.
//!
//! Hosts that route UI actions, scripts, or remote control through a single
//! channel build a `CameraCommand` and pass it to
//! [`OrbitController::execute`](super::controller::OrbitController::execute).
//! Every command writes the target pose, so the move is smoothed like a
//! gesture.

use glam::Vec3;

/// A discrete camera operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraCommand {
    /// Move the orbit pivot.
    SetTargetPosition(Vec3),
    /// Set the camera distance from the pivot.
    SetTargetDistance(f32),
    /// Set the orbit Euler angles (radians).
    SetTargetRotation(Vec3),
    /// Return to the reset pose, if resets are enabled.
    Reset,
    /// Jump the current pose onto the target without smoothing.
    SnapToTarget,
}
