//! Orbit camera: poses, gesture captures, the damped controller, and the
//! scene-graph transforms it exposes.

/// Programmatic camera command vocabulary.
pub mod command;
/// Damped orbit controller driven by gestures and setters.
pub mod controller;
/// Projection parameters and GPU uniform types.
pub mod core;
/// Explicit in-progress gesture captures.
pub mod gesture;
/// Pose value type and per-channel approach step.
pub mod pose;
/// Orbit / camera node transforms.
pub mod rig;

pub use command::CameraCommand;
pub use controller::OrbitController;
pub use pose::Pose;
pub use rig::{NodeTransform, RigNodes};
