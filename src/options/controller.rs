use std::f32::consts::FRAC_PI_4;

use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::pose::Pose;
use crate::util::damping::DEFAULT_SMOOTHING_RATE;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Reset Pose", inline)]
#[serde(default)]
/// Pose restored on double-tap.
pub struct PoseOptions {
    /// Euler angles in radians (pitch, yaw, roll).
    #[schemars(skip)]
    pub rotation: [f32; 3],
    /// Orbit pivot in world space.
    #[schemars(skip)]
    pub position: [f32; 3],
    /// Camera distance from the pivot.
    #[schemars(title = "Distance", range(min = 0.5, max = 200.0), extend("step" = 0.5))]
    pub distance: f32,
}

impl Default for PoseOptions {
    fn default() -> Self {
        Self {
            rotation: [-FRAC_PI_4, -FRAC_PI_4, 0.0],
            position: [0.0; 3],
            distance: 10.0,
        }
    }
}

impl PoseOptions {
    /// Convert to a runtime [`Pose`].
    #[must_use]
    pub fn to_pose(&self) -> Pose {
        Pose::new(
            Vec3::from_array(self.rotation),
            Vec3::from_array(self.position),
            self.distance,
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Controller", inline)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
/// Gesture sensitivity, smoothing, and channel permissions.
pub struct ControllerOptions {
    /// Approach rate in 1/seconds; a frame of `1 / rate` seconds lands on
    /// the target.
    #[schemars(title = "Smoothing Rate", range(min = 1.0, max = 60.0), extend("step" = 1.0))]
    pub smoothing_rate: f32,
    /// Drag distance in pixels for one radian of orbit.
    #[schemars(title = "Orbit Pixels / Radian", range(min = 50.0, max = 2000.0), extend("step" = 10.0))]
    pub orbit_pixels_per_radian: f32,
    /// Drag distance in pixels that pans the pivot by one camera distance.
    #[schemars(title = "Pan Pixels", range(min = 50.0, max = 2000.0), extend("step" = 10.0))]
    pub pan_pixels: f32,
    /// Closest distance `fit_to_points` will place the camera.
    #[schemars(title = "Min Fit Distance", range(min = 0.1, max = 50.0), extend("step" = 0.1))]
    pub min_fit_distance: f32,
    /// Allow one-finger orbit.
    #[schemars(title = "Orbit")]
    pub orbit_enabled: bool,
    /// Allow pivot panning.
    #[schemars(title = "Pan")]
    pub pan_enabled: bool,
    /// Allow pinch zoom.
    #[schemars(title = "Zoom")]
    pub zoom_enabled: bool,
    /// Allow double-tap reset.
    #[schemars(title = "Reset")]
    pub reset_enabled: bool,
    /// Pose restored on reset.
    pub reset: PoseOptions,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            smoothing_rate: DEFAULT_SMOOTHING_RATE,
            orbit_pixels_per_radian: 400.0,
            pan_pixels: 600.0,
            min_fit_distance: 1.0,
            orbit_enabled: true,
            pan_enabled: true,
            zoom_enabled: true,
            reset_enabled: true,
            reset: PoseOptions::default(),
        }
    }
}
