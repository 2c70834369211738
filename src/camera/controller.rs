use glam::{Mat4, Vec2, Vec3};

use super::command::CameraCommand;
use super::core::{Camera, CameraUniform};
use super::gesture::GestureState;
use super::pose::{Channels, Pose};
use super::rig::RigNodes;
use crate::input::{GestureEvent, GestureHost, GestureKind, GesturePhase};
use crate::options::{ControllerOptions, Options};
use crate::util::damping::smoothing_factor;

/// Gesture-driven orbit camera.
///
/// Gestures and manual setters write the target pose. Once per frame,
/// [`update`](Self::update) moves the current pose a time-scaled fraction of
/// the way toward it, per channel, for every channel whose permission flag is
/// set. The reset pose is fixed at construction.
///
/// # Usage
///
/// ```ignore
/// let mut controller = OrbitController::default();
/// controller.attach(&mut view);
///
/// // Gesture callbacks:
/// controller.handle_gesture(event);
///
/// // Each frame:
/// controller.update(clock.now());
/// scene.set_camera(controller.nodes());
/// ```
pub struct OrbitController {
    current: Pose,
    target: Pose,
    reset: Pose,
    gestures: GestureState,
    last_update_time: f64,

    /// Projection parameters for the rig's camera node.
    pub camera: Camera,
    /// Whether one-finger pans orbit the camera.
    pub orbit_enabled: bool,
    /// Whether two-finger pans move the pivot.
    pub pan_enabled: bool,
    /// Whether pinches change the distance.
    pub zoom_enabled: bool,
    /// Whether double-tap restores the reset pose.
    pub reset_enabled: bool,

    smoothing_rate: f32,
    orbit_scale: f32,
    pan_scale: f32,
    min_fit_distance: f32,
}

impl OrbitController {
    /// Create a controller whose current, target and reset poses all start at
    /// the configured reset pose.
    #[must_use]
    pub fn new(options: &ControllerOptions) -> Self {
        let reset = options.reset.to_pose();
        Self {
            current: reset,
            target: reset,
            reset,
            gestures: GestureState::default(),
            last_update_time: 0.0,
            camera: Camera::default(),
            orbit_enabled: options.orbit_enabled,
            pan_enabled: options.pan_enabled,
            zoom_enabled: options.zoom_enabled,
            reset_enabled: options.reset_enabled,
            smoothing_rate: options.smoothing_rate,
            orbit_scale: options.orbit_pixels_per_radian.recip(),
            pan_scale: options.pan_pixels.recip(),
            min_fit_distance: options.min_fit_distance,
        }
    }

    /// Create a controller from the full options set, including projection.
    #[must_use]
    pub fn from_options(options: &Options) -> Self {
        Self {
            camera: Camera::from_options(&options.camera),
            ..Self::new(&options.controller)
        }
    }

    /// Register the pan, pinch and double-tap recognizers on a host view.
    pub fn attach(&self, host: &mut impl GestureHost) {
        host.add_recognizer(GestureKind::Pan { max_touches: 2 });
        host.add_recognizer(GestureKind::Pinch);
        host.add_recognizer(GestureKind::DoubleTap);
        log::debug!("orbit controller attached pan/pinch/double-tap recognizers");
    }

    /// Apply a gesture to the target pose.
    pub fn handle_gesture(&mut self, event: GestureEvent) {
        match event {
            GestureEvent::Pan {
                phase,
                touches,
                translation,
            } => self.handle_pan(phase, touches, translation),
            GestureEvent::Pinch { phase, scale } => {
                self.handle_pinch(phase, scale);
            }
            GestureEvent::DoubleTap => self.reset(),
        }
    }

    fn handle_pan(&mut self, phase: GesturePhase, touches: u32, translation: Vec2) {
        // A fresh pan measures from its own origin so the travel reported
        // with `Began` is applied; mid-gesture re-arms measure from here.
        let arm_at = if phase == GesturePhase::Began {
            self.gestures.pan = None;
            Vec2::ZERO
        } else {
            translation
        };

        match touches {
            1 => {
                let (start_rotation, start_translation) = self
                    .gestures
                    .orbit(self.target.rotation, arm_at);
                let delta = (translation - start_translation) * self.orbit_scale;
                self.target.rotation.x = start_rotation.x - delta.y;
                self.target.rotation.y = start_rotation.y - delta.x;
            }
            // Zero touches is the final callback of a two-finger pan; it
            // pans the pivot like any other callback.
            0 | 2 => {
                let delta = self.gestures.pivot_delta(translation, arm_at);
                let orientation = self.current.orientation();
                let right = orientation * Vec3::X;
                let up = orientation * Vec3::Y;
                let scale = self.current.distance * self.pan_scale;
                self.target.position +=
                    (right * -delta.x + up * delta.y) * scale;
            }
            _ => {
                log::trace!("ignoring pan with {touches} touches");
            }
        }

        if phase.is_terminal() {
            self.gestures.pan = None;
        }
    }

    fn handle_pinch(&mut self, phase: GesturePhase, scale: f32) {
        if phase == GesturePhase::Began {
            self.gestures.pinch = None;
            let _ = self.gestures.pinch_start(self.current.distance);
            return;
        }

        if scale.is_finite() && scale > 0.0 {
            let start = self.gestures.pinch_start(self.current.distance);
            self.target.distance = start / scale;
        } else {
            log::trace!("ignoring pinch with scale {scale}");
        }

        if phase.is_terminal() {
            self.gestures.pinch = None;
        }
    }

    /// Snap the target pose to the reset pose. No-op when resets are
    /// disabled.
    pub fn reset(&mut self) {
        if !self.reset_enabled {
            log::trace!("reset requested but resets are disabled");
            return;
        }
        self.target = self.reset;
        log::debug!("camera target reset");
    }

    /// Advance the current pose toward the target.
    ///
    /// `time` is a monotonic timestamp in seconds. The first call measures
    /// from zero.
    pub fn update(&mut self, time: f64) {
        let dt = time - self.last_update_time;
        self.last_update_time = time;
        if dt < 0.0 {
            log::warn!("frame time went backwards by {:.4}s", -dt);
        }

        let factor = smoothing_factor(dt as f32, self.smoothing_rate);
        self.current.approach(
            &self.target,
            factor,
            Channels {
                rotation: self.orbit_enabled,
                position: self.pan_enabled,
                distance: self.zoom_enabled,
            },
        );
    }

    /// Move the target pivot.
    pub fn set_target_position(&mut self, position: Vec3) {
        self.target.position = position;
    }

    /// Set the target camera distance.
    pub fn set_target_distance(&mut self, distance: f32) {
        self.target.distance = distance;
    }

    /// Set the target orbit rotation (Euler radians).
    pub fn set_target_rotation(&mut self, rotation: Vec3) {
        self.target.rotation = rotation;
    }

    /// Jump the current pose onto the target without smoothing.
    pub fn snap_to_target(&mut self) {
        self.current = self.target;
    }

    /// Run a programmatic camera command.
    pub fn execute(&mut self, command: CameraCommand) {
        match command {
            CameraCommand::SetTargetPosition(p) => self.set_target_position(p),
            CameraCommand::SetTargetDistance(d) => self.set_target_distance(d),
            CameraCommand::SetTargetRotation(r) => self.set_target_rotation(r),
            CameraCommand::Reset => self.reset(),
            CameraCommand::SnapToTarget => self.snap_to_target(),
        }
    }

    /// Aim the target at the given positions, centering on their centroid
    /// and setting distance so all points are visible.
    ///
    /// The distance never drops below the configured minimum, so a single
    /// point still leaves room to pinch and pan.
    pub fn fit_to_points(&mut self, positions: &[Vec3]) {
        if positions.is_empty() {
            return;
        }

        let centroid: Vec3 =
            positions.iter().copied().sum::<Vec3>() / positions.len() as f32;
        let radius = positions
            .iter()
            .map(|p| (*p - centroid).length())
            .fold(0.0f32, f32::max);

        self.target.position = centroid;

        let fovy_rad = self.camera.fovy.to_radians();
        let fit_distance = radius / (fovy_rad / 2.0).tan();
        self.target.distance =
            (fit_distance * 1.5).max(self.min_fit_distance); // 1.5x padding
    }

    /// Update the projection aspect ratio.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.resize(width, height);
    }

    /// The rendered pose.
    #[must_use]
    pub fn current(&self) -> &Pose {
        &self.current
    }

    /// The pose the camera is approaching.
    #[must_use]
    pub fn target(&self) -> &Pose {
        &self.target
    }

    /// The fixed pose restored by [`reset`](Self::reset).
    #[must_use]
    pub fn reset_pose(&self) -> &Pose {
        &self.reset
    }

    /// Live orbit and camera node transforms for the current pose.
    #[must_use]
    pub fn nodes(&self) -> RigNodes {
        RigNodes::from_pose(&self.current)
    }

    /// View matrix for the current pose.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        self.nodes().view_matrix()
    }

    /// Combined projection × view for the current pose.
    #[must_use]
    pub fn view_projection(&self) -> Mat4 {
        self.camera.build_projection() * self.view_matrix()
    }

    /// GPU uniform for the current pose.
    #[must_use]
    pub fn uniform(&self) -> CameraUniform {
        let mut uniform = CameraUniform::new();
        uniform.update(&self.camera, self.nodes().camera_world());
        uniform
    }
}

impl Default for OrbitController {
    fn default() -> Self {
        Self::new(&ControllerOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_4;

    use super::*;

    const EPSILON: f32 = 1e-5;

    fn pan(phase: GesturePhase, touches: u32, x: f32, y: f32) -> GestureEvent {
        GestureEvent::Pan {
            phase,
            touches,
            translation: Vec2::new(x, y),
        }
    }

    fn pinch(phase: GesturePhase, scale: f32) -> GestureEvent {
        GestureEvent::Pinch { phase, scale }
    }

    #[derive(Default)]
    struct RecordingHost(Vec<GestureKind>);

    impl GestureHost for RecordingHost {
        fn add_recognizer(&mut self, kind: GestureKind) {
            self.0.push(kind);
        }
    }

    #[test]
    fn construction_uses_reset_pose() {
        let c = OrbitController::default();
        assert_eq!(c.reset_pose().distance, 10.0);
        assert_eq!(c.reset_pose().rotation, Vec3::new(-FRAC_PI_4, -FRAC_PI_4, 0.0));
        assert_eq!(c.current(), c.reset_pose());
        assert_eq!(c.target(), c.reset_pose());
    }

    #[test]
    fn attach_registers_three_recognizers() {
        let c = OrbitController::default();
        let mut host = RecordingHost::default();
        c.attach(&mut host);
        assert_eq!(
            host.0,
            vec![
                GestureKind::Pan { max_touches: 2 },
                GestureKind::Pinch,
                GestureKind::DoubleTap,
            ]
        );
    }

    #[test]
    fn pinch_then_full_step_snaps_distance() {
        let mut c = OrbitController::default();
        c.handle_gesture(pinch(GesturePhase::Began, 1.0));
        c.handle_gesture(pinch(GesturePhase::Changed, 2.0));
        assert_eq!(c.target().distance, 5.0);

        c.update(1.0);
        assert_eq!(c.current().distance, 5.0);
    }

    #[test]
    fn pinch_scale_direction() {
        for (scale, expect) in [(1.5_f32, -1), (0.5, 1), (1.0, 0)] {
            let mut c = OrbitController::default();
            let before = c.target().distance;
            c.handle_gesture(pinch(GesturePhase::Began, 1.0));
            c.handle_gesture(pinch(GesturePhase::Changed, scale));
            let after = c.target().distance;
            match expect {
                -1 => assert!(after < before, "scale {scale}: {after}"),
                1 => assert!(after > before, "scale {scale}: {after}"),
                _ => assert_eq!(after, before),
            }
        }
    }

    #[test]
    fn pinch_is_relative_to_captured_distance() {
        let mut c = OrbitController::default();
        c.handle_gesture(pinch(GesturePhase::Began, 1.0));
        c.handle_gesture(pinch(GesturePhase::Changed, 2.0));
        // Current distance moves mid-gesture; the capture does not.
        c.update(0.05);
        c.handle_gesture(pinch(GesturePhase::Changed, 4.0));
        assert_eq!(c.target().distance, 2.5);
        c.handle_gesture(pinch(GesturePhase::Ended, 4.0));
        assert!(c.gestures.pinch.is_none());
    }

    #[test]
    fn invalid_pinch_scale_is_ignored() {
        let mut c = OrbitController::default();
        c.handle_gesture(pinch(GesturePhase::Began, 1.0));
        c.handle_gesture(pinch(GesturePhase::Changed, 0.0));
        c.handle_gesture(pinch(GesturePhase::Changed, f32::NAN));
        assert_eq!(c.target().distance, 10.0);
    }

    #[test]
    fn one_finger_pan_orbits_relative_to_start() {
        let mut c = OrbitController::default();
        let start = c.target().rotation;
        c.handle_gesture(pan(GesturePhase::Began, 1, 0.0, 0.0));
        c.handle_gesture(pan(GesturePhase::Changed, 1, 400.0, -200.0));
        let rot = c.target().rotation;
        assert!((rot.y - (start.y - 1.0)).abs() < EPSILON);
        assert!((rot.x - (start.x + 0.5)).abs() < EPSILON);
        assert_eq!(rot.z, start.z);
    }

    #[test]
    fn touch_count_transition_has_no_rotation_jump() {
        let mut c = OrbitController::default();
        c.handle_gesture(pan(GesturePhase::Began, 1, 0.0, 0.0));
        c.handle_gesture(pan(GesturePhase::Changed, 1, 80.0, 0.0));
        let before = c.target().rotation;

        // Second finger lands: pivot pan from here, rotation untouched.
        c.handle_gesture(pan(GesturePhase::Changed, 2, 80.0, 0.0));
        assert_eq!(c.target().rotation, before);
        c.handle_gesture(pan(GesturePhase::Changed, 2, 120.0, 0.0));
        assert_eq!(c.target().rotation, before);

        // Back to one finger: the orbit re-arms at the current translation.
        c.handle_gesture(pan(GesturePhase::Changed, 1, 120.0, 0.0));
        assert_eq!(c.target().rotation, before);
        c.handle_gesture(pan(GesturePhase::Changed, 1, 160.0, 0.0));
        let after = c.target().rotation;
        assert!((after.y - (before.y - 40.0 / 400.0)).abs() < EPSILON);
    }

    #[test]
    fn two_finger_pan_moves_pivot_in_camera_plane() {
        let options = ControllerOptions {
            reset: crate::options::PoseOptions {
                rotation: [0.0; 3],
                position: [0.0; 3],
                distance: 6.0,
            },
            ..ControllerOptions::default()
        };
        let mut c = OrbitController::new(&options);
        c.handle_gesture(pan(GesturePhase::Began, 2, 0.0, 0.0));
        assert_eq!(c.target().position, Vec3::ZERO);
        c.handle_gesture(pan(GesturePhase::Changed, 2, 100.0, 50.0));
        // Identity orientation: right = +X, up = +Y; scale = 6 / 600.
        let p = c.target().position;
        assert!((p - Vec3::new(-1.0, 0.5, 0.0)).length() < EPSILON, "{p}");

        // Increments are per callback, not relative to the start.
        c.handle_gesture(pan(GesturePhase::Changed, 2, 100.0, 50.0));
        assert!((c.target().position - p).length() < EPSILON);
    }

    #[test]
    fn zero_touch_end_pans_pivot() {
        let options = ControllerOptions {
            reset: crate::options::PoseOptions {
                rotation: [0.0; 3],
                position: [0.0; 3],
                distance: 6.0,
            },
            ..ControllerOptions::default()
        };
        let mut c = OrbitController::new(&options);
        c.handle_gesture(pan(GesturePhase::Began, 2, 0.0, 0.0));
        c.handle_gesture(pan(GesturePhase::Ended, 0, 100.0, 0.0));
        let p = c.target().position;
        assert!((p - Vec3::new(-1.0, 0.0, 0.0)).length() < EPSILON, "{p}");
        assert!(c.gestures.pan.is_none());
    }

    #[test]
    fn pan_with_three_touches_is_ignored() {
        let mut c = OrbitController::default();
        let before = *c.target();
        c.handle_gesture(pan(GesturePhase::Began, 3, 0.0, 0.0));
        c.handle_gesture(pan(GesturePhase::Changed, 3, 300.0, 300.0));
        assert_eq!(*c.target(), before);
    }

    #[test]
    fn double_tap_respects_reset_flag() {
        let mut c = OrbitController::default();
        c.set_target_distance(42.0);
        c.set_target_position(Vec3::new(1.0, 2.0, 3.0));
        c.reset_enabled = false;
        let before = *c.target();
        c.handle_gesture(GestureEvent::DoubleTap);
        assert_eq!(*c.target(), before);

        c.reset_enabled = true;
        c.handle_gesture(GestureEvent::DoubleTap);
        let (t, r) = (c.target(), c.reset_pose());
        assert_eq!(t.distance.to_bits(), r.distance.to_bits());
        assert_eq!(t.rotation.to_array().map(f32::to_bits), r.rotation.to_array().map(f32::to_bits));
        assert_eq!(t.position.to_array().map(f32::to_bits), r.position.to_array().map(f32::to_bits));
    }

    #[test]
    fn update_converges_monotonically() {
        let mut c = OrbitController::default();
        c.set_target_distance(2.0);
        c.set_target_position(Vec3::new(4.0, 0.0, 0.0));
        let mut last_gap = f32::INFINITY;
        let mut time = 0.0;
        for _ in 0..20 {
            time += 0.016;
            c.update(time);
            let gap = (c.current().distance - 2.0).abs();
            assert!(gap <= last_gap);
            assert!(c.current().distance >= 2.0);
            last_gap = gap;
        }
        assert!(last_gap < 1.0);
        c.update(time + 0.1);
        assert_eq!(c.current().distance, 2.0);
        assert_eq!(c.current().position, Vec3::new(4.0, 0.0, 0.0));
    }

    #[test]
    fn repeated_timestamp_is_idempotent() {
        let mut c = OrbitController::default();
        c.update(0.5);
        c.set_target_distance(20.0);
        c.update(0.5);
        c.update(0.5);
        assert_eq!(c.current().distance, 10.0);
    }

    #[test]
    fn backwards_time_leaves_pose() {
        let mut c = OrbitController::default();
        c.update(2.0);
        c.set_target_distance(20.0);
        c.update(1.0);
        assert_eq!(c.current().distance, 10.0);
    }

    #[test]
    fn disabled_channels_stay_frozen() {
        let mut c = OrbitController::default();
        c.orbit_enabled = false;
        c.pan_enabled = false;
        c.zoom_enabled = false;
        let frozen = *c.current();
        c.set_target_rotation(Vec3::ONE);
        c.set_target_position(Vec3::ONE);
        c.set_target_distance(1.0);
        c.update(1.0);
        c.update(2.0);
        assert_eq!(*c.current(), frozen);

        c.zoom_enabled = true;
        c.update(3.0);
        assert_eq!(c.current().distance, 1.0);
        assert_eq!(c.current().rotation, frozen.rotation);
        assert_eq!(c.current().position, frozen.position);
    }

    #[test]
    fn commands_drive_target_and_snap() {
        let mut c = OrbitController::default();
        c.execute(CameraCommand::SetTargetPosition(Vec3::Y));
        c.execute(CameraCommand::SetTargetDistance(3.0));
        c.execute(CameraCommand::SetTargetRotation(Vec3::ZERO));
        assert_ne!(c.current(), c.target());
        c.execute(CameraCommand::SnapToTarget);
        assert_eq!(c.current(), c.target());
        c.execute(CameraCommand::Reset);
        assert_eq!(c.target(), c.reset_pose());
    }

    #[test]
    fn fit_to_points_centers_and_backs_off() {
        let mut c = OrbitController::default();
        c.fit_to_points(&[Vec3::new(-2.0, 0.0, 0.0), Vec3::new(2.0, 0.0, 0.0)]);
        assert_eq!(c.target().position, Vec3::ZERO);
        let expected = 2.0 / (45.0_f32.to_radians() / 2.0).tan() * 1.5;
        assert!((c.target().distance - expected).abs() < EPSILON);

        let before = *c.target();
        c.fit_to_points(&[]);
        assert_eq!(*c.target(), before);
    }

    #[test]
    fn uniform_eye_matches_current_pose() {
        let c = OrbitController::default();
        let eye = Vec3::from_array(c.uniform().position);
        assert!((eye - c.current().eye()).length() < 1e-4);
    }

    #[test]
    fn began_pan_applies_travel_past_slop() {
        let mut c = OrbitController::default();
        let start = c.target().rotation;
        c.handle_gesture(pan(GesturePhase::Began, 1, 50.0, 0.0));
        let rot = c.target().rotation;
        assert!((rot.y - (start.y - 50.0 / 400.0)).abs() < EPSILON);
    }

    #[test]
    fn fit_to_single_point_keeps_camera_usable() {
        let mut c = OrbitController::default();
        c.fit_to_points(&[Vec3::new(1.0, 2.0, 3.0)]);
        assert_eq!(c.target().position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(c.target().distance, 1.0);
        c.update(1.0);

        c.handle_gesture(pinch(GesturePhase::Began, 1.0));
        c.handle_gesture(pinch(GesturePhase::Changed, 0.25));
        assert_eq!(c.target().distance, 4.0);

        let before = c.target().position;
        c.handle_gesture(pan(GesturePhase::Began, 2, 0.0, 0.0));
        c.handle_gesture(pan(GesturePhase::Changed, 2, 300.0, 300.0));
        assert!((c.target().position - before).length() > 0.0);
    }

    #[test]
    fn recognized_touches_have_no_jump_across_finger_changes() {
        use crate::input::{TouchEvent, TouchPhase, TouchRecognizer};

        let mut rec = TouchRecognizer::default();
        let mut c = OrbitController::default();
        let mut feed = |c: &mut OrbitController, id, phase, x, y| {
            for gesture in rec.handle_touch(TouchEvent {
                id,
                phase,
                x,
                y,
                time: 0.0,
            }) {
                c.handle_gesture(gesture);
            }
        };

        feed(&mut c, 1, TouchPhase::Started, 0.0, 0.0);
        feed(&mut c, 1, TouchPhase::Moved, 50.0, 0.0);
        feed(&mut c, 1, TouchPhase::Moved, 80.0, 0.0);
        let orbiting = *c.target();
        assert_ne!(orbiting.rotation, c.reset_pose().rotation);

        // 1 → 2 fingers.
        feed(&mut c, 2, TouchPhase::Started, 200.0, 0.0);
        assert_eq!(*c.target(), orbiting);

        // 2 → 1 finger.
        feed(&mut c, 2, TouchPhase::Ended, 200.0, 0.0);
        assert_eq!(*c.target(), orbiting);

        feed(&mut c, 1, TouchPhase::Moved, 100.0, 0.0);
        let moved = *c.target();
        assert!((moved.rotation.y - (orbiting.rotation.y - 20.0 / 400.0)).abs() < EPSILON);
        assert_eq!(moved.position, orbiting.position);

        // 1 → 0 fingers.
        feed(&mut c, 1, TouchPhase::Ended, 100.0, 0.0);
        assert_eq!(*c.target(), moved);
    }
}
