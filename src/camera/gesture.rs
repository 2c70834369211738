//! In-progress gesture captures.
//!
//! A capture holds the values snapped when a gesture (or a touch-count
//! transition inside one) starts. Dropping the capture is what re-arms it, so
//! every transition point is a single assignment to `Option`.

use glam::{Vec2, Vec3};

/// Snapshot taken for an in-progress pan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanCapture {
    /// One-finger orbit, relative to the rotation at capture time.
    Orbit {
        /// Target rotation when the orbit was armed.
        start_rotation: Vec3,
        /// Pan translation when the orbit was armed.
        start_translation: Vec2,
    },
    /// Pivot pan, applied incrementally per callback.
    Pivot {
        /// Pan translation seen on the previous callback.
        last_translation: Vec2,
    },
}

/// Snapshot taken when a pinch starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchCapture {
    /// Current camera distance when the pinch began.
    pub start_distance: f32,
}

/// All gesture captures owned by the controller.
///
/// Pan and pinch are tracked separately because hosts recognize them at the
/// same time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureState {
    /// Active pan capture, if any.
    pub pan: Option<PanCapture>,
    /// Active pinch capture, if any.
    pub pinch: Option<PinchCapture>,
}

impl GestureState {
    /// Orbit capture for this callback, arming a fresh one at `rotation` and
    /// `arm_at` if the current capture is missing or is a pivot pan.
    pub fn orbit(&mut self, rotation: Vec3, arm_at: Vec2) -> (Vec3, Vec2) {
        match self.pan {
            Some(PanCapture::Orbit {
                start_rotation,
                start_translation,
            }) => (start_rotation, start_translation),
            _ => {
                self.pan = Some(PanCapture::Orbit {
                    start_rotation: rotation,
                    start_translation: arm_at,
                });
                (rotation, arm_at)
            }
        }
    }

    /// Pivot-pan delta since the previous callback. If the current capture
    /// is missing or is an orbit, the delta is measured from `arm_at`.
    pub fn pivot_delta(&mut self, translation: Vec2, arm_at: Vec2) -> Vec2 {
        let last = match self.pan {
            Some(PanCapture::Pivot { last_translation }) => last_translation,
            _ => arm_at,
        };
        self.pan = Some(PanCapture::Pivot {
            last_translation: translation,
        });
        translation - last
    }

    /// Pinch start distance, arming a capture at `current_distance` if none
    /// exists yet.
    pub fn pinch_start(&mut self, current_distance: f32) -> f32 {
        self.pinch
            .get_or_insert(PinchCapture {
                start_distance: current_distance,
            })
            .start_distance
    }

    /// Drop every capture.
    pub fn clear(&mut self) {
        self.pan = None;
        self.pinch = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orbit_capture_is_sticky() {
        let mut state = GestureState::default();
        let first = state.orbit(Vec3::X, Vec2::ZERO);
        let second = state.orbit(Vec3::Y, Vec2::ONE);
        assert_eq!(first, (Vec3::X, Vec2::ZERO));
        assert_eq!(second, first);
    }

    #[test]
    fn pivot_rearms_orbit_capture() {
        let mut state = GestureState::default();
        let _ = state.orbit(Vec3::X, Vec2::ZERO);
        let delta = state.pivot_delta(Vec2::new(30.0, 0.0), Vec2::new(30.0, 0.0));
        assert_eq!(delta, Vec2::ZERO);
        let (rot, t0) = state.orbit(Vec3::Z, Vec2::new(40.0, 0.0));
        assert_eq!(rot, Vec3::Z);
        assert_eq!(t0, Vec2::new(40.0, 0.0));
    }

    #[test]
    fn pivot_delta_is_incremental() {
        let mut state = GestureState::default();
        assert_eq!(state.pivot_delta(Vec2::new(5.0, 5.0), Vec2::ZERO), Vec2::new(5.0, 5.0));
        assert_eq!(state.pivot_delta(Vec2::new(8.0, 4.0), Vec2::ZERO), Vec2::new(3.0, -1.0));
        assert_eq!(state.pivot_delta(Vec2::new(8.0, 4.0), Vec2::ZERO), Vec2::ZERO);
    }

    #[test]
    fn pinch_start_captured_once() {
        let mut state = GestureState::default();
        assert_eq!(state.pinch_start(10.0), 10.0);
        assert_eq!(state.pinch_start(3.0), 10.0);
        state.clear();
        assert_eq!(state.pinch_start(3.0), 3.0);
    }
}
