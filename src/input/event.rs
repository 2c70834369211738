use glam::Vec2;

/// Platform-agnostic gesture events.
///
/// These come either from a host toolkit's own recognizers or from
/// [`TouchRecognizer`](super::TouchRecognizer), and are fed into
/// [`OrbitController::handle_gesture`](crate::camera::controller::OrbitController::handle_gesture).
///
/// # Example
///
/// ```ignore
/// controller.handle_gesture(GestureEvent::Pinch {
///     phase: GesturePhase::Changed,
///     scale: 1.25,
/// });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// Continuous drag with one or more fingers.
    Pan {
        /// Lifecycle stage of the pan.
        phase: GesturePhase,
        /// Number of fingers currently down (0 on the final callback).
        touches: u32,
        /// Cumulative translation in pixels (y down), measured from where the
        /// fingers first went down. `Began` may already carry the travel
        /// that crossed the recognizer's slop threshold.
        translation: Vec2,
    },
    /// Two-finger spread / squeeze.
    Pinch {
        /// Lifecycle stage of the pinch.
        phase: GesturePhase,
        /// Finger spread relative to the spread at pinch start.
        scale: f32,
    },
    /// Two quick taps in the same spot.
    DoubleTap,
}

/// Discrete lifecycle stage of a continuous gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GesturePhase {
    /// First callback of the gesture.
    Began,
    /// Gesture values updated.
    Changed,
    /// Fingers lifted normally.
    Ended,
    /// Host aborted the gesture.
    Cancelled,
}

impl GesturePhase {
    /// Whether this is the last callback of the gesture.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Ended | Self::Cancelled)
    }
}

/// Recognizer a host view must install for the controller to receive
/// gestures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureKind {
    /// Pan recognizer accepting up to `max_touches` fingers.
    Pan {
        /// Maximum fingers the recognizer should track.
        max_touches: u32,
    },
    /// Pinch recognizer.
    Pinch,
    /// Double-tap recognizer.
    DoubleTap,
}

/// A renderable surface that can host gesture recognizers.
///
/// Implemented by the embedding application for its view type.
/// [`OrbitController::attach`](crate::camera::controller::OrbitController::attach)
/// calls [`add_recognizer`](Self::add_recognizer) once per gesture it needs.
pub trait GestureHost {
    /// Install a recognizer of the given kind on this surface.
    fn add_recognizer(&mut self, kind: GestureKind);
}
