//! Input handling: gesture event types and the touch recognizer that turns
//! raw touch points into gestures.

/// Platform-agnostic gesture events and the host registration seam.
pub mod event;
/// Raw touch → gesture recognition.
pub mod touch;

pub use event::{GestureEvent, GestureHost, GestureKind, GesturePhase};
pub use touch::{TouchEvent, TouchPhase, TouchRecognizer};
