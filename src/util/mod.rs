//! Shared utilities: damping math and the frame clock.

pub mod damping;
/// Monotonic frame timestamps.
pub mod frame_clock;

pub use frame_clock::FrameClock;
