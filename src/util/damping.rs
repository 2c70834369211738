//! Exponential approach helpers for per-frame camera smoothing.
//!
//! The camera never jumps to a new pose. Each frame it closes a fraction of
//! the remaining gap, where the fraction grows linearly with elapsed time and
//! saturates at 1 so a long pause lands exactly on the target.

use glam::Vec3;

/// Default approach rate in 1/seconds. A frame of 0.1 s or longer reaches the
/// target in a single step.
pub const DEFAULT_SMOOTHING_RATE: f32 = 10.0;

/// Interpolation weight for a frame of `dt` seconds at the given `rate`.
///
/// Result is clamped to `[0, 1]`; a negative `dt` (clock going backwards)
/// yields 0 and leaves the pose where it is.
#[inline]
#[must_use]
pub fn smoothing_factor(dt: f32, rate: f32) -> f32 {
    (dt * rate).clamp(0.0, 1.0)
}

/// Move `current` toward `target` by `factor` of the remaining gap.
///
/// A factor of 1 or more returns `target` exactly.
#[inline]
#[must_use]
pub fn approach_f32(current: f32, target: f32, factor: f32) -> f32 {
    if factor >= 1.0 {
        return target;
    }
    current + (target - current) * factor
}

/// Component-wise [`approach_f32`] for vectors.
#[inline]
#[must_use]
pub fn approach_vec3(current: Vec3, target: Vec3, factor: f32) -> Vec3 {
    if factor >= 1.0 {
        return target;
    }
    current + (target - current) * factor
}
