use web_time::Instant;

/// Monotonic timestamp source for [`OrbitController::update`].
///
/// [`OrbitController::update`]: crate::camera::controller::OrbitController::update
pub struct FrameClock {
    /// Instant the clock was created; timestamps count from here.
    origin: Instant,
    /// Last timestamp handed out, in seconds.
    last: f64,
}

impl FrameClock {
    /// Start a new clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            last: 0.0,
        }
    }

    /// Seconds since the clock was created.
    ///
    /// Never returns a value smaller than a previous call.
    pub fn now(&mut self) -> f64 {
        let t = self.origin.elapsed().as_secs_f64();
        self.last = self.last.max(t);
        self.last
    }

    /// The most recent timestamp returned by [`now`](Self::now).
    #[must_use]
    pub fn last(&self) -> f64 {
        self.last
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_near_zero_and_is_monotonic() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.last(), 0.0);
        let a = clock.now();
        let b = clock.now();
        assert!(a >= 0.0);
        assert!(b >= a);
        assert_eq!(clock.last(), b);
    }
}
