use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Gestures", inline)]
#[serde(default)]
/// Thresholds for the built-in touch recognizer.
pub struct GestureOptions {
    /// Finger travel in pixels before a touch counts as a drag.
    #[schemars(title = "Tap Slop", range(min = 1.0, max = 50.0), extend("step" = 1.0))]
    pub tap_slop: f32,
    /// Maximum seconds between the two taps of a double-tap.
    #[schemars(title = "Double-Tap Interval", range(min = 0.1, max = 1.0), extend("step" = 0.05))]
    pub double_tap_interval: f64,
    /// Maximum pixels between the two taps of a double-tap.
    #[schemars(skip)]
    pub double_tap_distance: f32,
    /// Fingers tracked at once; extra touches are ignored.
    #[schemars(skip)]
    pub max_touches: u32,
}

impl Default for GestureOptions {
    fn default() -> Self {
        Self {
            tap_slop: 10.0,
            double_tap_interval: 0.3,
            double_tap_distance: 40.0,
            max_touches: 2,
        }
    }
}
