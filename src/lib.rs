// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Gesture-driven orbit camera with damped per-frame interpolation.
//!
//! Multi-touch gestures (pan, pinch, double-tap) write a *target* pose. Each
//! render frame the controller moves its *current* pose a time-scaled fraction
//! of the way toward the target, independently for orbit rotation, pivot
//! position and distance, so every move the user sees is smoothed.
//!
//! # Key entry points
//!
//! - [`camera::OrbitController`] - gesture mapping and the damped update
//! - [`camera::RigNodes`] - orbit/camera transforms to insert in a scene
//! - [`input::TouchRecognizer`] - raw touches → gestures for hosts without
//!   native recognizers
//! - [`options::Options`] - runtime configuration with TOML presets
//!
//! # Frame loop
//!
//! ```ignore
//! let mut clock = FrameClock::new();
//! let mut controller = OrbitController::from_options(&options);
//! let mut touches = TouchRecognizer::new(options.gestures.clone());
//!
//! for gesture in touches.handle_touch(touch_event) {
//!     controller.handle_gesture(gesture);
//! }
//! controller.update(clock.now());
//! let uniform = controller.uniform();
//! ```

pub mod camera;
pub mod error;
pub mod input;
pub mod options;
pub mod util;

pub use camera::{CameraCommand, OrbitController, Pose, RigNodes};
pub use error::OrbitError;
pub use input::{GestureEvent, GesturePhase, TouchRecognizer};
pub use options::Options;
pub use util::FrameClock;
