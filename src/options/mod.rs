//! Controller, camera, and gesture options with TOML preset support.
//!
//! Everything tweakable about the rig lives here. Options serialize to and
//! from TOML so a host can ship camera presets next to its assets.

mod camera;
mod controller;
mod gestures;

use std::path::Path;

pub use camera::CameraOptions;
pub use controller::{ControllerOptions, PoseOptions};
pub use gestures::GestureOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::OrbitError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Gesture mapping, smoothing, and permissions.
    pub controller: ControllerOptions,
    /// Projection parameters.
    pub camera: CameraOptions,
    /// Touch recognizer thresholds.
    pub gestures: GestureOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, OrbitError> {
        let content = std::fs::read_to_string(path).map_err(OrbitError::Io)?;
        let options = toml::from_str(&content)
            .map_err(|e| OrbitError::OptionsParse(e.to_string()))?;
        log::debug!("loaded camera options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), OrbitError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| OrbitError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(OrbitError::Io)?;
        }
        std::fs::write(path, content).map_err(OrbitError::Io)?;
        log::debug!("saved camera options to {}", path.display());
        Ok(())
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[controller]
zoom_enabled = false

[controller.reset]
distance = 25.0
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert!(!opts.controller.zoom_enabled);
        assert_eq!(opts.controller.reset.distance, 25.0);
        // Everything else should be default
        assert!(opts.controller.orbit_enabled);
        assert_eq!(opts.controller.orbit_pixels_per_radian, 400.0);
        assert_eq!(opts.camera.fovy, 45.0);
        assert_eq!(opts.gestures.max_touches, 2);
    }

    #[test]
    fn default_reset_pose_matches_initial_camera() {
        let pose = ControllerOptions::default().reset.to_pose();
        assert_eq!(pose.distance, 10.0);
        assert_eq!(pose.rotation.x, -std::f32::consts::FRAC_PI_4);
        assert_eq!(pose.rotation.y, -std::f32::consts::FRAC_PI_4);
        assert_eq!(pose.rotation.z, 0.0);
    }

    #[test]
    fn save_load_and_list_presets() {
        let dir = std::env::temp_dir()
            .join(format!("orbit-rig-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.camera.fovy = 60.0;
        opts.save(&dir.join("wide.toml")).unwrap();
        Options::default().save(&dir.join("basic.toml")).unwrap();
        std::fs::write(dir.join("notes.txt"), "ignored").unwrap();

        assert_eq!(Options::list_presets(&dir), vec!["basic", "wide"]);
        let loaded = Options::load(&dir.join("wide.toml")).unwrap();
        assert_eq!(loaded, opts);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn load_reports_parse_errors() {
        let dir = std::env::temp_dir()
            .join(format!("orbit-rig-bad-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.toml");
        std::fs::write(&path, "[camera\nfovy = ").unwrap();
        let err = Options::load(&path).unwrap_err();
        assert!(matches!(err, OrbitError::OptionsParse(_)));
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Options::load(Path::new("/nonexistent/orbit-rig.toml"))
            .unwrap_err();
        assert!(matches!(err, OrbitError::Io(_)));
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("controller"));
        assert!(props.contains_key("camera"));
        assert!(props.contains_key("gestures"));

        let camera = &props["camera"]["properties"];
        assert!(camera.get("fovy").is_some());
        assert!(camera.get("znear").is_none());

        let controller = &props["controller"]["properties"];
        assert!(controller.get("smoothing_rate").is_some());
        assert!(controller.get("reset_enabled").is_some());
    }
}
