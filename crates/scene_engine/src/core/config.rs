//! # Engine Configuration
//!
//! Configuration structures for the scene and platform subsystems. Every
//! struct is serializable and fills missing fields with defaults, so a config
//! file only needs to name the values it changes.
//!
//! ```toml
//! log_level = "debug"
//!
//! [lighting]
//! max_point_lights = 4
//!
//! [accelerometer]
//! standard_gravity = 9.81
//! ```

use serde::{Serialize, Deserialize};

pub use crate::config::{Config, ConfigError, ConfigFormat};

/// Standard gravity in m/s², the unit raw accelerometer samples are divided by
pub const GRAVITY_EARTH: f32 = 9.806_65;

/// # Lighting Configuration
///
/// Per-type limits the renderer's light shaders support, and the intensity
/// newly created lights start with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightingConfig {
    /// Maximum directional lights handed to the renderer
    pub max_directional_lights: usize,
    /// Maximum point lights handed to the renderer
    pub max_point_lights: usize,
    /// Maximum spot lights handed to the renderer
    pub max_spot_lights: usize,
    /// Intensity assigned to newly created lights
    pub default_intensity: f32,
}

impl LightingConfig {
    /// Set all three per-type limits
    pub fn with_limits(mut self, directional: usize, point: usize, spot: usize) -> Self {
        self.max_directional_lights = directional;
        self.max_point_lights = point;
        self.max_spot_lights = spot;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(self.default_intensity >= 0.0) {
            return Err(format!(
                "Default light intensity must be non-negative, got {}",
                self.default_intensity
            ));
        }
        Ok(())
    }
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            max_directional_lights: 1,
            max_point_lights: 1,
            max_spot_lights: 1,
            default_intensity: 1.0,
        }
    }
}

/// # Accelerometer Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccelerometerConfig {
    /// Divisor converting raw m/s² samples to gravity units
    pub standard_gravity: f32,
}

impl AccelerometerConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(self.standard_gravity > 0.0) {
            return Err(format!("Standard gravity must be positive, got {}", self.standard_gravity));
        }
        Ok(())
    }
}

impl Default for AccelerometerConfig {
    fn default() -> Self {
        Self {
            standard_gravity: GRAVITY_EARTH,
        }
    }
}

/// # Engine Configuration
///
/// Top-level configuration: logging, debug features and the subsystem
/// sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Log level for the engine
    pub log_level: String,
    /// Whether to enable debug features
    pub debug_mode: bool,
    /// Scene lighting limits
    pub lighting: LightingConfig,
    /// Accelerometer conversion settings
    pub accelerometer: AccelerometerConfig,
}

impl EngineConfig {
    /// Create a new engine configuration
    pub fn new() -> Self {
        Self {
            log_level: "info".to_string(),
            debug_mode: cfg!(debug_assertions),
            lighting: LightingConfig::default(),
            accelerometer: AccelerometerConfig::default(),
        }
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Enable debug mode
    pub fn with_debug(mut self, enabled: bool) -> Self {
        self.debug_mode = enabled;
        self
    }

    /// Set the lighting section
    pub fn with_lighting(mut self, lighting: LightingConfig) -> Self {
        self.lighting = lighting;
        self
    }

    /// Validate every section
    pub fn validate(&self) -> Result<(), String> {
        if self.log_level.is_empty() {
            return Err("Log level cannot be empty".to_string());
        }
        self.lighting.validate()?;
        self.accelerometer.validate()?;
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Config for EngineConfig {}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults_match_shader_limits() {
        let config = EngineConfig::default();
        assert_eq!(config.lighting.max_directional_lights, 1);
        assert_eq!(config.lighting.max_point_lights, 1);
        assert_eq!(config.lighting.max_spot_lights, 1);
        assert_relative_eq!(config.accelerometer.standard_gravity, 9.80665);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let text = r#"
            log_level = "debug"

            [lighting]
            max_point_lights = 4
        "#;

        let config = EngineConfig::from_str_as(text, ConfigFormat::Toml).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.lighting.max_point_lights, 4);
        assert_eq!(config.lighting.max_spot_lights, 1);
        assert_relative_eq!(config.accelerometer.standard_gravity, GRAVITY_EARTH);
    }

    #[test]
    fn test_ron_section_parses() {
        let text = "(accelerometer: (standard_gravity: 9.81))";
        let config = EngineConfig::from_str_as(text, ConfigFormat::Ron).unwrap();
        assert_relative_eq!(config.accelerometer.standard_gravity, 9.81);
        assert_eq!(config.lighting, LightingConfig::default());
    }

    #[test]
    fn test_save_and_load_file() {
        let file_name = format!("scene_engine_config_{}.toml", std::process::id());
        let path = std::env::temp_dir().join(file_name);
        let config = EngineConfig::new()
            .with_log_level("warn")
            .with_lighting(LightingConfig::default().with_limits(2, 8, 4));

        config.save_to_file(&path).unwrap();
        let loaded = EngineConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("scene_engine_config_does_not_exist.ron");
        let config = EngineConfig::load_or_default(&path).unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_invalid_sections_rejected() {
        let mut config = EngineConfig::default();
        config.accelerometer.standard_gravity = 0.0;
        assert!(config.validate().is_err());

        let mut config = EngineConfig::default();
        config.lighting.default_intensity = -1.0;
        assert!(config.validate().is_err());
    }
}
