//! # Core Engine Module
//!
//! Shared configuration for the engine subsystems.

pub mod config;

pub use config::{
    AccelerometerConfig,
    Config,
    ConfigError,
    EngineConfig,
    LightingConfig,
    GRAVITY_EARTH,
};
