//! # Engine Configuration
//!
//! Concrete configuration for the scene engine and the drivers built on it.
//! Loaded through the [`Config`] trait from TOML or RON.
//!
//! ## Configuration Categories
//!
//! - **Animation**: Nominal tick delta, measured-delta mode, frame limit
//! - **Logging**: Default log filter
//! - **Random**: Optional seed for reproducible behavior parameters

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Serialize, Deserialize};

pub use crate::config::{Config, ConfigError};

/// Nominal animation step, roughly one frame at 60 FPS
pub const DEFAULT_DELTA_TIME: f32 = 0.016;

/// # Animation Configuration
///
/// Controls how the driver advances the animation loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Fixed step handed to every behavior per tick, in seconds
    pub nominal_delta_time: f32,
    /// Use the measured wall-clock delta instead of the nominal step
    pub use_measured_delta: bool,
    /// Stop after this many frames (`None` runs until the driver stops)
    pub max_frames: Option<u64>,
}

impl AnimationConfig {
    /// Create a new animation configuration
    pub fn new() -> Self {
        Self {
            nominal_delta_time: DEFAULT_DELTA_TIME,
            use_measured_delta: false,
            max_frames: None,
        }
    }

    /// Set the nominal delta
    pub fn with_delta_time(mut self, delta_time: f32) -> Self {
        self.nominal_delta_time = delta_time;
        self
    }

    /// Switch measured-delta mode on or off
    pub fn with_measured_delta(mut self, enabled: bool) -> Self {
        self.use_measured_delta = enabled;
        self
    }

    /// Limit the number of frames
    pub fn with_max_frames(mut self, frames: u64) -> Self {
        self.max_frames = Some(frames);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !self.nominal_delta_time.is_finite() || self.nominal_delta_time <= 0.0 {
            return Err(format!(
                "Nominal delta time must be positive, got {}",
                self.nominal_delta_time
            ));
        }
        Ok(())
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// # Logging Configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default `env_logger` filter, overridden by `RUST_LOG`
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// # Random Configuration
///
/// Behaviors draw their parameters at construction. Pinning a seed makes
/// two loads of the same scene identical.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomConfig {
    /// Seed for the loader's random source (`None` seeds from entropy)
    pub seed: Option<u64>,
}

impl RandomConfig {
    /// Build the random source described by this configuration
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// # Complete Engine Configuration
///
/// Top-level configuration that drivers load at startup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Animation loop settings
    pub animation: AnimationConfig,
    /// Logging settings
    pub logging: LoggingConfig,
    /// Random source settings
    pub random: RandomConfig,
}

impl EngineConfig {
    /// Create a new engine configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.logging.level = level.into();
        self
    }

    /// Pin the random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.random.seed = Some(seed);
        self
    }

    /// Replace the animation settings
    pub fn with_animation(mut self, animation: AnimationConfig) -> Self {
        self.animation = animation;
        self
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), String> {
        self.animation.validate()?;
        if self.logging.level.trim().is_empty() {
            return Err("Log level cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Config for EngineConfig {}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_defaults_are_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.animation.nominal_delta_time, DEFAULT_DELTA_TIME);
        assert!(!config.animation.use_measured_delta);
        assert_eq!(config.logging.level, "info");
        assert!(config.random.seed.is_none());
    }

    #[test]
    fn test_rejects_non_positive_delta() {
        let config = EngineConfig::new()
            .with_animation(AnimationConfig::new().with_delta_time(0.0));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: EngineConfig = toml::from_str(
            "[animation]\nmax_frames = 120\n\n[random]\nseed = 7\n",
        )
        .unwrap();
        assert_eq!(config.animation.max_frames, Some(120));
        assert_eq!(config.animation.nominal_delta_time, DEFAULT_DELTA_TIME);
        assert_eq!(config.random.seed, Some(7));
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_ron_round_trip_keeps_seed() {
        let config = EngineConfig::new().with_seed(42).with_log_level("debug");
        let text = ron::ser::to_string(&config).unwrap();
        let parsed: EngineConfig = ron::from_str(&text).unwrap();
        assert_eq!(parsed.random.seed, Some(42));
        assert_eq!(parsed.logging.level, "debug");
    }

    #[test]
    fn test_save_then_load_toml() {
        let path = std::env::temp_dir().join(format!("scene_engine_config_{}.toml", std::process::id()));
        let path = path.to_string_lossy().into_owned();
        let config = EngineConfig::new().with_seed(9).with_animation(
            AnimationConfig::new()
                .with_delta_time(0.02)
                .with_measured_delta(true)
                .with_max_frames(30),
        );

        config.save_to_file(&path).unwrap();
        let loaded = EngineConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded.random.seed, Some(9));
        assert_eq!(loaded.animation.nominal_delta_time, 0.02);
        assert!(loaded.animation.use_measured_delta);
        assert_eq!(loaded.animation.max_frames, Some(30));
    }

    #[test]
    fn test_save_rejects_unknown_extension() {
        let result = EngineConfig::new().save_to_file("engine.yaml");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let random = RandomConfig { seed: Some(3) };
        let a: f32 = random.rng().gen();
        let b: f32 = random.rng().gen();
        assert_eq!(a, b);
    }
}
