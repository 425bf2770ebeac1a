//! # Core Engine Module
//!
//! Shared configuration used by the loader and by the drivers that run the
//! animation loop.
//!
//! ## Organization
//!
//! - **Config**: Engine configuration (animation, logging, random source)

pub mod config;

// Re-export commonly used config types
pub use config::{
    AnimationConfig,
    EngineConfig,
    LoggingConfig,
    RandomConfig,
    Config,
    ConfigError,
};
