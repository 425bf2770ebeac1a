//! # Scene Engine
//!
//! A procedural point/line scene engine. Scenes are described declaratively,
//! either object by object or as parametric patterns, expanded into points and
//! line segments, grouped, and animated by simple closed-form motion models.
//!
//! ## Features
//!
//! - **Patterns**: Grid, circle, cube, sphere, and line layouts
//! - **Behaviors**: Static, rotation, translation, and orbit motion
//! - **Groups**: Index ranges, spatial regions, or explicit member lists
//! - **Documents**: JSON, RON, or TOML scene files
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use scene_engine::prelude::*;
//!
//! struct Quiet;
//!
//! impl FrameSink for Quiet {
//!     fn present(&mut self, _frame: &FrameInfo, _scene: &Scene) -> Result<(), Box<dyn std::error::Error>> {
//!         Ok(())
//!     }
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let document = SceneDocument::load_from_file("scenes/pattern_showcase.json")?;
//!     let mut scene = load_scene(&document)?;
//!     let mut animation = AnimationLoop::default();
//!     for _ in 0..60 {
//!         animation.run_frame(&mut scene, &mut Quiet)?;
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::cast_precision_loss)]

pub mod core;
pub mod config;
pub mod error;
pub mod foundation;

pub mod animation;
pub mod behavior;
pub mod group;
pub mod pattern;
pub mod primitive;
pub mod scene;

#[cfg(test)]
mod tests;

pub use error::{SceneError, SceneResult};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        SceneError, SceneResult,
        animation::{tick, AnimationLoop, FrameInfo, FrameSink},
        behavior::{Behavior, BehaviorFactory, BehaviorKind, Motion},
        config::FileFormat,
        core::config::{AnimationConfig, Config, EngineConfig},
        foundation::{
            math::{Quat, Transform, Vec3},
            time::{Stopwatch, Timer},
        },
        group::{GroupResolver, GroupSpec},
        pattern::{Pattern, Placement},
        primitive::{Color, Line, ObjectFactory, ObjectType, Point, Primitive},
        scene::{load_scene, load_scene_with_rng, ObjectRegistry, Scene, SceneDocument},
    };
}
