//! Scene demo application
//!
//! Loads a scene document, animates it headlessly, and logs what a renderer
//! would draw.
//!
//! ```text
//! scene_demo [scene-file] [config-file]
//! ```

use std::time::Duration;

use scene_engine::animation::{AnimationLoop, FrameInfo, FrameSink};
use scene_engine::core::config::{AnimationConfig, Config, ConfigError, EngineConfig};
use scene_engine::foundation::logging;
use scene_engine::foundation::math::Vec3;
use scene_engine::foundation::time::Timer;
use scene_engine::scene::{load_scene_with_rng, Scene, SceneDocument};
use scene_engine::SceneError;

const DEFAULT_SCENE: &str = "scenes/pattern_showcase.json";
const DEFAULT_CONFIG: &str = "scene_demo.toml";
const SUMMARY_INTERVAL: u64 = 60;

#[derive(thiserror::Error, Debug)]
enum DemoError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Scene(#[from] SceneError),
}

/// Logs per-object transforms and periodic group centroids
struct LoggingSink {
    summary_interval: u64,
    group_ids: Vec<String>,
}

impl LoggingSink {
    fn new(scene: &Scene, summary_interval: u64) -> Self {
        let mut group_ids: Vec<String> = scene.groups().iter().map(|(id, _)| id.to_string()).collect();
        group_ids.sort();
        Self {
            summary_interval,
            group_ids,
        }
    }

    fn centroid(scene: &Scene, group_id: &str) -> Option<Vec3> {
        let members = scene.group_objects(group_id);
        if members.is_empty() {
            return None;
        }
        let sum: Vec3 = members.iter().map(|primitive| primitive.position()).sum();
        Some(sum / members.len() as f32)
    }
}

impl FrameSink for LoggingSink {
    fn present(&mut self, frame: &FrameInfo, scene: &Scene) -> Result<(), Box<dyn std::error::Error>> {
        if log::log_enabled!(log::Level::Trace) {
            for (id, primitive) in scene.objects().iter() {
                let transform = primitive.transform();
                log::trace!(
                    "frame {} {} {}: pos=({:.3}, {:.3}, {:.3}) rot={:?}",
                    frame.index,
                    primitive.object_type(),
                    id,
                    transform.position.x,
                    transform.position.y,
                    transform.position.z,
                    transform.rotation.euler_angles()
                );
            }
        }

        if frame.index % self.summary_interval == 0 {
            log::info!(
                "Frame {} (t={:.2}s, dt={:.4})",
                frame.index,
                frame.elapsed_time,
                frame.delta_time
            );
            for group_id in &self.group_ids {
                match Self::centroid(scene, group_id) {
                    Some(c) => log::info!(
                        "  group {:<16} {:>4} members, centroid ({:.3}, {:.3}, {:.3})",
                        group_id,
                        scene.group_members(group_id).len(),
                        c.x,
                        c.y,
                        c.z
                    ),
                    None => log::info!("  group {:<16} no registered members", group_id),
                }
            }
        }
        Ok(())
    }
}

/// `max_frames` of `None` never runs out
fn has_frames_left(config: &AnimationConfig, frames_run: u64) -> bool {
    config.max_frames.map_or(true, |max_frames| frames_run < max_frames)
}

fn run() -> Result<(), DemoError> {
    let mut args = std::env::args().skip(1);
    let scene_path = args.next().unwrap_or_else(|| DEFAULT_SCENE.to_string());
    let config_path = args.next().unwrap_or_else(|| DEFAULT_CONFIG.to_string());

    let config = EngineConfig::load_or_default(&config_path)?;
    config.validate().map_err(ConfigError::Invalid)?;

    let document = SceneDocument::load_from_file(&scene_path)?;
    let level = document
        .debug
        .as_ref()
        .and_then(|debug| debug.log_level.clone())
        .unwrap_or_else(|| config.logging.level.clone());
    logging::init_with_level(&level);

    log::info!("Starting scene demo with {}", scene_path);
    let mut rng = config.random.rng();
    let mut scene = load_scene_with_rng(&document, &mut rng)?;

    if let Some(environment) = scene.environment() {
        log::info!("Axis helper: {}", if environment.axis { "on" } else { "off" });
        if let Some(camera) = &environment.camera {
            log::info!("Camera ({}) at {:?}, looking at the origin", camera.kind, camera.position);
        }
    }

    let animation_config = &config.animation;
    let mut animation = AnimationLoop::from_config(animation_config);
    let mut sink = LoggingSink::new(&scene, SUMMARY_INTERVAL);
    let mut timer = Timer::new();

    while has_frames_left(animation_config, animation.frame_count()) {
        if animation_config.use_measured_delta {
            std::thread::sleep(Duration::from_secs_f32(animation_config.nominal_delta_time));
            let delta_time = timer.tick();
            animation.run_frame_with_delta(&mut scene, &mut sink, delta_time)?;
        } else {
            animation.run_frame(&mut scene, &mut sink)?;
        }
    }

    log::info!(
        "Finished {} frames, {:.2}s of animation time",
        animation.frame_count(),
        animation.elapsed_time()
    );
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    run().map_err(|e| {
        // Failures before the scene is read leave no logger installed.
        logging::init();
        log::error!("Scene demo failed: {}", e);
        e.into()
    })
}
