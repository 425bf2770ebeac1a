//! Animation loop
//!
//! Single-threaded and cooperative. An external driver calls
//! [`AnimationLoop::run_frame`] once per frame; each call advances every
//! behavior by one step and then hands the scene, read-only, to a
//! [`FrameSink`] for presentation. Nothing here blocks or spawns threads.

use crate::core::config::{AnimationConfig, DEFAULT_DELTA_TIME};
use crate::error::{SceneError, SceneResult};
use crate::scene::{ObjectRegistry, Scene};

/// Advance every registered primitive by `delta_time` seconds
///
/// Update order across primitives is unspecified.
pub fn tick(objects: &mut ObjectRegistry, delta_time: f32) {
    for primitive in objects.primitives_mut() {
        primitive.update(delta_time);
    }
}

/// What a sink is told about the frame it presents
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    /// Zero-based frame index
    pub index: u64,
    /// Delta the behaviors were advanced by
    pub delta_time: f32,
    /// Sum of all deltas so far, this frame included
    pub elapsed_time: f32,
}

/// Presentation collaborator called after every tick
pub trait FrameSink {
    /// Present the scene state of one frame
    fn present(&mut self, frame: &FrameInfo, scene: &Scene) -> Result<(), Box<dyn std::error::Error>>;
}

/// Frame counter and clock around [`tick`]
#[derive(Debug, Clone)]
pub struct AnimationLoop {
    nominal_delta_time: f32,
    frame_count: u64,
    elapsed_time: f32,
}

impl AnimationLoop {
    /// Create a loop stepping by `nominal_delta_time`
    pub fn new(nominal_delta_time: f32) -> Self {
        Self {
            nominal_delta_time,
            frame_count: 0,
            elapsed_time: 0.0,
        }
    }

    /// Create a loop from animation settings
    pub fn from_config(config: &AnimationConfig) -> Self {
        Self::new(config.nominal_delta_time)
    }

    /// Tick by the nominal delta, then present
    pub fn run_frame<S: FrameSink + ?Sized>(&mut self, scene: &mut Scene, sink: &mut S) -> SceneResult<FrameInfo> {
        self.run_frame_with_delta(scene, sink, self.nominal_delta_time)
    }

    /// Tick by a driver-measured delta, then present
    ///
    /// A sink failure is returned after the tick; the frame still counts.
    pub fn run_frame_with_delta<S: FrameSink + ?Sized>(
        &mut self,
        scene: &mut Scene,
        sink: &mut S,
        delta_time: f32,
    ) -> SceneResult<FrameInfo> {
        tick(scene.objects_mut(), delta_time);

        self.elapsed_time += delta_time;
        let frame = FrameInfo {
            index: self.frame_count,
            delta_time,
            elapsed_time: self.elapsed_time,
        };
        self.frame_count += 1;

        sink.present(&frame, scene)
            .map_err(|e| SceneError::Sink(e.to_string()))?;
        Ok(frame)
    }

    /// Frames run so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Sum of all deltas so far
    pub fn elapsed_time(&self) -> f32 {
        self.elapsed_time
    }

    /// Step used by [`AnimationLoop::run_frame`]
    pub fn nominal_delta_time(&self) -> f32 {
        self.nominal_delta_time
    }
}

impl Default for AnimationLoop {
    fn default() -> Self {
        Self::new(DEFAULT_DELTA_TIME)
    }
}
