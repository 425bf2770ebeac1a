//! Line primitive
//!
//! A line is the canonical segment from the anchor along local +Z, rotated by
//! its orientation. Width is carried as the X scale for the renderer.

use crate::behavior::Behavior;
use crate::foundation::math::{Quat, Transform, Vec3};
use super::Color;

/// Directed segment anchored at a position
#[derive(Debug, Clone)]
pub struct Line {
    transform: Transform,
    width: f32,
    length: f32,
    color: Color,
    behavior: Behavior,
}

impl Line {
    /// Create a line, static at `position` unless a behavior is given
    pub fn new(
        position: Vec3,
        orientation: Quat,
        width: f32,
        length: f32,
        color: Color,
        behavior: Option<Behavior>,
    ) -> Self {
        Self {
            transform: Transform::from_position_rotation(position, orientation)
                .with_scale(Vec3::new(width, 1.0, 1.0)),
            width,
            length,
            color,
            behavior: behavior.unwrap_or_else(|| Behavior::stationary(position)),
        }
    }

    /// Advance the behavior and copy its position into the transform
    ///
    /// Orientation is left untouched.
    pub fn update(&mut self, delta_time: f32) {
        self.transform.position = self.behavior.update(delta_time);
    }

    /// Current transform
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Swap the behavior; takes effect on the next update
    pub fn set_behavior(&mut self, behavior: Behavior) {
        self.behavior = behavior;
    }

    /// Active behavior
    pub fn behavior(&self) -> &Behavior {
        &self.behavior
    }

    /// Unit direction from start to end in world space
    pub fn direction(&self) -> Vec3 {
        self.transform.rotation * Vec3::z()
    }

    /// World-space start and end points
    pub fn endpoints(&self) -> (Vec3, Vec3) {
        let start = self.transform.position;
        (start, start + self.direction() * self.length)
    }

    /// Line width
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Segment length
    pub fn length(&self) -> f32 {
        self.length
    }

    /// Color string
    pub fn color(&self) -> &Color {
        &self.color
    }
}
