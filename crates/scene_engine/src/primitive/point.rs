//! Point primitive

use crate::behavior::Behavior;
use crate::foundation::math::{Transform, Vec3};
use super::Color;

/// Zero-length marker at a position
#[derive(Debug, Clone)]
pub struct Point {
    transform: Transform,
    size: f32,
    color: Color,
    behavior: Behavior,
}

impl Point {
    /// Create a point, static at `position` unless a behavior is given
    pub fn new(position: Vec3, size: f32, color: Color, behavior: Option<Behavior>) -> Self {
        Self {
            transform: Transform::from_position(position),
            size,
            color,
            behavior: behavior.unwrap_or_else(|| Behavior::stationary(position)),
        }
    }

    /// Advance the behavior and copy its position into the transform
    pub fn update(&mut self, delta_time: f32) {
        self.transform.position = self.behavior.update(delta_time);
    }

    /// Current transform
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Mutable transform, for applying a loaded orientation
    pub(crate) fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    /// Swap the behavior; takes effect on the next update
    pub fn set_behavior(&mut self, behavior: Behavior) {
        self.behavior = behavior;
    }

    /// Active behavior
    pub fn behavior(&self) -> &Behavior {
        &self.behavior
    }

    /// Marker size
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Color string
    pub fn color(&self) -> &Color {
        &self.color
    }
}
