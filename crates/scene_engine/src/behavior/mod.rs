//! Behavior engine
//!
//! Closed-form motion models driving one primitive each. A [`Behavior`] is
//! plain data: the anchor it started from, where it is now, how long it has
//! been running, and a [`Motion`] variant holding the parameters drawn at
//! construction. [`Behavior::update`] dispatches on the variant.
//!
//! Randomized construction lives in [`BehaviorFactory`].

mod factory;

pub use factory::{BehaviorFactory, BehaviorKind};

use crate::foundation::math::{rotate_about_axis, Vec3};

/// Variant-specific motion parameters, fixed at construction
///
/// `direction` of a translation is the only field that changes afterwards
/// (it flips sign when the object reaches its travel distance).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// Stays where it was placed
    Static,

    /// Rotates the world-space position about `axis` through the world origin
    Rotation {
        /// Unit rotation axis
        axis: Vec3,
        /// Radians per tick, independent of the tick delta
        speed: f32,
    },

    /// Ping-pongs along `direction` within `distance` of the anchor
    Translation {
        /// Unit travel direction (sign flips on reversal)
        direction: Vec3,
        /// Offset from the anchor that triggers a reversal
        distance: f32,
        /// Units per second
        speed: f32,
    },

    /// Follows a skewed closed curve around the anchor
    Orbit {
        /// Curve radius
        radius: f32,
        /// Angular rate, radians per second
        speed: f32,
    },
}

/// Per-object motion state
#[derive(Debug, Clone, PartialEq)]
pub struct Behavior {
    /// Anchor position at construction
    pub initial_position: Vec3,
    /// Position after the most recent update
    pub current_position: Vec3,
    /// Sum of all deltas passed to [`Behavior::update`]
    pub elapsed_time: f32,
    /// Variant and its parameters
    pub motion: Motion,
}

impl Behavior {
    /// Create a behavior anchored at `position`
    pub fn new(position: Vec3, motion: Motion) -> Self {
        Self {
            initial_position: position,
            current_position: position,
            elapsed_time: 0.0,
            motion,
        }
    }

    /// Create a static behavior anchored at `position`
    pub fn stationary(position: Vec3) -> Self {
        Self::new(position, Motion::Static)
    }

    /// Which variant this behavior runs
    pub fn kind(&self) -> BehaviorKind {
        match self.motion {
            Motion::Static => BehaviorKind::Static,
            Motion::Rotation { .. } => BehaviorKind::Rotation,
            Motion::Translation { .. } => BehaviorKind::Translation,
            Motion::Orbit { .. } => BehaviorKind::Orbit,
        }
    }

    /// Current position
    pub fn position(&self) -> Vec3 {
        self.current_position
    }

    /// Advance by `delta_time` seconds and return the new position
    pub fn update(&mut self, delta_time: f32) -> Vec3 {
        self.elapsed_time += delta_time;

        match &mut self.motion {
            Motion::Static => {}
            Motion::Rotation { axis, speed } => {
                self.current_position = rotate_about_axis(&self.current_position, axis, *speed);
            }
            Motion::Translation { direction, distance, speed } => {
                let offset = self.current_position - self.initial_position;
                if offset.magnitude() >= *distance {
                    *direction = -*direction;
                }
                self.current_position += *direction * (*speed * delta_time);
            }
            Motion::Orbit { radius, speed } => {
                let angle = self.elapsed_time * *speed;
                self.current_position = self.initial_position
                    + Vec3::new(
                        *radius * angle.cos(),
                        *radius * (angle / 2.0).sin(),
                        *radius * angle.sin(),
                    );
            }
        }

        self.current_position
    }
}
