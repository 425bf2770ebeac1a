//! Randomized behavior construction

use std::fmt;
use std::ops::Range;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{Behavior, Motion};
use crate::foundation::math::{normalize_or_z, Vec3};

/// Behavior variant selector as written in scene documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BehaviorKind {
    /// No motion
    #[default]
    Static,
    /// Rotation about a random axis through the world origin
    Rotation,
    /// Ping-pong translation along a random direction
    Translation,
    /// Skewed orbit around the anchor
    Orbit,
}

impl fmt::Display for BehaviorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Static => "static",
            Self::Rotation => "rotation",
            Self::Translation => "translation",
            Self::Orbit => "orbit",
        };
        f.write_str(name)
    }
}

/// Factory for creating behaviors with randomized parameters
pub struct BehaviorFactory;

impl BehaviorFactory {
    /// Rotation speed range, radians per tick
    pub const ROTATION_SPEED: Range<f32> = 0.01..0.03;
    /// Translation travel distance range
    pub const TRANSLATION_DISTANCE: Range<f32> = 0.5..2.0;
    /// Translation speed range, units per second
    pub const TRANSLATION_SPEED: Range<f32> = 0.02..0.05;
    /// Orbit radius range
    pub const ORBIT_RADIUS: Range<f32> = 1.0..3.0;
    /// Orbit angular rate range, radians per second
    pub const ORBIT_SPEED: Range<f32> = 0.02..0.04;

    /// Create a behavior of the given kind anchored at `position`
    pub fn create<R: Rng + ?Sized>(kind: BehaviorKind, position: Vec3, rng: &mut R) -> Behavior {
        match kind {
            BehaviorKind::Static => Self::create_static(position),
            BehaviorKind::Rotation => Self::create_rotation(position, rng),
            BehaviorKind::Translation => Self::create_translation(position, rng),
            BehaviorKind::Orbit => Self::create_orbit(position, rng),
        }
    }

    /// Create a static object (no movement)
    pub fn create_static(position: Vec3) -> Behavior {
        Behavior::stationary(position)
    }

    /// Create a rotating object
    ///
    /// Axis components are drawn from `[0, 1)` before normalization.
    pub fn create_rotation<R: Rng + ?Sized>(position: Vec3, rng: &mut R) -> Behavior {
        let axis = normalize_or_z(Vec3::new(rng.gen(), rng.gen(), rng.gen()));
        let speed = rng.gen_range(Self::ROTATION_SPEED);
        Behavior::new(position, Motion::Rotation { axis, speed })
    }

    /// Create a linearly oscillating object
    ///
    /// Direction components are drawn from `[-1, 1)` before normalization.
    pub fn create_translation<R: Rng + ?Sized>(position: Vec3, rng: &mut R) -> Behavior {
        let direction = normalize_or_z(Vec3::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        ));
        let distance = rng.gen_range(Self::TRANSLATION_DISTANCE);
        let speed = rng.gen_range(Self::TRANSLATION_SPEED);
        Behavior::new(position, Motion::Translation { direction, distance, speed })
    }

    /// Create an orbital movement pattern
    pub fn create_orbit<R: Rng + ?Sized>(position: Vec3, rng: &mut R) -> Behavior {
        let radius = rng.gen_range(Self::ORBIT_RADIUS);
        let speed = rng.gen_range(Self::ORBIT_SPEED);
        Behavior::new(position, Motion::Orbit { radius, speed })
    }
}
