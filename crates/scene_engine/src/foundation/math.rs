//! Math utilities and types
//!
//! Plain value types for positions and orientations, plus the free functions
//! the pattern generators and behaviors are built from. Nothing here knows
//! about rendering.

pub use nalgebra::{Quaternion, Unit, UnitQuaternion, Vector3};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// Quaternion type for rotations
pub type Quat = UnitQuaternion<f32>;

/// Transform representing position, rotation, and scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Position in 3D space
    pub position: Vec3,

    /// Rotation quaternion
    pub rotation: Quat,

    /// Scale factors
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Quat::identity(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Transform {
    /// Create a transform with only position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create a transform with position and rotation
    pub fn from_position_rotation(position: Vec3, rotation: Quat) -> Self {
        Self {
            position,
            rotation,
            ..Default::default()
        }
    }

    /// Builder pattern: Set scale
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Map a point from local space into world space (scale, rotate, translate)
    pub fn transform_point(&self, point: &Vec3) -> Vec3 {
        self.position + self.rotation * point.component_mul(&self.scale)
    }
}

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// 2 * Pi
    pub const TAU: f32 = 2.0 * PI;

    /// Pi / 2
    pub const HALF_PI: f32 = PI * 0.5;
}

/// Build a vector from a plain `[x, y, z]` triple
pub fn vec3(v: [f32; 3]) -> Vec3 {
    Vec3::new(v[0], v[1], v[2])
}

/// Euclidean distance between two points
pub fn distance(a: &Vec3, b: &Vec3) -> f32 {
    (a - b).magnitude()
}

/// Normalize `v`, falling back to +Z when it has no usable direction
pub fn normalize_or_z(v: Vec3) -> Vec3 {
    v.try_normalize(f32::EPSILON).unwrap_or_else(Vec3::z)
}

/// Rotate `v` by `angle` radians about `axis` (need not be normalized)
///
/// A zero axis leaves `v` unchanged.
pub fn rotate_about_axis(v: &Vec3, axis: &Vec3, angle: f32) -> Vec3 {
    match Unit::try_new(*axis, f32::EPSILON) {
        Some(axis) => Quat::from_axis_angle(&axis, angle) * v,
        None => *v,
    }
}

/// Quaternion from Euler angles in radians, applied in XYZ order
///
/// The resulting rotation matrix is `Rx * Ry * Rz`.
pub fn quat_from_euler_xyz(x: f32, y: f32, z: f32) -> Quat {
    Quat::from_axis_angle(&Vector3::x_axis(), x)
        * Quat::from_axis_angle(&Vector3::y_axis(), y)
        * Quat::from_axis_angle(&Vector3::z_axis(), z)
}

/// Quaternion from an `[x, y, z, w]` quadruple, normalized
///
/// A zero quadruple maps to identity.
pub fn quat_from_xyzw(q: [f32; 4]) -> Quat {
    let raw = Quaternion::new(q[3], q[0], q[1], q[2]);
    Unit::try_new(raw, f32::EPSILON).unwrap_or_else(Quat::identity)
}

/// Quaternion from an axis (need not be normalized) and an angle in radians
///
/// A zero axis maps to identity.
pub fn quat_from_axis_angle(axis: &Vec3, angle: f32) -> Quat {
    Unit::try_new(*axis, f32::EPSILON)
        .map_or_else(Quat::identity, |axis| Quat::from_axis_angle(&axis, angle))
}

/// Rotation taking the canonical segment axis (+Z) onto `direction`
pub fn quat_from_z_to(direction: &Vec3) -> Quat {
    let target = normalize_or_z(*direction);
    Quat::rotation_between(&Vec3::z(), &target)
        // Antiparallel: any half turn perpendicular to Z works.
        .unwrap_or_else(|| Quat::from_axis_angle(&Vector3::x_axis(), constants::PI))
}
