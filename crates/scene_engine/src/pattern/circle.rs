//! Circle pattern: points on a ring, or spokes from its center

use serde::{Deserialize, Serialize};

use super::Placement;
use crate::foundation::math::{constants::TAU, quat_from_z_to, vec3, Vec3};

/// Plane the ring lies in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CirclePlane {
    /// `(cos, sin, 0)`
    #[default]
    Xy,
    /// `(0, cos, sin)`
    Yz,
    /// `(cos, 0, sin)`
    Xz,
}

impl CirclePlane {
    /// Unit direction at angle `theta` within the plane
    pub fn direction(self, theta: f32) -> Vec3 {
        let (sin, cos) = theta.sin_cos();
        match self {
            Self::Xy => Vec3::new(cos, sin, 0.0),
            Self::Yz => Vec3::new(0.0, cos, sin),
            Self::Xz => Vec3::new(cos, 0.0, sin),
        }
    }
}

/// Circle parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CircleParameters {
    /// Ring radius
    pub radius: f32,
    /// Number of placements around the ring
    pub count: usize,
    /// Plane of the ring
    #[serde(default)]
    pub plane: CirclePlane,
    /// Ring center
    #[serde(default)]
    pub origin: [f32; 3],
}

impl CircleParameters {
    /// Angle of placement `i`
    fn angle(&self, i: usize) -> f32 {
        TAU * i as f32 / self.count as f32
    }

    /// Points evenly spaced around the ring, starting at angle zero
    pub fn points(&self) -> Vec<Placement> {
        let origin = vec3(self.origin);
        (0..self.count)
            .map(|i| Placement::point(origin + self.plane.direction(self.angle(i)) * self.radius))
            .collect()
    }

    /// Spokes of length `radius` from the center toward each ring point
    pub fn radial_lines(&self) -> Vec<Placement> {
        let origin = vec3(self.origin);
        (0..self.count)
            .map(|i| {
                let direction = self.plane.direction(self.angle(i));
                Placement::segment(origin, quat_from_z_to(&direction), self.radius)
            })
            .collect()
    }

    /// Human-readable problems that would make the ring degenerate
    pub fn violations(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if !(self.radius > 0.0) {
            problems.push(format!("circle radius must be positive, got {}", self.radius));
        }
        if self.count == 0 {
            problems.push("circle count must be non-zero".to_string());
        }
        problems
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn circle(plane: CirclePlane, origin: [f32; 3]) -> CircleParameters {
        CircleParameters { radius: 1.0, count: 4, plane, origin }
    }

    #[test]
    fn test_xy_quarter_points() {
        let points = circle(CirclePlane::Xy, [0.0; 3]).points();
        let expected = [
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(-1.0, 0.0, 0.0),
            Vec3::new(0.0, -1.0, 0.0),
        ];
        assert_eq!(points.len(), 4);
        for (placement, expected) in points.iter().zip(expected) {
            assert_abs_diff_eq!(placement.position, expected, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_omitted_axis_keeps_origin() {
        let yz = circle(CirclePlane::Yz, [5.0, 1.0, 2.0]).points();
        assert!(yz.iter().all(|p| p.position.x == 5.0));
        assert_abs_diff_eq!(yz[1].position, Vec3::new(5.0, 1.0, 3.0), epsilon = 1e-6);

        let xz = circle(CirclePlane::Xz, [5.0, 1.0, 2.0]).points();
        assert!(xz.iter().all(|p| p.position.y == 1.0));
        assert_abs_diff_eq!(xz[0].position, Vec3::new(6.0, 1.0, 2.0), epsilon = 1e-6);
    }

    #[test]
    fn test_radial_lines_point_outward() {
        let params = CircleParameters { radius: 2.0, count: 8, ..circle(CirclePlane::Xy, [1.0, 1.0, 0.0]) };
        let points = params.points();
        let spokes = params.radial_lines();
        assert_eq!(spokes.len(), 8);
        for (spoke, point) in spokes.iter().zip(&points) {
            assert_eq!(spoke.position, Vec3::new(1.0, 1.0, 0.0));
            assert_abs_diff_eq!(spoke.end(), point.position, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_plane_defaults_to_xy() {
        let params: CircleParameters = serde_json::from_str(r#"{"radius": 2.0, "count": 3}"#).unwrap();
        assert_eq!(params.plane, CirclePlane::Xy);
        assert_eq!(params.origin, [0.0; 3]);
    }
}
