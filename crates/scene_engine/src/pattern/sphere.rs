//! Sphere pattern: latitude/longitude lattice of points

use serde::{Deserialize, Serialize};

use super::Placement;
use crate::foundation::math::{constants::{PI, TAU}, vec3, Vec3};

/// Sphere parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SphereParameters {
    /// Sphere radius
    pub radius: f32,
    /// Latitude bands between the poles
    pub latitude_count: usize,
    /// Points per latitude ring
    pub longitude_count: usize,
    /// Sphere center
    #[serde(default)]
    pub origin: [f32; 3],
}

impl SphereParameters {
    /// `(latitude_count + 1) * longitude_count` points, pole to pole
    ///
    /// Both pole rings collapse onto a single position, so each pole holds
    /// `longitude_count` coincident points.
    pub fn points(&self) -> Vec<Placement> {
        let origin = vec3(self.origin);
        let mut placements =
            Vec::with_capacity((self.latitude_count + 1) * self.longitude_count);

        for lat in 0..=self.latitude_count {
            let phi = PI * lat as f32 / self.latitude_count as f32;
            let (sin_phi, cos_phi) = phi.sin_cos();
            for lon in 0..self.longitude_count {
                let theta = TAU * lon as f32 / self.longitude_count as f32;
                let (sin_theta, cos_theta) = theta.sin_cos();
                let offset = Vec3::new(sin_phi * cos_theta, sin_phi * sin_theta, cos_phi);
                placements.push(Placement::point(origin + offset * self.radius));
            }
        }
        placements
    }

    /// Human-readable problems that would make the sphere degenerate
    pub fn violations(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if !(self.radius > 0.0) {
            problems.push(format!("sphere radius must be positive, got {}", self.radius));
        }
        if self.latitude_count == 0 {
            problems.push("sphere latitudeCount must be at least 1".to_string());
        }
        if self.longitude_count == 0 {
            problems.push("sphere longitudeCount must be non-zero".to_string());
        }
        problems
    }
}
