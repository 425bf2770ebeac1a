//! Line pattern: points strung between two endpoints

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::Placement;
use crate::foundation::math::vec3;

/// How points are distributed between the endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineSpacing {
    /// Evenly spaced, both endpoints included
    #[default]
    Uniform,
    /// Independent uniform draws along the segment
    Random,
}

/// Line pattern parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineParameters {
    /// First endpoint
    pub start: [f32; 3],
    /// Second endpoint
    pub end: [f32; 3],
    /// Number of points
    pub count: usize,
    /// Distribution along the segment
    #[serde(default)]
    pub spacing: LineSpacing,
}

impl LineParameters {
    /// Points along the segment from `start` to `end`
    ///
    /// Uniform spacing with a single point puts it at `start`.
    pub fn points<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Placement> {
        let start = vec3(self.start);
        let span = vec3(self.end) - start;
        let steps = self.count.saturating_sub(1).max(1) as f32;

        (0..self.count)
            .map(|i| {
                let t = match self.spacing {
                    LineSpacing::Uniform => i as f32 / steps,
                    LineSpacing::Random => rng.gen::<f32>(),
                };
                Placement::point(start + span * t)
            })
            .collect()
    }

    /// Human-readable problems that would make the line degenerate
    pub fn violations(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if self.count == 0 {
            problems.push("line count must be non-zero".to_string());
        }
        if self.start == self.end {
            problems.push("line start and end coincide".to_string());
        }
        problems
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn line(count: usize, spacing: LineSpacing) -> LineParameters {
        LineParameters { start: [0.0, 0.0, 0.0], end: [2.0, 4.0, 0.0], count, spacing }
    }

    #[test]
    fn test_uniform_includes_endpoints() {
        let mut rng = StdRng::seed_from_u64(0);
        let points = line(5, LineSpacing::Uniform).points(&mut rng);
        assert_eq!(points.len(), 5);
        assert_eq!(points[0].position, Vec3::zeros());
        assert_abs_diff_eq!(points[2].position, Vec3::new(1.0, 2.0, 0.0));
        assert_abs_diff_eq!(points[4].position, Vec3::new(2.0, 4.0, 0.0));
    }

    #[test]
    fn test_single_uniform_point_sits_at_start() {
        let mut rng = StdRng::seed_from_u64(0);
        let points = line(1, LineSpacing::Uniform).points(&mut rng);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].position, Vec3::zeros());
    }

    #[test]
    fn test_random_points_stay_on_segment() {
        let mut rng = StdRng::seed_from_u64(21);
        for placement in line(50, LineSpacing::Random).points(&mut rng) {
            let p = placement.position;
            assert_abs_diff_eq!(p.y, 2.0 * p.x, epsilon = 1e-5);
            assert!((0.0..=2.0).contains(&p.x));
        }
    }
}
