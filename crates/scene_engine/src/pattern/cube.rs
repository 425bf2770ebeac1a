//! Cube pattern: points along the twelve edges, or one line per edge

use serde::{Deserialize, Serialize};

use super::Placement;
use crate::foundation::math::{constants::HALF_PI, quat_from_axis_angle, Quat, Vec3};

/// Cube parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CubeParameters {
    /// Points per edge, corners included
    pub edge_count: usize,
    /// Edge length
    pub size: f32,
    /// Minimum corner
    #[serde(default)]
    pub origin: [f32; 3],
}

impl CubeParameters {
    /// Points along every edge
    ///
    /// Corners are emitted once per incident edge, so each corner appears
    /// three times. Order: front face (`z = origin.z`) then back face, each
    /// as bottom/top/left/right per step, then the four connecting edges.
    pub fn points(&self) -> Vec<Placement> {
        let [ox, oy, oz] = self.origin;
        let s = self.size;
        let spacing = s / (self.edge_count as f32 - 1.0);
        let mut placements = Vec::with_capacity(self.edge_count * 12);

        for z in [oz, oz + s] {
            for i in 0..self.edge_count {
                let t = i as f32 * spacing;
                placements.push(Placement::point(Vec3::new(ox + t, oy, z)));
                placements.push(Placement::point(Vec3::new(ox + t, oy + s, z)));
                placements.push(Placement::point(Vec3::new(ox, oy + t, z)));
                placements.push(Placement::point(Vec3::new(ox + s, oy + t, z)));
            }
        }

        for i in 0..self.edge_count {
            let z = oz + i as f32 * spacing;
            placements.push(Placement::point(Vec3::new(ox, oy, z)));
            placements.push(Placement::point(Vec3::new(ox + s, oy, z)));
            placements.push(Placement::point(Vec3::new(ox, oy + s, z)));
            placements.push(Placement::point(Vec3::new(ox + s, oy + s, z)));
        }

        placements
    }

    /// One segment per edge, anchored at the edge's minimum endpoint
    ///
    /// X edges turn +90° about Y, Y edges turn -90° about X; Z edges already
    /// lie on the canonical axis.
    pub fn edge_lines(&self) -> Vec<Placement> {
        let [ox, oy, oz] = self.origin;
        let s = self.size;
        let along_x = quat_from_axis_angle(&Vec3::y(), HALF_PI);
        let along_y = quat_from_axis_angle(&Vec3::x(), -HALF_PI);

        let mut placements = Vec::with_capacity(12);
        for z in [oz, oz + s] {
            placements.push(Placement::segment(Vec3::new(ox, oy, z), along_x, s));
            placements.push(Placement::segment(Vec3::new(ox, oy + s, z), along_x, s));
            placements.push(Placement::segment(Vec3::new(ox, oy, z), along_y, s));
            placements.push(Placement::segment(Vec3::new(ox + s, oy, z), along_y, s));
        }
        for (x, y) in [(ox, oy), (ox + s, oy), (ox, oy + s), (ox + s, oy + s)] {
            placements.push(Placement::segment(Vec3::new(x, y, oz), Quat::identity(), s));
        }
        placements
    }

    /// Human-readable problems that would make the cube degenerate
    pub fn violations(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if !(self.size > 0.0) {
            problems.push(format!("cube size must be positive, got {}", self.size));
        }
        if self.edge_count < 2 {
            problems.push(format!("cube edgeCount must be at least 2, got {}", self.edge_count));
        }
        problems
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn cube() -> CubeParameters {
        CubeParameters { edge_count: 3, size: 2.0, origin: [-1.0, -1.0, -1.0] }
    }

    #[test]
    fn test_edge_point_count_and_corner_duplication() {
        let points = cube().points();
        assert_eq!(points.len(), 3 * 12);

        let corner = Vec3::new(-1.0, -1.0, -1.0);
        let hits = points.iter().filter(|p| p.position == corner).count();
        assert_eq!(hits, 3);
    }

    #[test]
    fn test_all_points_lie_on_edges() {
        for placement in cube().points() {
            let on_face = placement
                .position
                .iter()
                .filter(|c| (c.abs() - 1.0).abs() < 1e-6)
                .count();
            assert!(on_face >= 2, "{:?} is not on an edge", placement.position);
        }
    }

    #[test]
    fn test_front_face_order() {
        let points = cube().points();
        assert_eq!(points[0].position, Vec3::new(-1.0, -1.0, -1.0));
        assert_eq!(points[1].position, Vec3::new(-1.0, 1.0, -1.0));
        assert_eq!(points[4].position, Vec3::new(0.0, -1.0, -1.0));
        assert_eq!(points[12].position, Vec3::new(-1.0, -1.0, 1.0));
        assert_eq!(points[24 + 3].position, Vec3::new(1.0, 1.0, -1.0));
    }

    #[test]
    fn test_edge_lines_cover_every_edge() {
        let params = cube();
        let lines = params.edge_lines();
        assert_eq!(lines.len(), 12);

        let mut edges: Vec<(Vec3, Vec3)> = Vec::new();
        for line in &lines {
            assert_abs_diff_eq!(line.length, 2.0);
            let end = line.end();
            for c in line.position.iter().chain(end.iter()) {
                assert_abs_diff_eq!(c.abs(), 1.0, epsilon = 1e-5);
            }
            assert_abs_diff_eq!((end - line.position).magnitude(), 2.0, epsilon = 1e-5);
            edges.push((line.position, end));
        }

        // No two lines share both endpoints.
        for (a, first) in edges.iter().enumerate() {
            for second in &edges[a + 1..] {
                let same = (first.0 - second.0).magnitude() < 1e-4
                    && (first.1 - second.1).magnitude() < 1e-4;
                assert!(!same, "duplicate edge {first:?}");
            }
        }
    }

    #[test]
    fn test_single_point_edges_propagate_non_finite() {
        let params = CubeParameters { edge_count: 1, ..cube() };
        assert!(!params.violations().is_empty());
        assert!(params.points().iter().any(|p| !p.position.iter().all(|c| c.is_finite())));
    }
}
