//! Grid pattern: regular lattice of points, or the lines through it

use serde::{Deserialize, Serialize};

use super::Placement;
use crate::foundation::math::{constants::HALF_PI, quat_from_axis_angle, Quat, Vec3};

/// Whether the lattice is a single layer or stacked along Z
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridStyle {
    /// One layer at `origin.z`
    #[default]
    Plane,
    /// `nz` layers
    Volume,
}

/// Grid parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridParameters {
    /// Distance between neighbouring lattice nodes
    pub spacing: f32,
    /// Node counts `[nx, ny, nz]`
    pub dimensions: [usize; 3],
    /// Lattice corner
    #[serde(default)]
    pub origin: [f32; 3],
    /// Plane or volume
    #[serde(default)]
    pub style: GridStyle,
}

impl GridParameters {
    fn node(&self, i: usize, j: usize, k: usize) -> Vec3 {
        let [ox, oy, oz] = self.origin;
        Vec3::new(
            ox + i as f32 * self.spacing,
            oy + j as f32 * self.spacing,
            oz + k as f32 * self.spacing,
        )
    }

    /// Span covered by `n` nodes along one axis
    fn span(&self, n: usize) -> f32 {
        (n as f32 - 1.0) * self.spacing
    }

    /// Lattice nodes, x outermost, then y, then z
    pub fn points(&self) -> Vec<Placement> {
        let [nx, ny, nz] = self.dimensions;
        let layers = match self.style {
            GridStyle::Plane => 1,
            GridStyle::Volume => nz,
        };

        let mut placements = Vec::with_capacity(nx * ny * layers);
        for i in 0..nx {
            for j in 0..ny {
                for k in 0..layers {
                    placements.push(Placement::point(self.node(i, j, k)));
                }
            }
        }
        placements
    }

    /// Axis-aligned lines through the lattice
    ///
    /// One line along +X per row, one along +Y per column, and for volume
    /// grids with more than one layer one line along +Z per (x, y) node.
    pub fn lines(&self) -> Vec<Placement> {
        let [nx, ny, nz] = self.dimensions;
        let along_x = quat_from_axis_angle(&Vec3::y(), HALF_PI);
        let along_y = quat_from_axis_angle(&Vec3::x(), -HALF_PI);

        let mut placements = Vec::new();
        for j in 0..ny {
            placements.push(Placement::segment(self.node(0, j, 0), along_x, self.span(nx)));
        }
        for i in 0..nx {
            placements.push(Placement::segment(self.node(i, 0, 0), along_y, self.span(ny)));
        }
        if self.style == GridStyle::Volume && nz > 1 {
            for i in 0..nx {
                for j in 0..ny {
                    placements.push(Placement::segment(
                        self.node(i, j, 0),
                        Quat::identity(),
                        self.span(nz),
                    ));
                }
            }
        }
        placements
    }

    /// Human-readable problems that would make the lattice degenerate
    pub fn violations(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if !(self.spacing > 0.0) {
            problems.push(format!("grid spacing must be positive, got {}", self.spacing));
        }
        if self.dimensions.iter().any(|n| *n == 0) {
            problems.push(format!("grid dimensions must be non-zero, got {:?}", self.dimensions));
        }
        problems
    }
}
