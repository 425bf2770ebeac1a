//! Pattern generator
//!
//! Expands a compact parametric description into an ordered list of
//! [`Placement`]s. Which patterns exist depends on the object type:
//!
//! | pattern  | points                     | lines                      |
//! |----------|----------------------------|----------------------------|
//! | `grid`   | lattice nodes              | row/column/depth lines     |
//! | `circle` | ring points                | spokes from the center     |
//! | `cube`   | points along the 12 edges  | one line per edge          |
//! | `sphere` | latitude/longitude lattice | -                          |
//! | `line`   | points between endpoints   | -                          |
//!
//! Parameters are not validated during generation; degenerate values flow
//! straight into the geometry. [`Pattern::violations`] reports them for
//! callers that want to warn.

mod circle;
mod cube;
mod grid;
mod linear;
mod sphere;

pub use circle::{CircleParameters, CirclePlane};
pub use cube::CubeParameters;
pub use grid::{GridParameters, GridStyle};
pub use linear::{LineParameters, LineSpacing};
pub use sphere::SphereParameters;

use rand::Rng;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{SceneError, SceneResult};
use crate::foundation::math::{Quat, Vec3};
use crate::primitive::ObjectType;

/// Where one generated primitive goes
///
/// Points use only `position`. Lines run from `position` along
/// `orientation * +Z` for `length`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Anchor position
    pub position: Vec3,
    /// Orientation of the canonical +Z segment
    pub orientation: Quat,
    /// Segment length (zero for points)
    pub length: f32,
}

impl Placement {
    /// Placement for a point
    pub fn point(position: Vec3) -> Self {
        Self {
            position,
            orientation: Quat::identity(),
            length: 0.0,
        }
    }

    /// Placement for a line segment
    pub fn segment(position: Vec3, orientation: Quat, length: f32) -> Self {
        Self {
            position,
            orientation,
            length,
        }
    }

    /// Unit direction of the segment
    pub fn direction(&self) -> Vec3 {
        self.orientation * Vec3::z()
    }

    /// Far end of the segment
    pub fn end(&self) -> Vec3 {
        self.position + self.direction() * self.length
    }
}

/// `positions` block of an object definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionDefinition {
    /// Position source kind; only `"pattern"` is produced by current scenes
    #[serde(rename = "type", default = "PositionDefinition::default_kind")]
    pub kind: String,
    /// Pattern name
    pub pattern: String,
    /// Pattern-specific parameters, decoded once the pattern is known
    #[serde(default)]
    pub parameters: serde_json::Value,
}

impl PositionDefinition {
    fn default_kind() -> String {
        "pattern".to_string()
    }
}

/// A pattern together with its decoded parameters
#[derive(Debug, Clone, PartialEq)]
pub enum Pattern {
    /// `grid`
    Grid(GridParameters),
    /// `circle`
    Circle(CircleParameters),
    /// `cube`
    Cube(CubeParameters),
    /// `sphere`
    Sphere(SphereParameters),
    /// `line`
    Line(LineParameters),
}

impl Pattern {
    /// Whether `name` has a generator for `object_type`
    pub fn supports(object_type: ObjectType, name: &str) -> bool {
        match object_type {
            ObjectType::Point => matches!(name, "grid" | "circle" | "cube" | "sphere" | "line"),
            ObjectType::Line => matches!(name, "grid" | "circle" | "cube"),
        }
    }

    /// Resolve a positions block for `object_type`
    ///
    /// Fails with [`SceneError::UnsupportedPattern`] before looking at the
    /// parameters when the name has no generator for this type.
    pub fn from_definition(definition: &PositionDefinition, object_type: ObjectType) -> SceneResult<Self> {
        let name = definition.pattern.as_str();
        if !Self::supports(object_type, name) {
            return Err(SceneError::UnsupportedPattern {
                pattern: definition.pattern.clone(),
                object_type,
            });
        }

        let parameters = &definition.parameters;
        Ok(match name {
            "grid" => Self::Grid(decode(name, parameters)?),
            "circle" => Self::Circle(decode(name, parameters)?),
            "cube" => Self::Cube(decode(name, parameters)?),
            "sphere" => Self::Sphere(decode(name, parameters)?),
            _ => Self::Line(decode(name, parameters)?),
        })
    }

    /// Pattern name as written in documents
    pub fn name(&self) -> &'static str {
        match self {
            Self::Grid(_) => "grid",
            Self::Circle(_) => "circle",
            Self::Cube(_) => "cube",
            Self::Sphere(_) => "sphere",
            Self::Line(_) => "line",
        }
    }

    /// Expand into placements for `object_type`
    ///
    /// `rng` is only drawn from by random line spacing.
    pub fn generate<R: Rng + ?Sized>(&self, object_type: ObjectType, rng: &mut R) -> SceneResult<Vec<Placement>> {
        let placements = match (object_type, self) {
            (ObjectType::Point, Self::Grid(params)) => params.points(),
            (ObjectType::Point, Self::Circle(params)) => params.points(),
            (ObjectType::Point, Self::Cube(params)) => params.points(),
            (ObjectType::Point, Self::Sphere(params)) => params.points(),
            (ObjectType::Point, Self::Line(params)) => params.points(rng),
            (ObjectType::Line, Self::Grid(params)) => params.lines(),
            (ObjectType::Line, Self::Circle(params)) => params.radial_lines(),
            (ObjectType::Line, Self::Cube(params)) => params.edge_lines(),
            (ObjectType::Line, Self::Sphere(_) | Self::Line(_)) => {
                return Err(SceneError::UnsupportedPattern {
                    pattern: self.name().to_string(),
                    object_type,
                });
            }
        };
        Ok(placements)
    }

    /// Problems that make the generated geometry degenerate
    pub fn violations(&self) -> Vec<String> {
        match self {
            Self::Grid(params) => params.violations(),
            Self::Circle(params) => params.violations(),
            Self::Cube(params) => params.violations(),
            Self::Sphere(params) => params.violations(),
            Self::Line(params) => params.violations(),
        }
    }
}

fn decode<T: DeserializeOwned>(pattern: &str, parameters: &serde_json::Value) -> SceneResult<T> {
    T::deserialize(parameters)
        .map_err(|e| SceneError::Parse(format!("invalid {} parameters: {}", pattern, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;

    fn definition(pattern: &str, parameters: serde_json::Value) -> PositionDefinition {
        PositionDefinition {
            kind: "pattern".to_string(),
            pattern: pattern.to_string(),
            parameters,
        }
    }

    #[test]
    fn test_unknown_pattern_names_type_and_pattern() {
        let err = Pattern::from_definition(&definition("spiral", json!({})), ObjectType::Point)
            .unwrap_err();
        match err {
            SceneError::UnsupportedPattern { pattern, object_type } => {
                assert_eq!(pattern, "spiral");
                assert_eq!(object_type, ObjectType::Point);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_sphere_lines_are_unsupported() {
        let params = json!({"radius": 1.0, "latitudeCount": 2, "longitudeCount": 4});
        let err = Pattern::from_definition(&definition("sphere", params.clone()), ObjectType::Line)
            .unwrap_err();
        assert!(matches!(err, SceneError::UnsupportedPattern { object_type: ObjectType::Line, .. }));

        // Also refused when the pattern was built for points first.
        let pattern = Pattern::from_definition(&definition("sphere", params), ObjectType::Point).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert!(pattern.generate(ObjectType::Line, &mut rng).is_err());
    }

    #[test]
    fn test_bad_parameters_are_parse_errors() {
        let err = Pattern::from_definition(
            &definition("grid", json!({"spacing": "wide", "dimensions": [1, 1, 1]})),
            ObjectType::Point,
        )
        .unwrap_err();
        assert!(matches!(err, SceneError::Parse(message) if message.contains("grid")));
    }

    #[test]
    fn test_camel_case_parameters_decode() {
        let pattern = Pattern::from_definition(
            &definition("cube", json!({"edgeCount": 4, "size": 2.0, "origin": [-1, -1, -1]})),
            ObjectType::Point,
        )
        .unwrap();
        assert_eq!(
            pattern,
            Pattern::Cube(CubeParameters { edge_count: 4, size: 2.0, origin: [-1.0, -1.0, -1.0] })
        );
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(pattern.generate(ObjectType::Point, &mut rng).unwrap().len(), 48);
        assert_eq!(pattern.generate(ObjectType::Line, &mut rng).unwrap().len(), 12);
    }

    #[test]
    fn test_positions_block_deserializes() {
        let block: PositionDefinition = serde_json::from_value(json!({
            "type": "pattern",
            "pattern": "circle",
            "parameters": {"radius": 2.0, "count": 36, "plane": "xz", "origin": [0, 0, 0]}
        }))
        .unwrap();
        let pattern = Pattern::from_definition(&block, ObjectType::Line).unwrap();
        assert_eq!(pattern.name(), "circle");
        assert!(pattern.violations().is_empty());
    }
}
