//! Scene document model
//!
//! Two document shapes are accepted. The flat shape lists every object under
//! `objects` with its own position and rotation; the pattern shape lists
//! `objectDefinitions` that expand into many objects. Both share the `groups`
//! map. Unknown top-level keys are ignored.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::behavior::BehaviorKind;
use crate::config::FileFormat;
use crate::error::{SceneError, SceneResult};
use crate::foundation::math::{quat_from_axis_angle, quat_from_euler_xyz, quat_from_xyzw, vec3, Quat};
use crate::group::GroupSpec;
use crate::pattern::PositionDefinition;
use crate::primitive::{Color, SizeSpec};

/// A parsed scene document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SceneDocument {
    /// Descriptive header
    pub metadata: Option<SceneMetadata>,
    /// Loader diagnostics switches
    pub debug: Option<DebugOptions>,
    /// Presentation hints
    pub environment: Option<Environment>,
    /// Flat objects keyed by id
    pub objects: BTreeMap<String, ObjectSpec>,
    /// Pattern-driven object definitions
    pub object_definitions: Vec<ObjectDefinition>,
    /// Groups keyed by group id
    pub groups: BTreeMap<String, GroupSpec>,
}

impl SceneDocument {
    /// Parse a document from text in the given format
    pub fn from_str_with_format(contents: &str, format: FileFormat) -> SceneResult<Self> {
        match format {
            FileFormat::Json => serde_json::from_str(contents).map_err(|e| SceneError::Parse(e.to_string())),
            FileFormat::Ron => ron::from_str(contents).map_err(|e| SceneError::Parse(e.to_string())),
            FileFormat::Toml => toml::from_str(contents).map_err(|e| SceneError::Parse(e.to_string())),
        }
    }

    /// Read and parse a document, picking the format from the extension
    pub fn load_from_file(path: impl AsRef<Path>) -> SceneResult<Self> {
        let path = path.as_ref();
        let format = FileFormat::from_path(path)
            .ok_or_else(|| SceneError::UnsupportedFormat(path.display().to_string()))?;
        let contents = std::fs::read_to_string(path)?;
        Self::from_str_with_format(&contents, format)
    }
}

/// `metadata` block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneMetadata {
    /// Document version string
    pub version: String,
    /// Free-form description
    pub description: String,
}

/// `debug` block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DebugOptions {
    /// Warn about degenerate pattern parameters and count mismatches
    pub validate_constraints: bool,
    /// Suggested log filter for drivers
    pub log_level: Option<String>,
    /// Log how long loading took
    pub perf_metrics: bool,
}

/// `environment` block, passed through to the presentation side
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Environment {
    /// Show an axis helper
    pub axis: bool,
    /// Initial camera pose
    pub camera: Option<CameraHint>,
}

/// Initial camera pose; the camera looks at the origin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraHint {
    /// Camera position
    pub position: [f32; 3],
    /// Projection kind, e.g. `perspective`
    #[serde(rename = "type", default = "CameraHint::default_kind")]
    pub kind: String,
}

impl CameraHint {
    fn default_kind() -> String {
        "perspective".to_string()
    }
}

/// One entry of the flat `objects` map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectSpec {
    /// `point` or `line`; checked at load time
    #[serde(rename = "type")]
    pub kind: String,
    /// Point size, or `"WxL"` for lines
    #[serde(default)]
    pub size: SizeSpec,
    /// Color string
    #[serde(default)]
    pub rgba: Color,
    /// Anchor position
    #[serde(default, alias = "position")]
    pub pos: [f32; 3],
    /// Initial orientation
    #[serde(default, alias = "rotation")]
    pub rot: Option<RotationSpec>,
    /// Motion model (static when absent)
    #[serde(default)]
    pub behavior: Option<BehaviorKind>,
}

/// Orientation written as Euler angles, a quaternion, or axis and angle
///
/// When several are present the first of euler, quaternion, axis/angle wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationSpec {
    /// Radians about X, Y, Z, applied in XYZ order
    pub euler: Option<[f32; 3]>,
    /// `[x, y, z, w]`, normalized on use
    pub quaternion: Option<[f32; 4]>,
    /// Rotation axis, normalized on use
    pub axis: Option<[f32; 3]>,
    /// Angle about `axis` in radians
    pub angle: Option<f32>,
}

impl RotationSpec {
    /// Resolve to an orientation; identity when nothing usable is present
    pub fn orientation(&self) -> Quat {
        if let Some([x, y, z]) = self.euler {
            return quat_from_euler_xyz(x, y, z);
        }
        if let Some(q) = self.quaternion {
            return quat_from_xyzw(q);
        }
        match (self.axis, self.angle) {
            (Some(axis), Some(angle)) => quat_from_axis_angle(&vec3(axis), angle),
            _ => Quat::identity(),
        }
    }
}

/// One entry of `objectDefinitions`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectDefinition {
    /// Base id; generated objects are `id/0`, `id/1`, ...
    pub id: String,
    /// `point` or `line`; checked at load time
    #[serde(rename = "type")]
    pub kind: String,
    /// Expected number of objects, informational only
    #[serde(default)]
    pub count: Option<usize>,
    /// Appearance shared by every generated object
    #[serde(default)]
    pub template: ObjectTemplate,
    /// Pattern producing the placements
    pub positions: PositionDefinition,
    /// Motion model for every generated object (static when absent)
    #[serde(default)]
    pub behavior: Option<BehaviorKind>,
}

/// Appearance shared by the objects of a definition
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectTemplate {
    /// Point size or line width (`"WxL"` accepted, length is ignored)
    pub size: SizeSpec,
    /// Color string
    pub rgba: Color,
}
