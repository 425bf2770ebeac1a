//! Group resolver
//!
//! Turns group entries into ordered member-id lists. Resolution happens once,
//! at load time, against the object registry as it stands then; later motion
//! never changes membership.
//!
//! Entries come in two shapes:
//!
//! - an explicit member list (`"g1": ["tgt1", "tgt2"]`), taken verbatim
//! - a rule with a `type`: `index` expands an id range, `spatial` scans the
//!   registry with a region predicate

use serde::{Deserialize, Serialize};

use crate::foundation::math::{distance, vec3, Vec3};
use crate::scene::ObjectRegistry;

/// One entry of a document's `groups` map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GroupSpec {
    /// Explicit member ids
    Members(Vec<String>),
    /// Rule resolved against the registry
    Rule(GroupRule),
}

/// Rule-based group entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupRule {
    /// `index` or `spatial`; anything else, including a missing type, is
    /// skipped by the loader
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Base id of the generating object definition
    #[serde(default)]
    pub generator: String,
    /// Inclusive index range for `index` rules (defaults to `[0, 0]`)
    ///
    /// Bounds may be written as floats; only whole indices in between count.
    #[serde(default)]
    pub id_range: Option<[f64; 2]>,
    /// Region for `spatial` rules (defaults to an empty sphere at the origin)
    #[serde(default)]
    pub condition: Option<SpatialCondition>,
}

/// Region description of a spatial rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpatialCondition {
    /// Region shape; only `sphere` is understood
    pub region: String,
    /// Region center
    pub center: [f32; 3],
    /// Region radius
    pub radius: f32,
}

impl Default for SpatialCondition {
    fn default() -> Self {
        Self {
            region: "sphere".to_string(),
            center: [0.0; 3],
            radius: 0.0,
        }
    }
}

/// Region predicate evaluated against object positions
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Region {
    /// Closed ball
    Sphere {
        /// Ball center
        center: Vec3,
        /// Ball radius
        radius: f32,
    },
}

impl Region {
    /// Build the predicate a condition describes, if its region is known
    pub fn from_condition(condition: &SpatialCondition) -> Option<Self> {
        match condition.region.as_str() {
            "sphere" => Some(Self::Sphere {
                center: vec3(condition.center),
                radius: condition.radius,
            }),
            _ => None,
        }
    }

    /// Whether `position` lies inside the region (boundary included)
    pub fn contains(&self, position: &Vec3) -> bool {
        match self {
            Self::Sphere { center, radius } => distance(position, center) <= *radius,
        }
    }
}

/// Why a group entry produced no registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Skipped {
    /// Rule `type` has no resolver
    UnknownType(String),
}

#[allow(clippy::cast_possible_truncation)]
fn whole_range(id_range: Option<[f64; 2]>) -> [i64; 2] {
    id_range.map_or([0, 0], |[lo, hi]| [lo.ceil() as i64, hi.floor() as i64])
}

/// Stateless resolver for group entries
pub struct GroupResolver;

impl GroupResolver {
    /// Resolve an entry against `objects`
    ///
    /// Unknown rule types are reported as [`Skipped`]; unknown spatial
    /// regions resolve to an empty list.
    pub fn resolve(spec: &GroupSpec, objects: &ObjectRegistry) -> Result<Vec<String>, Skipped> {
        match spec {
            GroupSpec::Members(members) => Ok(members.clone()),
            GroupSpec::Rule(rule) => match rule.kind.as_str() {
                "index" => Ok(Self::resolve_index(&rule.generator, whole_range(rule.id_range))),
                "spatial" => {
                    let condition = rule.condition.clone().unwrap_or_default();
                    match Region::from_condition(&condition) {
                        Some(region) => Ok(Self::resolve_spatial(&rule.generator, &region, objects)),
                        None => {
                            log::warn!(
                                "Unknown spatial region '{}' for generator '{}', group is empty",
                                condition.region,
                                rule.generator
                            );
                            Ok(Vec::new())
                        }
                    }
                }
                other => Err(Skipped::UnknownType(other.to_string())),
            },
        }
    }

    /// `generator/lo ..= generator/hi`, without checking the registry
    pub fn resolve_index(generator: &str, id_range: [i64; 2]) -> Vec<String> {
        let [lo, hi] = id_range;
        (lo..=hi).map(|index| format!("{}/{}", generator, index)).collect()
    }

    /// Registered ids starting with `generator` whose current position lies
    /// in `region`, in registration order
    pub fn resolve_spatial(generator: &str, region: &Region, objects: &ObjectRegistry) -> Vec<String> {
        objects
            .with_prefix(generator)
            .filter(|(_, primitive)| region.contains(&primitive.position()))
            .map(|(id, _)| id.to_string())
            .collect()
    }
}
