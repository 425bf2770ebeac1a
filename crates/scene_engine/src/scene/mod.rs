//! Scene loading and the loaded scene
//!
//! ```text
//! SceneDocument ──load_scene──▶ Scene { ObjectRegistry, GroupRegistry }
//!                                  │
//!                  AnimationLoop ──┘ (positions only)
//! ```
//!
//! A [`Scene`] owns both registries. Membership of every group is fixed when
//! the scene is loaded; animation moves objects but never regroups them.

mod document;
mod loader;
mod registry;

pub use document::{
    CameraHint, DebugOptions, Environment, ObjectDefinition, ObjectSpec, ObjectTemplate,
    RotationSpec, SceneDocument, SceneMetadata,
};
pub use loader::{load_scene, load_scene_with_rng};
pub use registry::{GroupRegistry, ObjectRegistry};

use crate::primitive::Primitive;

/// A loaded scene
#[derive(Debug, Clone)]
pub struct Scene {
    objects: ObjectRegistry,
    groups: GroupRegistry,
    metadata: Option<SceneMetadata>,
    environment: Option<Environment>,
    debug: Option<DebugOptions>,
}

impl Scene {
    /// Scene from already-built registries, without document headers
    pub fn new(objects: ObjectRegistry, groups: GroupRegistry) -> Self {
        Self {
            objects,
            groups,
            metadata: None,
            environment: None,
            debug: None,
        }
    }

    /// Look up an object
    pub fn object(&self, id: &str) -> Option<&Primitive> {
        self.objects.get(id)
    }

    /// Look up an object mutably, e.g. to swap its behavior
    pub fn object_mut(&mut self, id: &str) -> Option<&mut Primitive> {
        self.objects.get_mut(id)
    }

    /// Member ids of a group in registration order (empty for unknown groups)
    pub fn group_members(&self, group_id: &str) -> &[String] {
        self.groups.get(group_id).unwrap_or(&[])
    }

    /// Registered members of a group, skipping dangling ids
    pub fn group_objects(&self, group_id: &str) -> Vec<&Primitive> {
        self.group_members(group_id)
            .iter()
            .filter_map(|id| self.objects.get(id))
            .collect()
    }

    /// Object registry
    pub fn objects(&self) -> &ObjectRegistry {
        &self.objects
    }

    /// Object registry, mutably
    pub fn objects_mut(&mut self) -> &mut ObjectRegistry {
        &mut self.objects
    }

    /// Group registry
    pub fn groups(&self) -> &GroupRegistry {
        &self.groups
    }

    /// `metadata` block of the source document
    pub fn metadata(&self) -> Option<&SceneMetadata> {
        self.metadata.as_ref()
    }

    /// Presentation hints of the source document
    pub fn environment(&self) -> Option<&Environment> {
        self.environment.as_ref()
    }

    /// `debug` block of the source document
    pub fn debug(&self) -> Option<&DebugOptions> {
        self.debug.as_ref()
    }
}
