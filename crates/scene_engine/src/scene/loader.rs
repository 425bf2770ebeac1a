//! Scene loader
//!
//! Builds the object and group registries from a [`SceneDocument`]. Objects
//! are registered first (flat entries, then pattern definitions in document
//! order); groups are resolved afterwards against the finished registry.
//! Any error aborts the load and nothing is returned.

use rand::Rng;

use super::document::{ObjectDefinition, ObjectSpec, RotationSpec, SceneDocument};
use super::{GroupRegistry, ObjectRegistry, Scene};
use crate::behavior::{Behavior, BehaviorFactory, BehaviorKind};
use crate::error::{SceneError, SceneResult};
use crate::foundation::math::{vec3, Quat, Vec3};
use crate::foundation::time::Stopwatch;
use crate::group::{GroupResolver, Skipped};
use crate::pattern::{Pattern, Placement};
use crate::primitive::{ObjectFactory, ObjectType, Primitive, Size, SizeSpec};

/// Load a scene, drawing behavior parameters from the thread-local RNG
pub fn load_scene(document: &SceneDocument) -> SceneResult<Scene> {
    load_scene_with_rng(document, &mut rand::thread_rng())
}

/// Load a scene, drawing behavior parameters from `rng`
///
/// With a seeded `rng` two loads of the same document are identical.
pub fn load_scene_with_rng<R: Rng + ?Sized>(document: &SceneDocument, rng: &mut R) -> SceneResult<Scene> {
    let stopwatch = Stopwatch::start_new();
    let debug = document.debug.clone().unwrap_or_default();

    if let Some(metadata) = &document.metadata {
        log::info!("Loading scene v{}: {}", metadata.version, metadata.description);
    }

    let mut objects = ObjectRegistry::new();
    for (id, spec) in &document.objects {
        let primitive = build_flat_object(id, spec, rng)?;
        register(&mut objects, id.clone(), primitive);
    }

    for definition in &document.object_definitions {
        let generated = build_definition(definition, debug.validate_constraints, rng)?;
        log::debug!("Definition '{}' produced {} objects", definition.id, generated.len());
        for (id, primitive) in generated {
            register(&mut objects, id, primitive);
        }
    }

    let mut groups = GroupRegistry::new();
    for (group_id, spec) in &document.groups {
        match GroupResolver::resolve(spec, &objects) {
            Ok(members) => {
                log::debug!("Group '{}' resolved to {} members", group_id, members.len());
                groups.insert(group_id.clone(), members);
            }
            Err(Skipped::UnknownType(kind)) if kind.is_empty() => {
                log::warn!("Skipping group '{}': no group type given", group_id);
            }
            Err(Skipped::UnknownType(kind)) => {
                log::warn!("Skipping group '{}': unsupported group type '{}'", group_id, kind);
            }
        }
    }

    log::info!("Scene loaded: {} objects, {} groups", objects.len(), groups.len());
    if debug.perf_metrics {
        log::info!("Scene load took {:.3} ms", stopwatch.elapsed_millis());
    }

    Ok(Scene {
        objects,
        groups,
        metadata: document.metadata.clone(),
        environment: document.environment.clone(),
        debug: document.debug.clone(),
    })
}

fn register(objects: &mut ObjectRegistry, id: String, primitive: Primitive) {
    if objects.contains(&id) {
        log::warn!("Object id '{}' registered twice, keeping the later one", id);
    }
    objects.insert(id, primitive);
}

fn object_type(id: &str, kind: &str) -> SceneResult<ObjectType> {
    ObjectType::parse(kind).ok_or_else(|| SceneError::UnsupportedType {
        id: id.to_string(),
        object_type: kind.to_string(),
    })
}

fn size(id: &str, spec: &SizeSpec) -> SceneResult<Size> {
    spec.parse().ok_or_else(|| SceneError::MalformedSize {
        id: id.to_string(),
        size: spec.describe(),
    })
}

fn behavior<R: Rng + ?Sized>(kind: Option<BehaviorKind>, position: Vec3, rng: &mut R) -> Option<Behavior> {
    kind.map(|kind| BehaviorFactory::create(kind, position, rng))
}

fn build_flat_object<R: Rng + ?Sized>(id: &str, spec: &ObjectSpec, rng: &mut R) -> SceneResult<Primitive> {
    let object_type = object_type(id, &spec.kind)?;
    let size = size(id, &spec.size)?;
    let position = vec3(spec.pos);
    let orientation = spec.rot.as_ref().map_or_else(Quat::identity, RotationSpec::orientation);

    let length = match object_type {
        ObjectType::Point => 0.0,
        ObjectType::Line => size.length,
    };
    let placement = Placement::segment(position, orientation, length);

    Ok(ObjectFactory::create(
        object_type,
        &placement,
        size,
        spec.rgba.clone(),
        behavior(spec.behavior, position, rng),
    ))
}

fn build_definition<R: Rng + ?Sized>(
    definition: &ObjectDefinition,
    validate: bool,
    rng: &mut R,
) -> SceneResult<Vec<(String, Primitive)>> {
    let object_type = object_type(&definition.id, &definition.kind)?;
    let size = size(&definition.id, &definition.template.size)?;

    if definition.positions.kind != "pattern" {
        log::warn!(
            "Definition '{}' has positions type '{}', treating it as a pattern",
            definition.id,
            definition.positions.kind
        );
    }
    let pattern = Pattern::from_definition(&definition.positions, object_type)?;
    let placements = pattern.generate(object_type, rng)?;

    if validate {
        for problem in pattern.violations() {
            log::warn!("Definition '{}': {}", definition.id, problem);
        }
        if let Some(expected) = definition.count {
            if expected != placements.len() {
                log::warn!(
                    "Definition '{}' declares {} objects but its {} pattern produced {}",
                    definition.id,
                    expected,
                    pattern.name(),
                    placements.len()
                );
            }
        }
    }

    Ok(placements
        .iter()
        .enumerate()
        .map(|(index, placement)| {
            let primitive = ObjectFactory::create(
                object_type,
                placement,
                size,
                definition.template.rgba.clone(),
                behavior(definition.behavior, placement.position, rng),
            );
            (format!("{}/{}", definition.id, index), primitive)
        })
        .collect())
}
