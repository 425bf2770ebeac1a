//! Animating loaded scenes

use crate::animation::{tick, AnimationLoop, FrameInfo, FrameSink};
use crate::behavior::{Behavior, BehaviorFactory, Motion};
use crate::config::FileFormat;
use crate::foundation::math::{distance, Vec3};
use crate::scene::{load_scene_with_rng, Scene, SceneDocument};
use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn load(json: &str, seed: u64) -> Scene {
    let document = SceneDocument::from_str_with_format(json, FileFormat::Json).unwrap();
    load_scene_with_rng(&document, &mut StdRng::seed_from_u64(seed)).unwrap()
}

#[test]
fn test_spatial_membership_is_a_load_time_snapshot() {
    let mut scene = load(
        r#"{"objectDefinitions": [{"id": "drift", "type": "point", "behavior": "orbit",
            "template": {"size": 0.1},
            "positions": {"pattern": "line",
                "parameters": {"start": [-2, 0, 0], "end": [2, 0, 0], "count": 9}}}],
            "groups": {"near": {"type": "spatial", "generator": "drift",
                "condition": {"region": "sphere", "center": [0, 0, 0], "radius": 1}}}}"#,
        3,
    );

    let before = scene.group_members("near").to_vec();
    assert_eq!(before, vec!["drift/2", "drift/3", "drift/4", "drift/5", "drift/6"]);

    // Orbits carry every point away from where it was grouped.
    for _ in 0..50 {
        tick(scene.objects_mut(), 1.0);
    }
    assert_eq!(scene.group_members("near"), before.as_slice());
}

#[test]
fn test_translation_reverses_within_one_step() {
    let mut rng = StdRng::seed_from_u64(99);
    let anchor = Vec3::new(0.3, -0.2, 1.0);
    let delta = 0.016;

    for _ in 0..20 {
        let mut behavior = BehaviorFactory::create_translation(anchor, &mut rng);
        let Motion::Translation { distance: limit, speed, .. } = behavior.motion else {
            panic!("expected translation");
        };
        for _ in 0..5_000 {
            let position = behavior.update(delta);
            assert!(distance(&position, &anchor) <= limit + speed * delta + 1e-4);
        }
    }
}

#[test]
fn test_rotation_preserves_distance_from_origin() {
    let start = Vec3::new(1.0, 2.0, -0.5);
    let mut behavior = BehaviorFactory::create_rotation(start, &mut StdRng::seed_from_u64(4));
    for _ in 0..1_000 {
        behavior.update(0.016);
    }
    assert_relative_eq!(behavior.position().magnitude(), start.magnitude(), epsilon = 1e-3);
}

struct CentroidProbe {
    group: &'static str,
    centroids: Vec<Vec3>,
}

impl FrameSink for CentroidProbe {
    fn present(&mut self, _frame: &FrameInfo, scene: &Scene) -> Result<(), Box<dyn std::error::Error>> {
        let members = scene.group_objects(self.group);
        if members.is_empty() {
            return Err(format!("group '{}' is empty", self.group).into());
        }
        let sum: Vec3 = members.iter().map(|p| p.position()).sum();
        self.centroids.push(sum / members.len() as f32);
        Ok(())
    }
}

#[test]
fn test_loop_presents_moving_group() {
    let mut scene = load(
        r#"{"objects": {
                "a": {"type": "point", "pos": [1, 0, 0]},
                "b": {"type": "point", "pos": [-1, 0, 0]}},
            "groups": {"pair": ["a", "b"]}}"#,
        0,
    );
    scene
        .object_mut("a")
        .unwrap()
        .set_behavior(Behavior::new(
            Vec3::new(1.0, 0.0, 0.0),
            Motion::Translation { direction: Vec3::y(), distance: 10.0, speed: 2.0 },
        ));

    let mut probe = CentroidProbe { group: "pair", centroids: Vec::new() };
    let mut animation = AnimationLoop::new(0.5);
    for _ in 0..3 {
        animation.run_frame(&mut scene, &mut probe).unwrap();
    }

    assert_eq!(animation.frame_count(), 3);
    assert_eq!(probe.centroids.len(), 3);
    assert_relative_eq!(probe.centroids[0], Vec3::new(0.0, 0.5, 0.0));
    assert_relative_eq!(probe.centroids[2], Vec3::new(0.0, 1.5, 0.0));
}

#[test]
fn test_empty_group_sink_error_stops_driver() {
    let mut scene = load(r#"{"objects": {"a": {"type": "point", "pos": [0, 0, 0]}}}"#, 0);
    let mut probe = CentroidProbe { group: "missing", centroids: Vec::new() };
    let mut animation = AnimationLoop::default();

    let err = animation.run_frame(&mut scene, &mut probe).unwrap_err();
    assert!(err.to_string().contains("group 'missing' is empty"));
}
