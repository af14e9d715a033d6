use crate::body::Body;
use crate::domain::{BodySpec, SceneConfig};
use crate::merge::MergeState;

use super::perf_stats::PerfStats;
use super::random::{seed_state, uniform};
use super::WorldCore;

pub(super) fn create_world_core(width: f64, height: f64, scene: SceneConfig) -> WorldCore {
    let settings = scene.physics.clone();
    WorldCore {
        bodies: spawn_bodies(&scene),
        merge: MergeState::new(&settings),
        settings,
        scene,
        width,
        height,
        frame: 0,
        draw_list: Vec::with_capacity(64),
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}

/// Swap in a new scene. Canvas size and perf toggle carry over.
pub(super) fn load_scene(world: &mut WorldCore, scene: SceneConfig) {
    world.bodies = spawn_bodies(&scene);
    world.settings = scene.physics.clone();
    world.merge = MergeState::new(&world.settings);
    world.scene = scene;
    world.frame = 0;
    world.draw_list.clear();
    world.perf_stats.reset();
    console_log!("scene loaded: {} bodies", world.bodies.len());
}

/// Bodies in scene order. A missing `vx` is drawn from the seeded RNG in [-2, 2).
fn spawn_bodies(scene: &SceneConfig) -> Vec<Body> {
    let mut rng_state = seed_state(scene.physics.seed);
    scene
        .bodies
        .iter()
        .map(|spec| {
            let vx = spec.vx.unwrap_or_else(|| uniform(&mut rng_state, -2.0, 2.0));
            Body::from_spec(spec, vx)
        })
        .collect()
}

/// The live world written back out as a scene (positions, looks and
/// horizontal speeds as they are now).
pub(super) fn snapshot_scene(world: &WorldCore) -> SceneConfig {
    let bodies = world
        .bodies
        .iter()
        .map(|body| {
            let mut spec = BodySpec::new(body.x, body.y, body.radius, body.color, body.mass);
            spec.vx = Some(body.vx);
            spec
        })
        .collect();
    SceneConfig {
        physics: world.settings.clone(),
        bodies,
    }
}
