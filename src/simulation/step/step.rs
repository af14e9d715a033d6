use crate::collision::{resolve_collisions, ContactStats};
use crate::integrator::integrate;
use crate::merge::explode;

use super::{PerfTimer, WorldCore};

/// One frame.
///
/// 1. Run the split timer; a due split happens before any physics.
/// 2. Each free body in registry order is integrated and then collided
///    against the others. A body absorbed earlier in the same frame is
///    skipped when its turn comes.
pub(super) fn step(world: &mut WorldCore, elapsed_ms: f64) {
    let perf_on = world.perf_enabled;
    if perf_on {
        world.perf_stats.reset();
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    // === SPLIT ===
    let mut splits = 0;
    if world.merge.advance(elapsed_ms) {
        let restored = explode(&mut world.bodies, &mut world.merge);
        splits = 1;
        console_log!("split: {} absorbed bodies restored", restored);
    }

    // === PHYSICS ===
    let mut contacts = ContactStats::default();
    let mut integrate_ms = 0.0;
    let mut collide_ms = 0.0;

    for i in 0..world.bodies.len() {
        let body = &world.bodies[i];
        if body.dragging || body.absorbed {
            continue;
        }

        if perf_on {
            let t0 = PerfTimer::start();
            integrate(&mut world.bodies[i], &world.settings, world.width, world.height);
            integrate_ms += t0.elapsed_ms();

            let t1 = PerfTimer::start();
            resolve_collisions(&mut world.bodies, i, &mut world.merge, &mut contacts);
            collide_ms += t1.elapsed_ms();
        } else {
            integrate(&mut world.bodies[i], &world.settings, world.width, world.height);
            resolve_collisions(&mut world.bodies, i, &mut world.merge, &mut contacts);
        }
    }

    world.frame += 1;

    if let Some(t) = step_start {
        let stats = &mut world.perf_stats;
        stats.integrate_ms = integrate_ms;
        stats.collide_ms = collide_ms;
        stats.pairs_checked = contacts.pairs_checked;
        stats.contacts = contacts.contacts;
        stats.merges = contacts.merges;
        stats.splits = splits;
        stats.live_bodies = world.bodies.iter().filter(|b| b.is_live()).count() as u32;
        stats.step_ms = t.elapsed_ms();
    }
}
