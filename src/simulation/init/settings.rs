use crate::domain::PairKeyMode;

use super::perf_stats::PerfStats;
use super::WorldCore;

pub(super) fn set_viewport(world: &mut WorldCore, width: f64, height: f64) {
    world.width = width;
    world.height = height;
}

pub(super) fn set_gravity(world: &mut WorldCore, gravity: f64) {
    world.settings.gravity = gravity;
}

pub(super) fn set_pair_key_mode(world: &mut WorldCore, mode: PairKeyMode) {
    world.settings.pair_key_mode = mode;
    world.merge.set_pair_key_mode(mode);
}

pub(super) fn enable_perf_metrics(world: &mut WorldCore, enabled: bool) {
    world.perf_enabled = enabled;
    if !enabled {
        world.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(world: &WorldCore) -> PerfStats {
    world.perf_stats.clone()
}
