//! Construction system: counts down project timers and brings finished
//! modules online.

use hecs::{Entity, World};
use rand::Rng;

use spacebase_core::blueprints::Blueprint;
use spacebase_core::components::Construction;
use spacebase_core::enums::LogTone;

use crate::mission_log::MissionLog;
use crate::world_setup;

/// Advance every project by one tick and complete those that reach zero.
///
/// All completions of a tick are applied together, in queue order, before
/// the finished projects are despawned. Returns the number completed.
pub fn run<R: Rng>(
    world: &mut World,
    rng: &mut R,
    next_module_ordinal: &mut u64,
    log: &mut MissionLog,
    despawn_buffer: &mut Vec<Entity>,
) -> usize {
    despawn_buffer.clear();

    let mut completed: Vec<(u64, &'static Blueprint)> = Vec::new();
    for (entity, project) in world.query_mut::<&mut Construction>() {
        project.remaining = project.remaining.saturating_sub(1);
        if project.remaining == 0 {
            completed.push((project.project_id, project.blueprint));
            despawn_buffer.push(entity);
        }
    }
    completed.sort_by_key(|(project_id, _)| *project_id);

    for &(project_id, blueprint) in &completed {
        world_setup::spawn_built_module(world, rng, blueprint, project_id, next_module_ordinal);
        log.push(
            LogTone::Success,
            format!("{} is now online. Rates and integrity updated.", blueprint.name),
        );
        log::debug!("project {project_id} completed: {}", blueprint.id);
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    completed.len()
}

/// Build progress for display, 0-100.
pub fn progress_percent(build_ticks: u32, remaining: u32) -> u32 {
    if build_ticks == 0 {
        return 100;
    }
    let done = f64::from(build_ticks.saturating_sub(remaining));
    (done / f64::from(build_ticks) * 100.0).round().max(0.0) as u32
}
