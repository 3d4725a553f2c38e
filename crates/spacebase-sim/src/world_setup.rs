//! Entity spawn factories for the base world.
//!
//! Creates starter modules, freshly built modules and construction
//! projects with the appropriate component bundles.

use hecs::{Entity, World};
use rand::Rng;

use spacebase_core::blueprints::{Blueprint, StarterModule, STARTING_MODULES};
use spacebase_core::components::*;
use spacebase_core::constants::{COMPLETION_INTEGRITY_MAX, COMPLETION_INTEGRITY_MIN};
use spacebase_core::enums::ModuleStatus;

/// Set up the initial base: the starter modules, oldest first.
pub fn setup_base(world: &mut World, next_ordinal: &mut u64) {
    for starter in &STARTING_MODULES {
        spawn_starter_module(world, starter, next_ordinal);
    }
}

/// Spawn a module that exists before the first tick.
pub fn spawn_starter_module(
    world: &mut World,
    starter: &StarterModule,
    next_ordinal: &mut u64,
) -> Entity {
    let module = Module {
        instance_id: starter.instance_id.to_string(),
        blueprint_id: starter.blueprint_id.to_string(),
        name: starter.name.to_string(),
        category: starter.category.to_string(),
        flavor: starter.flavor.to_string(),
        status: ModuleStatus::Online,
        integrity: starter.integrity,
        rarity: starter.rarity,
        ordinal: take_ordinal(next_ordinal),
    };
    world.spawn((module, starter.effects))
}

/// Spawn the module produced by a finished construction project.
///
/// Integrity is rolled in `[COMPLETION_INTEGRITY_MIN, COMPLETION_INTEGRITY_MAX)`.
pub fn spawn_built_module<R: Rng>(
    world: &mut World,
    rng: &mut R,
    blueprint: &Blueprint,
    project_id: u64,
    next_ordinal: &mut u64,
) -> Entity {
    let module = Module {
        instance_id: format!("{}-{}", blueprint.id, project_id),
        blueprint_id: blueprint.id.to_string(),
        name: blueprint.name.to_string(),
        category: blueprint.category.to_string(),
        flavor: blueprint.description.to_string(),
        status: ModuleStatus::Online,
        integrity: rng.gen_range(COMPLETION_INTEGRITY_MIN..COMPLETION_INTEGRITY_MAX),
        rarity: blueprint.completion_rarity(),
        ordinal: take_ordinal(next_ordinal),
    };
    world.spawn((module, blueprint.effects))
}

/// Spawn a construction project with a full timer.
pub fn spawn_project(
    world: &mut World,
    project_id: u64,
    blueprint: &'static Blueprint,
    current_tick: u64,
) -> Entity {
    world.spawn((Construction {
        project_id,
        blueprint,
        remaining: blueprint.build_ticks,
        started_at_tick: current_tick,
    },))
}

fn take_ordinal(next_ordinal: &mut u64) -> u64 {
    let ordinal = *next_ordinal;
    *next_ordinal += 1;
    ordinal
}
