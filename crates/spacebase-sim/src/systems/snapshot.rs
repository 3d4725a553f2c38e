//! Snapshot system: queries the ECS world and builds a complete BaseSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use spacebase_core::blueprints::Blueprint;
use spacebase_core::components::*;
use spacebase_core::state::*;
use spacebase_core::types::{ResourceSet, SimTime};

use crate::mission_log::MissionLog;
use crate::systems::construction::progress_percent;
use crate::systems::economy;

/// Build a complete BaseSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    ledger: &ResourceSet,
    selected: &Blueprint,
    log: &MissionLog,
) -> BaseSnapshot {
    BaseSnapshot {
        time: *time,
        resources: build_resources(world, ledger),
        base_integrity: economy::base_integrity(world),
        modules: build_modules(world),
        projects: build_projects(world),
        selected_blueprint: selected.id.to_string(),
        log: log.to_vec(),
    }
}

/// One gauge per resource kind.
fn build_resources(world: &World, ledger: &ResourceSet) -> Vec<ResourceView> {
    let totals = economy::totals(world);
    ledger
        .iter()
        .map(|(kind, quantity)| {
            let capacity = totals.capacity[kind];
            let fill_percent = if capacity > 0.0 {
                ((quantity / capacity) * 100.0).round().clamp(0.0, 100.0) as u32
            } else {
                0
            };
            ResourceView {
                kind,
                quantity,
                capacity,
                rate: totals.rates[kind],
                fill_percent,
            }
        })
        .collect()
}

/// Module cards, oldest first.
fn build_modules(world: &World) -> Vec<ModuleView> {
    let mut modules: Vec<(u64, ModuleView)> = world
        .query::<(&Module, &ModuleEffects)>()
        .iter()
        .map(|(_, (module, effects))| {
            (
                module.ordinal,
                ModuleView {
                    instance_id: module.instance_id.clone(),
                    blueprint_id: module.blueprint_id.clone(),
                    name: module.name.clone(),
                    category: module.category.clone(),
                    flavor: module.flavor.clone(),
                    status: module.status,
                    integrity: module.integrity,
                    rarity: module.rarity,
                    effects: *effects,
                },
            )
        })
        .collect();
    modules.sort_by_key(|(ordinal, _)| *ordinal);
    modules.into_iter().map(|(_, view)| view).collect()
}

/// Construction queue rows, in queue order.
fn build_projects(world: &World) -> Vec<ProjectView> {
    let mut projects: Vec<ProjectView> = world
        .query::<&Construction>()
        .iter()
        .map(|(_, project)| ProjectView {
            project_id: project.project_id,
            blueprint_id: project.blueprint.id.to_string(),
            name: project.blueprint.name.to_string(),
            remaining: project.remaining,
            build_ticks: project.blueprint.build_ticks,
            progress_percent: progress_percent(project.blueprint.build_ticks, project.remaining),
            started_at_tick: project.started_at_tick,
        })
        .collect();
    projects.sort_by_key(|p| p.project_id);
    projects
}
