//! Simulation engine for the base economy.
//!
//! `BaseSimulation` owns the hecs ECS world, the resource ledger and the
//! mission log. Player actions mutate state immediately; `tick` advances the
//! economy by exactly one unit of simulated time. Completely headless, and
//! generic over its random source so tests can script outcomes.

use hecs::{Entity, World};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use spacebase_core::blueprints::{default_blueprint, find_blueprint, Blueprint};
use spacebase_core::commands::PlayerCommand;
use spacebase_core::components::{Construction, Module, ModuleEffects};
use spacebase_core::constants::*;
use spacebase_core::enums::LogTone;
use spacebase_core::state::BaseSnapshot;
use spacebase_core::types::{ResourceSet, SimTime};

use crate::config::SimConfig;
use crate::mission_log::MissionLog;
use crate::systems::{self, economy::EconomyTotals};
use crate::world_setup;

/// What a player action did.
///
/// Rejections are ordinary outcomes, not errors; the mission log explains
/// them to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// State changed.
    Applied,
    /// Not enough resources. A warning was logged and nothing else changed.
    Rejected,
    /// The action ran but left the economy as it was (e.g. an empty scan).
    Unchanged,
    /// Referenced an unknown blueprint or project. Nothing happened.
    Ignored,
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct BaseSimulation<R = ChaCha8Rng> {
    world: World,
    time: SimTime,
    ledger: ResourceSet,
    log: MissionLog,
    selected: &'static Blueprint,
    rng: R,
    next_project_id: u64,
    next_module_ordinal: u64,
    despawn_buffer: Vec<Entity>,
}

impl BaseSimulation<ChaCha8Rng> {
    /// Create a new simulation seeded from the config.
    pub fn new(config: SimConfig) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> BaseSimulation<R> {
    /// Create a new simulation drawing randomness from `rng`.
    ///
    /// `config.seed` is not used; the caller owns seeding.
    pub fn with_rng(config: SimConfig, rng: R) -> Self {
        let mut world = World::new();
        let mut next_module_ordinal = 0;
        world_setup::setup_base(&mut world, &mut next_module_ordinal);

        let capacity = systems::economy::totals(&world).capacity;
        let mut ledger = ResourceSet::ZERO;
        for (kind, value) in config.starting_resources.iter() {
            let clamped = value.min(capacity[kind]).max(0.0);
            if clamped != value {
                log::warn!("starting {kind:?} {value} clamped to {clamped}");
            }
            ledger[kind] = clamped;
        }

        let selected = match config.selected_blueprint.as_deref() {
            None => default_blueprint(),
            Some(id) => find_blueprint(id).unwrap_or_else(|| {
                log::warn!("unknown starting blueprint '{id}', using default");
                default_blueprint()
            }),
        };

        Self {
            world,
            time: SimTime::default(),
            ledger,
            log: MissionLog::booted(),
            selected,
            rng,
            next_project_id: 0,
            next_module_ordinal,
            despawn_buffer: Vec::new(),
        }
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    ///
    /// Production uses the totals in effect before any completion in this
    /// tick; project timers are processed afterwards.
    pub fn tick(&mut self) -> BaseSnapshot {
        systems::economy::run(&self.world, &mut self.ledger);
        let completed = systems::construction::run(
            &mut self.world,
            &mut self.rng,
            &mut self.next_module_ordinal,
            &mut self.log,
            &mut self.despawn_buffer,
        );
        self.time.advance();

        if completed > 0 {
            log::debug!("tick {}: {completed} module(s) online", self.time.tick);
        }
        self.snapshot()
    }

    /// Apply a player command immediately.
    pub fn apply(&mut self, command: PlayerCommand) -> ActionOutcome {
        log::debug!("applying {command:?}");
        match command {
            PlayerCommand::SelectBlueprint { blueprint_id } => self.select_blueprint(&blueprint_id),
            PlayerCommand::QueueBuild { blueprint_id } => self.queue_build(&blueprint_id),
            PlayerCommand::QueueSelected => self.queue_selected(),
            PlayerCommand::BoostProject { project_id } => self.boost_project(project_id),
            PlayerCommand::SupplyDrop => self.trigger_supply_drop(),
            PlayerCommand::DeepScan => self.trigger_deep_scan(),
            PlayerCommand::ClearLog => {
                self.clear_log();
                ActionOutcome::Applied
            }
        }
    }

    /// Choose the blueprint used by `queue_selected`.
    pub fn select_blueprint(&mut self, blueprint_id: &str) -> ActionOutcome {
        match find_blueprint(blueprint_id) {
            Some(blueprint) => {
                self.selected = blueprint;
                ActionOutcome::Applied
            }
            None => {
                log::warn!("select: unknown blueprint '{blueprint_id}'");
                ActionOutcome::Ignored
            }
        }
    }

    /// Queue a build if every cost is covered; otherwise log a warning.
    pub fn queue_build(&mut self, blueprint_id: &str) -> ActionOutcome {
        let Some(blueprint) = find_blueprint(blueprint_id) else {
            log::warn!("queue: unknown blueprint '{blueprint_id}'");
            return ActionOutcome::Ignored;
        };
        self.queue_blueprint(blueprint)
    }

    /// Queue the currently selected blueprint.
    pub fn queue_selected(&mut self) -> ActionOutcome {
        self.queue_blueprint(self.selected)
    }

    fn queue_blueprint(&mut self, blueprint: &'static Blueprint) -> ActionOutcome {
        if !systems::economy::can_afford(&self.ledger, &blueprint.cost) {
            self.log.push(
                LogTone::Warning,
                format!("Insufficient resources to build {}.", blueprint.name),
            );
            return ActionOutcome::Rejected;
        }

        systems::economy::spend(&mut self.ledger, &blueprint.cost);
        let project_id = self.next_project_id;
        self.next_project_id += 1;
        world_setup::spawn_project(&mut self.world, project_id, blueprint, self.time.tick);
        self.log.push(
            LogTone::Info,
            format!("{} added to construction queue.", blueprint.name),
        );
        ActionOutcome::Applied
    }

    /// Spend energy to cut `BOOST_TICKS` from a project's timer.
    ///
    /// Only the timer moves; a project boosted to zero completes on the
    /// next tick.
    pub fn boost_project(&mut self, project_id: u64) -> ActionOutcome {
        if self.project_remaining(project_id).is_none() {
            log::warn!("boost: unknown project {project_id}");
            return ActionOutcome::Ignored;
        }

        if self.ledger.energy < BOOST_ENERGY_COST {
            self.log.push(
                LogTone::Warning,
                "Not enough energy to overclock build drones.",
            );
            return ActionOutcome::Rejected;
        }

        self.ledger.energy = (self.ledger.energy - BOOST_ENERGY_COST).max(0.0);
        for (_entity, project) in self.world.query_mut::<&mut Construction>() {
            if project.project_id == project_id {
                project.remaining = project.remaining.saturating_sub(BOOST_TICKS);
            }
        }
        self.log.push(
            LogTone::Success,
            format!("Drones overclocked: build time reduced by {BOOST_TICKS}s."),
        );
        ActionOutcome::Applied
    }

    /// Receive a supply shuttle. Each reward is clamped to capacity.
    pub fn trigger_supply_drop(&mut self) -> ActionOutcome {
        systems::economy::grant(&self.world, &mut self.ledger, &SUPPLY_DROP_REWARD);
        self.log.push(
            LogTone::Success,
            "Supply shuttle docked: alloys and credits delivered.",
        );
        ActionOutcome::Applied
    }

    /// Roll a deep scan. On success the oldest module's alloy rate grows by
    /// `DEEP_SCAN_ALLOY_BONUS`, stacking with earlier finds.
    pub fn trigger_deep_scan(&mut self) -> ActionOutcome {
        if !self.rng.gen_bool(DEEP_SCAN_SUCCESS_CHANCE) {
            self.log.push(
                LogTone::Info,
                "Scan returned nominal. No immediate threats detected.",
            );
            return ActionOutcome::Unchanged;
        }

        self.log.push(
            LogTone::Success,
            "Deep scan found salvage pockets. Alloy yield improved temporarily.",
        );

        let first = self
            .world
            .query::<&Module>()
            .iter()
            .min_by_key(|(_, module)| module.ordinal)
            .map(|(entity, _)| entity);
        match first.and_then(|entity| self.world.query_one_mut::<&mut ModuleEffects>(entity).ok()) {
            Some(effects) => {
                effects.rates.alloys += DEEP_SCAN_ALLOY_BONUS;
                ActionOutcome::Applied
            }
            None => ActionOutcome::Unchanged,
        }
    }

    /// Empty the mission log.
    pub fn clear_log(&mut self) {
        self.log.clear();
    }

    /// Build a snapshot of the current state without advancing time.
    pub fn snapshot(&self) -> BaseSnapshot {
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            &self.ledger,
            self.selected,
            &self.log,
        )
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Current resource quantities.
    pub fn resources(&self) -> ResourceSet {
        self.ledger
    }

    /// Capacity and production rates derived from current modules.
    pub fn totals(&self) -> EconomyTotals {
        systems::economy::totals(&self.world)
    }

    /// Overall base integrity, 0-100.
    pub fn base_integrity(&self) -> u32 {
        systems::economy::base_integrity(&self.world)
    }

    /// The blueprint `queue_selected` will build.
    pub fn selected_blueprint(&self) -> &'static Blueprint {
        self.selected
    }

    /// Get a read-only reference to the mission log.
    pub fn log(&self) -> &MissionLog {
        &self.log
    }

    /// Number of projects still under construction.
    pub fn project_count(&self) -> usize {
        self.world.query::<&Construction>().iter().count()
    }

    /// Number of active modules.
    pub fn module_count(&self) -> usize {
        self.world.query::<&Module>().iter().count()
    }

    /// Remaining ticks of a project, or `None` if it does not exist.
    pub fn project_remaining(&self, project_id: u64) -> Option<u32> {
        self.world
            .query::<&Construction>()
            .iter()
            .find(|(_, project)| project.project_id == project_id)
            .map(|(_, project)| project.remaining)
    }
}
