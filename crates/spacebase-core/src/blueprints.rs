//! The fixed module catalog and the modules every base starts with.

use serde::Serialize;

use crate::components::ModuleEffects;
use crate::constants::EXPERIMENTAL_TAG;
use crate::enums::Rarity;
use crate::types::ResourceSet;

/// Immutable template for a buildable module.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Blueprint {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    /// Resources deducted when the build is queued. Unlisted kinds cost nothing.
    pub cost: ResourceSet,
    /// Build duration in ticks (always > 0).
    pub build_ticks: u32,
    pub effects: ModuleEffects,
    pub tags: &'static [&'static str],
}

impl Blueprint {
    /// Rarity assigned to modules built from this blueprint.
    pub fn completion_rarity(&self) -> Rarity {
        if self.tags.contains(&EXPERIMENTAL_TAG) {
            Rarity::Prototype
        } else {
            Rarity::Advanced
        }
    }
}

/// A module that exists before the first tick.
#[derive(Debug, Clone, Copy)]
pub struct StarterModule {
    pub instance_id: &'static str,
    pub blueprint_id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub flavor: &'static str,
    pub effects: ModuleEffects,
    pub integrity: u32,
    pub rarity: Rarity,
}

const fn module_effects(rates: ResourceSet, capacity: ResourceSet, integrity: f64) -> ModuleEffects {
    ModuleEffects {
        rates,
        capacity,
        integrity,
    }
}

/// Every blueprint the player can build, in menu order.
pub static BLUEPRINTS: [Blueprint; 6] = [
    Blueprint {
        id: "solar-array",
        name: "Solar Array",
        category: "Power",
        description: "Extends the outer panels to keep fusion reserves topped up.",
        cost: ResourceSet {
            alloys: 120.0,
            credits: 80.0,
            ..ResourceSet::ZERO
        },
        build_ticks: 8,
        effects: module_effects(
            ResourceSet {
                energy: 6.0,
                ..ResourceSet::ZERO
            },
            ResourceSet {
                energy: 240.0,
                ..ResourceSet::ZERO
            },
            6.0,
        ),
        tags: &["production", "power"],
    },
    Blueprint {
        id: "fabricator",
        name: "Alloy Fabricator",
        category: "Industry",
        description: "Breaks down scrap to feed the docking bay assembly lines.",
        cost: ResourceSet {
            energy: 80.0,
            credits: 120.0,
            ..ResourceSet::ZERO
        },
        build_ticks: 10,
        effects: module_effects(
            ResourceSet {
                alloys: 2.6,
                ..ResourceSet::ZERO
            },
            ResourceSet {
                alloys: 160.0,
                ..ResourceSet::ZERO
            },
            4.0,
        ),
        tags: &["production", "crafting"],
    },
    Blueprint {
        id: "research-lab",
        name: "Quantum Lab",
        category: "Research",
        description: "Hosts zero-g research pods pushing mantle tech forward.",
        cost: ResourceSet {
            energy: 120.0,
            alloys: 80.0,
            credits: 180.0,
            ..ResourceSet::ZERO
        },
        build_ticks: 12,
        effects: module_effects(
            ResourceSet {
                research: 1.4,
                ..ResourceSet::ZERO
            },
            ResourceSet {
                research: 120.0,
                ..ResourceSet::ZERO
            },
            5.0,
        ),
        tags: &["science", "prototype"],
    },
    Blueprint {
        id: "hab-ring",
        name: "Habitat Ring",
        category: "Habitation",
        description: "Adds living quarters, boosting crew morale and headcount.",
        cost: ResourceSet {
            energy: 90.0,
            alloys: 140.0,
            credits: 60.0,
            ..ResourceSet::ZERO
        },
        build_ticks: 9,
        effects: module_effects(
            ResourceSet::ZERO,
            ResourceSet {
                crew: 12.0,
                ..ResourceSet::ZERO
            },
            6.0,
        ),
        tags: &["support", "crew"],
    },
    Blueprint {
        id: "docking-bay",
        name: "Docking Bay",
        category: "Logistics",
        description: "Unlocks shuttle trade routes for rapid credit generation.",
        cost: ResourceSet {
            energy: 140.0,
            alloys: 200.0,
            credits: 140.0,
            ..ResourceSet::ZERO
        },
        build_ticks: 14,
        effects: module_effects(
            ResourceSet {
                credits: 3.5,
                ..ResourceSet::ZERO
            },
            ResourceSet {
                credits: 220.0,
                ..ResourceSet::ZERO
            },
            7.0,
        ),
        tags: &["trade", "production"],
    },
    Blueprint {
        id: "shield-web",
        name: "Atmospheric Shield Web",
        category: "Defense",
        description: "Laces the hull with adaptive shielding, preventing outages.",
        cost: ResourceSet {
            energy: 180.0,
            alloys: 160.0,
            research: 120.0,
            ..ResourceSet::ZERO
        },
        build_ticks: 16,
        effects: module_effects(ResourceSet::ZERO, ResourceSet::ZERO, 12.0),
        tags: &["defense", "experimental"],
    },
];

/// Modules online when a session begins, oldest first.
pub static STARTING_MODULES: [StarterModule; 3] = [
    StarterModule {
        instance_id: "core-1",
        blueprint_id: "command-core",
        name: "Command Core",
        category: "Core",
        flavor: "Primary operations block keeping the base afloat.",
        effects: module_effects(
            ResourceSet {
                energy: 2.5,
                credits: 1.0,
                research: 0.5,
                ..ResourceSet::ZERO
            },
            ResourceSet {
                energy: 260.0,
                credits: 120.0,
                research: 60.0,
                ..ResourceSet::ZERO
            },
            16.0,
        ),
        integrity: 98,
        rarity: Rarity::Core,
    },
    StarterModule {
        instance_id: "reactor-1",
        blueprint_id: "fusion-reactor",
        name: "Fusion Reactor",
        category: "Power",
        flavor: "Produces steady energy for the build deck.",
        effects: module_effects(
            ResourceSet {
                energy: 8.0,
                ..ResourceSet::ZERO
            },
            ResourceSet {
                energy: 320.0,
                ..ResourceSet::ZERO
            },
            8.0,
        ),
        integrity: 94,
        rarity: Rarity::Advanced,
    },
    StarterModule {
        instance_id: "fabricator-1",
        blueprint_id: "fabricator",
        name: "Starter Fabricator",
        category: "Industry",
        flavor: "Turning scavenged hulls into fresh alloys.",
        effects: module_effects(
            ResourceSet {
                alloys: 1.6,
                ..ResourceSet::ZERO
            },
            ResourceSet {
                alloys: 140.0,
                ..ResourceSet::ZERO
            },
            6.0,
        ),
        integrity: 92,
        rarity: Rarity::Advanced,
    },
];

/// Look up a blueprint by id.
pub fn find_blueprint(id: &str) -> Option<&'static Blueprint> {
    BLUEPRINTS.iter().find(|bp| bp.id == id)
}

/// The blueprint selected when a session begins.
pub fn default_blueprint() -> &'static Blueprint {
    &BLUEPRINTS[0]
}

/// Storage available at session start: base capacity plus starter modules.
pub fn starting_capacity() -> ResourceSet {
    let mut capacity = crate::constants::BASE_CAPACITY;
    for starter in &STARTING_MODULES {
        capacity += &starter.effects.capacity;
    }
    capacity
}
