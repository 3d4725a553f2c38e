//! Economy system: derived totals and per-tick production.
//!
//! Capacity, rates and integrity are never stored. They are summed from the
//! modules in the world every time they are read.

use hecs::World;

use spacebase_core::components::{Module, ModuleEffects};
use spacebase_core::constants::*;
use spacebase_core::enums::ResourceKind;
use spacebase_core::types::ResourceSet;

/// Storage ceilings and production rates in effect right now.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EconomyTotals {
    pub capacity: ResourceSet,
    pub rates: ResourceSet,
}

/// Sum base values and every module's effects.
pub fn totals(world: &World) -> EconomyTotals {
    let mut capacity = BASE_CAPACITY;
    let mut rates = BASE_RATES;
    for (_entity, effects) in world.query::<&ModuleEffects>().iter() {
        capacity += &effects.capacity;
        rates += &effects.rates;
    }
    EconomyTotals { capacity, rates }
}

/// Overall base integrity, 0-100.
///
/// Blends half the summed flat contributions with the average module
/// integrity, then scales down by 1.5.
pub fn base_integrity(world: &World) -> u32 {
    let mut flat = 0.0;
    for (_entity, effects) in world.query::<&ModuleEffects>().iter() {
        flat += effects.integrity;
    }

    let mut sum = 0.0;
    let mut count = 0u32;
    for (_entity, module) in world.query::<&Module>().iter() {
        sum += f64::from(module.integrity);
        count += 1;
    }
    let average = if count == 0 {
        EMPTY_BASE_INTEGRITY
    } else {
        sum / f64::from(count)
    };

    let blended = ((flat / 2.0 + average) / 1.5).round();
    (blended.max(0.0) as u32).min(MAX_INTEGRITY)
}

/// Round a ledger value to one decimal place, half-up.
pub fn round_ledger(value: f64) -> f64 {
    ((value + f64::EPSILON) * LEDGER_PRECISION).round() / LEDGER_PRECISION
}

/// Add one tick of production to the ledger and clamp to capacity.
///
/// Uses the totals in effect at the start of the tick.
pub fn run(world: &World, ledger: &mut ResourceSet) {
    let totals = totals(world);
    for kind in ResourceKind::ALL {
        let produced = round_ledger(ledger[kind] + totals.rates[kind]);
        ledger[kind] = produced.min(totals.capacity[kind]).max(0.0);
    }
}

/// Add a bundle to the ledger, clamping each kind to capacity.
pub fn grant(world: &World, ledger: &mut ResourceSet, reward: &ResourceSet) {
    let capacity = totals(world).capacity;
    for (kind, amount) in reward.nonzero() {
        ledger[kind] = (ledger[kind] + amount).min(capacity[kind]).max(0.0);
    }
}

/// True if every cost-bearing kind is covered by the ledger.
pub fn can_afford(ledger: &ResourceSet, cost: &ResourceSet) -> bool {
    cost.nonzero().all(|(kind, amount)| ledger[kind] >= amount)
}

/// Deduct a cost from the ledger, floored at zero.
pub fn spend(ledger: &mut ResourceSet, cost: &ResourceSet) {
    for (kind, amount) in cost.nonzero() {
        ledger[kind] = (ledger[kind] - amount).max(0.0);
    }
}
