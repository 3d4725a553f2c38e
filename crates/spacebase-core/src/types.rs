//! Fundamental resource and simulation-time types.

use std::ops::{AddAssign, Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::enums::ResourceKind;

/// One value per resource kind.
///
/// Used for the ledger, for capacities and rates, and for partial bundles
/// such as costs and effect deltas (kinds not listed are zero).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceSet {
    pub energy: f64,
    pub alloys: f64,
    pub credits: f64,
    pub research: f64,
    pub crew: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
}

impl ResourceSet {
    pub const ZERO: ResourceSet = ResourceSet::new(0.0, 0.0, 0.0, 0.0, 0.0);

    pub const fn new(energy: f64, alloys: f64, credits: f64, research: f64, crew: f64) -> Self {
        Self {
            energy,
            alloys,
            credits,
            research,
            crew,
        }
    }

    /// Iterate `(kind, value)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (ResourceKind, f64)> + '_ {
        ResourceKind::ALL.into_iter().map(move |kind| (kind, self[kind]))
    }

    /// Iterate only the kinds with a non-zero value.
    pub fn nonzero(&self) -> impl Iterator<Item = (ResourceKind, f64)> + '_ {
        self.iter().filter(|(_, value)| *value != 0.0)
    }

    /// True if every value is finite and non-negative.
    pub fn is_valid_stock(&self) -> bool {
        self.iter().all(|(_, v)| v.is_finite() && v >= 0.0)
    }
}

impl Index<ResourceKind> for ResourceSet {
    type Output = f64;

    fn index(&self, kind: ResourceKind) -> &f64 {
        match kind {
            ResourceKind::Energy => &self.energy,
            ResourceKind::Alloys => &self.alloys,
            ResourceKind::Credits => &self.credits,
            ResourceKind::Research => &self.research,
            ResourceKind::Crew => &self.crew,
        }
    }
}

impl IndexMut<ResourceKind> for ResourceSet {
    fn index_mut(&mut self, kind: ResourceKind) -> &mut f64 {
        match kind {
            ResourceKind::Energy => &mut self.energy,
            ResourceKind::Alloys => &mut self.alloys,
            ResourceKind::Credits => &mut self.credits,
            ResourceKind::Research => &mut self.research,
            ResourceKind::Crew => &mut self.crew,
        }
    }
}

impl AddAssign<&ResourceSet> for ResourceSet {
    fn add_assign(&mut self, other: &ResourceSet) {
        for kind in ResourceKind::ALL {
            self[kind] += other[kind];
        }
    }
}

impl SimTime {
    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
    }
}
