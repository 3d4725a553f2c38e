//! Simulation constants and tuning parameters.

use crate::types::ResourceSet;

/// Simulation tick rate (Hz). One tick is one second of base time.
pub const TICK_RATE: u32 = 1;

// --- Economy ---

/// Storage ceiling before any module bonuses.
pub const BASE_CAPACITY: ResourceSet = ResourceSet::new(1200.0, 900.0, 1100.0, 500.0, 48.0);

/// Per-tick production before any module bonuses.
pub const BASE_RATES: ResourceSet = ResourceSet::new(3.0, 1.0, 1.0, 0.4, 0.0);

/// Ledger at the start of a session.
pub const STARTING_RESOURCES: ResourceSet = ResourceSet::new(520.0, 260.0, 320.0, 90.0, 28.0);

/// Ledger values are kept at this many decimal places after each tick.
pub const LEDGER_PRECISION: f64 = 10.0;

// --- Integrity ---

/// Upper bound for module and base integrity.
pub const MAX_INTEGRITY: u32 = 100;

/// Average module integrity assumed when no modules exist.
pub const EMPTY_BASE_INTEGRITY: f64 = 100.0;

/// Freshly built modules roll integrity in `COMPLETION_INTEGRITY_MIN..COMPLETION_INTEGRITY_MAX`.
pub const COMPLETION_INTEGRITY_MIN: u32 = 90;
pub const COMPLETION_INTEGRITY_MAX: u32 = 100;

/// Blueprint tag that marks a build as a prototype.
pub const EXPERIMENTAL_TAG: &str = "experimental";

// --- Player actions ---

/// Energy spent to overclock a construction project.
pub const BOOST_ENERGY_COST: f64 = 60.0;

/// Ticks removed from a project's timer per boost.
pub const BOOST_TICKS: u32 = 3;

/// Resources granted by a supply shuttle.
pub const SUPPLY_DROP_REWARD: ResourceSet = ResourceSet::new(0.0, 90.0, 120.0, 0.0, 0.0);

/// Probability that a deep scan finds salvage.
pub const DEEP_SCAN_SUCCESS_CHANCE: f64 = 0.4;

/// Alloy rate added to the first module on a successful deep scan.
pub const DEEP_SCAN_ALLOY_BONUS: f64 = 0.6;

// --- Mission log ---

/// Entries kept in the mission log; older ones are evicted first.
pub const LOG_CAPACITY: usize = 12;

/// First entry of every session.
pub const LOG_BOOT_MESSAGE: &str = "Command deck initialized. All systems nominal.";
