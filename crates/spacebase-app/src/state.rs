//! State shared between the driver threads.

use std::sync::{Arc, Mutex};

use spacebase_core::commands::PlayerCommand;
use spacebase_core::state::BaseSnapshot;

/// Commands sent to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation.
    Player(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest snapshot for synchronous polling. Updated by the game loop thread.
pub type SharedSnapshot = Arc<Mutex<Option<BaseSnapshot>>>;

pub fn new_shared_snapshot() -> SharedSnapshot {
    Arc::new(Mutex::new(None))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_snapshot_starts_empty() {
        let shared = new_shared_snapshot();
        assert!(shared.lock().unwrap().is_none());
    }
}
