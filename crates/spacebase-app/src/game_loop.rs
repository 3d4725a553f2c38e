//! Game loop thread. Ticks the base simulation at a fixed wall-clock period
//! and emits snapshots.
//!
//! The simulation is owned by this thread. Commands arrive via `mpsc`
//! channel and are applied as soon as they are received. Snapshots go to a
//! `SnapshotSink` and are stored in shared state for synchronous polling.

use std::io::{self, Write};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Mutex;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use spacebase_core::state::BaseSnapshot;
use spacebase_sim::BaseSimulation;

use crate::config::AppConfig;
use crate::state::{GameLoopCommand, SharedSnapshot};

/// Destination for snapshots produced by the loop.
pub trait SnapshotSink {
    fn emit(&mut self, snapshot: &BaseSnapshot) -> io::Result<()>;
}

/// Writes one JSON object per line.
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> SnapshotSink for JsonLinesSink<W> {
    fn emit(&mut self, snapshot: &BaseSnapshot) -> io::Result<()> {
        serde_json::to_writer(&mut self.writer, snapshot)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()
    }
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the thread handle. The loop stops on
/// `Shutdown`, when every sender is dropped, or after `max_ticks`.
pub fn spawn_game_loop<S>(
    config: AppConfig,
    sink: S,
    latest_snapshot: SharedSnapshot,
) -> io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>)>
where
    S: SnapshotSink + Send + 'static,
{
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("spacebase-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, sink, &latest_snapshot);
        })?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown, channel disconnect, or `max_ticks`.
fn run_game_loop<S: SnapshotSink>(
    config: AppConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    mut sink: S,
    latest_snapshot: &Mutex<Option<BaseSnapshot>>,
) {
    let tick_duration = config.tick_interval();
    let max_ticks = config.max_ticks;
    let mut engine = BaseSimulation::new(config.sim);
    let mut ticks: u64 = 0;
    let mut next_tick_time = Instant::now() + tick_duration;

    log::info!(
        "game loop started: {}ms per tick, max ticks {:?}",
        tick_duration.as_millis(),
        max_ticks
    );
    publish(&mut sink, latest_snapshot, engine.snapshot());

    loop {
        if max_ticks.is_some_and(|max| ticks >= max) {
            log::info!("game loop reached {ticks} ticks");
            return;
        }

        // 1. Apply commands as they arrive until the next tick is due
        let timeout = next_tick_time.saturating_duration_since(Instant::now());
        match cmd_rx.recv_timeout(timeout) {
            Ok(GameLoopCommand::Player(command)) => {
                let outcome = engine.apply(command);
                log::debug!("command outcome: {outcome:?}");
                publish(&mut sink, latest_snapshot, engine.snapshot());
            }
            Ok(GameLoopCommand::Shutdown) => {
                log::info!("game loop shutting down after {ticks} ticks");
                return;
            }
            Err(RecvTimeoutError::Disconnected) => {
                log::info!("command channel closed after {ticks} ticks");
                return;
            }
            Err(RecvTimeoutError::Timeout) => {
                // 2. Advance exactly one tick, however late it fires
                let snapshot = engine.tick();
                ticks += 1;
                publish(&mut sink, latest_snapshot, snapshot);

                // 3. Schedule the next tick
                next_tick_time = schedule_next(next_tick_time, Instant::now(), tick_duration);
            }
        }
    }
}

/// Next deadline after a tick fired at `now`.
///
/// Keeps the fixed cadence while on time. A late firing reschedules one
/// full period from `now`, so missed ticks are never replayed.
fn schedule_next(previous: Instant, now: Instant, tick_duration: Duration) -> Instant {
    let next = previous + tick_duration;
    if next <= now {
        now + tick_duration
    } else {
        next
    }
}

fn publish<S: SnapshotSink>(
    sink: &mut S,
    latest_snapshot: &Mutex<Option<BaseSnapshot>>,
    snapshot: BaseSnapshot,
) {
    if let Err(e) = sink.emit(&snapshot) {
        log::warn!("failed to emit snapshot: {e}");
    }
    if let Ok(mut lock) = latest_snapshot.lock() {
        *lock = Some(snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spacebase_core::commands::PlayerCommand;
    use std::sync::Arc;

    use crate::state::new_shared_snapshot;

    #[derive(Clone, Default)]
    struct CollectSink(Arc<Mutex<Vec<BaseSnapshot>>>);

    impl SnapshotSink for CollectSink {
        fn emit(&mut self, snapshot: &BaseSnapshot) -> io::Result<()> {
            self.0.lock().unwrap().push(snapshot.clone());
            Ok(())
        }
    }

    fn config(tick_interval_ms: u64, max_ticks: Option<u64>) -> AppConfig {
        AppConfig {
            tick_interval_ms,
            max_ticks,
            ..Default::default()
        }
    }

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::Player(PlayerCommand::SupplyDrop))
            .unwrap();
        tx.send(GameLoopCommand::Player(PlayerCommand::DeepScan))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let commands: Vec<GameLoopCommand> = rx.try_iter().collect();
        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::Player(PlayerCommand::SupplyDrop)
        ));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_loop_stops_after_max_ticks() {
        let sink = CollectSink::default();
        let collected = sink.0.clone();
        let latest = new_shared_snapshot();

        let (_tx, handle) = spawn_game_loop(config(1, Some(3)), sink, latest.clone()).unwrap();
        handle.join().unwrap();

        let snapshots = collected.lock().unwrap();
        // Initial snapshot plus one per tick.
        assert_eq!(snapshots.len(), 4);
        let ticks: Vec<u64> = snapshots.iter().map(|s| s.time.tick).collect();
        assert_eq!(ticks, vec![0, 1, 2, 3]);
        assert_eq!(latest.lock().unwrap().as_ref().unwrap().time.tick, 3);
    }

    #[test]
    fn test_commands_apply_immediately() {
        let sink = CollectSink::default();
        let collected = sink.0.clone();
        let latest = new_shared_snapshot();

        // Ticks are an hour apart, so only commands produce snapshots.
        let (tx, handle) = spawn_game_loop(config(3_600_000, None), sink, latest.clone()).unwrap();
        tx.send(GameLoopCommand::Player(PlayerCommand::QueueBuild {
            blueprint_id: "solar-array".into(),
        }))
        .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();
        handle.join().unwrap();

        let snapshots = collected.lock().unwrap();
        assert_eq!(snapshots.len(), 2);
        let after = &snapshots[1];
        assert_eq!(after.time.tick, 0);
        assert_eq!(after.projects.len(), 1);
        assert_eq!(after.projects[0].remaining, 8);
        assert_eq!(latest.lock().unwrap().as_ref().unwrap().projects.len(), 1);
    }

    #[test]
    fn test_loop_stops_when_senders_dropped() {
        let (tx, handle) =
            spawn_game_loop(config(3_600_000, None), CollectSink::default(), new_shared_snapshot())
                .unwrap();
        drop(tx);
        handle.join().unwrap();
    }

    #[test]
    fn test_json_lines_sink_writes_one_line_per_snapshot() {
        let mut sink = JsonLinesSink::new(Vec::new());
        let snapshot = BaseSimulation::new(Default::default()).snapshot();
        sink.emit(&snapshot).unwrap();
        sink.emit(&snapshot).unwrap();

        let text = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        let back: BaseSnapshot = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(back.time, snapshot.time);
        assert_eq!(back.modules.len(), 3);
        assert_eq!(back.selected_blueprint, "solar-array");
        assert_eq!(back.log, snapshot.log);
    }

    #[test]
    fn test_schedule_next_on_time() {
        let start = Instant::now();
        let period = Duration::from_millis(100);
        let next = schedule_next(start, start + Duration::from_millis(10), period);
        assert_eq!(next, start + period);
    }

    #[test]
    fn test_schedule_next_resets_when_far_behind() {
        let start = Instant::now();
        let period = Duration::from_millis(100);
        let now = start + Duration::from_millis(1000);
        let next = schedule_next(start, now, period);
        assert_eq!(next, now + period);
    }

    #[test]
    fn test_late_tick_never_schedules_in_the_past() {
        let start = Instant::now();
        let period = Duration::from_millis(100);
        // Fired 150ms late: previous + period is already behind us.
        let now = start + Duration::from_millis(250);
        let next = schedule_next(start, now, period);
        assert!(next > now);
        assert_eq!(next, now + period);

        // Exactly on the deadline also moves forward a full period.
        let now = start + period;
        assert_eq!(schedule_next(start, now, period), now + period);
    }
}
