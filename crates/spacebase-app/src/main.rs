//! spacebase: headless SPACE_BASES simulation driver.
//!
//! Usage:
//!   spacebase
//!   spacebase --config base.toml
//!
//! Reads one JSON command per line from stdin, writes one JSON snapshot per
//! line to stdout. Logs go to stderr, filtered by `SPACEBASE_LOG`.

use std::io;
use std::path::PathBuf;
use std::process;

use spacebase_app::config::AppConfig;
use spacebase_app::game_loop::{spawn_game_loop, JsonLinesSink};
use spacebase_app::input::spawn_stdin_reader;
use spacebase_app::logger;
use spacebase_app::state::new_shared_snapshot;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let config_path = match args.get(1).map(String::as_str) {
        None => None,
        Some("help" | "--help" | "-h") => {
            print_usage();
            return;
        }
        Some("--config") => match args.get(2) {
            Some(path) if args.len() == 3 => Some(PathBuf::from(path)),
            _ => {
                print_usage();
                process::exit(1);
            }
        },
        Some(other) => {
            eprintln!("Unknown argument: {other}");
            print_usage();
            process::exit(1);
        }
    };

    if let Err(e) = logger::init_from_env() {
        eprintln!("Error: failed to install logger: {e}");
    }

    let config = match config_path {
        Some(path) => match AppConfig::load(&path) {
            Ok(config) => {
                log::info!("loaded config from {}", path.display());
                config
            }
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        },
        None => AppConfig::default(),
    };

    if let Err(e) = run(config) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(config: AppConfig) -> io::Result<()> {
    let latest = new_shared_snapshot();
    // With a tick limit the run ends on its own; otherwise stdin EOF ends it.
    let shutdown_on_eof = config.max_ticks.is_none();

    let (cmd_tx, loop_handle) =
        spawn_game_loop(config, JsonLinesSink::new(io::stdout()), latest.clone())?;
    spawn_stdin_reader(cmd_tx.clone(), shutdown_on_eof)?;

    if loop_handle.join().is_err() {
        return Err(io::Error::new(io::ErrorKind::Other, "game loop panicked"));
    }
    drop(cmd_tx);

    if let Ok(lock) = latest.lock() {
        if let Some(snapshot) = lock.as_ref() {
            log::info!(
                "final state at tick {}: {} modules, {} projects, integrity {}%",
                snapshot.time.tick,
                snapshot.modules.len(),
                snapshot.projects.len(),
                snapshot.base_integrity
            );
        }
    }
    Ok(())
}

fn print_usage() {
    eprintln!(
        "spacebase: SPACE_BASES headless simulation driver\n\
         \n\
         Options:\n\
         \n\
           --config <path>    TOML config file (optional)\n\
         \n\
         Input (stdin), one JSON command per line:\n\
         \n\
           {{\"type\":\"QueueBuild\",\"blueprint_id\":\"solar-array\"}}\n\
           {{\"type\":\"BoostProject\",\"project_id\":1}}\n\
           {{\"type\":\"SupplyDrop\"}}\n\
           quit\n\
         \n\
         Output (stdout): one JSON snapshot per line.\n\
         Set SPACEBASE_LOG=debug for verbose logs on stderr.\n"
    );
}
