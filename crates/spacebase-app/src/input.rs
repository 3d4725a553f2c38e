//! Command input: one JSON `PlayerCommand` per line.
//!
//! `{"type":"QueueBuild","blueprint_id":"solar-array"}` queues a build,
//! `quit` stops the loop. Malformed lines are logged and skipped.

use std::io::{self, BufRead};
use std::sync::mpsc::Sender;
use std::thread::JoinHandle;

use spacebase_core::commands::PlayerCommand;

use crate::state::GameLoopCommand;

/// A parsed input line.
#[derive(Debug, PartialEq)]
pub enum InputLine {
    Command(PlayerCommand),
    Quit,
    Blank,
}

pub fn parse_line(line: &str) -> Result<InputLine, serde_json::Error> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(InputLine::Blank);
    }
    if trimmed.eq_ignore_ascii_case("quit") {
        return Ok(InputLine::Quit);
    }
    serde_json::from_str(trimmed).map(InputLine::Command)
}

/// Forward commands from `reader` until EOF, `quit`, or the loop goes away.
///
/// At EOF a `Shutdown` is sent only if `shutdown_on_eof` is set.
pub fn forward_commands<R: BufRead>(
    reader: R,
    cmd_tx: &Sender<GameLoopCommand>,
    shutdown_on_eof: bool,
) {
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::warn!("stopped reading commands: {e}");
                break;
            }
        };

        let message = match parse_line(&line) {
            Ok(InputLine::Blank) => continue,
            Ok(InputLine::Quit) => GameLoopCommand::Shutdown,
            Ok(InputLine::Command(command)) => GameLoopCommand::Player(command),
            Err(e) => {
                log::warn!("ignoring malformed command {line:?}: {e}");
                continue;
            }
        };

        let quit = matches!(message, GameLoopCommand::Shutdown);
        if cmd_tx.send(message).is_err() || quit {
            return;
        }
    }

    if shutdown_on_eof {
        let _ = cmd_tx.send(GameLoopCommand::Shutdown);
    }
}

/// Read commands from stdin on a background thread.
pub fn spawn_stdin_reader(
    cmd_tx: Sender<GameLoopCommand>,
    shutdown_on_eof: bool,
) -> io::Result<JoinHandle<()>> {
    std::thread::Builder::new()
        .name("spacebase-stdin".into())
        .spawn(move || {
            let stdin = io::stdin();
            forward_commands(stdin.lock(), &cmd_tx, shutdown_on_eof);
        })
}
