//! Terminal front-end: prints the board, reads "start end" moves from a
//! line-oriented input and reports each rejection until a king falls or the
//! player types `exit`.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use engine::{win_message, GameState, Layout, MoveOutcome, Side};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Input that quits the game without a winner.
pub const EXIT_COMMAND: &str = "exit";

/// Two-player king-capture chess in the terminal
#[derive(Parser, Debug, Clone)]
#[command(name = "kingcap", version)]
pub struct Args {
    /// Starting position: standard or king-rook
    #[arg(long, default_value = "standard")]
    pub layout: Layout,

    /// Log every committed move to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// A king was captured
    Won { winner: Side },
    /// The player typed `exit`
    Exited,
    /// Input closed before the game finished
    InputClosed,
}

/// Install the stderr subscriber. `RUST_LOG` wins over `verbose`.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub fn prompt(side: Side) -> String {
    format!(
        "{} player! Choose start coordinate & end coordinate, with example format (a1 a2) (or '{}' to quit): ",
        side, EXIT_COMMAND
    )
}

/// Play until a king is captured, `exit` is typed or input runs out.
pub fn run_session<R: BufRead, W: Write>(
    game: &mut GameState,
    mut input: R,
    mut out: W,
) -> Result<SessionEnd> {
    let mut buf = Vec::new();

    while !game.is_over() {
        write!(out, "{}\n{}", game.board().render(), prompt(game.current_player()))
            .context("failed to write prompt")?;
        out.flush().context("failed to flush output")?;

        // 잘못된 바이트는 치환해서 submit 쪽에서 거부되게 한다
        buf.clear();
        let read = input.read_until(b'\n', &mut buf).context("failed to read move")?;
        if read == 0 {
            info!("input closed");
            writeln!(out).context("failed to write output")?;
            return Ok(SessionEnd::InputClosed);
        }

        let line = String::from_utf8_lossy(&buf);
        let command = line.trim_end_matches(['\r', '\n']);
        if command == EXIT_COMMAND {
            return Ok(SessionEnd::Exited);
        }

        match game.submit(command) {
            Ok(MoveOutcome::Moved { from, to, .. }) => {
                debug!(%from, %to, "turn passes to {}", game.current_player());
            }
            Ok(MoveOutcome::KingCaptured { loser, winner, .. }) => {
                writeln!(out, "{}", win_message(loser, winner)).context("failed to write output")?;
                return Ok(SessionEnd::Won { winner });
            }
            Err(e) => {
                writeln!(out, "{}", e).context("failed to write output")?;
            }
        }
    }

    // only reachable when handed a finished game
    Ok(match game.winner() {
        Some(winner) => SessionEnd::Won { winner },
        None => SessionEnd::Exited,
    })
}
