use std::io;

use anyhow::Result;
use clap::Parser;
use engine::GameState;
use kingcap::{init_logging, run_session, Args};
use tracing::debug;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut game = GameState::with_layout(args.layout);
    debug!(layout = %args.layout, "starting game");

    let end = run_session(&mut game, io::stdin().lock(), io::stdout().lock())?;
    debug!(?end, "session finished");
    Ok(())
}
