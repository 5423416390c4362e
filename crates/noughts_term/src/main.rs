//! Noughts - terminal front-end
//!
//! Reads one command per line and redraws the board after each.

#![warn(missing_docs)]

mod cli;
mod input;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use input::Command;
use noughts::{Phase, Session};
use std::io::{self, BufRead, Write};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    info!(?cli, "Starting noughts");

    let mut session = Session::with_strategy(cli.strategy);
    if let Some(side) = cli.side {
        session = session.select_side(side);
    }

    run(session, io::stdin().lock(), io::stdout().lock())
}

/// Runs the prompt loop until quit or end of input.
#[instrument(skip_all)]
fn run(mut session: Session, input: impl BufRead, mut out: impl Write) -> Result<()> {
    render(&session, &mut out)?;

    for line in input.lines() {
        let line = line?;
        let choosing_side = session.phase() == Phase::AwaitingSide;

        session = match Command::parse(&line, choosing_side) {
            Command::Quit => break,
            Command::Restart => session.restart(),
            Command::Side(mark) => session.select_side(mark),
            Command::Play(position) => {
                if let Err(error) = session.try_human_move(position) {
                    debug!(%error, "Move refused");
                    writeln!(out, "{}", error)?;
                }
                session
            }
            Command::Unknown => {
                writeln!(out, "Unrecognised input: {}", line.trim())?;
                session
            }
        };

        render(&session, &mut out)?;
    }

    Ok(())
}

/// Draws the status line, the board and a hint.
fn render(session: &Session, out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", session.status_text())?;

    match session.phase() {
        Phase::AwaitingSide => writeln!(out, "Type x or o (q to quit)")?,
        Phase::InProgress => {
            writeln!(out, "{}", session.board().display())?;
            writeln!(out, "Square 0-8, r to restart, q to quit")?;
        }
        Phase::Finished => {
            writeln!(out, "{}", session.board().display())?;
            writeln!(out, "r to restart, q to quit")?;
        }
    }

    out.flush()
}
