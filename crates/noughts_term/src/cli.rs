//! Command-line interface for noughts_term.

use clap::Parser;
use noughts::{Mark, Strategy};

/// Play tic-tac-toe against the computer in the terminal
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Play tic-tac-toe against the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Side to play (x or o); prompts when omitted
    #[arg(long)]
    pub side: Option<Mark>,

    /// Computer strategy (opening-book or minimax)
    #[arg(long, default_value_t = Strategy::OpeningBook)]
    pub strategy: Strategy,
}
