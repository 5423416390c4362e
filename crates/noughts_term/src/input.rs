//! Line commands typed at the prompt.

use noughts::{Mark, Position};

/// One parsed line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Pick a side.
    Side(Mark),
    /// Play a square.
    Play(Position),
    /// Back to side selection.
    Restart,
    /// Leave the game.
    Quit,
    /// Anything else.
    Unknown,
}

impl Command {
    /// Parses a line. Sides are only recognised while `choosing_side`;
    /// otherwise a square number or label is expected.
    pub fn parse(line: &str, choosing_side: bool) -> Self {
        let line = line.trim();
        match line.to_lowercase().as_str() {
            "q" | "quit" | "exit" => return Command::Quit,
            "r" | "restart" => return Command::Restart,
            _ => {}
        }

        if choosing_side {
            line.parse::<Mark>().map_or(Command::Unknown, Command::Side)
        } else {
            Position::from_label_or_number(line).map_or(Command::Unknown, Command::Play)
        }
    }
}
