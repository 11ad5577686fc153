use std::io::{self, Write};

use tilemerge_core::{Board, Outcome};

/// Prints the grid one row per line, followed by a blank line.
pub fn board<W: Write>(out: &mut W, board: &Board) -> io::Result<()> {
    for row in board.rows() {
        writeln!(out, "{row:?}")?;
    }
    writeln!(out)
}

pub fn outcome_message(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Won => "Game finishes, you win!",
        Outcome::Lost => "Game over, no possible move, you lost!",
    }
}
