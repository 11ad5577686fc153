use anyhow::{Context, Result};
use rand::Rng;
use std::io::{BufRead, Write};
use tilemerge_core::{Outcome, PlayEngine};

use crate::render;

const PROMPT: &str = "Input your move (up, down, left, right): ";

/// Starts a fresh game and reads moves from `input` until it ends.
pub fn start<R: Rng, I: BufRead, W: Write>(
    engine: &mut PlayEngine<R>,
    input: I,
    out: &mut W,
) -> Result<Option<Outcome>> {
    engine.initialize().context("Failed to place the opening tiles")?;
    render::board(out, engine.board())?;
    play(engine, input, out)
}

/// Reads one direction per line. Returns `None` if input runs out before the game ends.
pub fn play<R: Rng, I: BufRead, W: Write>(
    engine: &mut PlayEngine<R>,
    input: I,
    out: &mut W,
) -> Result<Option<Outcome>> {
    let mut lines = input.lines();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            log::info!("input closed after {} moves", engine.move_count());
            return Ok(None);
        };
        let line = line.context("Failed to read move")?;
        // `lines` already dropped the line ending; anything else is part of the token.
        let token = line.as_str();

        let outcome = engine.make_move_token(token)?;
        if !outcome.has_update() {
            writeln!(out, "{token} is not a valid move!")?;
        }
        render::board(out, engine.board())?;

        if let Some(outcome) = engine.game_over() {
            writeln!(out, "{}", render::outcome_message(outcome))?;
            return Ok(Some(outcome));
        }
    }
}
