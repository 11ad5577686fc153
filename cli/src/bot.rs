use anyhow::{Context, Result};
use rand::Rng;
use serde::Serialize;
use std::io::Write;
use tilemerge_core::{BoardRows, Direction, MoveOutcome, Outcome, PlayEngine, TileValue};

use crate::render;

/// Directions the bot tries each round, most preferred first.
pub const PREFERENCE: [Direction; 4] = [
    Direction::Down,
    Direction::Left,
    Direction::Right,
    Direction::Up,
];

/// Summary of a finished bot run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BotReport {
    pub steps: u32,
    pub outcome: Option<Outcome>,
    pub max_tile: TileValue,
    pub board: BoardRows,
}

/// Greedy bot: takes the first direction in [`PREFERENCE`] that changes the board, and
/// always answers an `Up` with a `Down` to pull the tiles back to the bottom edge.
///
/// The forced `Down` counts as a step even when it leaves the board unchanged.
#[derive(Clone, Debug, Default)]
pub struct BotDriver {
    steps: u32,
    max_steps: Option<u32>,
}

impl BotDriver {
    pub fn new(max_steps: Option<u32>) -> Self {
        Self {
            steps: 0,
            max_steps,
        }
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Starts a fresh game and plays it out.
    pub fn start<R: Rng, W: Write>(
        &mut self,
        engine: &mut PlayEngine<R>,
        out: &mut W,
    ) -> Result<BotReport> {
        engine.initialize().context("Failed to place the opening tiles")?;
        render::board(out, engine.board())?;
        self.play(engine, out)
    }

    /// Plays rounds until the game ends or the step limit is hit.
    pub fn play<R: Rng, W: Write>(
        &mut self,
        engine: &mut PlayEngine<R>,
        out: &mut W,
    ) -> Result<BotReport> {
        let outcome = loop {
            if let Some(outcome) = engine.game_over() {
                writeln!(out, "{}", render::outcome_message(outcome))?;
                break Some(outcome);
            }
            if self.max_steps.is_some_and(|max| self.steps >= max) {
                log::info!("stopping at step limit {}", self.steps);
                break None;
            }
            self.play_round(engine, out)?;
            render::board(out, engine.board())?;
        };

        Ok(BotReport {
            steps: self.steps,
            outcome,
            max_tile: engine.board().max_tile(),
            board: engine.board().rows(),
        })
    }

    /// Plays one round and returns the directions counted as steps, in order.
    pub fn play_round<R: Rng, W: Write>(
        &mut self,
        engine: &mut PlayEngine<R>,
        out: &mut W,
    ) -> Result<Vec<Direction>> {
        let mut played = Vec::with_capacity(2);

        let Some(direction) = self.choose(engine, out)? else {
            return Ok(played);
        };
        self.record_step(direction, out)?;
        played.push(direction);

        if direction == Direction::Up {
            self.follow_up_with_down(engine, out)?;
            played.push(Direction::Down);
        }
        Ok(played)
    }

    fn follow_up_with_down<R: Rng, W: Write>(
        &mut self,
        engine: &mut PlayEngine<R>,
        out: &mut W,
    ) -> Result<MoveOutcome> {
        let outcome = engine.make_move(Direction::Down)?;
        if !outcome.has_update() {
            log::debug!("forced down after up did not move");
        }
        self.record_step(Direction::Down, out)?;
        Ok(outcome)
    }

    fn choose<R: Rng, W: Write>(
        &self,
        engine: &mut PlayEngine<R>,
        out: &mut W,
    ) -> Result<Option<Direction>> {
        for direction in PREFERENCE {
            if engine.make_move(direction)?.has_update() {
                return Ok(Some(direction));
            }
            writeln!(out, "{direction} is not a valid move!")?;
            render::board(out, engine.board())?;
        }
        Ok(None)
    }

    fn record_step<W: Write>(&mut self, direction: Direction, out: &mut W) -> Result<()> {
        self.steps += 1;
        writeln!(out, "Step {}, {direction}", self.steps)?;
        Ok(())
    }
}
