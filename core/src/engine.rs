use alloc::vec::Vec;
use core::num::Saturating;
use rand::Rng;

use crate::*;

/// Owns one game: the board, the per-sweep merge tracker, and the injected random source.
///
/// Not meant to be shared; a single driver loop calls into it at a time.
#[derive(Clone, Debug)]
pub struct PlayEngine<R> {
    config: GameConfig,
    board: Board,
    merges: MergeTracker,
    rng: R,
    move_count: Saturating<u32>,
}

impl<R: Rng> PlayEngine<R> {
    pub fn new(rng: R) -> Self {
        Self::with_config(GameConfig::default(), rng)
    }

    pub fn with_config(config: GameConfig, rng: R) -> Self {
        Self {
            config,
            board: Board::empty(),
            merges: MergeTracker::new(),
            rng,
            move_count: Saturating(0),
        }
    }

    /// Starts from an existing position instead of an empty board.
    pub fn from_board(board: Board, rng: R) -> Self {
        Self {
            board,
            ..Self::new(rng)
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cell_at(&self, coords: Coord2) -> TileValue {
        self.board.cell_at(coords)
    }

    /// Number of moves that changed the board since [`Self::initialize`].
    pub fn move_count(&self) -> u32 {
        self.move_count.0
    }

    pub fn empty_cells(&self) -> Vec<Coord2> {
        self.board.empty_cells()
    }

    pub fn spawn_tiles(&mut self, candidates: &mut Vec<Coord2>, count: CellCount) -> Result<()> {
        spawn_tiles(&mut self.board, candidates, count, &mut self.rng)
    }

    /// Clears the board and places the opening tiles.
    pub fn initialize(&mut self) -> Result<()> {
        self.board.clear();
        self.move_count = Saturating(0);

        let mut candidates = self.empty_cells();
        self.spawn_tiles(&mut candidates, self.config.initial_tiles)
    }

    /// Slides the board toward `direction`, then spawns one tile if anything moved.
    pub fn make_move(&mut self, direction: Direction) -> Result<MoveOutcome> {
        if !sweep(&mut self.board, &mut self.merges, direction) {
            return Ok(MoveOutcome::NoChange);
        }

        let mut candidates = self.empty_cells();
        self.spawn_tiles(&mut candidates, 1)?;
        self.move_count += 1;
        Ok(MoveOutcome::Moved)
    }

    /// Like [`Self::make_move`], but takes a raw token; unknown tokens change nothing.
    pub fn make_move_token(&mut self, token: &str) -> Result<MoveOutcome> {
        match token.parse::<Direction>() {
            Ok(direction) => self.make_move(direction),
            Err(err) => {
                log::debug!("ignoring move {token:?}: {err}");
                Ok(MoveOutcome::NoChange)
            }
        }
    }

    pub fn has_any_legal_move(&self) -> bool {
        self.board.has_legal_move()
    }

    /// `Some` once the game is over: won if the win tile is on the board, lost if
    /// nothing can move. The win check comes first.
    pub fn game_over(&self) -> Option<Outcome> {
        let outcome = if self.board.contains_tile(self.config.win_tile) {
            Outcome::Won
        } else if !self.has_any_legal_move() {
            Outcome::Lost
        } else {
            return None;
        };
        log::debug!("game over after {} moves: {outcome:?}", self.move_count);
        Some(outcome)
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over().is_some()
    }
}
