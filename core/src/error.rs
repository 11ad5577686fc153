use thiserror::Error;

use crate::{CellCount, TileValue};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid direction, expected one of up, down, left, right")]
    InvalidDirection,
    #[error("Invalid tile value {0}")]
    InvalidTile(TileValue),
    #[error("Cannot spawn {requested} tiles, only {available} empty cells")]
    SpawnExhausted {
        requested: CellCount,
        available: CellCount,
    },
}

pub type Result<T> = core::result::Result<T, GameError>;
