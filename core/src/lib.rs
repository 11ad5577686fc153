#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use engine::*;
pub use error::*;
pub use spawn::*;
pub use sweep::*;
pub use tile::*;
pub use types::*;

mod board;
mod engine;
mod error;
mod spawn;
mod sweep;
mod tile;
mod types;

/// Deserializing goes through [`GameConfig::new`], so a loaded config is clamped and checked.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameConfigFields")]
pub struct GameConfig {
    /// Tiles placed by [`PlayEngine::initialize`].
    pub initial_tiles: CellCount,
    /// Tile value that ends the game as a win.
    pub win_tile: TileValue,
}

impl GameConfig {
    pub const fn new_unchecked(initial_tiles: CellCount, win_tile: TileValue) -> Self {
        Self {
            initial_tiles,
            win_tile,
        }
    }

    pub fn new(initial_tiles: CellCount, win_tile: TileValue) -> Result<Self> {
        if win_tile < 4 || !is_valid_tile(win_tile) {
            return Err(GameError::InvalidTile(win_tile));
        }
        let initial_tiles = initial_tiles.clamp(1, TOTAL_CELLS);
        Ok(Self::new_unchecked(initial_tiles, win_tile))
    }
}

#[derive(Deserialize)]
struct GameConfigFields {
    initial_tiles: CellCount,
    win_tile: TileValue,
}

impl TryFrom<GameConfigFields> for GameConfig {
    type Error = GameError;

    fn try_from(fields: GameConfigFields) -> Result<Self> {
        Self::new(fields.initial_tiles, fields.win_tile)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(2, WINNING_TILE)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    NoChange,
    Moved,
}

impl MoveOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Moved => true,
        }
    }
}

/// How a finished game ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Won,
    Lost,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_validation() {
        assert_eq!(GameConfig::default(), GameConfig::new(2, 2048).unwrap());
        assert_eq!(GameConfig::new(0, 64).unwrap().initial_tiles, 1);
        assert_eq!(GameConfig::new(99, 64).unwrap().initial_tiles, TOTAL_CELLS);
        assert_eq!(GameConfig::new(2, 2), Err(GameError::InvalidTile(2)));
        assert_eq!(GameConfig::new(2, 1000), Err(GameError::InvalidTile(1000)));
    }

    #[test]
    fn config_deserializes_through_new() {
        let config: GameConfig =
            serde_json::from_str(r#"{"initial_tiles":2,"win_tile":64}"#).unwrap();
        assert_eq!(config, GameConfig::new(2, 64).unwrap());
        assert_eq!(serde_json::to_string(&config).unwrap(), r#"{"initial_tiles":2,"win_tile":64}"#);

        let clamped: GameConfig =
            serde_json::from_str(r#"{"initial_tiles":0,"win_tile":2048}"#).unwrap();
        assert_eq!(clamped.initial_tiles, 1);

        for bad in [
            r#"{"initial_tiles":2,"win_tile":0}"#,
            r#"{"initial_tiles":2,"win_tile":2}"#,
            r#"{"initial_tiles":2,"win_tile":100}"#,
        ] {
            assert!(serde_json::from_str::<GameConfig>(bad).is_err(), "{bad}");
        }
    }
}
