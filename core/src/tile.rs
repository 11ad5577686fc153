/// Value held by a board cell, zero when empty.
pub type TileValue = u32;

pub const EMPTY_TILE: TileValue = 0;

/// Reaching this tile wins the game under the default config.
pub const WINNING_TILE: TileValue = 2048;

/// Values a freshly spawned tile can take, drawn uniformly.
pub const SPAWN_VALUES: [TileValue; 2] = [2, 4];

/// Largest tile a 4x4 board can ever build: sixteen cells, starting from 4s.
pub const MAX_TILE: TileValue = 1 << 17;

/// A cell may hold nothing or any doubling of a spawned tile.
pub const fn is_valid_tile(value: TileValue) -> bool {
    value == EMPTY_TILE || (value >= 2 && value <= MAX_TILE && value.is_power_of_two())
}
