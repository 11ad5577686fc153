use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Row-major literal for a whole board, as `rows[row][col]`.
pub type BoardRows = [[TileValue; BOARD_SIZE as usize]; BOARD_SIZE as usize];

/// The 4x4 grid of tile values.
///
/// Serialized as its [`BoardRows`]; deserializing goes through [`Board::from_rows`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardRows", into = "BoardRows")]
pub struct Board {
    cells: Array2<TileValue>,
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: Array2::from_elem((BOARD_SIZE, BOARD_SIZE).to_nd_index(), EMPTY_TILE),
        }
    }

    /// Builds a board from a row-major literal, rejecting values that are not tiles.
    pub fn from_rows(rows: BoardRows) -> Result<Self> {
        let mut board = Self::empty();
        for coords in iter_positions() {
            let value = rows[usize::from(coords.0)][usize::from(coords.1)];
            if !is_valid_tile(value) {
                return Err(GameError::InvalidTile(value));
            }
            board.set(coords, value);
        }
        Ok(board)
    }

    pub fn rows(&self) -> BoardRows {
        let mut rows = [[EMPTY_TILE; BOARD_SIZE as usize]; BOARD_SIZE as usize];
        for (coords, value) in self.iter_tiles() {
            rows[usize::from(coords.0)][usize::from(coords.1)] = value;
        }
        rows
    }

    pub fn cell_at(&self, coords: Coord2) -> TileValue {
        self.cells[coords.to_nd_index()]
    }

    pub fn is_empty_at(&self, coords: Coord2) -> bool {
        self.cell_at(coords) == EMPTY_TILE
    }

    pub(crate) fn set(&mut self, coords: Coord2, value: TileValue) {
        self.cells[coords.to_nd_index()] = value;
    }

    pub(crate) fn clear(&mut self) {
        self.cells.fill(EMPTY_TILE);
    }

    /// Every cell with its position, row-major.
    pub fn iter_tiles(&self) -> impl Iterator<Item = (Coord2, TileValue)> + '_ {
        iter_positions().map(|coords| (coords, self.cell_at(coords)))
    }

    /// Positions of all empty cells, row-major.
    pub fn empty_cells(&self) -> Vec<Coord2> {
        self.iter_tiles()
            .filter(|&(_, value)| value == EMPTY_TILE)
            .map(|(coords, _)| coords)
            .collect()
    }

    pub fn count_empty(&self) -> CellCount {
        self.cells
            .iter()
            .filter(|&&value| value == EMPTY_TILE)
            .count()
            .try_into()
            .unwrap()
    }

    pub fn is_full(&self) -> bool {
        self.count_empty() == 0
    }

    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().map(|&value| u64::from(value)).sum()
    }

    pub fn max_tile(&self) -> TileValue {
        self.cells.iter().copied().max().unwrap_or(EMPTY_TILE)
    }

    pub fn contains_tile(&self, value: TileValue) -> bool {
        self.cells.iter().any(|&cell| cell == value)
    }

    /// Whether any direction would change this board.
    ///
    /// Runs all four sweeps on a scratch copy of the values, so `self` is never touched.
    pub fn has_legal_move(&self) -> bool {
        let mut scratch = self.clone();
        let mut merges = MergeTracker::new();
        Direction::ALL
            .into_iter()
            .any(|direction| sweep(&mut scratch, &mut merges, direction))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl TryFrom<BoardRows> for Board {
    type Error = GameError;

    fn try_from(rows: BoardRows) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl From<Board> for BoardRows {
    fn from(board: Board) -> Self {
        board.rows()
    }
}

impl Index<Coord2> for Board {
    type Output = TileValue;

    fn index(&self, (row, col): Coord2) -> &Self::Output {
        &self.cells[(row as usize, col as usize)]
    }
}
