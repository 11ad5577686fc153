use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::GameError;

/// Single coordinate axis used for rows and columns.
pub type Coord = u8;

/// Count type used for empty-cell and move counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// Width and height of the board.
pub const BOARD_SIZE: Coord = 4;

/// Total number of cells on the board.
pub const TOTAL_CELLS: CellCount = mult(BOARD_SIZE, BOARD_SIZE);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Iterates every board position in row-major order.
pub fn iter_positions() -> impl Iterator<Item = Coord2> {
    (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| (row, col)))
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Order in which the legal-move check tries each direction.
    pub const ALL: [Direction; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// Unit step `(d_row, d_col)` toward the target edge.
    const fn delta(self) -> (i8, i8) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }

    /// Source indices along the travel axis, nearest to the target edge first.
    pub(crate) const fn sweep_order(self) -> [Coord; 3] {
        match self {
            Self::Up | Self::Left => [1, 2, 3],
            Self::Down | Self::Right => [2, 1, 0],
        }
    }

    /// Maps an index along the travel axis and a line index across it to a position.
    pub(crate) const fn position(self, along: Coord, across: Coord) -> Coord2 {
        match self {
            Self::Up | Self::Down => (along, across),
            Self::Left | Self::Right => (across, along),
        }
    }

    /// The neighbour of `coords` one step toward the target edge, if still on the board.
    pub fn step_from(self, coords: Coord2) -> Option<Coord2> {
        let (row, col) = coords;
        let (d_row, d_col) = self.delta();

        let next_row = row.checked_add_signed(d_row)?;
        if next_row >= BOARD_SIZE {
            return None;
        }

        let next_col = col.checked_add_signed(d_col)?;
        if next_col >= BOARD_SIZE {
            return None;
        }

        Some((next_row, next_col))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = GameError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            _ => Err(GameError::InvalidDirection),
        }
    }
}
