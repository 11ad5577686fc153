//! Single-direction move resolution.
//!
//! Every direction goes through the same [`can_slide`]/[`apply_slide`] pair; only the
//! traversal order and the step vector change with the [`Direction`].

use ndarray::Array2;

use crate::*;

/// Destinations that already received a merge during the current sweep.
///
/// Clear at the start of every sweep and cleared again before the sweep returns.
#[derive(Clone, Debug, PartialEq)]
pub struct MergeTracker {
    merged: Array2<bool>,
}

impl MergeTracker {
    pub fn new() -> Self {
        Self {
            merged: Array2::default((BOARD_SIZE, BOARD_SIZE).to_nd_index()),
        }
    }

    pub fn is_merged(&self, coords: Coord2) -> bool {
        self.merged[coords.to_nd_index()]
    }

    pub fn mark(&mut self, coords: Coord2) {
        self.merged[coords.to_nd_index()] = true;
    }

    pub fn clear(&mut self) {
        self.merged.fill(false);
    }

    pub fn is_clear(&self) -> bool {
        self.merged.iter().all(|&merged| !merged)
    }
}

impl Default for MergeTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether the tile at `from` may take one step into the adjacent cell `to`.
pub fn can_slide(board: &Board, merges: &MergeTracker, from: Coord2, to: Coord2) -> bool {
    let source = board.cell_at(from);
    let target = board.cell_at(to);

    if source == EMPTY_TILE {
        return false;
    }
    // a tile that just merged stays put for the rest of the sweep
    if merges.is_merged(from) {
        return false;
    }
    if source == target {
        return !merges.is_merged(to);
    }
    target == EMPTY_TILE
}

/// Moves or merges the tile at `from` into `to`. Returns whether the board changed.
pub fn apply_slide(board: &mut Board, merges: &mut MergeTracker, from: Coord2, to: Coord2) -> bool {
    let source = board.cell_at(from);
    let target = board.cell_at(to);

    if source == EMPTY_TILE {
        return false;
    }

    if target == EMPTY_TILE {
        board.set(to, source);
        board.set(from, EMPTY_TILE);
        true
    } else if source == target {
        board.set(to, target + source);
        board.set(from, EMPTY_TILE);
        merges.mark(to);
        true
    } else {
        false
    }
}

/// Slides every tile as far as it can toward the `direction` edge.
///
/// Sources are visited starting one step in from the target edge and moving outward, so
/// tiles nearer the edge settle first and later tiles cascade onto them.
pub fn sweep(board: &mut Board, merges: &mut MergeTracker, direction: Direction) -> bool {
    debug_assert!(merges.is_clear(), "merge tracker leaked from a previous sweep");

    let mut moved = false;
    for along in direction.sweep_order() {
        for across in 0..BOARD_SIZE {
            let mut from = direction.position(along, across);
            while let Some(to) = direction.step_from(from) {
                if !can_slide(board, merges, from, to) {
                    break;
                }
                moved |= apply_slide(board, merges, from, to);
                from = to;
            }
        }
    }

    merges.clear();
    log::trace!("sweep {direction}: moved={moved}");
    moved
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: BoardRows) -> Board {
        Board::from_rows(rows).unwrap()
    }

    fn swept(rows: BoardRows, direction: Direction) -> (BoardRows, bool) {
        let mut b = board(rows);
        let mut merges = MergeTracker::new();
        let moved = sweep(&mut b, &mut merges, direction);
        assert!(merges.is_clear());
        (b.rows(), moved)
    }

    #[test]
    fn can_slide_rules() {
        let b = board([[2, 2, 4, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
        let mut merges = MergeTracker::new();

        // empty source
        assert!(!can_slide(&b, &merges, (1, 0), (0, 0)));
        // equal values
        assert!(can_slide(&b, &merges, (0, 1), (0, 0)));
        // empty destination
        assert!(can_slide(&b, &merges, (0, 2), (0, 3)));
        // different values
        assert!(!can_slide(&b, &merges, (0, 2), (0, 1)));

        merges.mark((0, 0));
        assert!(!can_slide(&b, &merges, (0, 1), (0, 0)));
        merges.mark((0, 1));
        assert!(!can_slide(&b, &merges, (0, 1), (0, 2)));
    }

    #[test]
    fn apply_slide_moves_and_merges() {
        let mut b = board([[0, 2, 2, 8], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
        let mut merges = MergeTracker::new();

        assert!(apply_slide(&mut b, &mut merges, (0, 1), (0, 0)));
        assert_eq!(b.rows()[0], [2, 0, 2, 8]);
        assert!(merges.is_clear());

        assert!(apply_slide(&mut b, &mut merges, (0, 2), (0, 1)));
        assert!(apply_slide(&mut b, &mut merges, (0, 1), (0, 0)));
        assert_eq!(b.rows()[0], [4, 0, 0, 8]);
        assert!(merges.is_merged((0, 0)));

        assert!(!apply_slide(&mut b, &mut merges, (0, 3), (0, 0)));
        assert!(!apply_slide(&mut b, &mut merges, (1, 0), (0, 0)));
    }

    #[test]
    fn up_moves_row_to_top_edge() {
        let (rows, moved) = swept(
            [[0, 0, 0, 0], [2, 4, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
            Direction::Up,
        );
        assert!(moved);
        assert_eq!(rows, [[2, 4, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
    }

    #[test]
    fn up_on_settled_row_is_no_change() {
        let start = [[2, 4, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]];
        let (rows, moved) = swept(start, Direction::Up);
        assert!(!moved);
        assert_eq!(rows, start);
    }

    #[test]
    fn column_chain_merges_once_per_destination() {
        let (rows, moved) = swept(
            [[2, 0, 0, 0], [2, 0, 0, 0], [4, 0, 0, 0], [4, 0, 0, 0]],
            Direction::Up,
        );
        assert!(moved);
        assert_eq!(rows, [[4, 0, 0, 0], [8, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
    }

    #[test]
    fn column_merges_larger_pair_at_the_edge() {
        let (rows, moved) = swept(
            [[4, 0, 0, 0], [4, 0, 0, 0], [2, 0, 0, 0], [2, 0, 0, 0]],
            Direction::Up,
        );
        assert!(moved);
        assert_eq!(rows, [[8, 0, 0, 0], [4, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
    }

    #[test]
    fn three_equal_merge_nearest_edge_first() {
        let (rows, _) = swept(
            [[2, 2, 2, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
            Direction::Left,
        );
        assert_eq!(rows[0], [4, 2, 0, 0]);

        let (rows, _) = swept(
            [[0, 2, 2, 2], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
            Direction::Right,
        );
        assert_eq!(rows[0], [0, 0, 2, 4]);
    }

    #[test]
    fn four_equal_make_two_pairs() {
        let (rows, _) = swept(
            [[0, 0, 0, 4], [0, 0, 0, 4], [0, 0, 0, 4], [0, 0, 0, 4]],
            Direction::Down,
        );
        assert_eq!(rows, [[0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 8], [0, 0, 0, 8]]);
    }

    #[test]
    fn merged_tile_is_not_merged_again() {
        let (rows, _) = swept(
            [[4, 2, 2, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
            Direction::Left,
        );
        assert_eq!(rows[0], [4, 4, 0, 0]);
    }

    #[test]
    fn slides_across_gaps() {
        let (rows, moved) = swept(
            [[2, 0, 0, 2], [0, 0, 8, 0], [4, 0, 0, 0], [0, 16, 0, 16]],
            Direction::Right,
        );
        assert!(moved);
        assert_eq!(rows, [[0, 0, 0, 4], [0, 0, 0, 8], [0, 0, 0, 4], [0, 0, 0, 32]]);
    }

    #[test]
    fn every_direction_shares_the_primitive() {
        let start = [[0, 0, 0, 0], [0, 2, 2, 0], [0, 0, 0, 0], [0, 0, 0, 0]];
        assert_eq!(swept(start, Direction::Left).0[1], [4, 0, 0, 0]);
        assert_eq!(swept(start, Direction::Right).0[1], [0, 0, 0, 4]);
        assert_eq!(
            swept(start, Direction::Up).0,
            [[0, 2, 2, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]
        );
        assert_eq!(
            swept(start, Direction::Down).0,
            [[0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 2, 2, 0]]
        );
    }
}
