use alloc::vec::Vec;
use rand::Rng;

use crate::*;

/// Draws a spawn value, 2 or 4 with even odds.
pub fn random_tile_value<R: Rng + ?Sized>(rng: &mut R) -> TileValue {
    SPAWN_VALUES[rng.random_range(0..SPAWN_VALUES.len())]
}

/// Places `count` random tiles, each into a cell drawn uniformly from `candidates`.
///
/// Chosen cells are removed from `candidates`. Running out of candidates before `count`
/// tiles are placed is an invariant violation and reports [`GameError::SpawnExhausted`];
/// tiles placed before that point stay on the board.
pub fn spawn_tiles<R: Rng + ?Sized>(
    board: &mut Board,
    candidates: &mut Vec<Coord2>,
    count: CellCount,
    rng: &mut R,
) -> Result<()> {
    let available = candidates.len();
    for _ in 0..count {
        if candidates.is_empty() {
            let err = GameError::SpawnExhausted {
                requested: count,
                available: available.try_into().unwrap_or(CellCount::MAX),
            };
            log::error!("{err}");
            return Err(err);
        }

        let index = rng.random_range(0..candidates.len());
        let coords = candidates.remove(index);
        debug_assert!(board.is_empty_at(coords), "spawn candidate {coords:?} is occupied");

        let value = random_tile_value(rng);
        board.set(coords, value);
        log::debug!("spawned {value} at {coords:?}");
    }
    Ok(())
}
