//! Food placement by rejection sampling over the grid.

use log::warn;
use rand::Rng;
use rand::seq::IteratorRandom;

use super::state::{Cell, Snake};

/// Random draws per grid cell before falling back to a scan of free cells.
const ATTEMPTS_PER_CELL: u64 = 4;

/// Pick a cell uniformly at random from the grid that the snake does not
/// occupy.
///
/// Draws candidates until one is free, giving up after a bounded number of
/// tries and then choosing among the free cells directly. Returns `None` only
/// when the snake covers every cell.
pub fn place_food<R: Rng>(rng: &mut R, snake: &Snake, tile_count: u32) -> Option<Cell> {
    if tile_count == 0 {
        return None;
    }
    let side = tile_count as i32;
    let max_attempts = (tile_count as u64)
        .saturating_mul(tile_count as u64)
        .saturating_mul(ATTEMPTS_PER_CELL);

    for _ in 0..max_attempts {
        let candidate = Cell::new(rng.gen_range(0..side), rng.gen_range(0..side));
        if !snake.contains(candidate) {
            return Some(candidate);
        }
    }

    let free = (0..side)
        .flat_map(|y| (0..side).map(move |x| Cell::new(x, y)))
        .filter(|&cell| !snake.contains(cell))
        .choose(rng);

    if free.is_none() {
        warn!(
            "no free cell for food on a {}x{} grid (snake length {})",
            tile_count,
            tile_count,
            snake.len()
        );
    }
    free
}
