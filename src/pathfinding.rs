//! Shared movement and line-of-sight helpers for AI decisions.

use std::collections::HashSet;

use crate::constants::SIGHT_WALK_LIMIT;
use crate::grid::GridMap;

/// Manhattan distance between two grid coordinates.
pub fn manhattan_distance(a: (i32, i32), b: (i32, i32)) -> i32 {
    (a.0 - b.0).abs() + (a.1 - b.1).abs()
}

/// The cardinally adjacent tiles an entity at `pos` may step to:
/// in bounds, not a wall, and not occupied by another living entity.
pub fn valid_moves(
    pos: (i32, i32),
    grid: &GridMap,
    occupied: &HashSet<(i32, i32)>,
) -> Vec<(i32, i32)> {
    [(0, 1), (0, -1), (1, 0), (-1, 0)]
        .iter()
        .map(|(dx, dy)| (pos.0 + dx, pos.1 + dy))
        .filter(|&(x, y)| grid.is_walkable(x, y) && !occupied.contains(&(x, y)))
        .collect()
}

/// Walk a straight sign-stepped line (diagonal-capable) from `from` toward
/// `target`. Returns false if a wall or the map edge is hit before reaching
/// the target. Bounded to a fixed step count as a safety cutoff.
pub fn can_see(from: (i32, i32), target: (i32, i32), grid: &GridMap) -> bool {
    let (mut x, mut y) = from;

    for _ in 0..SIGHT_WALK_LIMIT {
        if (x, y) == target {
            return true;
        }
        x += (target.0 - x).signum();
        y += (target.1 - y).signum();
        if (x, y) == target {
            return true;
        }
        match grid.get(x, y) {
            Some(tile) if !tile.blocks_vision() => {}
            _ => return false,
        }
    }

    false
}
