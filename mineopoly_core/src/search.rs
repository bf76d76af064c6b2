use std::collections::VecDeque;

use crate::{Position, TileKind, map::Grid};

/// Breadth-first search from `origin` for the closest tile of `kind`.
///
/// Neighbours are expanded in [`crate::map::NEIGHBOR_ORDER`] (`+x, -x, +y,
/// -y`), so among equally distant matches the one reached first in that order
/// wins. Returns `None` when no tile of `kind` exists on the board.
pub fn nearest_tile_of_kind(
    origin: Position,
    kind: TileKind,
    tiles: &Grid<TileKind>,
) -> Option<Position> {
    if !tiles.contains(origin) {
        return None;
    }

    let mut visited: Grid<bool> = Grid::new(tiles.size());
    let mut frontier = VecDeque::from([origin]);
    visited[origin] = true;

    while let Some(current) = frontier.pop_front() {
        if tiles[current] == kind {
            return Some(current);
        }
        for neighbor in tiles.neighbors(current) {
            if !visited[neighbor] {
                visited[neighbor] = true;
                frontier.push_back(neighbor);
            }
        }
    }

    None
}
