//! Bounded reachability estimate: how open is the region around a cell.

use std::collections::{BTreeSet, VecDeque};

use crate::grid::{Direction, GameState, Position};

/// Hard bound on the flood fill. An unbounded fill is O(grid area) and runs
/// once per candidate move per tick; the cap keeps the per-tick cost constant.
/// Tunable by choice, not derived from anything.
pub const SPACE_SEARCH_CAP: usize = 20;

/// Breadth-first count of cells reachable from `origin` through empty
/// in-bounds neighbors, stopping once `cap` cells have been counted.
///
/// The origin itself is seeded and counted whenever it is in-grid, even when
/// occupied: the caller's own cell always carries its own body, and the
/// measurement is about the region around it. Expansion only ever crosses
/// empty cells, so for an empty origin this returns exactly
/// `min(cap, connected component size)`. An out-of-grid origin scores 0.
pub fn available_space(state: &GameState, origin: Position, cap: usize) -> usize {
    if !state.is_inside_grid(origin) {
        return 0;
    }

    let mut frontier = VecDeque::new();
    let mut visited = BTreeSet::new();
    frontier.push_back(origin);
    visited.insert(origin);

    let mut counted = 0;
    while counted < cap {
        let Some(current) = frontier.pop_front() else {
            break;
        };
        counted += 1;

        for direction in Direction::CARDINALS {
            let neighbor = current.step(direction);
            if state.is_cell_empty(neighbor) && visited.insert(neighbor) {
                frontier.push_back(neighbor);
            }
        }
    }

    counted
}
