//! Per-tick snapshot of the arena grid.
//!
//! These types double as the wire schema: the server serializes one
//! [`GameState`] per tick and the agent treats it as read-only until the next
//! snapshot replaces it wholesale.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A grid cell coordinate. Plain value type; stepping off the grid yields a
/// perfectly valid `Position` that simply fails the in-bounds check.
///
/// The derived ordering (x, then y) exists so ordered sets can deduplicate
/// visited cells during the space search; it carries no spatial meaning.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell one step away in `direction`. No clamping.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    pub fn manhattan(self, other: Self) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

/// One of the four cardinal moves an agent may emit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Fixed scan priority used everywhere a direction order matters.
    pub const CARDINALS: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: u32,
    pub name: String,
    pub position: Position,
    pub alive: bool,
}

/// Everything visible in one tick: grid extent, the occupancy set (trails plus
/// bodies), and the ordered player list.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    pub width: i32,
    pub height: i32,
    pub occupied: HashSet<Position>,
    pub players: Vec<Player>,
}

impl GameState {
    pub fn is_inside_grid(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    /// Whether an agent could legally move into `pos` this tick.
    /// Out-of-grid cells are never empty, and neither is any living player's
    /// current cell.
    pub fn is_cell_empty(&self, pos: Position) -> bool {
        self.is_inside_grid(pos)
            && !self.occupied.contains(&pos)
            && !self
                .players
                .iter()
                .any(|player| player.alive && player.position == pos)
    }

    pub fn player_named(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|player| player.name == name)
    }
}
