//! zigzag: fixed-pattern weave bot.
//!
//! No spatial analysis at all; the point is that the decision contract also
//! fits a stateful pattern policy:
//! - Weaves north/south while the weave cell stays open
//! - Advances along its primary heading when the weave is blocked, flipping
//!   the weave for the next leg
//! - Once fully blocked it keeps emitting the primary heading and lets the
//!   arena end the episode

use serde::Serialize;

use crate::bots::{CycleBot, Decision};
use crate::grid::{Direction, GameState, Player};

#[derive(Clone, Copy, Debug, Serialize)]
pub struct ZigzagConfig {
    pub id: &'static str,
    pub description: &'static str,
    /// Heading the bot advances along between weave legs.
    pub primary: Direction,
}

impl Default for ZigzagConfig {
    fn default() -> Self {
        Self {
            id: "zigzag",
            description: "Pattern bot weaving north-south while advancing east.",
            primary: Direction::East,
        }
    }
}

pub struct ZigzagBot {
    cfg: ZigzagConfig,
    weaving_south: bool,
}

impl ZigzagBot {
    pub fn new() -> Self {
        Self::with_config(ZigzagConfig::default())
    }

    pub fn with_config(cfg: ZigzagConfig) -> Self {
        Self {
            cfg,
            weaving_south: false,
        }
    }
}

impl Default for ZigzagBot {
    fn default() -> Self {
        Self::new()
    }
}

impl CycleBot for ZigzagBot {
    fn id(&self) -> &'static str {
        self.cfg.id
    }

    fn description(&self) -> &'static str {
        self.cfg.description
    }

    fn reset(&mut self) {
        self.weaving_south = false;
    }

    fn decide(&mut self, state: &GameState, me: &Player) -> Decision {
        let weave = if self.weaving_south {
            Direction::South
        } else {
            Direction::North
        };

        if state.is_cell_empty(me.position.step(weave)) {
            return Decision::Move(weave);
        }

        if state.is_cell_empty(me.position.step(self.cfg.primary)) {
            self.weaving_south = !self.weaving_south;
            return Decision::Move(self.cfg.primary);
        }

        // Fully blocked: keep the pattern and take the collision.
        Decision::Move(self.cfg.primary)
    }
}
