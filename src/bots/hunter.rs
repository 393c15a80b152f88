//! hunter: nearest-opponent pressure bot.
//!
//! Chases the closest living opponent until nobody is left:
//! - Ranks each legal move on safety, proximity, trapping potential, and open space
//! - One-ply opponent prediction, a heuristic with no knowledge of the
//!   opponent's actual policy
//! - Drops targeting entirely when its own region gets tight and just looks
//!   for a way out

use serde::Serialize;
use tracing::warn;

use crate::bots::{CycleBot, Decision, DecisionError};
use crate::grid::{Direction, GameState, Player, Position};
use crate::space::{available_space, SPACE_SEARCH_CAP};

#[derive(Clone, Copy, Debug, Serialize)]
pub struct HunterConfig {
    pub id: &'static str,
    pub description: &'static str,
    /// Flood-fill bound for every openness estimate.
    pub space_cap: usize,
    /// Openness below this flips the bot into escape mode.
    pub tight_spot_threshold: usize,
    /// Penalty per blocked neighbor of a candidate cell.
    pub blocked_neighbor_penalty: i32,
    /// Bonus per blocked neighbor of the predicted opponent cell.
    pub trap_bonus: i32,
}

impl Default for HunterConfig {
    fn default() -> Self {
        Self {
            id: "hunter",
            description:
                "Nearest-opponent hunter scoring safety, proximity, trapping, and open space.",
            space_cap: SPACE_SEARCH_CAP,
            tight_spot_threshold: 5,
            blocked_neighbor_penalty: 10,
            trap_bonus: 5,
        }
    }
}

pub struct HunterBot {
    cfg: HunterConfig,
}

impl HunterBot {
    pub fn new() -> Self {
        Self::with_config(HunterConfig::default())
    }

    pub fn with_config(cfg: HunterConfig) -> Self {
        Self { cfg }
    }

    /// Closest living opponent by Manhattan distance. Strict `<` against the
    /// running minimum, so the earliest entry in the player list wins ties.
    pub fn find_nearest_opponent<'a>(
        &self,
        state: &'a GameState,
        me: &Player,
    ) -> Option<&'a Player> {
        let mut nearest: Option<&Player> = None;
        let mut min_distance = i32::MAX;

        for player in &state.players {
            if player.id == me.id || !player.alive {
                continue;
            }
            let distance = me.position.manhattan(player.position);
            if distance < min_distance {
                min_distance = distance;
                nearest = Some(player);
            }
        }

        nearest
    }

    /// One-ply guess at the opponent's next cell: first empty neighbor in
    /// scan order, else it stays put. An opponent recorded outside the grid
    /// is a malformed reference and reported as such.
    pub fn predict_opponent_move(
        &self,
        state: &GameState,
        opponent: &Player,
    ) -> Result<Position, DecisionError> {
        if !state.is_inside_grid(opponent.position) {
            return Err(DecisionError::OpponentOffGrid {
                id: opponent.id,
                name: opponent.name.clone(),
            });
        }

        for direction in Direction::CARDINALS {
            let next = opponent.position.step(direction);
            if state.is_cell_empty(next) {
                return Ok(next);
            }
        }
        Ok(opponent.position)
    }

    fn safety_score(&self, state: &GameState, pos: Position) -> i32 {
        let mut score = 0;
        for direction in Direction::CARDINALS {
            if !state.is_cell_empty(pos.step(direction)) {
                score -= self.cfg.blocked_neighbor_penalty;
            }
        }
        score
    }

    // A property of the predicted cell alone: every candidate receives the
    // identical bonus, so this term never reorders the ranking.
    fn trapping_score(&self, state: &GameState, predicted: Position) -> i32 {
        let mut score = 0;
        for direction in Direction::CARDINALS {
            if !state.is_cell_empty(predicted.step(direction)) {
                score += self.cfg.trap_bonus;
            }
        }
        score
    }

    /// Rank the legal candidate moves and return the best one.
    pub fn decide_best_move(
        &self,
        state: &GameState,
        me: &Player,
        target: Position,
        predicted: Position,
    ) -> Result<Direction, DecisionError> {
        let mut ranked: Vec<(Direction, i32)> = Vec::with_capacity(4);

        for direction in Direction::CARDINALS {
            let candidate = me.position.step(direction);
            if !state.is_cell_empty(candidate) {
                continue;
            }

            let safety = self.safety_score(state, candidate);
            let proximity = -candidate.manhattan(target);
            let trapping = self.trapping_score(state, predicted);
            let space = available_space(state, candidate, self.cfg.space_cap) as i32;

            ranked.push((direction, safety + proximity + trapping + space));
        }

        // Stable sort keeps scan order for equal scores.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        ranked
            .first()
            .map(|(direction, _)| *direction)
            .ok_or(DecisionError::NoLegalMove)
    }

    /// First legal direction in scan order; North when fully boxed in (the
    /// arena ends the episode on the resulting collision).
    pub fn escape_direction(&self, state: &GameState, me: &Player) -> Direction {
        for direction in Direction::CARDINALS {
            if state.is_cell_empty(me.position.step(direction)) {
                return direction;
            }
        }
        Direction::North
    }

    pub fn in_tight_spot(&self, state: &GameState, me: &Player) -> bool {
        available_space(state, me.position, self.cfg.space_cap) < self.cfg.tight_spot_threshold
    }
}

impl Default for HunterBot {
    fn default() -> Self {
        Self::new()
    }
}

impl CycleBot for HunterBot {
    fn id(&self) -> &'static str {
        self.cfg.id
    }

    fn description(&self) -> &'static str {
        self.cfg.description
    }

    fn reset(&mut self) {}

    fn decide(&mut self, state: &GameState, me: &Player) -> Decision {
        let Some(opponent) = self.find_nearest_opponent(state, me) else {
            return Decision::Retire;
        };

        if self.in_tight_spot(state, me) {
            warn!("{}: activating escape mode", me.name);
            return Decision::Move(self.escape_direction(state, me));
        }

        let predicted = match self.predict_opponent_move(state, opponent) {
            Ok(position) => position,
            Err(err) => {
                warn!("{}: {err}; assuming the opponent holds still", me.name);
                opponent.position
            }
        };

        match self.decide_best_move(state, me, opponent.position, predicted) {
            Ok(direction) => Decision::Move(direction),
            Err(err) => {
                warn!("{}: {err}; falling back to the escape scan", me.name);
                Decision::Move(self.escape_direction(state, me))
            }
        }
    }
}
