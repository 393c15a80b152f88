//! Strategy roster.
//!
//! Every strategy implements [`CycleBot`] and is constructed by id; the tick
//! loop drives whichever one the CLI selected, so swapping policies never
//! touches the loop itself.

pub mod hunter;
pub mod zigzag;

use thiserror::Error;

use crate::grid::{Direction, GameState, Player};

/// The single per-tick output of a strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Move(Direction),
    /// No living opponents remain; the agent stops emitting moves.
    Retire,
}

/// Recoverable failures inside a decision step. Each one degrades to a safe
/// default at the call site; none of them stops the tick loop.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecisionError {
    #[error("opponent '{name}' (id {id}) sits outside the grid")]
    OpponentOffGrid { id: u32, name: String },
    #[error("no legal move from the current cell")]
    NoLegalMove,
}

pub trait CycleBot {
    fn id(&self) -> &'static str;
    fn description(&self) -> &'static str;
    /// Clear any cross-tick memory before a new session.
    fn reset(&mut self);
    fn decide(&mut self, state: &GameState, me: &Player) -> Decision;
}

pub const DEFAULT_BOT_ID: &str = "hunter";

pub fn bot_ids() -> Vec<&'static str> {
    vec!["hunter", "zigzag"]
}

pub fn describe_bots() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            "hunter",
            "Nearest-opponent hunter scoring safety, proximity, trapping, and open space.",
        ),
        (
            "zigzag",
            "Pattern bot weaving north-south while advancing east.",
        ),
    ]
}

pub fn create_bot(id: &str) -> Option<Box<dyn CycleBot>> {
    match id {
        "hunter" => Some(Box::new(hunter::HunterBot::new())),
        "zigzag" => Some(Box::new(zigzag::ZigzagBot::new())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_ids_resolve_and_describe_themselves() {
        for id in bot_ids() {
            let bot = create_bot(id).expect("roster id should construct");
            assert_eq!(bot.id(), id);
            assert!(!bot.description().is_empty());
        }
    }

    #[test]
    fn unknown_id_is_rejected() {
        assert!(create_bot("sidewinder").is_none());
    }

    #[test]
    fn default_bot_is_in_the_roster() {
        assert!(bot_ids().contains(&DEFAULT_BOT_ID));
    }
}
