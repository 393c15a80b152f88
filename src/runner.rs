//! The per-tick agent loop: pull a snapshot, decide, emit one move.

use anyhow::Result;
use thiserror::Error;
use tracing::info;

use crate::bots::{CycleBot, Decision};
use crate::session::Session;

/// Contract violation by the state source: the agent's own record is gone.
/// Not locally recoverable - there are no coordinates left to act from.
#[derive(Debug, Error)]
#[error("agent '{name}' is missing from the received game state")]
pub struct AgentVanished {
    pub name: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// No living opponents remain; the episode is over for this agent.
    NoTargets,
    /// The server ended the session.
    SessionClosed,
}

/// Drive `bot` against `session` until the episode ends. Recoverable
/// degradations are handled inside the strategies; the only error surfaced
/// from the decision pipeline itself is the fatal [`AgentVanished`] tier.
pub fn run_agent(
    session: &mut dyn Session,
    bot: &mut dyn CycleBot,
    name: &str,
) -> Result<RunOutcome> {
    bot.reset();

    while session.is_active() {
        let Some(state) = session.receive_state()? else {
            break;
        };

        let me = state.player_named(name).ok_or_else(|| AgentVanished {
            name: name.to_string(),
        })?;

        match bot.decide(&state, me) {
            Decision::Move(direction) => session.send_move(direction)?,
            Decision::Retire => {
                info!("{name}: no targets remaining, stopping");
                return Ok(RunOutcome::NoTargets);
            }
        }
    }

    Ok(RunOutcome::SessionClosed)
}
