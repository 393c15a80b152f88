use std::collections::{HashSet, VecDeque};

use anyhow::Result;
use cycles_autopilot::bots::create_bot;
use cycles_autopilot::grid::{Direction, GameState, Player, Position};
use cycles_autopilot::runner::{run_agent, AgentVanished, RunOutcome};
use cycles_autopilot::session::Session;

/// In-memory session replaying a fixed sequence of snapshots.
struct ScriptedSession {
    ticks: VecDeque<GameState>,
    sent: Vec<Direction>,
}

impl ScriptedSession {
    fn new(ticks: Vec<GameState>) -> Self {
        Self {
            ticks: ticks.into(),
            sent: Vec::new(),
        }
    }
}

impl Session for ScriptedSession {
    fn is_active(&self) -> bool {
        !self.ticks.is_empty()
    }

    fn receive_state(&mut self) -> Result<Option<GameState>> {
        Ok(self.ticks.pop_front())
    }

    fn send_move(&mut self, direction: Direction) -> Result<()> {
        self.sent.push(direction);
        Ok(())
    }
}

fn player(id: u32, name: &str, x: i32, y: i32) -> Player {
    Player {
        id,
        name: name.to_string(),
        position: Position::new(x, y),
        alive: true,
    }
}

fn snapshot(players: Vec<Player>) -> GameState {
    GameState {
        width: 10,
        height: 10,
        occupied: HashSet::new(),
        players,
    }
}

#[test]
fn hunter_plays_every_tick_until_the_server_closes() -> Result<()> {
    let ticks = vec![
        snapshot(vec![player(0, "ava", 5, 5), player(1, "rival", 0, 0)]),
        snapshot(vec![player(0, "ava", 5, 4), player(1, "rival", 0, 1)]),
        snapshot(vec![player(0, "ava", 4, 4), player(1, "rival", 1, 1)]),
    ];
    let mut session = ScriptedSession::new(ticks);
    let mut bot = create_bot("hunter").expect("roster bot");

    let outcome = run_agent(&mut session, bot.as_mut(), "ava")?;

    assert_eq!(outcome, RunOutcome::SessionClosed);
    assert_eq!(session.sent.len(), 3);
    Ok(())
}

#[test]
fn hunter_retires_once_no_opponents_remain() -> Result<()> {
    let ticks = vec![
        snapshot(vec![player(0, "ava", 5, 5), player(1, "rival", 0, 0)]),
        snapshot(vec![player(0, "ava", 5, 4)]),
        // Never reached: the loop must stop at the retirement tick.
        snapshot(vec![player(0, "ava", 5, 3), player(1, "rival", 0, 0)]),
    ];
    let mut session = ScriptedSession::new(ticks);
    let mut bot = create_bot("hunter").expect("roster bot");

    let outcome = run_agent(&mut session, bot.as_mut(), "ava")?;

    assert_eq!(outcome, RunOutcome::NoTargets);
    assert_eq!(session.sent.len(), 1, "no moves after retirement");
    assert_eq!(session.ticks.len(), 1, "loop stopped mid-script");
    Ok(())
}

#[test]
fn missing_own_record_aborts_the_loop() {
    let ticks = vec![snapshot(vec![player(1, "rival", 0, 0)])];
    let mut session = ScriptedSession::new(ticks);
    let mut bot = create_bot("hunter").expect("roster bot");

    let err = run_agent(&mut session, bot.as_mut(), "ava").unwrap_err();

    assert!(err.downcast_ref::<AgentVanished>().is_some(), "{err:#}");
    assert!(session.sent.is_empty());
}

#[test]
fn zigzag_weaves_along_the_top_edge() -> Result<()> {
    // Start against the top edge: the northward weave is blocked, so the bot
    // advances east, then runs its southward leg.
    let ticks = vec![
        snapshot(vec![player(0, "ava", 2, 0), player(1, "rival", 9, 9)]),
        snapshot(vec![player(0, "ava", 3, 0), player(1, "rival", 9, 9)]),
        snapshot(vec![player(0, "ava", 3, 1), player(1, "rival", 9, 9)]),
    ];
    let mut session = ScriptedSession::new(ticks);
    let mut bot = create_bot("zigzag").expect("roster bot");

    let outcome = run_agent(&mut session, bot.as_mut(), "ava")?;

    assert_eq!(outcome, RunOutcome::SessionClosed);
    assert_eq!(
        session.sent,
        vec![Direction::East, Direction::South, Direction::South]
    );
    Ok(())
}
