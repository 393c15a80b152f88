//! Session plumbing between the agent and the arena server.
//!
//! The decision core only ever sees the [`Session`] trait. The bundled
//! transport is deliberately thin: newline-delimited JSON over TCP with a
//! single join handshake, one `tick` in and one `move` out per round.

use std::io::{BufRead, BufReader, Write};
use std::net::TcpStream;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::grid::{Direction, GameState};

pub const DEFAULT_SERVER_ADDR: &str = "127.0.0.1:43210";

/// The collaborator boundary the tick loop drives.
pub trait Session {
    fn is_active(&self) -> bool;
    /// Blocks until the next tick's snapshot arrives; `None` once the session
    /// has ended cleanly.
    fn receive_state(&mut self) -> Result<Option<GameState>>;
    /// Fire-and-forget emission of this tick's move.
    fn send_move(&mut self, direction: Direction) -> Result<()>;
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ClientMessage<'a> {
    Join { name: &'a str },
    Move { direction: Direction },
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ServerMessage {
    Tick { state: GameState },
    Shutdown,
}

pub struct TcpSession {
    reader: BufReader<TcpStream>,
    writer: TcpStream,
    active: bool,
}

impl TcpSession {
    pub fn connect(addr: &str, name: &str) -> Result<Self> {
        let stream = TcpStream::connect(addr)
            .with_context(|| format!("failed connecting to arena server at {addr}"))?;
        let reader = BufReader::new(stream.try_clone().context("failed cloning arena stream")?);
        let mut session = Self {
            reader,
            writer: stream,
            active: true,
        };
        session.send_line(&ClientMessage::Join { name })?;
        Ok(session)
    }

    fn send_line(&mut self, message: &ClientMessage<'_>) -> Result<()> {
        let mut line = serde_json::to_string(message).context("failed encoding client message")?;
        line.push('\n');
        self.writer
            .write_all(line.as_bytes())
            .context("failed writing to arena server")?;
        self.writer.flush().context("failed flushing arena stream")
    }
}

impl Session for TcpSession {
    fn is_active(&self) -> bool {
        self.active
    }

    fn receive_state(&mut self) -> Result<Option<GameState>> {
        let mut line = String::new();
        loop {
            line.clear();
            let read = self
                .reader
                .read_line(&mut line)
                .context("failed reading from arena server")?;
            if read == 0 {
                self.active = false;
                return Ok(None);
            }
            let payload = line.trim();
            if payload.is_empty() {
                continue;
            }
            let message: ServerMessage =
                serde_json::from_str(payload).context("failed decoding server message")?;
            return match message {
                ServerMessage::Tick { state } => Ok(Some(state)),
                ServerMessage::Shutdown => {
                    self.active = false;
                    Ok(None)
                }
            };
        }
    }

    fn send_move(&mut self, direction: Direction) -> Result<()> {
        self.send_line(&ClientMessage::Move { direction })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Player, Position};
    use std::collections::HashSet;

    #[test]
    fn client_messages_use_the_tagged_wire_shape() {
        let join = serde_json::to_value(ClientMessage::Join { name: "ava" }).unwrap();
        assert_eq!(join["type"], "join");
        assert_eq!(join["name"], "ava");

        let mv = serde_json::to_value(ClientMessage::Move {
            direction: Direction::North,
        })
        .unwrap();
        assert_eq!(mv["type"], "move");
        assert_eq!(mv["direction"], "north");
    }

    #[test]
    fn tick_messages_round_trip_the_snapshot() {
        let state = GameState {
            width: 4,
            height: 4,
            occupied: HashSet::from([Position::new(1, 1)]),
            players: vec![Player {
                id: 1,
                name: "ava".to_string(),
                position: Position::new(0, 0),
                alive: true,
            }],
        };
        let encoded = serde_json::json!({ "type": "tick", "state": state }).to_string();
        let decoded: ServerMessage = serde_json::from_str(&encoded).unwrap();
        match decoded {
            ServerMessage::Tick { state } => {
                assert_eq!(state.width, 4);
                assert!(state.occupied.contains(&Position::new(1, 1)));
                assert_eq!(state.players[0].name, "ava");
            }
            ServerMessage::Shutdown => panic!("expected a tick"),
        }
    }

    #[test]
    fn shutdown_message_decodes() {
        let decoded: ServerMessage = serde_json::from_str(r#"{"type":"shutdown"}"#).unwrap();
        assert!(matches!(decoded, ServerMessage::Shutdown));
    }
}
