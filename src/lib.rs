//! Autonomous agent for a light-cycle style grid arena.
//!
//! Every tick the arena sends a full [`grid::GameState`] snapshot; the agent
//! runs one of the [`bots`] strategies over it and answers with a single
//! cardinal move before the next tick.

pub mod bots;
pub mod grid;
pub mod runner;
pub mod session;
pub mod space;
