//! Terminal input module (host-facing).
//!
//! This module is independent of any UI framework. It maps `crossterm` key
//! events into [`crate::types::GameAction`] commands for the session. Which
//! command a key produces depends on whether a round is in progress: Space
//! starts a round when none is running and pauses otherwise.

pub mod map;

pub use aviator_types as types;

pub use map::{handle_key_event, should_quit};
