//! Terminal host rendering.
//!
//! A small, game-oriented rendering layer: the session snapshot is drawn
//! into a plain framebuffer, and the framebuffer is flushed to the terminal
//! as a diff against the previous frame.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep drawing pure (`GameView` does no I/O) so it can be unit-tested
//! - Compensate for glyph aspect ratio (2 chars wide per cell)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use aviator_core as core;
pub use aviator_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
