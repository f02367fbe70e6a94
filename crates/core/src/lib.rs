//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the flying field, the shapes, and the session state
//! machine. It has **no dependencies** on UI, terminal, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical rounds
//! - **Testable**: Unit tests for every rule
//! - **Portable**: Any host can drive it (terminal, GUI, headless)
//! - **Fast**: Zero-allocation tick processing
//!
//! # Module Structure
//!
//! - [`shapes`]: static shape catalog (cells, colors, good/bad lists)
//! - [`piece`]: a reusable handle onto one shape with cached bounding size
//! - [`board`]: 30x16 grid with placement, scrolling and plane collisions
//! - [`game_state`]: start/pause/game-over lifecycle, score and spawn policy
//! - [`observer`]: status and redraw notifications pushed to the host
//! - [`rng`]: seeded LCG used for spawns
//! - [`snapshot`]: copyable render state
//!
//! # Game Rules
//!
//! - The board scrolls one column left per tick; column 0 is always cleared
//! - Every 10th tick is worth 5 points
//! - Every 8th tick a bad piece spawns at the right edge; otherwise every
//!   19th tick a good piece spawns
//! - Running into a good cell is worth 10 points and consumes the cell
//! - Running into a bad cell ends the round
//!
//! # Example
//!
//! ```
//! use aviator_core::GameState;
//! use aviator_types::{Direction, GameAction};
//!
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! game.apply_action(GameAction::Move(Direction::Up));
//! assert_eq!(game.plane().y, 9);
//!
//! game.tick();
//! assert_eq!(game.step_counter(), 1);
//! ```
//!
//! # Timing
//!
//! The host calls [`GameState::tick`](game_state::GameState::tick) once per
//! period (`TICK_MS`, 100ms by default) and forwards input between ticks.

pub mod board;
pub mod game_state;
pub mod observer;
pub mod piece;
pub mod rng;
pub mod shapes;
pub mod snapshot;

pub use aviator_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, CollisionOutcome, PLANE_START};
pub use game_state::{scheduled_spawn, GameState};
pub use observer::{NoopObserver, SessionObserver, StatusLine, StatusMessage};
pub use piece::Piece;
pub use rng::SimpleRng;
pub use shapes::{bad_pieces, get_cells, get_color, good_pieces};
pub use snapshot::{GameSnapshot, PlaneSnapshot};
