//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no I/O, making them usable in any
//! context (core simulation, terminal rendering, key mapping).
//!
//! # Board Dimensions
//!
//! The flying field is a fixed grid:
//!
//! - **Width**: 30 columns (indexed 0-29, left to right)
//! - **Height**: 16 rows (indexed 0-15, bottom to top)
//! - **Plane start**: (`BOARD_WIDTH / 4`, `BOARD_HEIGHT / 2`) = (7, 8)
//!
//! # Game Timing and Scoring
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 100 | Board scrolls one column per tick |
//! | `STEP_BONUS_EVERY` | 10 | Survival bonus period (ticks) |
//! | `STEP_BONUS_POINTS` | 5 | Survival bonus |
//! | `BAD_SPAWN_EVERY` | 8 | Bad piece spawn period (ticks) |
//! | `GOOD_SPAWN_EVERY` | 19 | Good piece spawn period (ticks) |
//! | `GOOD_PIECE_POINTS` | 10 | Points per collected good cell |
//!
//! # Examples
//!
//! ```
//! use aviator_types::{Direction, ShapeClass, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! // Classification is derived from the shape id
//! assert_eq!(ShapeKind::Double.class(), ShapeClass::Good);
//! assert_eq!(ShapeKind::Star.class(), ShapeClass::Bad);
//!
//! // Parse from string (case-insensitive)
//! assert_eq!(ShapeKind::from_str("rect_horizontal"), Some(ShapeKind::RectHorizontal));
//!
//! // Up moves the plane towards higher rows
//! assert_eq!(Direction::Up.delta(), (0, 1));
//!
//! assert_eq!(BOARD_WIDTH, 30);
//! assert_eq!(BOARD_HEIGHT, 16);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Board width in cells (30 columns)
pub const BOARD_WIDTH: u8 = 30;

/// Board height in cells (16 rows)
pub const BOARD_HEIGHT: u8 = 16;

/// Default tick period in milliseconds
pub const TICK_MS: u32 = 100;

/// Every n-th tick awards the survival bonus
pub const STEP_BONUS_EVERY: u32 = 10;

/// Survival bonus awarded every `STEP_BONUS_EVERY` ticks
pub const STEP_BONUS_POINTS: u32 = 5;

/// Every n-th tick spawns a bad piece
pub const BAD_SPAWN_EVERY: u32 = 8;

/// Every n-th tick spawns a good piece, unless a bad piece spawns on the same tick
pub const GOOD_SPAWN_EVERY: u32 = 19;

/// Points for each good cell the plane runs into
pub const GOOD_PIECE_POINTS: u32 = 10;

/// Number of shape variants (size of per-shape lookup tables)
pub const SHAPE_COUNT: usize = 8;


/// Shape variants known to the game
///
/// - **Empty**: no shape (empty grid cell)
/// - **Plane**: the player
/// - **Double**, **Triple**: good pieces (golden), worth points
/// - **Star**, **I**, **RectHorizontal**, **Square**: bad pieces, fatal on contact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ShapeKind {
    #[default]
    Empty,
    Plane,
    Double,
    Triple,
    Star,
    I,
    RectHorizontal,
    Square,
}

impl ShapeKind {
    /// All variants in index order
    pub const ALL: [ShapeKind; SHAPE_COUNT] = [
        ShapeKind::Empty,
        ShapeKind::Plane,
        ShapeKind::Double,
        ShapeKind::Triple,
        ShapeKind::Star,
        ShapeKind::I,
        ShapeKind::RectHorizontal,
        ShapeKind::Square,
    ];

    /// Dense index for per-shape lookup tables
    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Classification derived from the shape id
    pub const fn class(self) -> ShapeClass {
        match self {
            ShapeKind::Empty => ShapeClass::Empty,
            ShapeKind::Plane => ShapeClass::Player,
            ShapeKind::Double | ShapeKind::Triple => ShapeClass::Good,
            ShapeKind::Star | ShapeKind::I | ShapeKind::RectHorizontal | ShapeKind::Square => {
                ShapeClass::Bad
            }
        }
    }

    pub const fn is_empty(self) -> bool {
        matches!(self, ShapeKind::Empty)
    }

    pub const fn is_good(self) -> bool {
        matches!(self.class(), ShapeClass::Good)
    }

    pub const fn is_bad(self) -> bool {
        matches!(self.class(), ShapeClass::Bad)
    }

    /// Parse shape kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use aviator_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_str("Star"), Some(ShapeKind::Star));
    /// assert_eq!(ShapeKind::from_str("i"), Some(ShapeKind::I));
    /// assert_eq!(ShapeKind::from_str("none"), Some(ShapeKind::Empty));
    /// assert_eq!(ShapeKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "empty" | "none" => Some(ShapeKind::Empty),
            "plane" => Some(ShapeKind::Plane),
            "double" => Some(ShapeKind::Double),
            "triple" => Some(ShapeKind::Triple),
            "star" => Some(ShapeKind::Star),
            "i" => Some(ShapeKind::I),
            "rect_horizontal" | "recthorizontal" => Some(ShapeKind::RectHorizontal),
            "square" => Some(ShapeKind::Square),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Empty => "empty",
            ShapeKind::Plane => "plane",
            ShapeKind::Double => "double",
            ShapeKind::Triple => "triple",
            ShapeKind::Star => "star",
            ShapeKind::I => "i",
            ShapeKind::RectHorizontal => "rect_horizontal",
            ShapeKind::Square => "square",
        }
    }
}

/// What running into a shape means for the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ShapeClass {
    Empty,
    Player,
    Good,
    Bad,
}

/// A cell on the game board
///
/// `ShapeKind::Empty` marks an empty cell; anything else is the shape that
/// occupies it. Used by the board as a flat array of cells.
pub type Cell = ShapeKind;

/// Plane movement directions
///
/// Rows grow upward, so `Up` increases y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Anchor delta (dx, dy) for this direction
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Commands a host can send to the game session
///
/// The periodic tick is driven separately by the host timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GameAction {
    /// Move the plane one cell in a direction
    Move(Direction),
    /// Toggle pause while a round is running
    Pause,
    /// Start a round unless one is already running
    Start,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use aviator_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("moveUp"), Some(GameAction::Move(Direction::Up)));
    /// assert_eq!(GameAction::from_str("pause"), Some(GameAction::Pause));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveup" => Some(GameAction::Move(Direction::Up)),
            "movedown" => Some(GameAction::Move(Direction::Down)),
            "moveleft" => Some(GameAction::Move(Direction::Left)),
            "moveright" => Some(GameAction::Move(Direction::Right)),
            "pause" => Some(GameAction::Pause),
            "start" => Some(GameAction::Start),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(Direction::Up) => "moveUp",
            GameAction::Move(Direction::Down) => "moveDown",
            GameAction::Move(Direction::Left) => "moveLeft",
            GameAction::Move(Direction::Right) => "moveRight",
            GameAction::Pause => "pause",
            GameAction::Start => "start",
        }
    }
}

/// Lifecycle of a game session
///
/// ```text
/// NotStarted --start--> Running <--pause--> Paused
///                          |
///                     bad collision
///                          v
///                      GameOver --start--> Running
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SessionPhase {
    #[default]
    NotStarted,
    Running,
    Paused,
    GameOver,
}

impl SessionPhase {
    /// A round is in progress (running or paused)
    pub const fn is_started(self) -> bool {
        matches!(self, SessionPhase::Running | SessionPhase::Paused)
    }

    pub const fn is_paused(self) -> bool {
        matches!(self, SessionPhase::Paused)
    }
}
