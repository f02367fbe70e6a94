use crate::board::Board;
use crate::types::{Cell, SessionPhase, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlaneSnapshot {
    pub shape: ShapeKind,
    pub x: i8,
    pub y: i8,
}

impl From<&Board> for PlaneSnapshot {
    fn from(board: &Board) -> Self {
        Self {
            shape: board.plane().shape(),
            x: board.plane_x(),
            y: board.plane_y(),
        }
    }
}

/// Everything a host needs to draw one frame.
///
/// `board[y][x]`, with row 0 at the bottom of the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameSnapshot {
    pub board: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub plane: PlaneSnapshot,
    pub phase: SessionPhase,
    pub round_id: u32,
    pub step_counter: u32,
    pub pieces_spawned: u32,
    pub score: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = [[ShapeKind::Empty; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        self.plane = PlaneSnapshot {
            shape: ShapeKind::Plane,
            x: 0,
            y: 0,
        };
        self.phase = SessionPhase::NotStarted;
        self.round_id = 0;
        self.step_counter = 0;
        self.pieces_spawned = 0;
        self.score = 0;
    }

    pub fn started(&self) -> bool {
        self.phase.is_started()
    }

    pub fn paused(&self) -> bool {
        self.phase.is_paused()
    }

    pub fn game_over(&self) -> bool {
        self.phase == SessionPhase::GameOver
    }

    pub fn playable(&self) -> bool {
        self.phase == SessionPhase::Running
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            board: [[ShapeKind::Empty; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            plane: PlaneSnapshot {
                shape: ShapeKind::Plane,
                x: 0,
                y: 0,
            },
            phase: SessionPhase::NotStarted,
            round_id: 0,
            step_counter: 0,
            pieces_spawned: 0,
            score: 0,
        };
        s.clear();
        s
    }
}
