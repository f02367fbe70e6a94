//! Game state module - the session state machine
//!
//! Ties together the board, RNG and observer. It owns the round lifecycle
//! (start, pause, game over), the step counter and score, and decides when
//! new pieces appear.

use log::{debug, info};

use crate::board::Board;
use crate::observer::{NoopObserver, SessionObserver, StatusMessage};
use crate::rng::SimpleRng;
use crate::snapshot::{GameSnapshot, PlaneSnapshot};
use crate::types::*;

/// Which kind of piece, if any, spawns after step `step`
///
/// Bad spawns win when both periods line up, so steps that are multiples of
/// both (every 152nd) spawn no good piece.
pub fn scheduled_spawn(step: u32) -> Option<ShapeClass> {
    if step % BAD_SPAWN_EVERY == 0 {
        Some(ShapeClass::Bad)
    } else if step % GOOD_SPAWN_EVERY == 0 {
        Some(ShapeClass::Good)
    } else {
        None
    }
}

/// Complete game session
#[derive(Debug, Clone)]
pub struct GameState<O = NoopObserver> {
    board: Board,
    rng: SimpleRng,
    observer: O,
    phase: SessionPhase,
    /// Monotonic round id (increments on every start).
    round_id: u32,
    /// Ticks survived in the current round.
    step_counter: u32,
    /// Pieces spawned in the current round.
    pieces_spawned: u32,
    /// Last spawned piece and its origin.
    last_spawn: Option<(ShapeKind, i8, i8)>,
    score: u32,
}

impl GameState<NoopObserver> {
    /// Create a new session with the given RNG seed and no observer
    pub fn new(seed: u32) -> Self {
        Self::with_observer(seed, NoopObserver)
    }
}

impl<O: SessionObserver> GameState<O> {
    pub fn with_observer(seed: u32, observer: O) -> Self {
        Self {
            board: Board::new(),
            rng: SimpleRng::new(seed),
            observer,
            phase: SessionPhase::NotStarted,
            round_id: 0,
            step_counter: 0,
            pieces_spawned: 0,
            last_spawn: None,
            score: 0,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
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

    pub fn round_id(&self) -> u32 {
        self.round_id
    }

    pub fn step_counter(&self) -> u32 {
        self.step_counter
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    pub fn last_spawn(&self) -> Option<(ShapeKind, i8, i8)> {
        self.last_spawn
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access for hosts and tests that script a scene.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn plane(&self) -> PlaneSnapshot {
        PlaneSnapshot::from(&self.board)
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);
        out.plane = self.plane();
        out.phase = self.phase;
        out.round_id = self.round_id;
        out.step_counter = self.step_counter;
        out.pieces_spawned = self.pieces_spawned;
        out.score = self.score;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Every score change goes through here so the host sees it.
    fn set_score(&mut self, score: u32) {
        self.score = score;
        self.observer.on_status(StatusMessage::Score(score));
    }

    fn add_score(&mut self, points: u32) {
        self.set_score(self.score.saturating_add(points));
    }

    /// Start a fresh round, whatever the current phase
    pub fn start(&mut self) {
        self.set_score(0);
        self.step_counter = 0;
        self.pieces_spawned = 0;
        self.last_spawn = None;
        self.round_id = self.round_id.wrapping_add(1);
        self.phase = SessionPhase::Running;

        self.board.clear();
        self.board.reset_plane();

        self.spawn_bad_piece();
        self.spawn_good_piece();

        info!("round {} started", self.round_id);
        self.observer.on_render_invalidated();
    }

    /// Start a round only when none is in progress
    pub fn start_or_ignore(&mut self) -> bool {
        if self.started() {
            return false;
        }
        self.start();
        true
    }

    /// Toggle pause; ignored when no round is in progress
    pub fn pause(&mut self) -> bool {
        match self.phase {
            SessionPhase::Running => {
                self.phase = SessionPhase::Paused;
                info!("paused at step {}", self.step_counter);
                self.observer.on_status(StatusMessage::Paused);
            }
            SessionPhase::Paused => {
                self.phase = SessionPhase::Running;
                info!("resumed at step {}", self.step_counter);
            }
            SessionPhase::NotStarted | SessionPhase::GameOver => return false,
        }

        self.observer.on_render_invalidated();
        true
    }

    /// Advance one step: scroll, settle collisions, score and spawn
    ///
    /// Returns false when the tick was ignored (not running).
    pub fn tick(&mut self) -> bool {
        if self.phase != SessionPhase::Running {
            return false;
        }

        self.board.move_board();

        let outcome = self.board.resolve_collisions();
        for _ in &outcome.consumed {
            self.add_score(GOOD_PIECE_POINTS);
        }
        if let Some((shape, x, y)) = outcome.crashed_into {
            self.end_round(shape, x, y);
            self.observer.on_render_invalidated();
            return true;
        }

        self.step_counter += 1;

        if self.step_counter % STEP_BONUS_EVERY == 0 {
            self.add_score(STEP_BONUS_POINTS);
        }

        match scheduled_spawn(self.step_counter) {
            Some(ShapeClass::Bad) => self.spawn_bad_piece(),
            Some(_) => self.spawn_good_piece(),
            None => {}
        }

        self.observer.on_render_invalidated();
        true
    }

    /// Move the plane one cell; ignored unless running or when out of bounds
    pub fn move_plane(&mut self, direction: Direction) -> bool {
        if self.phase != SessionPhase::Running {
            return false;
        }

        let (dx, dy) = direction.delta();
        let moved = self
            .board
            .try_move_plane(self.board.plane_x() + dx, self.board.plane_y() + dy);
        if moved {
            self.observer.on_render_invalidated();
        }
        moved
    }

    /// Apply a host command
    ///
    /// Returns whether the session changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Move(direction) => self.move_plane(direction),
            GameAction::Pause => self.pause(),
            GameAction::Start => self.start_or_ignore(),
        }
    }

    fn spawn_bad_piece(&mut self) {
        let spawned = self.board.spawn_bad_piece(&mut self.rng);
        self.record_spawn(spawned);
    }

    fn spawn_good_piece(&mut self) {
        let spawned = self.board.spawn_good_piece(&mut self.rng);
        self.record_spawn(spawned);
    }

    fn record_spawn(&mut self, spawned: (ShapeKind, i8, i8)) {
        self.pieces_spawned += 1;
        self.last_spawn = Some(spawned);
    }

    fn end_round(&mut self, shape: ShapeKind, x: i8, y: i8) {
        self.phase = SessionPhase::GameOver;
        info!(
            "game over: hit {} at ({}, {}) on step {}, score {}",
            shape.as_str(),
            x,
            y,
            self.step_counter,
            self.score
        );
        debug!("board holds {} occupied cells", self.board.occupied_count());
        self.observer
            .on_status(StatusMessage::GameOver { score: self.score });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::{RecordingObserver, StatusLine};

    fn started(seed: u32) -> GameState<RecordingObserver> {
        let mut state = GameState::with_observer(seed, RecordingObserver::default());
        state.start();
        state
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(12345);
        assert_eq!(state.phase(), SessionPhase::NotStarted);
        assert!(!state.started());
        assert!(!state.paused());
        assert_eq!(state.score(), 0);
        assert_eq!(state.board().occupied_count(), 0);
    }

    #[test]
    fn test_start_resets_and_spawns_two_pieces() {
        let state = started(12345);
        assert_eq!(state.phase(), SessionPhase::Running);
        assert_eq!(state.score(), 0);
        assert_eq!(state.step_counter(), 0);
        assert_eq!(state.pieces_spawned(), 2);
        assert_eq!(state.plane().x, 7);
        assert_eq!(state.plane().y, 8);
        assert!(state.board().occupied_count() > 0);
        // The last spawn of a start is always the good piece.
        assert!(state.last_spawn().unwrap().0.is_good());
        assert_eq!(state.observer().messages, [StatusMessage::Score(0)]);
    }

    #[test]
    fn test_restart_increments_round_id() {
        let mut state = started(1);
        assert_eq!(state.round_id(), 1);
        state.start();
        assert_eq!(state.round_id(), 2);
    }

    #[test]
    fn test_tick_ignored_unless_running() {
        let mut state = GameState::new(1);
        assert!(!state.tick());
        assert_eq!(state.step_counter(), 0);

        state.start();
        state.pause();
        assert!(!state.tick());
        assert_eq!(state.step_counter(), 0);
    }

    #[test]
    fn test_pause_emits_paused_only_when_entering_pause() {
        let mut state = started(1);
        assert!(state.pause());
        assert_eq!(state.observer().line.text(), "Paused");
        assert!(state.pause());
        assert_eq!(state.phase(), SessionPhase::Running);
        let paused = state
            .observer()
            .messages
            .iter()
            .filter(|m| **m == StatusMessage::Paused)
            .count();
        assert_eq!(paused, 1);
    }

    #[test]
    fn test_pause_ignored_before_start() {
        let mut state = GameState::new(1);
        assert!(!state.pause());
        assert_eq!(state.phase(), SessionPhase::NotStarted);
    }

    #[test]
    fn test_moves_ignored_while_paused() {
        let mut state = started(1);
        state.pause();
        assert!(!state.move_plane(Direction::Up));
        assert_eq!(state.plane().y, 8);
    }

    #[test]
    fn test_crash_keeps_score_and_skips_step() {
        let mut state = started(1);
        state.board_mut().clear();
        state.score = 25;
        // One column right of the plane's (7,8) cell; the scroll brings it in.
        state.board_mut().set(8, 8, ShapeKind::Square);

        assert!(state.tick());
        assert_eq!(state.phase(), SessionPhase::GameOver);
        assert!(!state.started());
        assert_eq!(state.score(), 25);
        assert_eq!(state.step_counter(), 0);
        assert_eq!(
            state.observer().line.last(),
            Some(StatusMessage::GameOver { score: 25 })
        );
    }

    #[test]
    fn test_scheduled_spawn_prefers_bad() {
        assert_eq!(scheduled_spawn(8), Some(ShapeClass::Bad));
        assert_eq!(scheduled_spawn(19), Some(ShapeClass::Good));
        assert_eq!(scheduled_spawn(152), Some(ShapeClass::Bad));
        assert_eq!(scheduled_spawn(7), None);
    }

    #[test]
    fn test_each_consumed_cell_is_its_own_score_change() {
        let mut state = started(2);
        state.board_mut().clear();
        // Both land on plane cells, (7,10) and (9,10), after the scroll.
        state.board_mut().set(8, 10, ShapeKind::Double);
        state.board_mut().set(10, 10, ShapeKind::Triple);

        assert!(state.tick());
        assert_eq!(state.score(), 2 * GOOD_PIECE_POINTS);
        assert_eq!(
            &state.observer().messages[1..],
            &[StatusMessage::Score(10), StatusMessage::Score(20)]
        );
    }

    #[test]
    fn test_start_or_ignore() {
        let mut state = GameState::new(3);
        assert!(state.start_or_ignore());
        assert!(!state.start_or_ignore());
        assert_eq!(state.round_id(), 1);
    }
}
