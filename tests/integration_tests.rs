//! Integration tests - full rounds driven through GameState

use aviator::core::{GameState, Piece, SessionObserver, StatusLine, StatusMessage};
use aviator::types::{Direction, GameAction, SessionPhase, ShapeKind};

/// A running round with an empty field so ticks are predictable
fn clean_round(seed: u32) -> GameState<StatusLine> {
    let mut game = GameState::with_observer(seed, StatusLine::new());
    game.start();
    game.board_mut().clear();
    game
}

fn tick_n<O: SessionObserver>(game: &mut GameState<O>, n: u32) {
    for _ in 0..n {
        assert!(game.tick(), "tick ignored at step {}", game.step_counter());
    }
}

#[test]
fn test_start_sets_up_a_round() {
    let mut game = GameState::with_observer(12345, StatusLine::new());
    assert_eq!(game.phase(), SessionPhase::NotStarted);

    game.start();
    assert_eq!(game.phase(), SessionPhase::Running);
    assert_eq!(game.score(), 0);
    assert_eq!(game.step_counter(), 0);
    assert_eq!((game.plane().x, game.plane().y), (7, 8));
    assert_eq!(game.plane().shape, ShapeKind::Plane);
    assert_eq!(game.pieces_spawned(), 2);
    assert_eq!(game.observer().text(), "0");
}

#[test]
fn test_step_bonus_every_ten_ticks() {
    let mut game = clean_round(1);

    tick_n(&mut game, 9);
    assert_eq!(game.score(), 0);

    tick_n(&mut game, 1);
    assert_eq!(game.step_counter(), 10);
    assert_eq!(game.score(), 5);
    assert_eq!(game.observer().last(), Some(StatusMessage::Score(5)));
}

#[test]
fn test_bad_piece_spawns_on_eighth_tick() {
    let mut game = GameState::new(777);
    game.start();

    tick_n(&mut game, 7);
    assert_eq!(game.pieces_spawned(), 2);

    tick_n(&mut game, 1);
    assert_eq!(game.pieces_spawned(), 3);
    let (kind, x0, _) = game.last_spawn().unwrap();
    assert!(kind.is_bad());
    let (w, _) = Piece::with_shape(kind).bounding_size();
    assert_eq!(x0, 30 - w as i8);
}

#[test]
fn test_good_piece_spawns_on_nineteenth_tick() {
    let mut game = clean_round(4242);

    tick_n(&mut game, 18);
    // Bad spawns at steps 8 and 16.
    assert_eq!(game.pieces_spawned(), 4);

    tick_n(&mut game, 1);
    assert_eq!(game.pieces_spawned(), 5);
    assert!(game.last_spawn().unwrap().0.is_good());
    assert_eq!(game.phase(), SessionPhase::Running);
}

#[test]
fn test_good_cells_score_one_at_a_time() {
    let mut game = clean_round(5);
    // Lands on (7,8) and (8,8) after the scroll; only (7,8) is a plane cell.
    game.board_mut()
        .place_piece(&Piece::with_shape(ShapeKind::Double), 8, 8);

    tick_n(&mut game, 1);
    assert_eq!(game.score(), 10);
    assert_eq!(game.board().get(7, 8), Some(ShapeKind::Empty));
    assert_eq!(game.board().get(8, 8), Some(ShapeKind::Double));
    assert_eq!(game.phase(), SessionPhase::Running);

    tick_n(&mut game, 1);
    assert_eq!(game.score(), 20);
    assert_eq!(game.board().occupied_count(), 0);
}

#[test]
fn test_crash_ends_round_and_keeps_score() {
    let mut game = clean_round(6);
    game.board_mut().set(11, 9, ShapeKind::Double);
    tick_n(&mut game, 1);
    assert_eq!(game.score(), 10);

    game.board_mut().set(11, 10, ShapeKind::Star);
    // Scrolls to (10,10), which the plane does not cover.
    tick_n(&mut game, 1);
    assert_eq!(game.phase(), SessionPhase::Running);
    // (9,10) is a plane cell.
    assert!(game.tick());
    assert_eq!(game.phase(), SessionPhase::GameOver);
    assert_eq!(game.score(), 10);
    assert_eq!(
        game.observer().text(),
        "GAME OVER: Total score 10! For another round press <Enter>"
    );

    // Frozen until restarted.
    assert!(!game.tick());
    assert!(!game.move_plane(Direction::Up));
    assert!(!game.pause());
}

#[test]
fn test_restart_after_game_over() {
    let mut game = clean_round(8);
    game.board_mut().set(8, 8, ShapeKind::Square);
    tick_n(&mut game, 1);
    assert!(game.game_over());

    assert!(game.apply_action(GameAction::Start));
    assert_eq!(game.phase(), SessionPhase::Running);
    assert_eq!(game.round_id(), 2);
    assert_eq!(game.score(), 0);
    assert_eq!(game.step_counter(), 0);
    assert_eq!((game.plane().x, game.plane().y), (7, 8));
    assert_eq!(game.observer().text(), "0");
}

#[test]
fn test_start_action_ignored_mid_round() {
    let mut game = clean_round(9);
    tick_n(&mut game, 3);

    assert!(!game.apply_action(GameAction::Start));
    assert_eq!(game.step_counter(), 3);
    assert_eq!(game.round_id(), 1);
}

#[test]
fn test_pause_freezes_the_round() {
    let mut game = GameState::with_observer(10, StatusLine::new());
    game.start();
    tick_n(&mut game, 2);

    assert!(game.apply_action(GameAction::Pause));
    assert!(game.paused());
    assert_eq!(game.observer().text(), "Paused");

    let before = game.snapshot();
    assert!(!game.tick());
    assert!(!game.apply_action(GameAction::Move(Direction::Down)));
    assert_eq!(game.snapshot(), before);

    assert!(game.apply_action(GameAction::Pause));
    assert_eq!(game.phase(), SessionPhase::Running);
    tick_n(&mut game, 1);
    assert_eq!(game.step_counter(), 3);
}

#[test]
fn test_plane_moves_and_stops_at_edges() {
    let mut game = clean_round(11);

    assert!(game.apply_action(GameAction::Move(Direction::Up)));
    assert_eq!((game.plane().x, game.plane().y), (7, 9));
    assert!(game.apply_action(GameAction::Move(Direction::Right)));
    assert_eq!((game.plane().x, game.plane().y), (8, 9));

    for _ in 0..20 {
        game.move_plane(Direction::Left);
    }
    assert_eq!(game.plane().x, 0);
    assert!(!game.move_plane(Direction::Left));

    for _ in 0..20 {
        game.move_plane(Direction::Down);
    }
    assert_eq!(game.plane().y, 0);
    assert!(!game.move_plane(Direction::Down));

    for _ in 0..20 {
        game.move_plane(Direction::Up);
    }
    assert_eq!(game.plane().y, 13);
}

#[test]
fn test_collision_only_settles_on_tick() {
    let mut game = clean_round(12);

    // Sitting on a plane cell does not crash until a tick runs, and the
    // scroll carries it off the plane first.
    game.board_mut().set(7, 8, ShapeKind::Star);
    assert_eq!(game.phase(), SessionPhase::Running);
    tick_n(&mut game, 1);
    assert_eq!(game.phase(), SessionPhase::Running);
    game.board_mut().clear();

    // Moving onto a bad cell is allowed; the next tick finds it.
    game.board_mut().set(11, 9, ShapeKind::Square);
    assert!(game.move_plane(Direction::Right));
    assert_eq!(game.phase(), SessionPhase::Running);
    assert!(game.tick());
    assert_eq!(game.phase(), SessionPhase::GameOver);
}

#[test]
fn test_same_seed_same_round() {
    let mut a = GameState::new(31337);
    let mut b = GameState::new(31337);
    a.start();
    b.start();

    for step in 0..40 {
        a.tick();
        b.tick();
        if step % 7 == 0 {
            a.move_plane(Direction::Up);
            b.move_plane(Direction::Up);
        }
        assert_eq!(a.snapshot(), b.snapshot(), "diverged at step {}", step);
    }
}

#[test]
fn test_snapshot_mirrors_session() {
    let mut game = clean_round(13);
    game.board_mut().set(20, 3, ShapeKind::Triple);
    tick_n(&mut game, 1);

    let snap = game.snapshot();
    assert_eq!(snap.board[3][19], ShapeKind::Triple);
    assert_eq!(snap.board[3][20], ShapeKind::Empty);
    assert_eq!(snap.step_counter, 1);
    assert_eq!(snap.plane.x, 7);
    assert!(snap.playable());
}

#[test]
fn test_status_line_stays_small_across_many_rounds() {
    let mut game = GameState::with_observer(21, StatusLine::new());

    for round in 0..50 {
        game.start();
        for _ in 0..200 {
            game.board_mut().clear();
            game.tick();
        }
        // Crash to end the round.
        game.board_mut().set(8, 8, ShapeKind::Star);
        game.tick();
        assert!(game.game_over(), "round {} still running", round);
    }

    // Nothing from earlier rounds is held on to.
    let mut line = game.into_observer();
    let mut fresh = StatusLine::new();
    fresh.on_status(StatusMessage::GameOver { score: 100 });
    assert!(line.take_dirty());
    assert!(fresh.take_dirty());
    assert_eq!(line, fresh);
}
