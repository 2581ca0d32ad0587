//! Tests for move application, terminal states and reset.

use tic_tac_toe::{
    Board, GameOutcome, GameState, LINES, Mark, MoveError, Position, Square, apply_move,
    status_text,
};

fn play_all(moves: &[usize]) -> GameState {
    let mut game = GameState::new();
    for &index in moves {
        game.play_index(index).expect("Valid move");
    }
    game
}

#[test]
fn test_first_move() {
    let game = play_all(&[0]);
    assert_eq!(game.board().get(Position::TopLeft), Square::Occupied(Mark::X));
    assert_eq!(game.turn(), Mark::O);
    assert_eq!(status_text(&game.outcome(), game.turn()), "Turn: Player O");
}

#[test]
fn test_column_win() {
    let game = play_all(&[0, 1, 3, 4, 6]);
    let outcome = game.outcome();
    assert_eq!(outcome, GameOutcome::Win(Mark::X, LINES[3]));
    assert_eq!(LINES[3].indices(), [0, 3, 6]);
    assert_eq!(status_text(&outcome, game.turn()), "Winner: Player X");
}

#[test]
fn test_draw() {
    let game = play_all(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(game.outcome(), GameOutcome::Draw);
    assert_eq!(
        status_text(&game.outcome(), game.turn()),
        "Draw game — no more moves."
    );
}

#[test]
fn test_occupied_cell_never_changes_state() {
    let mut game = play_all(&[4, 0]);
    for index in [4, 0] {
        let before = game.clone();
        assert!(matches!(
            game.play_index(index),
            Err(MoveError::SquareOccupied(_))
        ));
        assert_eq!(game, before);
    }
}

#[test]
fn test_moves_after_win_rejected() {
    let mut game = play_all(&[0, 1, 3, 4, 6]);
    let before = game.clone();
    for index in [2, 5, 7, 8] {
        assert_eq!(game.play_index(index), Err(MoveError::GameOver));
        assert_eq!(game, before);
    }
}

#[test]
fn test_moves_after_draw_rejected() {
    let mut game = play_all(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    let before = game.clone();
    assert_eq!(game.play(Position::Center), Err(MoveError::GameOver));
    assert_eq!(game, before);
}

#[test]
fn test_reset_after_win() {
    let mut game = play_all(&[0, 1, 3, 4, 6]);
    game.reset();
    assert_eq!(game.board(), &Board::new());
    assert_eq!(game.turn(), Mark::X);
    assert_eq!(game.outcome(), GameOutcome::InProgress);
}

#[test]
fn test_pure_apply_move_rejects_decided_board() {
    let game = play_all(&[0, 1, 3, 4, 6]);
    assert_eq!(
        apply_move(game.board(), game.turn(), Position::BottomRight),
        Err(MoveError::GameOver)
    );
}

#[test]
fn test_turn_alternates() {
    let mut game = GameState::new();
    let mut expected = Mark::X;
    for index in [4, 0, 8, 2] {
        assert_eq!(game.turn(), expected);
        game.play_index(index).expect("Valid move");
        expected = expected.opponent();
    }
    assert_eq!(game.board().count(Mark::X), 2);
    assert_eq!(game.board().count(Mark::O), 2);
}
