//! Tests for the presentation model: cells, status and intents.

use tic_tac_toe::{
    GameState, GameView, Intent, Mark, Position, STATUS_HINT, dispatch,
};

fn play_all(state: &mut GameState, moves: &[usize]) {
    for &index in moves {
        let pos = Position::from_index(index).expect("index on board");
        assert!(dispatch(state, Intent::Play(pos)), "move {} rejected", index);
    }
}

#[test]
fn test_fresh_game_view() {
    let view = GameView::from_state(&GameState::new());
    assert_eq!(view.status.text, "Turn: Player X");
    assert_eq!(view.status.hint, Some(STATUS_HINT));
    assert!(!view.board_disabled);
    for cell in &view.cells {
        assert!(!cell.disabled);
        assert!(!cell.winning);
        assert_eq!(cell.symbol(), "");
        assert_eq!(cell.accessible_label(), "Empty square");
    }
}

#[test]
fn test_win_marks_line_and_locks_board() {
    let mut state = GameState::new();
    play_all(&mut state, &[0, 1, 3, 4, 6]);

    let view = GameView::from_state(&state);
    assert_eq!(view.status.text, "Winner: Player X");
    assert_eq!(view.status.hint, None);
    assert!(view.board_disabled);

    for cell in &view.cells {
        let expected = matches!(cell.position.to_index(), 0 | 3 | 6);
        assert_eq!(cell.winning, expected, "cell {}", cell.position);
        assert!(cell.disabled);
    }
    assert_eq!(view.cell(Position::TopLeft).mark, Some(Mark::X));
    assert_eq!(view.cell(Position::TopCenter).accessible_label(), "Square O");
}

#[test]
fn test_draw_disables_every_cell() {
    let mut state = GameState::new();
    play_all(&mut state, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    let view = GameView::from_state(&state);
    assert_eq!(view.status.text, "Draw game — no more moves.");
    assert!(view.cells.iter().all(|c| c.disabled && !c.winning));
}

#[test]
fn test_play_after_win_is_dropped() {
    let mut state = GameState::new();
    play_all(&mut state, &[0, 1, 3, 4, 6]);
    let before = state.clone();

    for pos in [Position::TopRight, Position::MiddleRight, Position::BottomRight] {
        assert!(!dispatch(&mut state, Intent::Play(pos)));
    }
    assert_eq!(state, before);

    assert!(dispatch(&mut state, Intent::NewGame));
    let view = GameView::from_state(&state);
    assert_eq!(view.status.text, "Turn: Player X");
    assert!(view.cells.iter().all(|c| c.mark.is_none()));
}

#[test]
fn test_play_on_occupied_cell_is_dropped() {
    let mut state = GameState::new();
    play_all(&mut state, &[4]);
    let before = state.clone();
    assert!(!dispatch(&mut state, Intent::Play(Position::Center)));
    assert_eq!(state, before);
    assert_eq!(state.turn(), Mark::O);
}
