//! Rendering and mouse tests against ratatui's test backend.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{Terminal, backend::TestBackend};
use tic_tac_toe::{App, HitMap, Mark, Position, draw};

const WIDTH: u16 = 100;
const HEIGHT: u16 = 30;

/// Renders one frame and returns the screen text and hit map.
fn render(app: &App) -> (String, HitMap) {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    let mut hits = HitMap::default();
    terminal.draw(|frame| hits = draw(frame, app)).unwrap();

    let buffer = terminal.backend().buffer().clone();
    let mut text = String::new();
    for (i, cell) in buffer.content().iter().enumerate() {
        text.push_str(cell.symbol());
        if (i + 1) % WIDTH as usize == 0 {
            text.push('\n');
        }
    }
    (text, hits)
}

fn click(app: &mut App, hits: HitMap, column: u16, row: u16) {
    app.set_hits(hits);
    app.handle_mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    });
}

fn click_cell(app: &mut App, pos: Position) {
    let (_, hits) = render(app);
    let area = hits.cell(pos);
    click(app, hits, area.x + area.width / 2, area.y + area.height / 2);
}

fn press(app: &mut App, c: char) {
    app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
}

#[test]
fn test_initial_screen() {
    let app = App::new(true);
    let (text, _) = render(&app);
    assert!(text.contains("Tic Tac Toe"));
    assert!(text.contains("Turn: Player X"));
    assert!(text.contains("First to align 3 wins."));
    assert!(text.contains("New game"));
    assert!(text.contains("Player X"));
    assert!(text.contains("Player O"));
    assert!(text.contains("Local play only"));
    assert!(text.contains("Center: Empty square"));
}

#[test]
fn test_hint_can_be_hidden() {
    let app = App::new(false);
    let (text, _) = render(&app);
    assert!(!text.contains("First to align 3 wins."));
}

#[test]
fn test_hit_map_covers_every_cell() {
    let app = App::new(true);
    let (_, hits) = render(&app);
    for pos in Position::ALL {
        let area = hits.cell(pos);
        assert!(area.width > 0 && area.height > 0, "cell {} not drawn", pos);
    }
    assert!(hits.new_game().width > 0);
}

#[test]
fn test_click_plays_cell() {
    let mut app = App::new(true);
    click_cell(&mut app, Position::TopLeft);
    assert_eq!(app.game().board().get(Position::TopLeft).mark(), Some(Mark::X));
    assert_eq!(*app.cursor(), Position::TopLeft);

    let (text, _) = render(&app);
    assert!(text.contains("Turn: Player O"));
    assert!(text.contains("Top-left: Square X"));
}

#[test]
fn test_win_then_new_game_by_click() {
    let mut app = App::new(true);
    for c in ['1', '2', '4', '5', '7'] {
        press(&mut app, c);
    }
    let (text, hits) = render(&app);
    assert!(text.contains("Winner: Player X"));
    assert!(!text.contains("First to align 3 wins."));

    let before = app.game().clone();
    click_cell(&mut app, Position::BottomRight);
    assert_eq!(app.game(), &before);

    let button = hits.new_game();
    click(&mut app, hits, button.x + button.width / 2, button.y + button.height / 2);
    assert_eq!(app.game(), &tic_tac_toe::GameState::new());

    let (text, _) = render(&app);
    assert!(text.contains("Turn: Player X"));
}

#[test]
fn test_click_outside_does_nothing() {
    let mut app = App::new(true);
    let (_, hits) = render(&app);
    click(&mut app, hits, 0, 0);
    assert_eq!(app.game(), &tic_tac_toe::GameState::new());
}
