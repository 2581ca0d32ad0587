//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::App;
use crate::games::tictactoe::{Mark, Position};
use crate::view::{
    BOARD_LABEL, CellView, FOOTER, GameView, Intent, LEGEND, NEW_GAME_LABEL, SUBTITLE, TITLE,
};

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 3;
// Three cells plus two separators, inside a bordered block.
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2 + 2;
const BUTTON_WIDTH: u16 = NEW_GAME_LABEL.len() as u16 + 4;

/// Screen areas of the last frame, used to resolve mouse clicks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HitMap {
    cells: [Rect; 9],
    new_game: Rect,
}

impl HitMap {
    /// Area occupied by the cell at `pos`.
    pub fn cell(&self, pos: Position) -> Rect {
        self.cells[pos.to_index()]
    }

    /// Area occupied by the "New game" button.
    pub fn new_game(&self) -> Rect {
        self.new_game
    }

    /// Returns the intent for a click at (`column`, `row`).
    pub fn intent_at(&self, column: u16, row: u16) -> Option<Intent> {
        if contains(self.new_game, column, row) {
            return Some(Intent::NewGame);
        }
        <Position as strum::IntoEnumIterator>::iter()
            .find(|pos| contains(self.cell(*pos), column, row))
            .map(Intent::Play)
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}

/// Draws the whole screen and returns where the clickable parts landed.
pub fn draw(frame: &mut Frame, app: &App) -> HitMap {
    let view = app.view();
    let mut hits = HitMap::default();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),         // Title
            Constraint::Length(4),         // Status
            Constraint::Min(BOARD_HEIGHT), // Board
            Constraint::Length(3),         // Controls
            Constraint::Length(1),         // Help
            Constraint::Length(1),         // Footer
        ])
        .split(frame.area());

    draw_header(frame, chunks[0]);
    draw_status(frame, chunks[1], &view, *app.show_hint());
    hits.cells = draw_board(frame, chunks[2], &view, *app.cursor());
    hits.new_game = draw_controls(frame, chunks[3]);
    draw_help(frame, chunks[4], view.cell(*app.cursor()));

    let footer = Paragraph::new(FOOTER)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, chunks[5]);

    hits
}

fn draw_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            TITLE,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(SUBTITLE, Style::default().fg(Color::Gray))),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(header, area);
}

fn draw_status(frame: &mut Frame, area: Rect, view: &GameView, show_hint: bool) {
    let mut lines = vec![Line::from(Span::styled(
        view.status.text.as_str(),
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    ))];
    if show_hint && let Some(hint) = view.status.hint {
        lines.push(Line::from(Span::styled(
            hint,
            Style::default().fg(Color::DarkGray),
        )));
    }

    let status = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, area);
}

fn draw_board(frame: &mut Frame, area: Rect, view: &GameView, cursor: Position) -> [Rect; 9] {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    let border_style = if view.board_disabled {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(BOARD_LABEL);
    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(inner);

    let mut cells = [Rect::default(); 9];
    for (row, area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
            ])
            .split(area);

        for (col, cell_area) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
            let index = row * 3 + col;
            draw_cell(frame, cell_area, &view.cells[index], cursor, view.board_disabled);
            cells[index] = cell_area;
        }
        draw_separator_vertical(frame, cols[1]);
        draw_separator_vertical(frame, cols[3]);
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);

    cells
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    cell: &CellView,
    cursor: Position,
    locked: bool,
) {
    let (symbol, base_style) = match cell.mark {
        Some(Mark::X) => (
            cell.symbol().to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Some(Mark::O) => (
            cell.symbol().to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        // Empty cells show the digit that plays them while they accept input.
        None if cell.disabled => (String::new(), Style::default().fg(Color::DarkGray)),
        None => (
            (cell.position.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
    };

    let mut style = if cell.winning {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if locked {
        base_style.add_modifier(Modifier::DIM)
    } else {
        base_style
    };
    if cell.position == cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let paragraph = Paragraph::new(vec![Line::default(), Line::from(symbol), Line::default()])
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_controls(frame: &mut Frame, area: Rect) -> Rect {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Min(0),
        ])
        .split(area);

    let button = Paragraph::new(NEW_GAME_LABEL)
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
    frame.render_widget(button, cols[1]);

    let mut spans = Vec::new();
    for (mark, label) in LEGEND {
        let color = match mark {
            Mark::X => Color::Blue,
            Mark::O => Color::Red,
        };
        spans.push(Span::styled(
            format!(" {} ", label),
            Style::default().fg(Color::Black).bg(color),
        ));
        spans.push(Span::raw("  "));
    }
    let legend =
        Paragraph::new(vec![Line::default(), Line::from(spans)]).alignment(Alignment::Right);
    frame.render_widget(legend, cols[2]);

    cols[1]
}

fn draw_help(frame: &mut Frame, area: Rect, focused: &CellView) {
    let text = format!(
        "{}: {} · Arrows move · Enter/1-9 play · N {} · Q quit",
        focused.position.label(),
        focused.accessible_label(),
        NEW_GAME_LABEL
    );
    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
