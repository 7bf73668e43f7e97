//! Stateless UI rendering for tic-tac-toe.

use crate::app::{App, Focus};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use replay_tictactoe::{GameView, Player, Position, SortOrder, Square, Status};

const KEY_HELP: &str =
    "arrows/1-9 move  enter play  tab focus  a/d/s sort  q quit";

/// Draws the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let view = app.view();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(10),   // Panels
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(29), Constraint::Min(30)])
        .split(chunks[1]);

    draw_board(frame, panels[0], app, &view);
    draw_info(frame, panels[1], app, &view);

    let help = Paragraph::new(KEY_HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[2]);
}

fn panel(title: &str, focused: bool) -> Block<'_> {
    let border = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border)
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App, view: &GameView) {
    let block = panel("Board", app.focus() == Focus::Board);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(center_rect(inner, 23, 5));

    for row in 0..3 {
        draw_row(frame, rows[row * 2], app, view, row);
        if row < 2 {
            let sep = Paragraph::new("───────┼───────┼───────")
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, view: &GameView, row: usize) {
    let mut spans = Vec::with_capacity(5);
    for col in 0..3 {
        if let Some(pos) = Position::from_row_col(row, col) {
            spans.push(cell_span(app, view, pos));
        }
        if col < 2 {
            spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
        }
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn cell_span(app: &App, view: &GameView, pos: Position) -> Span<'static> {
    let (symbol, mut style) = match view.board().get(pos) {
        Square::Empty => (
            format!("   {}   ", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "   X   ".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "   O   ".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if view.is_highlighted(pos) {
        style = style.bg(Color::Green).fg(Color::Black);
    }
    if app.focus() == Focus::Board && pos == app.cursor() {
        style = style.bg(Color::White).fg(Color::Black);
    }

    Span::styled(symbol, style)
}

fn draw_info(frame: &mut Frame, area: Rect, app: &App, view: &GameView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Status
            Constraint::Length(3), // Sort order
            Constraint::Min(3),    // Moves
        ])
        .split(area);

    let status_style = match view.status() {
        Status::Winner(_) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        Status::Draw => Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        Status::NextPlayer(_) => Style::default().fg(Color::Yellow),
    };
    let status = Paragraph::new(view.status_text().as_str())
        .style(status_style)
        .block(panel("Status", false));
    frame.render_widget(status, chunks[0]);

    let sort = Paragraph::new(sort_radio(*view.sort_order())).block(panel("Order", false));
    frame.render_widget(sort, chunks[1]);

    draw_moves(frame, chunks[2], app, view);
}

/// Radio-button line for the sort order, e.g. `(*) ASC  ( ) DESC`.
fn sort_radio(order: SortOrder) -> String {
    let mark = |o: SortOrder| if o == order { "(*)" } else { "( )" };
    format!(
        "{} {}  {} {}",
        mark(SortOrder::Ascending),
        SortOrder::Ascending,
        mark(SortOrder::Descending),
        SortOrder::Descending
    )
}

fn draw_moves(frame: &mut Frame, area: Rect, app: &App, view: &GameView) {
    let focused = app.focus() == Focus::History;
    let items: Vec<ListItem> = view
        .moves()
        .iter()
        .map(|m| {
            let style = if *m.is_current() {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(
                format!("{}. {}", m.step(), m.label()),
                style,
            )))
        })
        .collect();

    let list = List::new(items)
        .block(panel("Moves", focused))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if focused {
        state.select(Some(app.selected()));
    }
    frame.render_stateful_widget(list, area, &mut state);
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
