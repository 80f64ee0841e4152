//! Stateless UI rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::app::{App, Focus};
use super::help::{CONTROLS, RULES};
use oxgame_core::{GameView, Player, Position, Square, Status};

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let view = app.view();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Status
            Constraint::Min(13),   // Board + moves, or help
            Constraint::Length(1), // Key hints
        ])
        .split(frame.area());

    let title = Paragraph::new("OX Game")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_status(frame, chunks[1], &view, app.message());

    if *view.help_visible() {
        draw_help(frame, chunks[2]);
    } else {
        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(41), Constraint::Min(24)])
            .split(chunks[2]);
        draw_board(frame, body[0], &view, app);
        draw_moves(frame, body[1], &view, app);
    }

    let hints = if *view.help_visible() {
        "h: start playing  n: new game  q: quit"
    } else {
        "arrows/1-9: play  enter: select  tab: focus  s: sort  h: help  n: new  q: quit"
    };
    let hints = Paragraph::new(hints)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(hints, chunks[3]);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::X => Color::Blue,
        Player::O => Color::Red,
    }
}

fn draw_status(frame: &mut Frame, area: Rect, view: &GameView, message: Option<&str>) {
    let status = view.status();
    let style = match status {
        Status::ToMove(player) => Style::default().fg(player_color(player)),
        Status::Won(player) => Style::default()
            .fg(player_color(player))
            .add_modifier(Modifier::BOLD),
        Status::Draw => Style::default().fg(Color::Yellow),
    };

    let mut spans = vec![Span::styled(status.to_string(), style)];
    if let Some(message) = message {
        spans.push(Span::styled(
            format!("  ({})", message),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn draw_help(frame: &mut Frame, area: Rect) {
    let heading = Style::default().add_modifier(Modifier::BOLD);
    let mut lines = vec![Line::from(Span::styled("Rules", heading))];
    lines.extend(RULES.iter().map(|l| Line::from(format!("  - {}", l))));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Controls", heading)));
    lines.extend(CONTROLS.iter().map(|l| Line::from(format!("  - {}", l))));

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().title("Help").borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn draw_board(frame: &mut Frame, area: Rect, view: &GameView, app: &App) {
    let border = if app.focus() == Focus::Board {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .title("Board")
        .borders(Borders::ALL)
        .border_style(border);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let board_area = center_rect(inner, 38, 11);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, positions) in Position::ALL.chunks(3).enumerate() {
        draw_row(frame, rows[row * 2], view, app, positions);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, view: &GameView, app: &App, positions: &[Position]) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (col, pos) in positions.iter().enumerate() {
        draw_cell(frame, cols[col * 2], view, app, *pos);
        if col < 2 {
            draw_separator_vertical(frame, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, view: &GameView, app: &App, pos: Position) {
    let (symbol, mut style) = match view.board().get(pos) {
        Square::Empty => (" ".to_string(), Style::default().fg(Color::DarkGray)),
        Square::Occupied(player) => (
            player.to_string(),
            Style::default()
                .fg(player_color(player))
                .add_modifier(Modifier::BOLD),
        ),
    };

    if view.is_highlighted(pos) {
        style = style.bg(Color::Yellow);
    }
    if app.focus() == Focus::Board && pos == app.cursor() {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(format!("   {}   ", symbol), style)),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
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

fn draw_moves(frame: &mut Frame, area: Rect, view: &GameView, app: &App) {
    let order = if *view.sort_descending() {
        "descending"
    } else {
        "ascending"
    };
    let border = if app.focus() == Focus::History {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let lines: Vec<Line> = view
        .ordered_moves()
        .into_iter()
        .enumerate()
        .map(|(row, entry)| {
            let mut style = Style::default();
            if *entry.current() {
                style = style.add_modifier(Modifier::BOLD);
            }
            if app.focus() == Focus::History && row == app.selected() {
                style = style.add_modifier(Modifier::REVERSED);
            }
            let marker = if *entry.current() { "> " } else { "  " };
            Line::from(Span::styled(format!("{}{}", marker, entry.label()), style))
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(format!("Moves ({})", order))
            .borders(Borders::ALL)
            .border_style(border),
    );
    frame.render_widget(paragraph, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
