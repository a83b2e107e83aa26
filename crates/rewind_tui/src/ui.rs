//! Stateless UI rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use rewind_tictactoe::{Board, GameController, GameStatus, Player, Position, Square};

use crate::app::App;
use crate::input::Focus;

const HELP: &str = "arrows move · enter select · 1-9 place · tab history · [ ] step · r restart · q quit";

/// Renders the whole screen from the app's current state.
pub fn draw<C: GameController + Default>(frame: &mut Frame, app: &App<C>) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board + history
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Rewind - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(34)])
        .split(chunks[1]);

    let game = app.game();
    draw_board(
        frame,
        body[0],
        &game.board(),
        app.cursor(),
        game.winning_line(),
        app.focus() == Focus::Board,
    );
    draw_history(frame, body[1], app);

    let status = game.status();
    let line = if status.is_over() {
        format!("{} · press r to play again", status)
    } else {
        status.to_string()
    };
    let status_text = Paragraph::new(line)
        .style(status_style(&status))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_text, chunks[2]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn status_style(status: &GameStatus) -> Style {
    match status {
        GameStatus::InProgress { .. } => Style::default().fg(Color::Yellow),
        GameStatus::Won(_) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        GameStatus::Draw => Style::default().fg(Color::Magenta),
    }
}

fn draw_board(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    cursor: Position,
    line: Option<[Position; 3]>,
    focused: bool,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Board")
        .border_style(focus_style(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let board_area = center_rect(inner, 23, 5);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1); 5])
        .split(board_area);

    for row in 0..3 {
        let mut spans = Vec::with_capacity(5);
        for col in 0..3 {
            let Some(pos) = Position::from_row_col(row, col) else {
                continue;
            };
            let in_line = line.is_some_and(|l| l.contains(&pos));
            spans.push(cell_span(board.get(pos), pos, pos == cursor && focused, in_line));
            if col < 2 {
                spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
            }
        }
        frame.render_widget(
            Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
            rows[row * 2],
        );
        if row < 2 {
            frame.render_widget(
                Paragraph::new("───────┼───────┼───────")
                    .style(Style::default().fg(Color::DarkGray))
                    .alignment(Alignment::Center),
                rows[row * 2 + 1],
            );
        }
    }
}

fn cell_span(square: Square, pos: Position, under_cursor: bool, in_line: bool) -> Span<'static> {
    let (symbol, base_style) = match square {
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

    let style = if under_cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else if in_line {
        base_style.bg(Color::Green)
    } else {
        base_style
    };

    Span::styled(symbol, style)
}

fn draw_history<C: GameController + Default>(frame: &mut Frame, area: Rect, app: &App<C>) {
    let entries = app.game().move_list();
    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| {
            let marker = if entry.is_current { "▶ " } else { "  " };
            let detail = entry
                .played
                .map(|mv| format!(" ({} {})", mv.player, mv.position.label()))
                .unwrap_or_default();
            let style = if entry.is_current {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(
                format!("{}{}{}", marker, entry.label(), detail),
                style,
            )))
        })
        .collect();

    let focused = app.focus() == Focus::History;
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("History")
                .border_style(focus_style(focused)),
        )
        .highlight_style(Style::default().bg(Color::DarkGray));

    let mut state = ListState::default();
    if focused {
        state.select(Some(app.selected()));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
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
