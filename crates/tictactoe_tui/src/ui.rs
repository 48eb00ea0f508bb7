//! Stateless UI rendering.

use crate::app::App;
use crate::input::Focus;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_engine::{GameState, Player, Position, Square};

/// Renders the whole screen from the application state.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Size field and control
            Constraint::Min(3),    // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Key help
        ])
        .split(area);

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_controls(frame, chunks[1], app);

    match app.game() {
        Some(game) => draw_board(frame, chunks[2], game, app.cursor(), app.focus()),
        None => {
            let hint = Paragraph::new("No board yet")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(hint, chunks[2]);
        }
    }

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);

    let help = Paragraph::new(
        "Tab: switch focus  Arrows: move  Enter: place/confirm  r: restart  q/Esc: quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}

fn draw_controls(frame: &mut Frame, area: Rect, app: &App) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let enabled = app.control_enabled();
    let focused = app.focus() == Focus::SizeInput;

    let input_style = match (enabled, focused) {
        (false, _) => Style::default().fg(Color::DarkGray),
        (true, true) => Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        (true, false) => Style::default().fg(Color::White),
    };
    let input = Paragraph::new(app.size_input())
        .style(input_style)
        .block(Block::default().borders(Borders::ALL).title("Board size"));
    frame.render_widget(input, cols[0]);

    // Inverted while enabled, like a raised button.
    let control_style = if enabled {
        Style::default().fg(Color::White).bg(Color::Black).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Black).bg(Color::White)
    };
    let control = Paragraph::new(app.control_label())
        .style(control_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(control, cols[1]);
}

fn draw_board(frame: &mut Frame, area: Rect, game: &GameState, cursor: Position, focus: Focus) {
    let board = game.board();
    let n = board.size();

    // Three columns per cell plus one-column separators; large boards show
    // a window that follows the cursor.
    let cols = ((usize::from(area.width) + 1) / 4).min(n);
    let rows = ((usize::from(area.height) + 1) / 2).min(n);
    let first_col = scroll_offset(cursor.col, n, cols);
    let first_row = scroll_offset(cursor.row, n, rows);

    let width = u16::try_from(cols * 4).unwrap_or(u16::MAX).saturating_sub(1);
    let height = u16::try_from(rows * 2).unwrap_or(u16::MAX).saturating_sub(1);
    let board_area = center_rect(area, width, height);

    let separator = vec!["───"; cols].join("┼");
    let mut lines = Vec::with_capacity(rows * 2);
    for (row, squares) in board.rows().enumerate().skip(first_row).take(rows) {
        if row > first_row {
            lines.push(Line::styled(separator.clone(), Style::default().fg(Color::DarkGray)));
        }
        let mut spans = Vec::with_capacity(cols * 2);
        for (col, square) in squares.iter().enumerate().skip(first_col).take(cols) {
            if col > first_col {
                spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
            }
            let highlighted = focus == Focus::Board && cursor == Position::new(row, col);
            spans.push(cell_span(*square, highlighted));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), board_area);
}

/// First index of a `visible`-long window over `0..total` that contains `focus`.
fn scroll_offset(focus: usize, total: usize, visible: usize) -> usize {
    if total <= visible {
        return 0;
    }
    focus.saturating_sub(visible / 2).min(total - visible)
}

fn cell_span(square: Square, highlighted: bool) -> Span<'static> {
    let (symbol, base_style) = match square {
        Square::Empty => ("   ", Style::default().fg(Color::DarkGray)),
        Square::Occupied(Player::One) => (
            " X ",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::Two) => (
            " O ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if highlighted {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    Span::styled(symbol, style)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
