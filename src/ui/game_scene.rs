//! UI rendering for the game screen: play area, status bar and frame.

use super::cell_canvas::CellCanvas;
use super::terminal_audio::Scoreboard;
use flappy::core::geometry::Field;
use flappy::host::surface::Rgb;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const STATUS_BAR_HEIGHT: u16 = 2;
const CONTROLS: &[(&str, &str)] = &[("[Space/Up/Click]", "Jump"), ("[Esc/q]", "Quit")];

/// Split the terminal into the play area and the status bar below it.
pub fn layout(area: Rect) -> (Rect, Rect) {
    let inner = outer_block(Field::default()).inner(area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(STATUS_BAR_HEIGHT)])
        .split(inner);
    (chunks[0], chunks[1])
}

fn outer_block(field: Field) -> Block<'static> {
    Block::default()
        .title(format!(" Flappy {}x{} ", field.width, field.height))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
}

/// Render the whole game screen from an already painted canvas.
pub fn render_game(frame: &mut Frame, canvas: &CellCanvas, board: &Scoreboard, field: Field) {
    let area = frame.size();
    frame.render_widget(outer_block(field), area);

    let (play, status) = layout(area);
    render_play_area(frame, play, canvas);
    render_status_bar(
        frame,
        status,
        &format!("Score: {}", board.score),
        Color::Green,
        CONTROLS,
    );
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Render canvas cells as background-coloured blanks, merging runs of equal colour.
fn render_play_area(frame: &mut Frame, area: Rect, canvas: &CellCanvas) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let rows = canvas.rows().min(area.height);
    let cols = canvas.cols().min(area.width) as usize;
    let mut lines = Vec::with_capacity(rows as usize);

    for row in 0..rows {
        let cells = &canvas.row(row)[..cols];
        let mut spans = Vec::new();
        let mut run_start = 0;
        for i in 1..=cells.len() {
            if i == cells.len() || cells[i] != cells[run_start] {
                let style = match cells[run_start] {
                    Some(rgb) => Style::default().bg(to_color(rgb)),
                    None => Style::default(),
                };
                spans.push(Span::styled(" ".repeat(i - run_start), style));
                run_start = i;
            }
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// Two-line status bar: message on top, key hints below.
fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    if area.height < 1 {
        return;
    }

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    if area.height >= 2 && !controls.is_empty() {
        let mut spans = Vec::new();
        for (i, (key, action)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::White)));
            spans.push(Span::styled(
                format!(" {}", action),
                Style::default().fg(Color::DarkGray),
            ));
        }
        frame.render_widget(
            Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}
