//! Input mapping: terminal events to game intents.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};

/// What the host should do with an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostInput {
    /// Jump (Space, Up, Enter, or a mouse press standing in for a touch).
    Jump,
    /// Leave the game (Esc, q, Ctrl+C).
    Quit,
    /// Terminal was resized to `cols` x `rows` cells.
    Resize { cols: u16, rows: u16 },
    /// Anything else.
    Other,
}

pub fn map_event(event: &Event) -> HostInput {
    match event {
        Event::Key(key) => map_key(key),
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(_) => HostInput::Jump,
            _ => HostInput::Other,
        },
        Event::Resize(cols, rows) => HostInput::Resize {
            cols: *cols,
            rows: *rows,
        },
        _ => HostInput::Other,
    }
}

fn map_key(key: &KeyEvent) -> HostInput {
    // Windows reports releases too; only presses count
    if key.kind == KeyEventKind::Release {
        return HostInput::Other;
    }
    match key.code {
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => HostInput::Jump,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => HostInput::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => HostInput::Quit,
        _ => HostInput::Other,
    }
}
