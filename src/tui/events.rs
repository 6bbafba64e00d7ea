use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// User actions from keyboard events
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Quit,
    Cancel,
    Save,
    ClearValues,
    SwapSides,
    ClearHistory,
    NextFocus,
    PrevFocus,
    MoveUp,
    MoveDown,
    Confirm,
    Delete,
    Copy,
    Input(char),
    DeleteChar,
    None,
}

/// Poll for keyboard events and convert to actions
pub fn poll_event(timeout: Duration) -> anyhow::Result<Action> {
    if event::poll(timeout)?
        && let Event::Key(key) = event::read()?
        && key.kind == KeyEventKind::Press
    {
        return Ok(key_to_action(key));
    }
    Ok(Action::None)
}

fn key_to_action(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        // Quit / dismiss
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Esc, _) => Action::Cancel,

        // Form and history commands
        (KeyCode::Char('s'), KeyModifiers::CONTROL) => Action::Save,
        (KeyCode::Char('l'), KeyModifiers::CONTROL) => Action::ClearValues,
        (KeyCode::Char('x'), KeyModifiers::CONTROL) => Action::SwapSides,
        (KeyCode::Char('d'), KeyModifiers::CONTROL) => Action::ClearHistory,
        (KeyCode::Char('y'), KeyModifiers::CONTROL) => Action::Copy,

        // Navigation (Vim/Emacs style)
        (KeyCode::Tab, _) => Action::NextFocus,
        (KeyCode::BackTab, _) => Action::PrevFocus,
        (KeyCode::Char('p'), KeyModifiers::CONTROL) => Action::MoveUp,
        (KeyCode::Char('n'), KeyModifiers::CONTROL) => Action::MoveDown,
        (KeyCode::Up, _) => Action::MoveUp,
        (KeyCode::Down, _) => Action::MoveDown,
        (KeyCode::Enter, _) => Action::Confirm,
        (KeyCode::Delete, _) => Action::Delete,

        // Text input
        (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
            Action::Input(c)
        }
        (KeyCode::Backspace, _) => Action::DeleteChar,

        _ => Action::None,
    }
}
