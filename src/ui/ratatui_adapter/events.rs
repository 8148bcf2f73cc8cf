//! Event handling for the ratatui TUI
//!
//! Translates crossterm key events into picker inputs.

use super::state::{EventResult, Input, PickerState};
use crate::combo::Key;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// Translate a key event, or `None` for keys the picker ignores
#[must_use]
pub fn translate_key(key: &KeyEvent) -> Option<Input> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let input = match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Input::Interrupt,
        (KeyCode::Char('p'), KeyModifiers::CONTROL) => Input::Key(Key::Up),
        (KeyCode::Char('n'), KeyModifiers::CONTROL) => Input::Key(Key::Down),
        (KeyCode::Up, _) => Input::Key(Key::Up),
        (KeyCode::Down, _) => Input::Key(Key::Down),
        (KeyCode::Backspace, _) => Input::Key(Key::Backspace),
        (KeyCode::Esc, _) => Input::Key(Key::Escape),
        (KeyCode::Enter, _) => Input::Key(Key::Enter),
        (KeyCode::BackTab, _) => Input::Key(Key::ShiftTab),
        (KeyCode::Tab, m) if m.contains(KeyModifiers::SHIFT) => Input::Key(Key::ShiftTab),
        (KeyCode::Tab, _) => Input::Key(Key::Tab),
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => Input::Char(c),
        _ => return None,
    };

    Some(input)
}

/// Poll for an event and apply it to the picker
///
/// # Errors
///
/// Returns an I/O error if reading terminal events fails.
pub fn poll_and_handle(state: &mut PickerState, timeout: Duration) -> std::io::Result<EventResult> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Continue);
    }

    let result = match event::read()? {
        Event::Key(key) => translate_key(&key).map_or(EventResult::Continue, |input| {
            state.handle_input(input)
        }),
        _ => EventResult::Continue,
    };

    Ok(result)
}
