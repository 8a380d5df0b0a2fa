//! Binds a [`FieldState`] to keyboard and focus events the way a text widget would.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::trace;
use serde::Deserialize;

use crate::state::FieldState;

/// What Enter does inside a field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImeAction {
    Next,
    #[default]
    Done,
}

/// Max-length guard applied before any text reaches the field.
///
/// Growth is blocked once the current text has reached `max_length`, while
/// any edit that shortens the text is let through. Only the current length is
/// compared against the cap.
pub fn accept_edit(current: &str, proposed: &str, max_length: Option<usize>) -> bool {
    let current_len = current.chars().count();
    let mut valid = true;
    if let Some(max) = max_length
        && max <= current_len
    {
        valid = false;
    }
    if current_len > proposed.chars().count() {
        valid = true;
    }
    valid
}

/// Text the key would produce, or `None` when the key is not an edit.
pub fn propose_edit(current: &str, key: &KeyEvent) -> Option<String> {
    match key.code {
        KeyCode::Char(ch) => {
            if key.modifiers.contains(KeyModifiers::CONTROL)
                || key.modifiers.contains(KeyModifiers::ALT)
            {
                return None;
            }
            let mut next = current.to_string();
            next.push(ch);
            Some(next)
        }
        KeyCode::Backspace => {
            let mut next = current.to_string();
            next.pop();
            Some(next)
        }
        KeyCode::Delete => Some(String::new()),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextInput {
    pub read_only: bool,
    pub ime_action: ImeAction,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn with_ime_action(mut self, ime_action: ImeAction) -> Self {
        self.ime_action = ime_action;
        self
    }

    /// Forwards a value change through the max-length guard; returns whether
    /// the field text changed.
    pub fn on_value_change(&self, field: &mut FieldState, proposed: &str) -> bool {
        if self.read_only {
            return false;
        }
        if !accept_edit(field.text(), proposed, field.max_length()) {
            trace!("edit rejected at cap {:?}", field.max_length());
            return false;
        }
        if field.text() == proposed {
            return false;
        }
        field.set_text(proposed);
        true
    }

    pub fn handle_key(&self, field: &mut FieldState, key: &KeyEvent) -> bool {
        match propose_edit(field.text(), key) {
            Some(proposed) => self.on_value_change(field, &proposed),
            None => false,
        }
    }

    pub fn focus(&self, field: &mut FieldState) {
        field.on_focus_change(true);
    }

    pub fn blur(&self, field: &mut FieldState) {
        field.on_focus_change(false);
        field.enable_show_errors();
    }
}
