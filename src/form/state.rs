use crossterm::event::KeyEvent;
use indexmap::IndexMap;
use log::debug;
use serde_json::{Map, Value};

use crate::{input::ImeAction, state::FieldState, validation::FieldConfigError};

use super::entry::FieldEntry;

#[derive(Debug)]
pub enum SubmitOutcome {
    Valid(Value),
    Invalid { issues: usize, fields: Vec<String> },
}

/// Ordered fields with at most one of them focused.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    entries: IndexMap<String, FieldEntry>,
    focused: Option<usize>,
    dirty: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: FieldEntry) -> Result<(), FieldConfigError> {
        if self.entries.contains_key(&entry.id) {
            return Err(FieldConfigError::DuplicateField { field: entry.id });
        }
        self.entries.insert(entry.id.clone(), entry);
        Ok(())
    }

    pub fn with_entry(mut self, entry: FieldEntry) -> Result<Self, FieldConfigError> {
        self.push(entry)?;
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &FieldEntry> {
        self.entries.values()
    }

    pub fn field(&self, id: &str) -> Option<&FieldState> {
        self.entries.get(id).map(|entry| &entry.field)
    }

    pub fn field_mut(&mut self, id: &str) -> Option<&mut FieldState> {
        self.entries.get_mut(id).map(|entry| &mut entry.field)
    }

    pub fn focused_index(&self) -> Option<usize> {
        self.focused
    }

    pub fn focused_entry(&self) -> Option<&FieldEntry> {
        self.focused
            .and_then(|index| self.entries.get_index(index))
            .map(|(_, entry)| entry)
    }

    pub fn focused_entry_mut(&mut self) -> Option<&mut FieldEntry> {
        self.focused
            .and_then(|index| self.entries.get_index_mut(index))
            .map(|(_, entry)| entry)
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Moves focus to `index`, blurring the previous field first so it can
    /// start showing its error.
    pub fn focus(&mut self, index: usize) {
        if index >= self.entries.len() || self.focused == Some(index) {
            return;
        }
        self.blur_focused();
        self.focused = Some(index);
        if let Some(entry) = self.focused_entry_mut() {
            entry.input.focus(&mut entry.field);
            debug!("focus moved to '{}'", entry.id);
        }
    }

    pub fn focus_next_field(&mut self) {
        let len = self.entries.len();
        if len == 0 {
            return;
        }
        let next = self.focused.map(|index| (index + 1) % len).unwrap_or(0);
        self.focus(next);
    }

    pub fn focus_prev_field(&mut self) {
        let len = self.entries.len();
        if len == 0 {
            return;
        }
        let prev = self
            .focused
            .map(|index| (index + len - 1) % len)
            .unwrap_or(len - 1);
        self.focus(prev);
    }

    pub fn clear_focus(&mut self) {
        self.blur_focused();
        self.focused = None;
    }

    /// Runs the focused field's Enter behaviour.
    pub fn ime_action(&mut self) -> Option<ImeAction> {
        let action = self.focused_entry()?.input.ime_action;
        match action {
            ImeAction::Next => self.focus_next_field(),
            ImeAction::Done => self.clear_focus(),
        }
        Some(action)
    }

    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        let Some(entry) = self.focused_entry_mut() else {
            return false;
        };
        let changed = entry.input.handle_key(&mut entry.field, key);
        if changed {
            self.dirty = true;
        }
        changed
    }

    pub fn invalid_fields(&self) -> Vec<String> {
        self.entries
            .values()
            .filter(|entry| !entry.field.is_valid())
            .map(|entry| entry.id.clone())
            .collect()
    }

    /// Fields currently rendering an error.
    pub fn error_count(&self) -> usize {
        self.entries
            .values()
            .filter(|entry| entry.field.show_errors())
            .count()
    }

    pub fn values(&self) -> Value {
        let map = self
            .entries
            .values()
            .map(|entry| (entry.id.clone(), Value::String(entry.field.text().to_string())))
            .collect::<Map<_, _>>();
        Value::Object(map)
    }

    /// Surfaces every field's error and returns the values when all are valid.
    pub fn submit(&mut self) -> SubmitOutcome {
        for entry in self.entries.values_mut() {
            entry.field.force_error();
        }
        let fields = self.invalid_fields();
        debug!("submit with {} invalid field(s)", fields.len());
        if fields.is_empty() {
            SubmitOutcome::Valid(self.values())
        } else {
            SubmitOutcome::Invalid {
                issues: fields.len(),
                fields,
            }
        }
    }

    fn blur_focused(&mut self) {
        if let Some(entry) = self.focused_entry_mut() {
            entry.input.blur(&mut entry.field);
        }
    }
}
