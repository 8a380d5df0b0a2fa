use crate::{input::TextInput, state::FieldState};

/// A field plus the widget settings the form renders it with.
#[derive(Debug, Clone)]
pub struct FieldEntry {
    pub id: String,
    pub field: FieldState,
    pub input: TextInput,
    pub helper_text: Option<String>,
}

impl FieldEntry {
    pub fn new(id: impl Into<String>, field: FieldState) -> Self {
        Self {
            id: id.into(),
            field,
            input: TextInput::default(),
            helper_text: None,
        }
    }

    pub fn with_input(mut self, input: TextInput) -> Self {
        self.input = input;
        self
    }

    pub fn with_helper_text(mut self, helper: impl Into<String>) -> Self {
        self.helper_text = Some(helper.into());
        self
    }

    pub fn display_label(&self) -> String {
        self.field
            .label()
            .map(str::to_string)
            .unwrap_or_else(|| self.id.clone())
    }
}
