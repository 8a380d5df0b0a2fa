use serde::Deserialize;

use crate::{
    form::{FieldEntry, FormState},
    input::{ImeAction, TextInput},
    state::{FieldState, input_text, phone_number, regex_text},
    validation::{FieldConfigError, LengthBounds},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKindDefinition {
    #[default]
    Text,
    Phone,
    Regex,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FieldDefinition {
    pub id: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub kind: FieldKindDefinition,
    /// Negative values mean unbounded.
    #[serde(default)]
    pub min_length: Option<i64>,
    #[serde(default)]
    pub max_length: Option<i64>,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub pattern: Option<String>,
    #[serde(default)]
    pub helper: Option<String>,
    #[serde(default)]
    pub read_only: bool,
    #[serde(default)]
    pub default: Option<String>,
    #[serde(default)]
    pub ime_action: Option<ImeAction>,
}

impl FieldDefinition {
    fn bounds(&self) -> LengthBounds {
        LengthBounds::from_raw(self.min_length.unwrap_or(-1), self.max_length.unwrap_or(-1))
    }

    pub fn build_field(&self) -> Result<FieldState, FieldConfigError> {
        let label = self.label.as_deref();
        let field = match self.kind {
            FieldKindDefinition::Text => input_text(label, self.bounds(), self.optional),
            FieldKindDefinition::Phone => phone_number(label, self.bounds(), self.optional),
            FieldKindDefinition::Regex => {
                let pattern =
                    self.pattern
                        .clone()
                        .ok_or_else(|| FieldConfigError::MissingPattern {
                            field: self.id.clone(),
                        })?;
                let mut builder = regex_text(pattern)
                    .with_bounds(self.bounds())
                    .with_optional(self.optional);
                if let Some(label) = label {
                    builder = builder.with_label(label);
                }
                builder.build()?
            }
        };
        Ok(match &self.default {
            Some(text) => field.with_text(text.clone()),
            None => field,
        })
    }
}

/// Serialized description of a form: an optional title and ordered fields.
#[derive(Debug, Clone, Deserialize)]
pub struct FormDefinition {
    #[serde(default)]
    pub title: Option<String>,
    pub fields: Vec<FieldDefinition>,
}

impl FormDefinition {
    /// Builds the form; fields without an explicit `ime_action` advance to
    /// the next field, except the last one which finishes editing.
    pub fn build(&self) -> Result<FormState, FieldConfigError> {
        let mut form = FormState::new();
        let last = self.fields.len().saturating_sub(1);
        for (index, definition) in self.fields.iter().enumerate() {
            let ime_action = definition.ime_action.unwrap_or(if index == last {
                ImeAction::Done
            } else {
                ImeAction::Next
            });
            let input = TextInput::new()
                .with_read_only(definition.read_only)
                .with_ime_action(ime_action);
            let mut entry =
                FieldEntry::new(definition.id.clone(), definition.build_field()?).with_input(input);
            if let Some(helper) = &definition.helper {
                entry = entry.with_helper_text(helper.clone());
            }
            form.push(entry)?;
        }
        Ok(form)
    }
}
