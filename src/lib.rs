#![deny(rust_2018_idioms)]
//! Focus-aware text field state with a composable validator pipeline, and a
//! terminal host that renders fields bound to that state.

mod app;
pub mod form;
pub mod input;
mod io;
mod presentation;
pub mod state;
pub mod validation;

pub use app::{FieldUI, UiOptions};
pub use io::{
    DocumentFormat, FieldDefinition, FieldKindDefinition, FormDefinition, parse_document_str,
    parse_form_definition,
    output::{OutputDestination, OutputOptions, emit, serialize_value},
};
pub use presentation::{FieldRender, field_lines};

pub mod prelude {
    pub use super::form::{FieldEntry, FormState, SubmitOutcome};
    pub use super::input::{ImeAction, TextInput};
    pub use super::state::{FieldEvent, FieldState, input_text, phone_number, reduce, regex_text};
    pub use super::validation::{FieldConfigError, LengthBounds, Pipeline, Stage};
    pub use super::{FieldUI, UiOptions};
}
