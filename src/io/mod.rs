mod definition;
mod format;
mod input;
pub mod output;

pub use definition::{FieldDefinition, FieldKindDefinition, FormDefinition};
pub use format::DocumentFormat;
pub use input::{parse_document_str, parse_form_definition};
