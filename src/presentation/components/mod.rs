mod fields;
mod footer;

pub use fields::{FieldRender, field_lines, render_fields};
pub use footer::render_footer;
