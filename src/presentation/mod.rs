mod components;
mod view;

pub use components::{FieldRender, field_lines};
pub use view::{UiContext, draw};
