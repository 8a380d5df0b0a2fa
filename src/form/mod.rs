mod actions;
mod entry;
mod reducers;
mod state;

pub use actions::FormCommand;
pub use entry::FieldEntry;
pub use reducers::apply_command;
pub use state::{FormState, SubmitOutcome};
