use super::{actions::FormCommand, state::FormState};

/// Applies `command` and reports whether any field text changed.
pub fn apply_command(state: &mut FormState, command: FormCommand) -> bool {
    match command {
        FormCommand::Focus(index) => state.focus(index),
        FormCommand::FocusNextField => state.focus_next_field(),
        FormCommand::FocusPrevField => state.focus_prev_field(),
        FormCommand::ClearFocus => state.clear_focus(),
        FormCommand::ImeAction => {
            state.ime_action();
        }
        FormCommand::Edit(key) => return state.handle_key(&key),
    }
    false
}
