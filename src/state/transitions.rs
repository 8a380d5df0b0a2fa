use super::FieldState;

/// Everything that can happen to a field between two renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEvent {
    TextChanged(String),
    FocusChanged(bool),
    LabelChanged(String),
    EnableErrors,
    ClearErrors,
    ForceError,
}

impl FieldState {
    pub fn apply(&mut self, event: FieldEvent) {
        match event {
            FieldEvent::TextChanged(text) => self.set_text(text),
            FieldEvent::FocusChanged(focused) => self.on_focus_change(focused),
            FieldEvent::LabelChanged(label) => self.set_label(label),
            FieldEvent::EnableErrors => self.enable_show_errors(),
            FieldEvent::ClearErrors => self.clear_errors(),
            FieldEvent::ForceError => self.force_error(),
        }
    }
}

/// Returns the state that results from `event`, leaving the caller free to
/// keep or drop the previous snapshot.
pub fn reduce(mut state: FieldState, event: FieldEvent) -> FieldState {
    state.apply(event);
    state
}
