use crossterm::event::KeyEvent;

#[derive(Debug, Clone)]
pub enum FormCommand {
    Focus(usize),
    FocusNextField,
    FocusPrevField,
    ClearFocus,
    ImeAction,
    Edit(KeyEvent),
}
