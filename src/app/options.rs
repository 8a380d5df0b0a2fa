use std::time::Duration;

pub const DEFAULT_HELP: &str =
    "Tab/↓ next • Shift+Tab/↑ previous • Enter next/done • Ctrl+S submit • Ctrl+Q quit";

#[derive(Debug, Clone)]
pub struct UiOptions {
    pub tick_rate: Duration,
    pub confirm_exit: bool,
    pub show_help: bool,
    /// Focus the first field when the form opens.
    pub autofocus: bool,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(250),
            confirm_exit: true,
            show_help: true,
            autofocus: true,
        }
    }
}

impl UiOptions {
    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    pub fn with_confirm_exit(mut self, confirm: bool) -> Self {
        self.confirm_exit = confirm;
        self
    }

    pub fn with_help(mut self, show: bool) -> Self {
        self.show_help = show;
        self
    }

    pub fn with_autofocus(mut self, autofocus: bool) -> Self {
        self.autofocus = autofocus;
        self
    }

    pub(crate) fn help_text(&self) -> Option<&'static str> {
        self.show_help.then_some(DEFAULT_HELP)
    }
}
