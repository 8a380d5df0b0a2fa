use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use log::{debug, info};
use serde_json::Value;

use crate::{
    form::{FormCommand, FormState, SubmitOutcome, apply_command},
    presentation::{self, UiContext},
};

use super::{
    input::{KeyCommand, classify},
    options::UiOptions,
    status::StatusLine,
    terminal::TerminalGuard,
};

pub(crate) struct App {
    form_state: FormState,
    options: UiOptions,
    title: Option<String>,
    status: StatusLine,
    exit_armed: bool,
    should_quit: bool,
    result: Option<Value>,
}

impl App {
    pub fn new(form_state: FormState, options: UiOptions, title: Option<String>) -> Self {
        let mut app = Self {
            form_state,
            options,
            title,
            status: StatusLine::new(),
            exit_armed: false,
            should_quit: false,
            result: None,
        };
        if app.options.autofocus {
            app.form_state.focus(0);
        }
        app
    }

    pub fn run(&mut self) -> Result<Value> {
        info!("opening form with {} field(s)", self.form_state.len());
        let mut terminal = TerminalGuard::enter()?;
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if !event::poll(self.options.tick_rate)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) => self.handle_key(key),
                Event::Resize(..) => terminal.autoresize()?,
                _ => {}
            }
        }
        info!("form closed, submitted={}", self.result.is_some());

        self.result
            .take()
            .ok_or_else(|| anyhow!("user exited without submitting"))
    }

    fn draw(&self, frame: &mut ratatui::Frame<'_>) {
        presentation::draw(
            frame,
            &self.form_state,
            UiContext {
                title: self.title.as_deref(),
                status_message: self.status.message(),
                dirty: self.form_state.is_dirty(),
                error_count: self.form_state.error_count(),
                help: self.options.help_text(),
            },
        );
    }

    pub(crate) fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        let command = classify(&key);
        if !matches!(command, KeyCommand::Quit | KeyCommand::None) {
            self.exit_armed = false;
        }
        match command {
            KeyCommand::Submit => self.on_submit(),
            KeyCommand::Quit => self.on_exit(),
            KeyCommand::NextField => self.dispatch(FormCommand::FocusNextField),
            KeyCommand::PrevField => self.dispatch(FormCommand::FocusPrevField),
            KeyCommand::ImeAction => self.dispatch(FormCommand::ImeAction),
            KeyCommand::ResetStatus => self.status.ready(),
            KeyCommand::Edit(event) => {
                if apply_command(&mut self.form_state, FormCommand::Edit(event))
                    && let Some(entry) = self.form_state.focused_entry()
                {
                    self.status.editing(&entry.display_label());
                }
            }
            KeyCommand::None => {}
        }
    }

    fn dispatch(&mut self, command: FormCommand) {
        debug!("form command {command:?}");
        apply_command(&mut self.form_state, command);
    }

    fn on_submit(&mut self) {
        match self.form_state.submit() {
            SubmitOutcome::Valid(value) => {
                self.result = Some(value);
                self.form_state.mark_clean();
                self.status.submitted();
            }
            SubmitOutcome::Invalid { issues, fields } => {
                let index = fields
                    .first()
                    .and_then(|first| self.form_state.entries().position(|e| &e.id == first));
                if let Some(index) = index {
                    self.form_state.focus(index);
                }
                self.status.issues_remaining(issues);
            }
        }
    }

    fn on_exit(&mut self) {
        if self.options.confirm_exit && self.form_state.is_dirty() && !self.exit_armed {
            self.exit_armed = true;
            self.status.pending_exit();
            return;
        }
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        form::FieldEntry,
        state::{input_text, phone_number},
        validation::LengthBounds,
    };
    use crossterm::event::{KeyCode, KeyModifiers};
    use serde_json::json;

    fn app() -> App {
        let form = FormState::new()
            .with_entry(FieldEntry::new(
                "name",
                input_text(Some("Name"), LengthBounds::UNBOUNDED, false),
            ))
            .and_then(|form| {
                form.with_entry(FieldEntry::new(
                    "phone",
                    phone_number(Some("Phone"), LengthBounds::default().with_max(10), false),
                ))
            })
            .expect("form");
        App::new(form, UiOptions::default(), None)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut App, ch: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL));
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            press(app, KeyCode::Char(ch));
        }
    }

    #[test]
    fn autofocus_selects_first_field() {
        let app = app();
        assert_eq!(app.form_state.focused_index(), Some(0));
    }

    #[test]
    fn invalid_submit_focuses_first_problem() {
        let mut app = app();
        type_text(&mut app, "Ada");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "12345");
        press(&mut app, KeyCode::Up);
        ctrl(&mut app, 's');
        assert!(app.result.is_none());
        assert_eq!(app.form_state.focused_index(), Some(1));
        assert_eq!(app.status.message(), "1 field(s) need attention");
    }

    #[test]
    fn submit_then_exit_keeps_values() {
        let mut app = app();
        type_text(&mut app, "Ada");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "9876543210");
        ctrl(&mut app, 's');
        assert_eq!(
            app.result,
            Some(json!({"name": "Ada", "phone": "9876543210"}))
        );
        assert!(!app.form_state.is_dirty());
        ctrl(&mut app, 'q');
        assert!(app.should_quit);
    }

    #[test]
    fn invalid_submit_moves_focus_back_to_first_field() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "9876543210");
        ctrl(&mut app, 's');
        assert!(app.result.is_none());
        assert_eq!(app.form_state.focused_index(), Some(0));
        assert_eq!(app.status.message(), "1 field(s) need attention");
    }

    #[test]
    fn dirty_exit_needs_confirmation() {
        let mut app = app();
        type_text(&mut app, "A");
        ctrl(&mut app, 'q');
        assert!(!app.should_quit);
        assert!(app.exit_armed);
        ctrl(&mut app, 'q');
        assert!(app.should_quit);
        assert!(app.result.is_none());
    }

    #[test]
    fn editing_disarms_pending_exit() {
        let mut app = app();
        type_text(&mut app, "A");
        ctrl(&mut app, 'q');
        type_text(&mut app, "b");
        ctrl(&mut app, 'q');
        assert!(!app.should_quit);
    }
}
