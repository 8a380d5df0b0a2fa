use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::Paragraph,
};

use crate::form::FormState;

use super::components::{render_fields, render_footer};

pub struct UiContext<'a> {
    pub title: Option<&'a str>,
    pub status_message: &'a str,
    pub dirty: bool,
    pub error_count: usize,
    pub help: Option<&'a str>,
}

pub fn draw(frame: &mut Frame<'_>, form_state: &FormState, ctx: UiContext<'_>) {
    let title_height = if ctx.title.is_some() { 1 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(title_height),
            Constraint::Min(5),
            Constraint::Length(4),
        ])
        .split(frame.area());

    if let Some(title) = ctx.title {
        let heading =
            Paragraph::new(title.to_string()).style(Style::default().add_modifier(Modifier::BOLD));
        frame.render_widget(heading, chunks[0]);
    }
    render_fields(frame, chunks[1], form_state);
    render_footer(frame, chunks[2], &ctx);
}
