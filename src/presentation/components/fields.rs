use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use textwrap::wrap;
use unicode_width::UnicodeWidthStr;

use crate::form::{FieldEntry, FormState};

const VALUE_INDENT: u16 = 2;

pub struct FieldRender {
    pub lines: Vec<Line<'static>>,
    /// Line index and column where the text cursor belongs.
    pub cursor: Option<(usize, u16)>,
}

pub fn render_fields(frame: &mut Frame<'_>, area: Rect, form_state: &FormState) {
    let block = Block::default().title("Fields").borders(Borders::ALL);
    if form_state.is_empty() {
        frame.render_widget(Paragraph::new("This form has no fields").block(block), area);
        return;
    }

    let inner = block.inner(area);
    let content_width = inner.width.saturating_sub(VALUE_INDENT + 1);
    let mut lines = Vec::new();
    let mut cursor = None;
    let mut focused_span = None;

    for (index, entry) in form_state.entries().enumerate() {
        let focused = form_state.focused_index() == Some(index);
        let render = field_lines(entry, focused, content_width);
        let start = lines.len();
        if focused {
            focused_span = Some((start, render.lines.len()));
            cursor = render.cursor.map(|(line, column)| (start + line, column));
        }
        lines.extend(render.lines);
        lines.push(Line::from(""));
    }

    let height = inner.height as usize;
    let scroll = match focused_span {
        Some((start, len)) if start + len > height => start + len - height,
        _ => 0,
    };

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((scroll as u16, 0));
    frame.render_widget(paragraph, area);

    if let Some((line, column)) = cursor
        && line >= scroll
        && line - scroll < height
    {
        let y = inner.y.saturating_add((line - scroll) as u16);
        let x = inner.x.saturating_add(column).min(inner.right().saturating_sub(1));
        frame.set_cursor_position((x, y));
    }
}

pub fn field_lines(entry: &FieldEntry, focused: bool, max_width: u16) -> FieldRender {
    let field = &entry.field;
    let mut lines = Vec::new();

    let mut label = entry.display_label();
    if !field.is_optional() {
        label.push_str(" *");
    }
    let label_style = if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    };
    let mut label_spans = vec![Span::styled(label, label_style)];
    if let Some(max) = field.max_length() {
        label_spans.push(Span::styled(
            format!("  {}/{max}", field.text().chars().count()),
            Style::default().fg(Color::DarkGray),
        ));
    }
    if entry.input.read_only {
        label_spans.push(Span::styled(
            "  (read-only)",
            Style::default().fg(Color::DarkGray),
        ));
    }
    lines.push(Line::from(label_spans));

    let clamp_width = max_width.max(4) as usize;
    let mut segments: Vec<String> = wrap(field.text(), clamp_width)
        .into_iter()
        .map(|segment| segment.into_owned())
        .collect();
    if segments.is_empty() {
        segments.push(String::new());
    }
    let (prefix, value_style) = if focused {
        (
            Span::styled("› ", Style::default().fg(Color::Yellow)),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (Span::raw("  "), Style::default().fg(Color::White))
    };
    // wrap() drops trailing whitespace, the cursor still has to sit after it.
    let text = field.text();
    let trailing = &text[text.trim_end().len()..];
    let last_width = segments
        .last()
        .map(|segment| UnicodeWidthStr::width(segment.trim_end()))
        .unwrap_or(0)
        + UnicodeWidthStr::width(trailing);
    for segment in segments {
        lines.push(Line::from(vec![
            prefix.clone(),
            Span::styled(segment, value_style),
        ]));
    }
    let cursor = focused.then(|| (lines.len() - 1, VALUE_INDENT + last_width as u16));

    if let Some(message) = field.error() {
        for segment in wrap(&message, clamp_width) {
            lines.push(Line::from(Span::styled(
                format!("  {segment}"),
                Style::default().fg(Color::Red),
            )));
        }
    }

    if let Some(helper) = &entry.helper_text {
        for segment in wrap(helper, clamp_width) {
            lines.push(Line::from(Span::styled(
                format!("  {segment}"),
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    FieldRender { lines, cursor }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        form::FieldEntry,
        input::TextInput,
        state::{input_text, phone_number},
        validation::LengthBounds,
    };
    use ratatui::{Terminal, backend::TestBackend};

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    fn screen(form: &FormState, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
        terminal
            .draw(|frame| render_fields(frame, frame.area(), form))
            .expect("draw");
        let buffer = terminal.backend().buffer();
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn required_fields_get_a_marker_and_counter() {
        let entry = FieldEntry::new(
            "phone",
            phone_number(Some("Phone"), LengthBounds::default().with_max(10), false)
                .with_text("98765"),
        );
        let render = field_lines(&entry, false, 40);
        assert_eq!(line_text(&render.lines[0]), "Phone *  5/10");
        assert_eq!(line_text(&render.lines[1]), "  98765");
        assert!(render.cursor.is_none());
    }

    #[test]
    fn error_and_helper_follow_value() {
        let mut field = input_text(Some("Name"), LengthBounds::UNBOUNDED, true);
        field.force_error();
        let entry = FieldEntry::new("name", field)
            .with_helper_text("As on your ID")
            .with_input(TextInput::new().with_read_only(true));
        let render = field_lines(&entry, true, 40);
        let texts: Vec<_> = render.lines.iter().map(line_text).collect();
        assert_eq!(texts, ["Name  (read-only)", "› ", "  As on your ID"]);
        assert_eq!(render.cursor, Some((1, 2)));
    }

    #[test]
    fn cursor_moves_past_trailing_space() {
        let field = input_text(Some("Name"), LengthBounds::UNBOUNDED, false);
        let entry = FieldEntry::new("name", field.clone().with_text("Ada"));
        assert_eq!(field_lines(&entry, true, 40).cursor, Some((1, 5)));

        let entry = FieldEntry::new("name", field.with_text("Ada  "));
        assert_eq!(field_lines(&entry, true, 40).cursor, Some((1, 7)));
    }

    #[test]
    fn visible_error_is_red() {
        let mut field = input_text(Some("Name"), LengthBounds::UNBOUNDED, false);
        field.force_error();
        let render = field_lines(&FieldEntry::new("name", field), false, 40);
        let error = &render.lines[2];
        assert_eq!(line_text(error), "  Please enter valid name");
        assert_eq!(error.spans[0].style.fg, Some(Color::Red));
    }

    #[test]
    fn form_renders_every_field() {
        let mut form = FormState::new()
            .with_entry(FieldEntry::new(
                "name",
                input_text(Some("Name"), LengthBounds::UNBOUNDED, false),
            ))
            .and_then(|form| {
                form.with_entry(FieldEntry::new(
                    "phone",
                    phone_number(Some("Phone"), LengthBounds::UNBOUNDED, false),
                ))
            })
            .expect("form");
        form.focus(0);
        form.focus(1);
        let rows = screen(&form, 40, 12);
        let joined = rows.join("\n");
        assert!(joined.contains("Name *"));
        assert!(joined.contains("Please enter valid name"));
        assert!(joined.contains("Phone *"));
        assert!(!joined.contains("Please enter valid phone"));
    }

    #[test]
    fn empty_form_shows_placeholder() {
        let rows = screen(&FormState::new(), 30, 4);
        assert!(rows.join("\n").contains("This form has no fields"));
    }
}
