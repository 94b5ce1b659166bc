use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Field, Mode};
use crate::tui::text_input::TextInput;

const DESCRIPTION_PLACEHOLDER: &str = "Enter task description...";
const CATEGORY_PLACEHOLDER: &str = "Enter category (work, personal, etc.)...";

/// Render the Create/Edit form: two labelled fields, one focused
pub fn render_form_view(frame: &mut Frame, app: &App, area: Rect) {
    let heading = match app.mode {
        Mode::Edit => "Edit task",
        _ => "New task",
    };
    let label_style = Style::default().fg(app.theme.title);

    let lines = vec![
        Line::from(Span::styled(
            heading,
            label_style.add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("Description:", label_style)),
        input_line(
            app,
            &app.description_input,
            DESCRIPTION_PLACEHOLDER,
            app.focus == Field::Description,
        ),
        Line::from(""),
        Line::from(Span::styled("Category:", label_style)),
        input_line(
            app,
            &app.category_input,
            CATEGORY_PLACEHOLDER,
            app.focus == Field::Category,
        ),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}

/// `> text▌rest` for the focused field, `  text` otherwise. Empty fields
/// show their placeholder dimmed.
fn input_line<'a>(
    app: &App,
    input: &'a TextInput,
    placeholder: &'a str,
    focused: bool,
) -> Line<'a> {
    let marker = if focused { "> " } else { "  " };
    let mut spans = vec![Span::styled(marker, Style::default().fg(app.theme.title))];
    let text_style = Style::default().fg(app.theme.text);

    let (before, after) = input.value().split_at(input.cursor());
    spans.push(Span::styled(before, text_style));
    if focused {
        spans.push(Span::styled(
            "\u{258C}",
            Style::default().fg(app.theme.title),
        ));
    }
    spans.push(Span::styled(after, text_style));

    if input.value().is_empty() {
        spans.push(Span::styled(
            placeholder,
            Style::default()
                .fg(app.theme.dim)
                .add_modifier(Modifier::ITALIC),
        ));
    }
    Line::from(spans)
}
