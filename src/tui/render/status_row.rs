use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::tui::app::App;

/// Title line with the visible/total task count on the right
pub fn render_title(frame: &mut Frame, app: &App, area: Rect) {
    let title = "patodo";
    let count = if app.filter.is_empty() {
        format!("{} tasks", app.store.len())
    } else {
        format!("{}/{} tasks", app.tasks.len(), app.store.len())
    };

    let mut spans = vec![Span::styled(
        title,
        Style::default()
            .fg(app.theme.title)
            .add_modifier(Modifier::BOLD),
    )];
    let width = area.width as usize;
    let used = title.chars().count() + count.chars().count();
    if used < width {
        spans.push(Span::raw(" ".repeat(width - used)));
        spans.push(Span::styled(count, Style::default().fg(app.theme.dim)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Transient feedback from the last action
pub fn render_message(frame: &mut Frame, app: &App, area: Rect) {
    let Some(message) = &app.status_message else {
        return;
    };
    let color = if message.starts_with("Error") {
        app.theme.error
    } else {
        app.theme.message
    };
    let line = Line::from(Span::styled(
        format!(" {} ", message),
        Style::default()
            .fg(color)
            .bg(app.theme.message_bg)
            .add_modifier(Modifier::ITALIC),
    ));
    frame.render_widget(Paragraph::new(line), area);
}

/// Key hints for List mode, including the row style and active filter
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help = format!(
        "n new  e edit  v view ({})  d done/undone  i in-progress  p pending  x delete  f filter ({})  q quit",
        app.row_style.label(),
        app.filter.summary(),
    );
    let paragraph = Paragraph::new(help)
        .style(Style::default().fg(app.theme.dim))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
