use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

use super::helpers::category_style;

/// Options available in FilterStatus
const STATUS_OPTIONS: [(&str, &str); 5] = [
    ("a", "All tasks"),
    ("p", "Pending"),
    ("i", "In progress"),
    ("d", "Done"),
    ("c", "Category..."),
];

pub fn render_status_menu(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![heading(app, "Filter by status:")];
    for (key, label) in STATUS_OPTIONS {
        lines.push(option_line(app, key, Span::raw(label)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("Current filter: {}", app.filter.summary()),
        Style::default().fg(app.theme.dim),
    )));
    frame.render_widget(Paragraph::new(lines), area);
}

/// Categories numbered from 1 in the same order `select_category` uses
pub fn render_category_menu(frame: &mut Frame, app: &App, area: Rect) {
    let categories = app.categories();
    let lines = if categories.is_empty() {
        vec![Line::from(Span::styled(
            "No categories yet.",
            Style::default()
                .fg(app.theme.dim)
                .add_modifier(Modifier::ITALIC),
        ))]
    } else {
        let mut lines = vec![heading(app, "Select category:")];
        for (i, category) in categories.iter().enumerate() {
            lines.push(option_line(
                app,
                &(i + 1).to_string(),
                Span::styled(category.to_string(), category_style(&app.theme)),
            ));
        }
        lines.push(option_line(app, "a", Span::raw("All categories")));
        lines
    };
    frame.render_widget(Paragraph::new(lines), area);
}

fn heading<'a>(app: &App, text: &'a str) -> Line<'a> {
    Line::from(Span::styled(
        text,
        Style::default()
            .fg(app.theme.title)
            .add_modifier(Modifier::BOLD),
    ))
}

fn option_line<'a>(app: &App, key: &str, label: Span<'a>) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("  [{}] ", key), Style::default().fg(app.theme.title)),
        label,
    ])
}
