use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::{RowStyle, Task};
use crate::tui::app::App;
use crate::util::unicode::{fit_to_width, truncate_to_width};

use super::helpers::{category_style, cursor_marker, row_style, visible_window};

/// Width of the category column in table rows
const CATEGORY_COLS: usize = 20;
/// Cursor marker + status icon + separators
const PREFIX_COLS: usize = 6;

/// Render the visible task list as a table or compact rows
pub fn render_list_view(frame: &mut Frame, app: &App, area: Rect) {
    if app.tasks.is_empty() {
        let text = if app.filter.is_empty() {
            "No tasks yet. Press 'n' to create one!"
        } else {
            "No tasks match the current filter. Press 'f' to change it."
        };
        let empty = Paragraph::new(text).style(
            Style::default()
                .fg(app.theme.dim)
                .add_modifier(Modifier::ITALIC),
        );
        frame.render_widget(empty, area);
        return;
    }

    let width = area.width as usize;
    let mut lines: Vec<Line> = Vec::new();
    let mut height = area.height as usize;

    if app.row_style == RowStyle::Table {
        lines.push(header_line(app, width));
        height = height.saturating_sub(1);
    }

    for i in visible_window(app.cursor, app.tasks.len(), height) {
        let task = &app.tasks[i];
        let is_cursor = i == app.cursor;
        lines.push(match app.row_style {
            RowStyle::Table => table_row(app, task, is_cursor, width),
            RowStyle::Compact => compact_row(app, task, is_cursor, width),
        });
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn description_cols(width: usize) -> usize {
    width.saturating_sub(PREFIX_COLS + 1 + CATEGORY_COLS).max(10)
}

fn header_line(app: &App, width: usize) -> Line<'static> {
    let text = format!(
        "{}{} {}",
        fit_to_width("  St", PREFIX_COLS),
        fit_to_width("Description", description_cols(width)),
        "Category",
    );
    Line::from(Span::styled(
        text,
        Style::default()
            .fg(app.theme.title)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
    ))
}

fn table_row(app: &App, task: &Task, is_cursor: bool, width: usize) -> Line<'static> {
    let status_style = Style::default().fg(app.theme.status_color(task.status));
    Line::from(vec![
        Span::raw(format!("{} ", cursor_marker(is_cursor))),
        Span::styled(format!(" {}  ", task.status.icon()), status_style),
        Span::styled(
            fit_to_width(&task.description, description_cols(width)),
            row_style(&app.theme, task.status, is_cursor),
        ),
        Span::raw(" "),
        Span::styled(
            truncate_to_width(task.category.as_str(), CATEGORY_COLS),
            category_style(&app.theme),
        ),
    ])
}

fn compact_row(app: &App, task: &Task, is_cursor: bool, width: usize) -> Line<'static> {
    let style = row_style(&app.theme, task.status, is_cursor);
    let mut spans = vec![Span::styled(
        format!("{} {} ", cursor_marker(is_cursor), task.status.icon()),
        style,
    )];
    let budget = width.saturating_sub(4);
    spans.push(Span::styled(
        truncate_to_width(&task.description, budget),
        style,
    ));
    if !task.category.is_empty() {
        spans.push(Span::styled(
            format!(" [{}]", task.category),
            category_style(&app.theme),
        ));
    }
    Line::from(spans)
}
