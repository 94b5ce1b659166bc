use std::ops::Range;

use ratatui::style::{Modifier, Style};

use crate::model::TaskStatus;
use crate::tui::theme::Theme;

/// Marker in the first column of the cursor row
pub(super) fn cursor_marker(is_cursor: bool) -> &'static str {
    if is_cursor { ">" } else { " " }
}

/// Style for a row's text: bold title color under the cursor, otherwise
/// the status color.
pub(super) fn row_style(theme: &Theme, status: TaskStatus, is_cursor: bool) -> Style {
    if is_cursor {
        Style::default()
            .fg(theme.title)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.status_color(status))
    }
}

pub(super) fn category_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.category)
        .add_modifier(Modifier::ITALIC)
}

/// Rows of `len` that fit in `height` lines while keeping `cursor` visible.
pub(super) fn visible_window(cursor: usize, len: usize, height: usize) -> Range<usize> {
    if height == 0 || len == 0 {
        return 0..0;
    }
    let start = cursor.saturating_sub(height - 1).min(len.saturating_sub(height));
    start..(start + height).min(len)
}
