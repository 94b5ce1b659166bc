pub mod filter_view;
pub mod form_view;
pub mod helpers;
pub mod list_view;
pub mod status_row;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

use super::app::{App, Mode};

/// Main render function. Reads `app` only; drawing never touches the
/// store or the interaction state.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let message_height = if app.status_message.is_some() { 2 } else { 0 };
    let help_height = if app.mode == Mode::List { 2 } else { 0 };

    // Layout: title (2 rows) | message | content | help
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(message_height),
            Constraint::Min(1),
            Constraint::Length(help_height),
        ])
        .split(area);

    status_row::render_title(frame, app, chunks[0]);
    status_row::render_message(frame, app, chunks[1]);

    match app.mode {
        Mode::List => list_view::render_list_view(frame, app, chunks[2]),
        Mode::Create | Mode::Edit => form_view::render_form_view(frame, app, chunks[2]),
        Mode::FilterStatus => filter_view::render_status_menu(frame, app, chunks[2]),
        Mode::FilterCategory => filter_view::render_category_menu(frame, app, chunks[2]),
    }

    if app.mode == Mode::List {
        status_row::render_help(frame, app, chunks[3]);
    }
}
