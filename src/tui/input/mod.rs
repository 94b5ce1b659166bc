mod filter;
mod form;
mod list;

use crossterm::event::{KeyCode, KeyEvent};

use super::app::{App, Mode};

pub use filter::{
    apply_status_filter, cancel_filter, clear_category_filter, clear_filters,
    open_category_filter, push_category_digit, select_category,
};
pub use form::{cancel_form, confirm_create, confirm_edit, toggle_focus};
pub use list::{
    delete_current, move_down, move_up, open_filter, quit, set_current_status, start_create,
    start_edit, toggle_done, toggle_row_style,
};

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    match app.mode {
        Mode::List => list::handle_list(app, key),
        Mode::Create | Mode::Edit => form::handle_form(app, key),
        Mode::FilterStatus => filter::handle_filter_status(app, key),
        Mode::FilterCategory => filter::handle_filter_category(app, key),
    }
}
