use crossterm::event::{KeyCode, KeyEvent};

use crate::model::TaskStatus;
use crate::tui::app::{App, Mode};

pub(super) fn handle_filter_status(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => cancel_filter(app),
        KeyCode::Char('a') => clear_filters(app),
        KeyCode::Char('p') => apply_status_filter(app, TaskStatus::Pending),
        KeyCode::Char('i') => apply_status_filter(app, TaskStatus::InProgress),
        KeyCode::Char('d') => apply_status_filter(app, TaskStatus::Done),
        KeyCode::Char('c') => open_category_filter(app),
        _ => {}
    }
}

pub(super) fn handle_filter_category(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => cancel_filter(app),
        KeyCode::Char('a') => clear_category_filter(app),
        KeyCode::Char(c) if c.is_ascii_digit() => push_category_digit(app, c),
        KeyCode::Enter if !app.category_digits.is_empty() => {
            let n = app.category_digits.parse().unwrap_or(0);
            select_category(app, n);
        }
        KeyCode::Backspace => {
            app.category_digits.pop();
        }
        _ => {}
    }
}

/// Accumulate a category number. Selection happens as soon as no longer
/// number could start with the digits typed so far; with ten or more
/// categories a single digit that could still grow waits for a second
/// digit or Enter.
pub fn push_category_digit(app: &mut App, digit: char) {
    if app.category_digits.is_empty() && digit == '0' {
        return;
    }
    app.category_digits.push(digit);
    let n: usize = app.category_digits.parse().unwrap_or(0);
    let count = app.categories().len();
    if app.category_digits.len() >= 2 || n * 10 > count {
        select_category(app, n);
    } else {
        app.set_message(format!("Category {}_ (next digit or Enter)", n));
    }
}

/// Back to the list with the active filters unchanged
pub fn cancel_filter(app: &mut App) {
    app.category_digits.clear();
    app.mode = Mode::List;
    app.set_message("Filter cancelled");
}

/// Drop both predicates
pub fn clear_filters(app: &mut App) {
    app.filter.status = None;
    app.filter.category = None;
    finish_filter(app, "Showing all tasks".to_string());
}

/// Filter by status; an active category filter still applies
pub fn apply_status_filter(app: &mut App, status: TaskStatus) {
    app.filter.status = Some(status);
    finish_filter(app, format!("Showing {} tasks", status));
}

pub fn open_category_filter(app: &mut App) {
    app.category_digits.clear();
    app.mode = Mode::FilterCategory;
    app.set_message("Select category to filter by");
}

pub fn clear_category_filter(app: &mut App) {
    app.filter.category = None;
    finish_filter(app, "Showing all categories".to_string());
}

/// Select the `n`th (1-based) category as listed by `App::categories`.
/// The list is fetched again here rather than reused from the last render.
/// Out-of-range numbers leave the mode and filter untouched.
pub fn select_category(app: &mut App, n: usize) {
    app.category_digits.clear();
    let categories = app.categories();
    let Some(category) = n.checked_sub(1).and_then(|i| categories.get(i)) else {
        app.set_message(format!("No category {} (choose 1-{})", n, categories.len()));
        return;
    };
    let message = format!("Showing tasks in category: {}", category);
    app.filter.category = Some(category.clone());
    finish_filter(app, message);
}

fn finish_filter(app: &mut App, message: String) {
    app.cursor = 0;
    app.refresh_tasks();
    app.mode = Mode::List;
    app.set_message(message);
}
