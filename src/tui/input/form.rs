use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::Category;
use crate::tui::app::{App, Field, Mode};

/// Keys for the Create and Edit forms
pub(super) fn handle_form(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Esc) => cancel_form(app),
        (_, KeyCode::Tab | KeyCode::BackTab) => toggle_focus(app),
        (_, KeyCode::Enter) => match app.mode {
            Mode::Edit => confirm_edit(app),
            _ => confirm_create(app),
        },
        (KeyModifiers::CONTROL, KeyCode::Char('u')) => app.focused_input_mut().clear(),
        (_, KeyCode::Backspace) => app.focused_input_mut().backspace(),
        (_, KeyCode::Delete) => app.focused_input_mut().delete(),
        (_, KeyCode::Left) => app.focused_input_mut().move_left(),
        (_, KeyCode::Right) => app.focused_input_mut().move_right(),
        (_, KeyCode::Home) => app.focused_input_mut().home(),
        (_, KeyCode::End) => app.focused_input_mut().end(),
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            app.focused_input_mut().insert(c)
        }
        _ => {}
    }
}

/// Exactly one field is focused; Tab swaps which.
pub fn toggle_focus(app: &mut App) {
    app.focus = match app.focus {
        Field::Description => Field::Category,
        Field::Category => Field::Description,
    };
}

/// Leave Create/Edit without touching the store
pub fn cancel_form(app: &mut App) {
    let message = match app.mode {
        Mode::Edit => "Edit cancelled",
        _ => "Task creation cancelled",
    };
    app.editing_id = None;
    app.mode = Mode::List;
    app.set_message(message);
}

/// Validate the form and add a task. Both description and category are
/// required here; either missing returns to the list with nothing saved.
pub fn confirm_create(app: &mut App) {
    app.mode = Mode::List;

    let description = app.description_input.value().trim().to_string();
    if description.is_empty() {
        app.set_message("Task creation cancelled - description is required");
        return;
    }
    let category = Category::new(app.category_input.value());
    if category.is_empty() {
        app.set_message("Task creation cancelled - category is required");
        return;
    }

    match app.store.add(&description, category.clone()) {
        Ok(_) => app.set_message(format!("Task created: {} [{}]", description, category)),
        Err(e) => app.set_message(format!("Error creating task: {}", e)),
    }
    app.refresh_tasks();
}

/// Validate the form and update the task being edited. Only the
/// description is required; an empty category clears it.
pub fn confirm_edit(app: &mut App) {
    app.mode = Mode::List;
    let Some(id) = app.editing_id.take() else {
        app.set_message("Edit cancelled");
        return;
    };

    let description = app.description_input.value().trim().to_string();
    if description.is_empty() {
        app.set_message("Edit cancelled - description is required");
        return;
    }
    let category = Category::new(app.category_input.value());

    match app.store.update(&id, &description, category) {
        Ok(()) => app.set_message("Task updated successfully"),
        Err(e) => app.set_message(format!("Error updating task: {}", e)),
    }
    app.refresh_tasks();
}
