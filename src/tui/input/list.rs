use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::TaskStatus;
use crate::tui::app::{App, Field, Mode};

pub(super) fn handle_list(app: &mut App, key: KeyEvent) {
    const PLAIN: KeyModifiers = KeyModifiers::NONE.union(KeyModifiers::SHIFT);
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => quit(app),
        (m, _) if !PLAIN.contains(m) => {}
        (_, KeyCode::Char('q')) => quit(app),
        (_, KeyCode::Char('n')) => start_create(app),
        (_, KeyCode::Char('e')) => start_edit(app),
        (_, KeyCode::Char('f')) => open_filter(app),
        (_, KeyCode::Char('v')) => toggle_row_style(app),
        (_, KeyCode::Up | KeyCode::Char('k')) => move_up(app),
        (_, KeyCode::Down | KeyCode::Char('j')) => move_down(app),
        (_, KeyCode::Char('d')) => toggle_done(app),
        (_, KeyCode::Char('i')) => {
            if set_current_status(app, TaskStatus::InProgress) {
                app.set_message("Task marked as in-progress");
            }
        }
        (_, KeyCode::Char('p')) => {
            if set_current_status(app, TaskStatus::Pending) {
                app.set_message("Task marked as pending");
            }
        }
        (_, KeyCode::Char('x')) => delete_current(app),
        _ => {}
    }
}

pub fn quit(app: &mut App) {
    app.should_quit = true;
}

/// List → Create with empty buffers and description focused
pub fn start_create(app: &mut App) {
    app.mode = Mode::Create;
    app.description_input.clear();
    app.category_input.clear();
    app.focus = Field::Description;
    app.editing_id = None;
    app.set_message("Enter task details (Tab to switch fields, Enter to save, ESC to cancel)");
}

/// List → Edit, prefilled from the task under the cursor. No-op on an
/// empty list.
pub fn start_edit(app: &mut App) {
    let Some(task) = app.current_task() else {
        return;
    };
    let (id, description, category) = (
        task.id.clone(),
        task.description.clone(),
        task.category.to_string(),
    );
    app.mode = Mode::Edit;
    app.editing_id = Some(id);
    app.description_input.set_value(&description);
    app.category_input.set_value(&category);
    app.focus = Field::Description;
    app.set_message("Edit task (Tab to switch fields, Enter to save, ESC to cancel)");
}

pub fn open_filter(app: &mut App) {
    app.mode = Mode::FilterStatus;
    app.set_message("Filter: (a)ll, (p)ending, (i)n-progress, (d)one, (c)ategory, ESC to cancel");
}

pub fn toggle_row_style(app: &mut App) {
    app.row_style = app.row_style.toggled();
    app.set_message(format!("Switched to {} view", app.row_style.label()));
}

pub fn move_up(app: &mut App) {
    app.cursor = app.cursor.saturating_sub(1);
}

pub fn move_down(app: &mut App) {
    if app.cursor + 1 < app.tasks.len() {
        app.cursor += 1;
    }
}

/// Done ↔ Pending for the task under the cursor
pub fn toggle_done(app: &mut App) {
    let Some(status) = app.current_task().map(|t| t.status) else {
        return;
    };
    if status == TaskStatus::Done {
        if set_current_status(app, TaskStatus::Pending) {
            app.set_message("Task marked as pending");
        }
    } else if set_current_status(app, TaskStatus::Done) {
        app.set_message("Task marked as done!");
    }
}

/// Set the status of the task under the cursor and refresh. Returns true
/// when the store accepted the change; store errors become the status
/// message.
pub fn set_current_status(app: &mut App, status: TaskStatus) -> bool {
    let Some(id) = app.current_task().map(|t| t.id.clone()) else {
        return false;
    };
    let result = app.store.update_status(&id, status);
    app.refresh_tasks();
    match result {
        Ok(()) => true,
        Err(e) => {
            app.set_message(format!("Error updating task: {}", e));
            false
        }
    }
}

/// Delete the task under the cursor; the cursor steps up if it fell off
/// the end.
pub fn delete_current(app: &mut App) {
    let Some(id) = app.current_task().map(|t| t.id.clone()) else {
        return;
    };
    match app.store.delete(&id) {
        Ok(()) => app.set_message("Task deleted"),
        Err(e) => app.set_message(format!("Error deleting task: {}", e)),
    }
    app.refresh_tasks();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::input::handle_key;
    use crate::tui::render::test_helpers::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn cursor_moves_within_bounds() {
        let (_tmp, mut app) = app_with_tasks(&[("a", ""), ("b", ""), ("c", "")]);
        for _ in 0..10 {
            handle_key(&mut app, press(KeyCode::Down));
            assert!(app.cursor < app.tasks.len());
        }
        assert_eq!(app.cursor, 2);
        for _ in 0..10 {
            handle_key(&mut app, key('k'));
        }
        assert_eq!(app.cursor, 0);
        handle_key(&mut app, key('j'));
        assert_eq!(app.cursor, 1);
    }

    #[test]
    fn cursor_stays_zero_on_empty_list() {
        let (_tmp, mut app) = app_with_tasks(&[]);
        handle_key(&mut app, press(KeyCode::Down));
        handle_key(&mut app, press(KeyCode::Up));
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn n_enters_create_with_clean_buffers() {
        let (_tmp, mut app) = app_with_tasks(&[("a", "")]);
        app.description_input.set_value("stale");
        app.focus = Field::Category;
        handle_key(&mut app, key('n'));
        assert_eq!(app.mode, Mode::Create);
        assert_eq!(app.description_input.value(), "");
        assert_eq!(app.category_input.value(), "");
        assert_eq!(app.focus, Field::Description);
        assert!(app.editing_id.is_none());
        assert!(app.status_message.as_deref().unwrap().contains("Enter task details"));
    }

    #[test]
    fn e_enters_edit_prefilled() {
        let (_tmp, mut app) = app_with_tasks(&[("a", "work"), ("b", "home")]);
        handle_key(&mut app, key('j'));
        handle_key(&mut app, key('e'));
        assert_eq!(app.mode, Mode::Edit);
        assert_eq!(app.editing_id.as_ref(), Some(&app.tasks[1].id));
        assert_eq!(app.description_input.value(), "b");
        assert_eq!(app.category_input.value(), "home");
    }

    #[test]
    fn e_on_empty_list_stays_in_list() {
        let (_tmp, mut app) = app_with_tasks(&[]);
        handle_key(&mut app, key('e'));
        assert_eq!(app.mode, Mode::List);
        assert!(app.editing_id.is_none());
    }

    #[test]
    fn d_toggles_done_and_back() {
        let (_tmp, mut app) = app_with_tasks(&[("a", "")]);
        handle_key(&mut app, key('d'));
        assert_eq!(app.tasks[0].status, TaskStatus::Done);
        assert_eq!(app.status_message.as_deref(), Some("Task marked as done!"));

        handle_key(&mut app, key('d'));
        assert_eq!(app.tasks[0].status, TaskStatus::Pending);
        assert_eq!(app.status_message.as_deref(), Some("Task marked as pending"));
    }

    #[test]
    fn i_and_p_set_status_in_store() {
        let (_tmp, mut app) = app_with_tasks(&[("a", "")]);
        let id = app.tasks[0].id.clone();
        handle_key(&mut app, key('i'));
        assert_eq!(app.store.get(&id).unwrap().status, TaskStatus::InProgress);
        assert_eq!(app.tasks[0].status, TaskStatus::InProgress);
        assert_eq!(
            app.status_message.as_deref(),
            Some("Task marked as in-progress")
        );
        handle_key(&mut app, key('p'));
        assert_eq!(app.store.get(&id).unwrap().status, TaskStatus::Pending);
    }

    #[test]
    fn status_change_under_filter_hides_row() {
        let (_tmp, mut app) = app_with_tasks(&[("a", ""), ("b", "")]);
        app.filter.status = Some(TaskStatus::Pending);
        app.refresh_tasks();
        handle_key(&mut app, key('j'));
        handle_key(&mut app, key('d'));
        assert_eq!(app.tasks.len(), 1);
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn delete_last_row_steps_cursor_up() {
        let (_tmp, mut app) = app_with_tasks(&[("a", ""), ("b", ""), ("c", "")]);
        handle_key(&mut app, key('j'));
        handle_key(&mut app, key('j'));
        assert_eq!(app.cursor, 2);

        handle_key(&mut app, key('x'));
        assert_eq!(app.store.len(), 2);
        assert_eq!(app.tasks.len(), 2);
        assert_eq!(app.cursor, 1);
        assert_eq!(app.status_message.as_deref(), Some("Task deleted"));
    }

    #[test]
    fn delete_only_row_keeps_cursor_at_zero() {
        let (_tmp, mut app) = app_with_tasks(&[("a", "")]);
        handle_key(&mut app, key('x'));
        assert!(app.tasks.is_empty());
        assert_eq!(app.cursor, 0);
        handle_key(&mut app, key('x'));
        assert_eq!(app.store.len(), 0);
    }

    #[test]
    fn v_toggles_row_style() {
        let (_tmp, mut app) = app_with_tasks(&[]);
        handle_key(&mut app, key('v'));
        assert_eq!(app.row_style, crate::model::RowStyle::Compact);
        assert_eq!(app.status_message.as_deref(), Some("Switched to list view"));
        handle_key(&mut app, key('v'));
        assert_eq!(app.status_message.as_deref(), Some("Switched to table view"));
    }

    #[test]
    fn f_opens_filter_menu() {
        let (_tmp, mut app) = app_with_tasks(&[]);
        handle_key(&mut app, key('f'));
        assert_eq!(app.mode, Mode::FilterStatus);
        assert!(app.status_message.as_deref().unwrap().starts_with("Filter:"));
    }

    #[test]
    fn q_and_ctrl_c_quit() {
        let (_tmp, mut app) = app_with_tasks(&[]);
        handle_key(&mut app, key('q'));
        assert!(app.should_quit);

        let (_tmp, mut app) = app_with_tasks(&[]);
        handle_key(&mut app, ctrl('c'));
        assert!(app.should_quit);
    }

    #[test]
    fn modified_letters_do_nothing() {
        let (_tmp, mut app) = app_with_tasks(&[("a", ""), ("b", "")]);
        handle_key(&mut app, ctrl('d'));
        handle_key(&mut app, ctrl('q'));
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT));
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('j'), KeyModifiers::ALT));
        assert!(!app.should_quit);
        assert_eq!(app.store.len(), 2);
        assert_eq!(app.tasks[0].status, TaskStatus::Pending);
        assert_eq!(app.cursor, 0);
        assert!(app.status_message.is_none());
    }
}
