use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use tempfile::TempDir;

use crate::io::store::TaskStore;
use crate::model::{Category, Config};
use crate::tui::app::App;
use crate::tui::input::handle_key;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// Full-screen render of the app at the default test size.
pub fn render_app(app: &App) -> String {
    render_to_string(TERM_W, TERM_H, |frame, _| {
        crate::tui::render::render(frame, app);
    })
}

/// An empty store backed by a file inside a fresh temp dir. Nothing is
/// written until the first mutation.
pub fn temp_store() -> (TempDir, TaskStore) {
    let tmp = TempDir::new().unwrap();
    let store = TaskStore::open(tmp.path().join("tasks.json")).unwrap();
    (tmp, store)
}

/// An App over a temp store seeded with `(description, category)` pairs.
pub fn app_with_tasks(tasks: &[(&str, &str)]) -> (TempDir, App) {
    let (tmp, mut store) = temp_store();
    for (description, category) in tasks {
        store.add(description, Category::new(category)).unwrap();
    }
    (tmp, App::new(store, &Config::default()))
}

pub fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn key(c: char) -> KeyEvent {
    press(KeyCode::Char(c))
}

pub fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// Feed each character of `s` as a key press.
pub fn type_str(app: &mut App, s: &str) {
    for c in s.chars() {
        handle_key(app, key(c));
    }
}
