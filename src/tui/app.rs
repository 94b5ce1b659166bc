use std::io;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::config_io::read_config;
use crate::io::paths;
use crate::io::store::TaskStore;
use crate::model::{Category, Config, FilterOptions, RowStyle, Task, TaskId};

use super::input;
use super::render;
use super::text_input::TextInput;
use super::theme::Theme;

/// Longest description the form accepts, in characters
pub const DESCRIPTION_LIMIT: usize = 256;
/// Longest category the form accepts, in characters
pub const CATEGORY_LIMIT: usize = 50;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    List,
    Create,
    Edit,
    FilterStatus,
    FilterCategory,
}

/// Which form buffer receives keystrokes in Create/Edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Description,
    Category,
}

/// Main application state
pub struct App {
    pub store: TaskStore,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    /// Visible tasks: `store.filter(&filter)` as of the last refresh
    pub tasks: Vec<Task>,
    /// Index into `tasks`
    pub cursor: usize,
    pub row_style: RowStyle,
    pub filter: FilterOptions,
    /// Digits typed so far in FilterCategory
    pub category_digits: String,
    pub description_input: TextInput,
    pub category_input: TextInput,
    pub focus: Field,
    /// Task being edited in Edit mode
    pub editing_id: Option<TaskId>,
    /// One-line feedback shown above the content
    pub status_message: Option<String>,
}

impl App {
    pub fn new(store: TaskStore, config: &Config) -> Self {
        let mut app = App {
            store,
            mode: Mode::List,
            should_quit: false,
            theme: Theme::from_config(&config.ui),
            tasks: Vec::new(),
            cursor: 0,
            row_style: config.ui.row_style,
            filter: FilterOptions::default(),
            category_digits: String::new(),
            description_input: TextInput::with_limit(DESCRIPTION_LIMIT),
            category_input: TextInput::with_limit(CATEGORY_LIMIT),
            focus: Field::Description,
            editing_id: None,
            status_message: None,
        };
        app.refresh_tasks();
        app
    }

    /// Re-derive the visible list from the store and pull the cursor back
    /// inside it.
    pub fn refresh_tasks(&mut self) {
        self.tasks = self.store.filter(&self.filter);
        if self.cursor >= self.tasks.len() {
            self.cursor = self.tasks.len().saturating_sub(1);
        }
    }

    /// The task under the cursor, if any
    pub fn current_task(&self) -> Option<&Task> {
        self.tasks.get(self.cursor)
    }

    /// Categories in the order FilterCategory numbers them (1-based)
    pub fn categories(&self) -> Vec<Category> {
        self.store.categories()
    }

    pub fn focused_input_mut(&mut self) -> &mut TextInput {
        match self.focus {
            Field::Description => &mut self.description_input,
            Field::Category => &mut self.category_input,
        }
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }
}

/// Run the TUI application against `$HOME/.config/patodo`
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let store = TaskStore::open_default()?;
    let config = read_config(&paths::data_dir()?)?;

    let mut app = App::new(store, &config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
