use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use ulid::Generator;

use crate::io::recovery::{self, RecoveryEntry};
use crate::model::{Category, FilterOptions, Task, TaskId, TaskStatus};

/// Error type for task store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not resolve the home directory")]
    NoHomeDir,
    #[error("no task file at {path}")]
    NotFound { path: PathBuf },
    #[error("could not parse {path}: {source}")]
    CorruptData {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("could not write {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not serialize tasks: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// The canonical, insertion-ordered task list and the JSON file backing it.
///
/// Every mutation writes the whole list back synchronously. A failed write
/// leaves the in-memory change in place and returns the error.
pub struct TaskStore {
    path: PathBuf,
    tasks: Vec<Task>,
    ids: Generator,
}

impl TaskStore {
    /// An empty store bound to `path`. Nothing is read or written.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        TaskStore {
            path: path.into(),
            tasks: Vec::new(),
            ids: Generator::new(),
        }
    }

    /// Open the store at `path`, creating its directory. A missing file
    /// means an empty store; a file that does not parse is an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let mut store = TaskStore::new(path);
        if let Some(dir) = store.path.parent() {
            fs::create_dir_all(dir).map_err(|e| StoreError::Io {
                path: dir.to_path_buf(),
                source: e,
            })?;
        }
        match store.load() {
            Ok(()) | Err(StoreError::NotFound { .. }) => Ok(store),
            Err(e) => Err(e),
        }
    }

    /// Open `$HOME/.config/patodo/tasks.json`.
    pub fn open_default() -> Result<Self, StoreError> {
        let dir = crate::io::paths::data_dir()?;
        TaskStore::open(crate::io::paths::tasks_path(&dir))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the in-memory list with the file contents.
    pub fn load(&mut self) -> Result<(), StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound {
                    path: self.path.clone(),
                });
            }
            Err(e) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source: e,
                });
            }
        };
        self.tasks = serde_json::from_str(&text).map_err(|e| StoreError::CorruptData {
            path: self.path.clone(),
            source: e,
        })?;
        Ok(())
    }

    /// Overwrite the file with the full task list.
    pub fn save(&self) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(&self.tasks)?;
        if let Err(e) = recovery::atomic_write(&self.path, content.as_bytes()) {
            recovery::log_recovery(
                &self.path,
                RecoveryEntry {
                    timestamp: Utc::now(),
                    description: "task write failed".to_string(),
                    fields: vec![
                        ("Target".to_string(), self.path.display().to_string()),
                        ("Error".to_string(), e.to_string()),
                    ],
                    body: content,
                },
            );
            return Err(StoreError::Io {
                path: self.path.clone(),
                source: e,
            });
        }
        Ok(())
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    /// Distinct non-empty categories, sorted.
    pub fn categories(&self) -> Vec<Category> {
        self.tasks
            .iter()
            .filter(|t| !t.category.is_empty())
            .map(|t| t.category.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Tasks matching every set predicate, in insertion order.
    pub fn filter(&self, opts: &FilterOptions) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|t| opts.matches(t))
            .cloned()
            .collect()
    }

    /// Append a pending task and persist. Returns the new id.
    pub fn add(&mut self, description: &str, category: Category) -> Result<TaskId, StoreError> {
        let id = self.next_id();
        self.tasks
            .push(Task::new(id.clone(), description.to_string(), category));
        self.save()?;
        Ok(id)
    }

    pub fn update_status(&mut self, id: &TaskId, status: TaskStatus) -> Result<(), StoreError> {
        self.mutate(id, |t| t.status = status)
    }

    pub fn update_description(&mut self, id: &TaskId, description: &str) -> Result<(), StoreError> {
        self.mutate(id, |t| t.description = description.to_string())
    }

    pub fn update_category(&mut self, id: &TaskId, category: Category) -> Result<(), StoreError> {
        self.mutate(id, |t| t.category = category)
    }

    pub fn update(
        &mut self,
        id: &TaskId,
        description: &str,
        category: Category,
    ) -> Result<(), StoreError> {
        self.mutate(id, |t| {
            t.description = description.to_string();
            t.category = category;
        })
    }

    /// Remove the task permanently. Unknown ids are ignored.
    pub fn delete(&mut self, id: &TaskId) -> Result<(), StoreError> {
        match self.tasks.iter().position(|t| &t.id == id) {
            Some(idx) => {
                self.tasks.remove(idx);
                self.save()
            }
            None => Ok(()),
        }
    }

    /// Apply `f` to the task with `id`, bump its timestamp and persist.
    /// Unknown ids are a silent no-op and nothing is written.
    fn mutate(&mut self, id: &TaskId, f: impl FnOnce(&mut Task)) -> Result<(), StoreError> {
        let Some(task) = self.tasks.iter_mut().find(|t| &t.id == id) else {
            return Ok(());
        };
        f(task);
        task.touch();
        self.save()
    }

    /// Monotonic ULIDs never collide within one store, even inside a
    /// single millisecond. Overflow of the random part falls back to a
    /// fresh random ULID.
    fn next_id(&mut self) -> TaskId {
        let id = self
            .ids
            .generate()
            .unwrap_or_else(|_| ulid::Ulid::new());
        TaskId::from(id)
    }
}
