use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Task lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Done,
}

impl TaskStatus {
    /// The token used on disk and in filter summaries
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Done => "done",
        }
    }

    /// Single-cell glyph shown in front of a row
    pub fn icon(self) -> &'static str {
        match self {
            TaskStatus::Pending => "\u{25CB}",
            TaskStatus::InProgress => "\u{27F3}",
            TaskStatus::Done => "\u{2713}",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque task identifier (a ULID string)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(id: impl Into<String>) -> Self {
        TaskId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<ulid::Ulid> for TaskId {
    fn from(id: ulid::Ulid) -> Self {
        TaskId(id.to_string())
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Free-form category label. Whitespace is trimmed on construction; an
/// empty category means "no category".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    pub fn new(label: &str) -> Self {
        Category(label.trim().to_string())
    }

    pub fn none() -> Self {
        Category(String::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Category::new(&raw))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Category {
    fn from(label: &str) -> Self {
        Category::new(label)
    }
}

/// A single unit of work as stored on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub description: String,
    pub status: TaskStatus,
    #[serde(default)]
    pub category: Category,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// A fresh pending task stamped with the current time
    pub fn new(id: TaskId, description: String, category: Category) -> Self {
        let now = Utc::now();
        Task {
            id,
            description,
            status: TaskStatus::Pending,
            category,
            created_at: now,
            updated_at: now,
        }
    }

    /// Advance `updated_at`. Always moves forward, even when the clock has
    /// not ticked since the previous mutation.
    pub fn touch(&mut self) {
        let now = Utc::now();
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + Duration::nanoseconds(1)
        };
    }
}

/// Optional status/category predicates, combined with AND
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub status: Option<TaskStatus>,
    pub category: Option<Category>,
}

impl FilterOptions {
    pub fn matches(&self, task: &Task) -> bool {
        self.status.is_none_or(|s| task.status == s)
            && self.category.as_ref().is_none_or(|c| &task.category == c)
    }

    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.category.is_none()
    }

    /// Short summary for the help footer: "all", "done", "work", "done + work"
    pub fn summary(&self) -> String {
        match (&self.status, &self.category) {
            (Some(s), Some(c)) => format!("{} + {}", s, c),
            (Some(s), None) => s.to_string(),
            (None, Some(c)) => c.to_string(),
            (None, None) => "all".to_string(),
        }
    }
}
