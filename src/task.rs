//! Task store for focusboard.
//!
//! Tasks live in insertion order and are persisted as a JSON array under the
//! `tasks` key after every mutation. The persisted shape is
//! `{ "id", "text", "completed", "createdAt" }` with `createdAt` as an
//! ISO-8601 UTC timestamp with millisecond precision.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clock::{Clock, SystemClock};
use crate::error::{Error, Result};
use crate::storage::{self, KeyValueStore, TASKS_KEY};

/// Creation-timestamp-derived task identifier (milliseconds since the epoch)
pub type TaskId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
    #[serde(with = "iso_millis")]
    pub created_at: DateTime<Utc>,
}

mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|parsed| parsed.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

/// View selector over the collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    pub fn as_str(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Active => "active",
            Filter::Completed => "completed",
        }
    }

    pub fn matches(self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !task.completed,
            Filter::Completed => task.completed,
        }
    }

    /// Message shown when the view is empty
    pub fn empty_message(self) -> &'static str {
        match self {
            Filter::All => "No tasks added yet",
            Filter::Active => "No active tasks",
            Filter::Completed => "No completed tasks",
        }
    }
}

impl FromStr for Filter {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Filter::All),
            "active" => Ok(Filter::Active),
            "completed" | "done" => Ok(Filter::Completed),
            other => Err(Error::InvalidArgument(format!(
                "unknown filter '{other}' (expected all, active, or completed)"
            ))),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derived totals; `active + completed == total`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Counts {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

impl Counts {
    pub fn pending_label(&self) -> String {
        if self.active == 1 {
            "1 task pending".to_string()
        } else {
            format!("{} tasks pending", self.active)
        }
    }
}

/// Age of a task relative to `now`: "just now", "N min ago", "Nh ago",
/// "yesterday", "N days ago", then the creation date after 30 days.
pub fn relative_time(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - created_at).num_minutes();
    if minutes < 1 {
        return "just now".to_string();
    }
    if minutes < 60 {
        return format!("{minutes} min ago");
    }
    let hours = minutes / 60;
    if hours < 24 {
        return format!("{hours}h ago");
    }
    match hours / 24 {
        1 => "yesterday".to_string(),
        days if days < 30 => format!("{days} days ago"),
        _ => created_at.format("%d/%m/%Y %H:%M").to_string(),
    }
}

/// Owns the ordered task collection and persists it after every change
pub struct TaskStore<S: KeyValueStore, C: Clock = SystemClock> {
    store: S,
    clock: C,
    tasks: Vec<Task>,
}

impl<S: KeyValueStore> TaskStore<S, SystemClock> {
    pub fn new(store: S) -> Self {
        Self::with_clock(store, SystemClock)
    }
}

impl<S: KeyValueStore, C: Clock> TaskStore<S, C> {
    /// Load the collection from `store`; absent or malformed data yields an empty list
    pub fn with_clock(store: S, clock: C) -> Self {
        let tasks: Vec<Task> = storage::load_typed(&store, TASKS_KEY).unwrap_or_default();
        tracing::debug!(count = tasks.len(), "loaded tasks");
        Self {
            store,
            clock,
            tasks,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Append a new active task. Blank text is rejected without touching the collection.
    pub fn add(&mut self, text: &str) -> Result<&Task> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::EmptyTaskText);
        }

        let created_at = self.clock.now();
        let id = self.next_id(created_at.timestamp_millis());
        self.tasks.push(Task {
            id,
            text: text.to_string(),
            completed: false,
            created_at,
        });
        self.persist();
        tracing::debug!(id, "task added");

        let index = self.tasks.len() - 1;
        Ok(&self.tasks[index])
    }

    /// Flip `completed`; `None` (and no change) when `id` is absent
    pub fn toggle(&mut self, id: TaskId) -> Option<&Task> {
        let index = self.tasks.iter().position(|task| task.id == id)?;
        self.tasks[index].completed = !self.tasks[index].completed;
        self.persist();
        Some(&self.tasks[index])
    }

    /// Remove and return the task; `None` when `id` is absent
    pub fn remove(&mut self, id: TaskId) -> Option<Task> {
        let index = self.tasks.iter().position(|task| task.id == id)?;
        let removed = self.tasks.remove(index);
        self.persist();
        Some(removed)
    }

    /// Drop every completed task, keeping the order of the rest. Returns how many went.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|task| !task.completed);
        let removed = before - self.tasks.len();
        if removed > 0 {
            self.persist();
        }
        removed
    }

    /// Tasks matching `filter`, in collection order
    pub fn filtered_view(&self, filter: Filter) -> Vec<&Task> {
        self.tasks.iter().filter(|task| filter.matches(task)).collect()
    }

    pub fn counts(&self) -> Counts {
        let total = self.tasks.len();
        let completed = self.tasks.iter().filter(|task| task.completed).count();
        Counts {
            total,
            active: total - completed,
            completed,
        }
    }

    /// How long ago `task` was created, by this store's clock
    pub fn created_ago(&self, task: &Task) -> String {
        relative_time(task.created_at, self.clock.now())
    }

    fn next_id(&self, candidate: TaskId) -> TaskId {
        let Some(max) = self.tasks.iter().map(|task| task.id).max() else {
            return candidate;
        };
        if candidate > max {
            return candidate;
        }
        if let Some(next) = max.checked_add(1) {
            return next;
        }
        // Nothing above the maximum: take the nearest free id below the clock.
        let taken: HashSet<TaskId> = self.tasks.iter().map(|task| task.id).collect();
        (TaskId::MIN..=candidate)
            .rev()
            .find(|id| !taken.contains(id))
            .unwrap_or(candidate)
    }

    fn persist(&self) {
        storage::save_typed(&self.store, TASKS_KEY, &self.tasks);
    }
}
