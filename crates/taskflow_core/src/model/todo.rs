//! To-do record model.
//!
//! # Responsibility
//! - Define the canonical task record persisted in the `todos` slot.
//! - Define filter selectors and the count projection derived from records.
//!
//! # Invariants
//! - `id` is stable and never reused for another record.
//! - `text` is immutable after creation; no edit operation exists.
//! - List position, not `created_at`, decides ordering between records.
//!
//! # See also
//! - docs/architecture/data-model.md

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Stable identifier for every task record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TodoId = Uuid;

/// View selector over the task list.
///
/// Frontends narrow the rendered list with one of these; the underlying
/// list is never mutated by filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    /// Every record.
    All,
    /// Records not yet completed.
    Active,
    /// Completed records only.
    Completed,
}

impl Filter {
    /// Stable lowercase name used by CLI arguments and diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }

    /// Parses a filter name, case-insensitive. Returns `None` for unknown
    /// values.
    pub fn parse(value: &str) -> Option<Filter> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Some(Self::All),
            "active" => Some(Self::Active),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }
}

/// Derived active/completed tally over the current list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TodoCounts {
    pub active: usize,
    pub completed: usize,
}

/// Canonical task record.
///
/// Serialized field names follow the persisted snapshot schema: `created_at`
/// is renamed to `createdAt` to match external naming, the same way other
/// wire fields keep their storage-side spelling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Stable global ID used for toggle/remove addressing.
    pub id: TodoId,
    /// Trimmed task text. Immutable after creation.
    pub text: String,
    /// Completion flag, flipped by the store's toggle operation.
    pub completed: bool,
    /// Creation time in Unix epoch milliseconds.
    #[serde(rename = "createdAt")]
    pub created_at: i64,
}

impl Todo {
    /// Creates a record with a generated stable ID and the current time.
    ///
    /// # Invariants
    /// - `completed` starts as `false`.
    /// - The caller owns trimming/emptiness policy; see `TodoStore::add`.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), text, false, now_epoch_ms())
    }

    /// Creates a record from fully explicit fields.
    ///
    /// Used by reload paths and tests where identity already exists.
    pub fn with_id(id: TodoId, text: impl Into<String>, completed: bool, created_at: i64) -> Self {
        Self {
            id,
            text: text.into(),
            completed,
            created_at,
        }
    }

    /// Returns whether this record is selected by `filter`.
    pub fn matches(&self, filter: Filter) -> bool {
        match filter {
            Filter::All => true,
            Filter::Active => !self.completed,
            Filter::Completed => self.completed,
        }
    }
}

/// Milliseconds since the Unix epoch; clamps to zero for pre-epoch clocks.
fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis() as i64)
}
