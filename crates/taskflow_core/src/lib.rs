//! Core domain logic for TaskFlow.
//! This crate is the single source of truth for task-list state and persistence.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::theme::ThemeMode;
pub use model::todo::{Filter, Todo, TodoCounts, TodoId};
pub use repo::slot_repo::{SlotError, SlotRepository, SlotResult, SqliteSlotRepository};
pub use store::theme_store::{ThemeStore, THEME_SLOT_KEY};
pub use store::todo_store::{SubscriptionId, TodoStore, TODOS_SLOT_KEY};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
