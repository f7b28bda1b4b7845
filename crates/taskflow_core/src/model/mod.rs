//! Domain model for the task list.
//!
//! # Responsibility
//! - Define the canonical to-do record and its derived view selectors.
//! - Keep wire-format naming stable for persisted snapshots.
//!
//! # Invariants
//! - Every record is identified by a stable `TodoId`.
//! - Record text is non-empty after trimming for every record the stores
//!   accept or load.
//!
//! # See also
//! - docs/architecture/data-model.md

pub mod theme;
pub mod todo;
