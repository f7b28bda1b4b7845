//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the durable slot contract consumed by state stores.
//! - Isolate SQLite query details from store orchestration.
//!
//! # Invariants
//! - Repository APIs return typed errors; stores own the fallback policy.
//!
//! # See also
//! - docs/architecture/data-model.md

pub mod slot_repo;
