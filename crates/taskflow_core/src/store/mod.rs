//! State containers consumed by presentation frontends.
//!
//! # Responsibility
//! - Own canonical in-memory state and all mutation semantics.
//! - Mirror every effective mutation to durable slot storage.
//!
//! # Invariants
//! - Stores never surface persistence failures to frontends.
//! - Derived reads never mutate state.

pub mod theme_store;
pub mod todo_store;
