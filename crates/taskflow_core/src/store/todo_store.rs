//! To-do list state container.
//!
//! # Responsibility
//! - Own the canonical ordered task list and its mutation semantics.
//! - Mirror every effective mutation to the `todos` slot.
//! - Notify subscribers with the post-mutation snapshot.
//!
//! # Invariants
//! - Record ids stay unique across the list.
//! - New records are prepended; surviving records keep relative order.
//! - No-op calls write nothing and notify nobody.
//! - Load failures fall back to the empty list, never an error.
//!
//! # See also
//! - docs/architecture/data-model.md

use crate::model::todo::{Filter, Todo, TodoCounts, TodoId};
use crate::repo::slot_repo::SlotRepository;
use log::{info, warn};
use std::collections::HashSet;

/// Fixed slot key holding the serialized task list.
pub const TODOS_SLOT_KEY: &str = "todos";

/// Opaque handle returned by [`TodoStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&[Todo])>;

/// State container for the task list.
///
/// Single-threaded by contract: mutations take `&mut self` and run to
/// completion, so no locking discipline exists. The injected repository is
/// the only collaborator; frontends read snapshots and invoke operations.
pub struct TodoStore<R: SlotRepository> {
    repo: R,
    todos: Vec<Todo>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_listener_id: u64,
}

impl<R: SlotRepository> TodoStore<R> {
    /// Creates a store over the provided repository and loads persisted
    /// state. Absent or malformed slot data falls back to the empty list.
    pub fn new(repo: R) -> Self {
        let todos = load_snapshot(&repo);
        info!(
            "event=store_init module=store status=ok total={}",
            todos.len()
        );
        Self {
            repo,
            todos,
            listeners: Vec::new(),
            next_listener_id: 0,
        }
    }

    /// Adds a task from raw input text.
    ///
    /// # Contract
    /// - Input is trimmed; whitespace-only input is a silent no-op (`None`).
    /// - The new record is prepended with `completed == false`.
    /// - Returns a clone of the created record.
    pub fn add(&mut self, text: &str) -> Option<Todo> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }

        let todo = Todo::new(trimmed);
        self.todos.insert(0, todo.clone());
        info!(
            "event=todo_add module=store status=ok id={} total={}",
            todo.id,
            self.todos.len()
        );
        self.commit();
        Some(todo)
    }

    /// Flips the completion flag of the record with `id`.
    ///
    /// Unknown ids are a silent no-op (`false`): stale frontend references
    /// and removal may race harmlessly under single-threaded dispatch.
    pub fn toggle(&mut self, id: TodoId) -> bool {
        let Some(todo) = self.todos.iter_mut().find(|todo| todo.id == id) else {
            return false;
        };

        todo.completed = !todo.completed;
        let completed = todo.completed;
        info!("event=todo_toggle module=store status=ok id={id} completed={completed}");
        self.commit();
        true
    }

    /// Removes the record with `id`. Unknown ids are a silent no-op.
    pub fn remove(&mut self, id: TodoId) -> bool {
        let before = self.todos.len();
        self.todos.retain(|todo| todo.id != id);
        if self.todos.len() == before {
            return false;
        }

        info!(
            "event=todo_remove module=store status=ok id={id} total={}",
            self.todos.len()
        );
        self.commit();
        true
    }

    /// Removes every completed record and returns how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.todos.len();
        self.todos.retain(|todo| !todo.completed);
        let removed = before - self.todos.len();
        if removed == 0 {
            return 0;
        }

        info!(
            "event=todo_clear_completed module=store status=ok removed={removed} total={}",
            self.todos.len()
        );
        self.commit();
        removed
    }

    /// Returns the records selected by `filter`, preserving list order.
    ///
    /// Pure derived read, recomputed on demand from current state.
    pub fn filtered(&self, filter: Filter) -> Vec<Todo> {
        self.todos
            .iter()
            .filter(|todo| todo.matches(filter))
            .cloned()
            .collect()
    }

    /// Returns the active/completed tally for the current list.
    pub fn counts(&self) -> TodoCounts {
        let completed = self.todos.iter().filter(|todo| todo.completed).count();
        TodoCounts {
            active: self.todos.len() - completed,
            completed,
        }
    }

    /// Current full snapshot, newest first.
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Registers a listener invoked with the post-mutation snapshot after
    /// every effective mutation.
    ///
    /// Listeners run synchronously on the mutating call and must not
    /// re-enter the store.
    pub fn subscribe(&mut self, listener: impl Fn(&[Todo]) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    fn commit(&self) {
        save_snapshot(&self.repo, &self.todos);
        for (_, listener) in &self.listeners {
            listener(&self.todos);
        }
    }
}

fn load_snapshot<R: SlotRepository>(repo: &R) -> Vec<Todo> {
    let raw = match repo.get(TODOS_SLOT_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(err) => {
            warn!(
                "event=snapshot_load module=store status=error key={TODOS_SLOT_KEY} error={err}"
            );
            return Vec::new();
        }
    };

    match decode_snapshot(&raw) {
        Some(todos) => todos,
        None => {
            warn!("event=snapshot_load module=store status=malformed key={TODOS_SLOT_KEY}");
            Vec::new()
        }
    }
}

fn save_snapshot<R: SlotRepository>(repo: &R, todos: &[Todo]) {
    let encoded = match serde_json::to_string(todos) {
        Ok(encoded) => encoded,
        Err(err) => {
            warn!(
                "event=snapshot_save module=store status=error key={TODOS_SLOT_KEY} error={err}"
            );
            return;
        }
    };

    // Why: storage is a best-effort mirror; in-memory state stays
    // authoritative even when the write fails.
    if let Err(err) = repo.put(TODOS_SLOT_KEY, &encoded) {
        warn!("event=snapshot_save module=store status=error key={TODOS_SLOT_KEY} error={err}");
    }
}

/// Decodes one slot value; the whole snapshot is rejected when it fails to
/// parse or any record violates invariants (duplicate id, empty or
/// untrimmed text).
fn decode_snapshot(raw: &str) -> Option<Vec<Todo>> {
    let todos: Vec<Todo> = serde_json::from_str(raw).ok()?;

    let mut seen = HashSet::with_capacity(todos.len());
    for todo in &todos {
        if todo.text.is_empty() || todo.text.trim() != todo.text || !seen.insert(todo.id) {
            return None;
        }
    }

    Some(todos)
}
