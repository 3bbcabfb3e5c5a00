//! Implements an in-memory record store.
//!
//! All records live in `Vec`s behind mutexes; nothing is written to disk and
//! the store is lost on process restart. Each operation locks one collection,
//! completes, and unlocks within the call, so a mutation is never observable
//! half-applied.

mod budget;
mod expense;
mod recurring;
mod user;

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicI64, Ordering},
};

use crate::models::{Budget, DatabaseID, Expense, Recurring, User};

/// Stores all records in process memory.
///
/// Cloning is cheap and every clone shares the same underlying collections,
/// so the composition root can hand one instance to the router state and
/// tests can keep another to inspect the data directly.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    next_id: Arc<AtomicI64>,
    users: Arc<Mutex<Vec<User>>>,
    expenses: Arc<Mutex<Vec<Expense>>>,
    budgets: Arc<Mutex<Vec<Budget>>>,
    recurring: Arc<Mutex<Vec<Recurring>>>,
}

impl MemoryStore {
    /// Create a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The next unused record ID.
    ///
    /// IDs come from one sequence shared by every entity kind, starting at 1.
    fn next_id(&self) -> DatabaseID {
        self.next_id.fetch_add(1, Ordering::Relaxed) + 1
    }
}

#[cfg(test)]
mod memory_store_tests {
    use crate::stores::memory::MemoryStore;

    #[test]
    fn ids_start_at_one_and_increase() {
        let store = MemoryStore::new();

        assert_eq!(store.next_id(), 1);
        assert_eq!(store.next_id(), 2);
        assert_eq!(store.next_id(), 3);
    }

    #[test]
    fn clones_share_the_id_sequence() {
        let store = MemoryStore::new();
        let clone = store.clone();

        assert_eq!(store.next_id(), 1);
        assert_eq!(clone.next_id(), 2);
    }
}
