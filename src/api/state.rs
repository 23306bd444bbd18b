//! Application state for the payroll engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::store::MemoryStore;

/// Shared application state.
///
/// Wraps the persistence store shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    store: Arc<MemoryStore>,
}

impl AppState {
    /// Creates a fresh state with a store seeded with the default
    /// configuration, matching application bootstrap.
    pub fn new() -> Self {
        Self {
            store: Arc::new(MemoryStore::with_default_config()),
        }
    }

    /// Creates a state around an existing store.
    pub fn with_store(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }

    /// Returns a reference to the store.
    pub fn store(&self) -> &MemoryStore {
        &self.store
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
