//! Application state

use std::sync::Arc;

use resolution_core::todo::TodoRepository;

/// Shared application state
///
/// Owns the store handle and is cloned into every handler; the handle
/// itself is opened once at startup.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn TodoRepository>,
}

impl AppState {
    /// Create a new AppState around the given store
    pub fn new(store: impl TodoRepository + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Get reference to the todo store
    pub fn store(&self) -> &dyn TodoRepository {
        self.store.as_ref()
    }
}
