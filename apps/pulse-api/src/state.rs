//! Application state - shared across all handlers.

use std::sync::Arc;

use pulse_core::ports::Store;

/// Shared application state. The store is held behind the port trait so
/// tests can substitute a fake in a single place.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }
}
