//! Application state management.
//!
//! The state owns the item store for the lifetime of the process; routers get
//! cheap clones that share it.

use domain_items::InMemoryItemRepository;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// Item store, discarded on shutdown
    pub items: InMemoryItemRepository,
}

impl AppState {
    pub fn new(config: crate::config::Config) -> Self {
        Self {
            config,
            items: InMemoryItemRepository::new(),
        }
    }
}
