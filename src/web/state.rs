//! Application State
//!
//! Shared state accessible by all handlers, wrapped in Arc for cheap
//! cloning across async tasks.

use std::sync::Arc;

use crate::auth::SessionProvider;
use crate::config::Config;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Session lookup against the identity service (or an in-memory table)
    pub sessions: Arc<dyn SessionProvider>,
    /// Service configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Create state over the given session provider
    pub fn new(sessions: Arc<dyn SessionProvider>, config: Config) -> Self {
        Self {
            sessions,
            config: Arc::new(config),
        }
    }
}
