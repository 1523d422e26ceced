//! Handler types and dependencies

use std::sync::Arc;

use mediacore::{Conversations, Fetchers};

/// Error type for handlers
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Dependencies required by handlers
#[derive(Clone)]
pub struct HandlerDeps {
    pub fetchers: Fetchers,
    /// Session contexts, one per chat; lives as long as the dispatcher
    pub conversations: Arc<Conversations>,
}

impl HandlerDeps {
    /// Create new handler dependencies
    pub fn new(fetchers: Fetchers, conversations: Arc<Conversations>) -> Self {
        Self {
            fetchers,
            conversations,
        }
    }
}
