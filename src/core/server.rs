//! Blog server handle.
//!
//! `BlogServer` bundles the configuration with the store. It is built once at
//! startup and cloned into each request handler, so every request sees the
//! same store without any global state.

use std::sync::Arc;

use super::config::Config;
use crate::domains::blogs::BlogStore;

/// Application handle shared by all HTTP handlers.
#[derive(Clone)]
pub struct BlogServer {
    /// Server configuration.
    config: Arc<Config>,

    /// The store owning every blog post.
    store: Arc<BlogStore>,
}

impl BlogServer {
    /// Create a new server with an empty store.
    pub fn new(config: Config) -> Self {
        Self::with_store(config, BlogStore::new())
    }

    /// Create a server around an existing store.
    pub fn with_store(config: Config, store: BlogStore) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(store),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the blog store.
    pub fn store(&self) -> &BlogStore {
        &self.store
    }
}
