//! Application state management

use std::sync::Arc;

use crate::{birds::InMemoryBirdRepository, config::Config};

/// Application state shared across handlers
///
/// Generic over the bird store so the same handlers run against any
/// [`BirdRepository`](crate::birds::BirdRepository). Cloning is cheap.
pub struct AppState<R = InMemoryBirdRepository> {
    config: Arc<Config>,
    birds: Arc<R>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            config: Arc::clone(&self.config),
            birds: Arc::clone(&self.birds),
        }
    }
}

impl<R> AppState<R> {
    /// Create state from a configuration and a store
    pub fn new(config: Config, birds: R) -> Self {
        Self {
            config: Arc::new(config),
            birds: Arc::new(birds),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the bird store
    pub fn birds(&self) -> &R {
        &self.birds
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Config::default(), InMemoryBirdRepository::new())
    }
}
