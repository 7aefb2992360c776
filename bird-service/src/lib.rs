//! # bird-service
//!
//! REST API for bird records.
//!
//! Every route that takes an identifier resolves it through
//! [`birds::find_bird`], which either returns the stored bird or fails with
//! [`Error::NotFound`](error::Error::NotFound). Handlers propagate that with
//! `?` and the error's `IntoResponse` implementation renders it, so every
//! entry point answers a missing bird with the same
//! `404 {"error":"Bird not found"}`.
//!
//! ## Example
//!
//! ```rust,no_run
//! use bird_service::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = Config::load()?;
//!     init_tracing(&config)?;
//!
//!     let state = AppState::new(config.clone(), InMemoryBirdRepository::new());
//!
//!     Server::new(config).serve(app(state)).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod birds;
pub mod config;
pub mod error;
pub mod health;
pub mod middleware;
pub mod observability;
pub mod repository;
pub mod responses;
pub mod routes;
pub mod server;
pub mod state;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::birds::{
        find_bird, Bird, BirdId, BirdParams, BirdRepository, CreateBird, InMemoryBirdRepository,
        UpdateBird,
    };
    pub use crate::config::Config;
    pub use crate::error::{Error, Result};
    pub use crate::observability::init_tracing;
    pub use crate::repository::{Repository, RepositoryError, RepositoryResult};
    pub use crate::responses::{Created, NoContent};
    pub use crate::routes::app;
    pub use crate::server::Server;
    pub use crate::state::AppState;
}
