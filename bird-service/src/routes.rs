//! Application route table

use axum::{routing::get, Router};

use crate::{
    birds::{self, BirdRepository},
    health::{health, readiness},
    state::AppState,
};

/// Build the full router: bird routes plus `/health` and `/ready`
///
/// Built once at startup. No middleware is applied here; see
/// [`Server::apply_middleware`](crate::server::Server::apply_middleware).
pub fn app<R: BirdRepository>(state: AppState<R>) -> Router {
    Router::new()
        .merge(birds::routes::<R>())
        .route("/health", get(health::<R>))
        .route("/ready", get(readiness::<R>))
        .with_state(state)
}
