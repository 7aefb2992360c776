//! Route table for the birds resource

use axum::{
    routing::{get, patch},
    Router,
};

use super::handlers;
use super::store::BirdRepository;
use crate::state::AppState;

/// Build the `(method, path) -> handler` table for birds
///
/// | Method        | Path               | Handler   |
/// |---------------|--------------------|-----------|
/// | GET           | `/birds`           | `list`    |
/// | POST          | `/birds`           | `create`  |
/// | GET           | `/birds/{id}`      | `show`    |
/// | PATCH, PUT    | `/birds/{id}`      | `update`  |
/// | DELETE        | `/birds/{id}`      | `destroy` |
/// | PATCH         | `/birds/{id}/like` | `like`    |
pub fn routes<R: BirdRepository>() -> Router<AppState<R>> {
    Router::new()
        .route(
            "/birds",
            get(handlers::list::<R>).post(handlers::create::<R>),
        )
        .route(
            "/birds/{id}",
            get(handlers::show::<R>)
                .patch(handlers::update::<R>)
                .put(handlers::update::<R>)
                .delete(handlers::destroy::<R>),
        )
        .route("/birds/{id}/like", patch(handlers::like::<R>))
}
