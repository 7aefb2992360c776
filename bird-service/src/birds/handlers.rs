//! HTTP handlers for the birds resource
//!
//! Handlers never check for existence themselves: identifier resolution goes
//! through [`find_bird`] and a miss leaves the handler via `?`, to be turned
//! into a response by `Error`'s `IntoResponse`.

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::{info, instrument};

use super::lookup::find_bird;
use super::model::{Bird, BirdParams, UpdateBird};
use super::store::BirdRepository;
use crate::{
    error::{Error, Result},
    responses::{Created, NoContent},
    state::AppState,
};

/// List all birds
#[instrument(skip(state))]
pub async fn list<R: BirdRepository>(State(state): State<AppState<R>>) -> Result<Json<Vec<Bird>>> {
    let birds = state.birds().find_all().await?;
    info!(count = birds.len(), "Listing birds");
    Ok(Json(birds))
}

/// Create a bird from the permitted fields
#[instrument(skip(state))]
pub async fn create<R: BirdRepository>(
    State(state): State<AppState<R>>,
    Json(params): Json<BirdParams>,
) -> Result<Created<Bird>> {
    let bird = state.birds().create(params.into()).await?;
    info!(id = bird.id, "Created bird");

    let location = format!("/birds/{}", bird.id);
    Ok(Created::new(bird).with_location(location))
}

/// Get a bird by ID
#[instrument(skip(state))]
pub async fn show<R: BirdRepository>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<Json<Bird>> {
    let bird = find_bird(state.birds(), &id).await?;
    Ok(Json(bird))
}

/// Partially update a bird
#[instrument(skip(state))]
pub async fn update<R: BirdRepository>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
    Json(params): Json<BirdParams>,
) -> Result<Json<Bird>> {
    let bird = find_bird(state.birds(), &id).await?;
    let bird = state.birds().update(&bird.id, params.into()).await?;
    info!(id = bird.id, "Updated bird");
    Ok(Json(bird))
}

/// Add one like to a bird
#[instrument(skip(state))]
pub async fn like<R: BirdRepository>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<Json<Bird>> {
    let bird = find_bird(state.birds(), &id).await?;
    let likes = bird
        .likes
        .checked_add(1)
        .ok_or_else(|| Error::Conflict("Like counter is at its maximum".to_string()))?;

    let bird = state.birds().update(&bird.id, UpdateBird::likes(likes)).await?;
    info!(id = bird.id, likes = bird.likes, "Liked bird");
    Ok(Json(bird))
}

/// Delete a bird
#[instrument(skip(state))]
pub async fn destroy<R: BirdRepository>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<NoContent> {
    let bird = find_bird(state.birds(), &id).await?;
    state.birds().delete(&bird.id).await?;
    info!(id = bird.id, "Deleted bird");
    Ok(NoContent)
}
