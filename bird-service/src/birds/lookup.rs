//! Identifier resolution shared by every bird handler

use super::model::{Bird, BirdId, BIRD_ENTITY};
use super::store::BirdRepository;
use crate::error::{Error, Result};

/// Resolve a path identifier to the stored bird
///
/// The identifier is used as received. One that is not a valid store key
/// cannot name a bird, so it fails the same way as a miss. Callers only
/// ever see a bird or [`Error::NotFound`] and propagate the latter with `?`.
pub async fn find_bird<R: BirdRepository>(repo: &R, id: &str) -> Result<Bird> {
    let key: BirdId = id
        .parse()
        .map_err(|_| Error::not_found(BIRD_ENTITY, id))?;

    repo.find_by_id(&key)
        .await?
        .ok_or_else(|| Error::not_found(BIRD_ENTITY, id))
}
