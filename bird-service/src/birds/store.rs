//! In-memory bird store

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use tokio::sync::RwLock;

use super::model::{Bird, BirdId, CreateBird, UpdateBird, BIRD_ENTITY};
use crate::repository::{
    Repository, RepositoryError, RepositoryOperation, RepositoryResult,
};

/// Any store that can hold birds
pub trait BirdRepository: Repository<BirdId, Bird, CreateBird, UpdateBird> + 'static {}

impl<T> BirdRepository for T where T: Repository<BirdId, Bird, CreateBird, UpdateBird> + 'static {}

/// Bird store backed by an ordered map
///
/// Identifiers start at 1 and are never reused, even after a delete. Once
/// `u64::MAX` has been handed out every further create fails.
/// Individual operations are serialized by the lock; a read followed by a
/// separate write (like increment) is not atomic as a pair.
#[derive(Debug)]
pub struct InMemoryBirdRepository {
    birds: RwLock<BTreeMap<BirdId, Bird>>,
    last_id: AtomicU64,
}

impl InMemoryBirdRepository {
    pub fn new() -> Self {
        Self {
            birds: RwLock::new(BTreeMap::new()),
            last_id: AtomicU64::new(0),
        }
    }
}

impl Default for InMemoryBirdRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository<BirdId, Bird, CreateBird, UpdateBird> for InMemoryBirdRepository {
    async fn find_by_id(&self, id: &BirdId) -> RepositoryResult<Option<Bird>> {
        Ok(self.birds.read().await.get(id).cloned())
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Bird>> {
        Ok(self.birds.read().await.values().cloned().collect())
    }

    async fn count(&self) -> RepositoryResult<u64> {
        Ok(self.birds.read().await.len() as u64)
    }

    async fn create(&self, data: CreateBird) -> RepositoryResult<Bird> {
        let id = self
            .last_id
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |last| {
                last.checked_add(1)
            })
            .map(|last| last + 1)
            .map_err(|_| {
                RepositoryError::constraint_violation(
                    RepositoryOperation::Create,
                    "Identifier space exhausted",
                )
            })?;

        let bird = Bird::new(id, data, Utc::now());
        self.birds.write().await.insert(id, bird.clone());

        tracing::debug!(id, "Inserted bird");
        Ok(bird)
    }

    async fn update(&self, id: &BirdId, data: UpdateBird) -> RepositoryResult<Bird> {
        let mut birds = self.birds.write().await;
        let bird = birds.get_mut(id).ok_or_else(|| {
            RepositoryError::not_found(BIRD_ENTITY, id.to_string())
                .with_operation(RepositoryOperation::Update)
        })?;

        bird.apply(data, Utc::now());

        tracing::debug!(id = *id, "Updated bird");
        Ok(bird.clone())
    }

    async fn delete(&self, id: &BirdId) -> RepositoryResult<bool> {
        let removed = self.birds.write().await.remove(id).is_some();
        tracing::debug!(id = *id, removed, "Deleted bird");
        Ok(removed)
    }
}
