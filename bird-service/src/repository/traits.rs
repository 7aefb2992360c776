//! Repository trait definitions
//!
//! The store is the only owner of persisted entities. Callers get clones
//! back and never hold on to store state between requests.

use std::future::Future;

use super::error::RepositoryError;

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Generic CRUD store for an entity type
///
/// # Type Parameters
///
/// - `Id`: primary key type
/// - `Entity`: the persisted record
/// - `Create`: input for creating a record
/// - `Update`: input for a partial update
///
/// # Example
///
/// ```rust,ignore
/// use bird_service::repository::{Repository, RepositoryResult};
///
/// struct PgBirdRepository { /* ... */ }
///
/// impl Repository<BirdId, Bird, CreateBird, UpdateBird> for PgBirdRepository {
///     async fn find_by_id(&self, id: &BirdId) -> RepositoryResult<Option<Bird>> {
///         // SELECT ... WHERE id = $1
///         todo!()
///     }
///
///     // ... other required methods
/// }
/// ```
pub trait Repository<Id, Entity, Create, Update>: Send + Sync {
    /// Find an entity by its unique identifier
    ///
    /// Returns `Ok(Some(entity))` if found, `Ok(None)` if not found.
    fn find_by_id(&self, id: &Id) -> impl Future<Output = RepositoryResult<Option<Entity>>> + Send;

    /// Return every entity in store order
    fn find_all(&self) -> impl Future<Output = RepositoryResult<Vec<Entity>>> + Send;

    /// Count stored entities
    fn count(&self) -> impl Future<Output = RepositoryResult<u64>> + Send;

    /// Create a new entity
    ///
    /// Returns the created entity with generated fields (ID, timestamps).
    fn create(&self, data: Create) -> impl Future<Output = RepositoryResult<Entity>> + Send;

    /// Apply a partial update to an existing entity
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` with `NotFound` kind if the entity doesn't exist.
    fn update(
        &self,
        id: &Id,
        data: Update,
    ) -> impl Future<Output = RepositoryResult<Entity>> + Send;

    /// Delete an entity by its identifier
    ///
    /// Returns `true` if the entity was deleted, `false` if it didn't exist.
    fn delete(&self, id: &Id) -> impl Future<Output = RepositoryResult<bool>> + Send;
}
