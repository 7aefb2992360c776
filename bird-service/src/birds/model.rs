//! Bird entity and its input shapes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Primary key type of the bird store
pub type BirdId = u64;

/// Entity name used in errors and logs
pub const BIRD_ENTITY: &str = "Bird";

/// A persisted bird record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bird {
    pub id: BirdId,
    pub name: Option<String>,
    pub species: Option<String>,
    pub likes: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Bird {
    /// Build a new record from creation input
    pub fn new(id: BirdId, data: CreateBird, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: data.name,
            species: data.species,
            likes: data.likes,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite the supplied fields, leaving the rest untouched
    pub fn apply(&mut self, update: UpdateBird, now: DateTime<Utc>) {
        if let Some(name) = update.name {
            self.name = Some(name);
        }
        if let Some(species) = update.species {
            self.species = Some(species);
        }
        if let Some(likes) = update.likes {
            self.likes = likes;
        }
        self.updated_at = now;
    }
}

/// Permitted request body fields for create and update
///
/// Any other field in the JSON payload is dropped during deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BirdParams {
    pub name: Option<String>,
    pub species: Option<String>,
    pub likes: Option<u64>,
}

/// Input for creating a bird; absent fields take the entity defaults
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateBird {
    pub name: Option<String>,
    pub species: Option<String>,
    pub likes: u64,
}

impl From<BirdParams> for CreateBird {
    fn from(params: BirdParams) -> Self {
        Self {
            name: params.name,
            species: params.species,
            likes: params.likes.unwrap_or_default(),
        }
    }
}

/// Partial update; `None` means "keep the stored value"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateBird {
    pub name: Option<String>,
    pub species: Option<String>,
    pub likes: Option<u64>,
}

impl UpdateBird {
    /// Update that only replaces the like counter
    pub fn likes(likes: u64) -> Self {
        Self {
            likes: Some(likes),
            ..Self::default()
        }
    }
}

impl From<BirdParams> for UpdateBird {
    fn from(params: BirdParams) -> Self {
        Self {
            name: params.name,
            species: params.species,
            likes: params.likes,
        }
    }
}
