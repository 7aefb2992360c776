//! The birds resource
//!
//! - [`model`]: the `Bird` entity and its permitted input fields
//! - [`store`]: the in-memory store
//! - [`lookup`]: identifier resolution, the single source of `NotFound`
//! - [`handlers`]: one async handler per operation
//! - [`routes`]: the route table

pub mod handlers;
pub mod lookup;
pub mod model;
pub mod routes;
pub mod store;

pub use lookup::find_bird;
pub use model::{Bird, BirdId, BirdParams, CreateBird, UpdateBird, BIRD_ENTITY};
pub use routes::routes;
pub use store::{BirdRepository, InMemoryBirdRepository};
