//! Resource store abstractions
//!
//! [`Repository`] is the seam between handlers and persistence. Anything
//! that can create, read, update and delete records (an in-memory map, a SQL
//! table) can sit behind it.

mod error;
mod traits;

pub use error::{RepositoryError, RepositoryErrorKind, RepositoryOperation};
pub use traits::{Repository, RepositoryResult};
