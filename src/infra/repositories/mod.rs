//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.
//! The read side lives here; write operations go through the
//! transaction-scoped repository in [`crate::infra::unit_of_work`].

pub(crate) mod entities;
mod user_repository;

pub use user_repository::{classify_db_err, UserRepository, UserStore};
