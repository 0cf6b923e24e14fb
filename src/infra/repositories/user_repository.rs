//! Read-side user repository.
//!
//! Reads need no transaction: each is a single statement with no
//! multi-step invariant. Writes are transaction-scoped and therefore
//! live on [`crate::infra::unit_of_work::TxUserRepository`].

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, SqlErr};
use std::sync::Arc;

use super::entities::user::Entity as UserEntity;
use crate::domain::Usuario;
use crate::errors::{AppError, AppResult};

/// Read operations on users, abstracted for service-level testing.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by primary key
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Usuario>>;

    /// Find all users; an empty store yields an empty vec
    async fn find_all(&self) -> AppResult<Vec<Usuario>>;
}

/// SeaORM-backed implementation of [`UserRepository`].
pub struct UserStore {
    db: Arc<DatabaseConnection>,
}

impl UserStore {
    /// Create a new store over a shared connection handle
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Usuario>> {
        let model = UserEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(model.map(Usuario::from))
    }

    async fn find_all(&self) -> AppResult<Vec<Usuario>> {
        let models = UserEntity::find()
            .all(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Usuario::from).collect())
    }
}

/// Classify a write-path database error into an [`AppError`] kind.
///
/// Uniqueness is detected through the driver-reported constraint signal
/// (`SqlErr`), not by matching substrings of the raw error text. The
/// `usuarios` table carries exactly one unique constraint (`email`), so
/// a unique violation on a user write is a duplicate email.
pub fn classify_db_err(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::DuplicateEmail,
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => AppError::Integrity,
        _ => AppError::Database(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unclassified_errors_stay_database_errors() {
        let err = classify_db_err(DbErr::Custom("connection reset".to_string()));
        assert!(matches!(err, AppError::Database(_)));
    }
}
