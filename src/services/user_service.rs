//! User service - business rules around persistence.
//!
//! The service owns the transactional boundary for every write and the
//! existence checks for id-addressed operations. It never pre-checks
//! email uniqueness; the store's constraint is the single authority and
//! the resulting conflict is surfaced as `DuplicateEmail`.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Usuario, UsuarioPayload};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Create a user from a validated payload; the store assigns the id
    async fn create(&self, payload: UsuarioPayload) -> AppResult<Usuario>;

    /// List all users; an empty store yields an empty vec, never an error
    async fn list(&self) -> AppResult<Vec<Usuario>>;

    /// Get a user by id, failing `NotFound` if absent
    async fn get(&self, id: i64) -> AppResult<Usuario>;

    /// Replace all mutable fields of an existing user
    async fn update(&self, id: i64, payload: UsuarioPayload) -> AppResult<Usuario>;

    /// Delete an existing user.
    ///
    /// Deliberately not idempotent: deleting an already-deleted id fails
    /// `NotFound` instead of silently succeeding.
    async fn delete(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of UserService using Unit of Work.
pub struct UserManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> UserManager<U> {
    /// Create new user service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> UserService for UserManager<U> {
    async fn create(&self, payload: UsuarioPayload) -> AppResult<Usuario> {
        self.uow
            .transaction(|ctx| {
                Box::pin(async move {
                    ctx.users()
                        .insert(payload.nombre, payload.email, payload.password)
                        .await
                })
            })
            .await
    }

    async fn list(&self) -> AppResult<Vec<Usuario>> {
        self.uow.users().find_all().await
    }

    async fn get(&self, id: i64) -> AppResult<Usuario> {
        self.uow
            .users()
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound(id))
    }

    async fn update(&self, id: i64, payload: UsuarioPayload) -> AppResult<Usuario> {
        // Fetch and rewrite the same row inside one transaction; a
        // separate exists-then-write pair would reopen the TOCTOU window.
        self.uow
            .transaction(move |ctx| {
                Box::pin(async move {
                    let repo = ctx.users();
                    let model = repo
                        .find_by_id(id)
                        .await?
                        .ok_or(AppError::NotFound(id))?;

                    repo.update(model, payload.nombre, payload.email, payload.password)
                        .await
                })
            })
            .await
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        self.uow
            .transaction(move |ctx| {
                Box::pin(async move {
                    let repo = ctx.users();
                    let model = repo
                        .find_by_id(id)
                        .await?
                        .ok_or(AppError::NotFound(id))?;

                    repo.delete(model).await
                })
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    use crate::infra::repositories::entities::user;
    use crate::infra::Persistence;

    fn payload(nombre: &str, email: &str) -> UsuarioPayload {
        UsuarioPayload {
            nombre: nombre.to_string(),
            email: email.to_string(),
            password: "pass123456".to_string(),
        }
    }

    fn model(id: i64, nombre: &str, email: &str) -> user::Model {
        user::Model {
            id,
            nombre: nombre.to_string(),
            email: email.to_string(),
            password: "pass123456".to_string(),
        }
    }

    fn service(db: MockDatabase) -> UserManager<Persistence> {
        UserManager::new(Arc::new(Persistence::new(Arc::new(db.into_connection()))))
    }

    #[tokio::test]
    async fn create_returns_the_store_assigned_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(1, "Juan Pérez", "juan@example.com")]]);

        let usuario = service(db)
            .create(payload("Juan Pérez", "juan@example.com"))
            .await
            .unwrap();

        assert_eq!(usuario.id, 1);
        assert_eq!(usuario.nombre, "Juan Pérez");
        assert_eq!(usuario.email, "juan@example.com");
    }

    #[tokio::test]
    async fn get_missing_id_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<user::Model>::new()]);

        let err = service(db).get(999).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(999)));
        assert_eq!(err.to_string(), "No existe un usuario con el ID 999");
    }

    #[tokio::test]
    async fn list_on_empty_store_is_an_empty_vec() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<user::Model>::new()]);

        let usuarios = service(db).list().await.unwrap();
        assert!(usuarios.is_empty());
    }

    #[tokio::test]
    async fn update_missing_id_fails_before_writing() {
        // The in-transaction lookup comes back empty; no update statement
        // is queued, so reaching one would fail the test.
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<user::Model>::new()]);

        let err = service(db)
            .update(7, payload("Otro", "otro@example.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(7)));
    }

    #[tokio::test]
    async fn update_replaces_fields_on_the_fetched_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(1, "Juan Pérez", "juan@example.com")]])
            .append_query_results([vec![model(1, "Juan Carlos", "jc@example.com")]]);

        let usuario = service(db)
            .update(1, payload("Juan Carlos", "jc@example.com"))
            .await
            .unwrap();

        assert_eq!(usuario.id, 1);
        assert_eq!(usuario.nombre, "Juan Carlos");
        assert_eq!(usuario.email, "jc@example.com");
    }

    #[tokio::test]
    async fn delete_missing_id_fails_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<user::Model>::new()]);

        let err = service(db).delete(3).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(3)));
    }

    #[tokio::test]
    async fn delete_removes_the_fetched_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(1, "Juan Pérez", "juan@example.com")]])
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }]);

        assert!(service(db).delete(1).await.is_ok());
    }
}
