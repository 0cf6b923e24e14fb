//! Unit of Work pattern implementation.
//!
//! Centralizes repository access and transaction lifecycle. Every write
//! (create, update, delete) runs inside exactly one transaction: begin,
//! run the closure over a [`TransactionContext`], commit on success,
//! rollback on error. Update and delete act on the same row instance
//! fetched inside the transaction, so "confirm existence" and "act" are
//! one causally-ordered operation and a concurrent delete cannot slip
//! between them.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, DatabaseTransaction, EntityTrait,
    ModelTrait, Set, TransactionTrait,
};
use std::sync::Arc;

use super::repositories::{classify_db_err, UserRepository, UserStore};
use super::repositories::entities::user;
use crate::domain::Usuario;
use crate::errors::{AppError, AppResult};

/// Unit of Work trait for dependency injection.
///
/// Note: the generic `transaction` method makes this trait not
/// object-safe; services stay generic over it.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Get the read-side user repository
    fn users(&self) -> Arc<dyn UserRepository>;

    /// Execute a closure within a transaction.
    ///
    /// The transaction is committed on success or rolled back on error.
    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send;
}

/// Transaction context providing repository access within a transaction.
///
/// All operations performed through this context are part of the same
/// database transaction.
pub struct TransactionContext<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TransactionContext<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Get the user repository for this transaction
    pub fn users(&self) -> TxUserRepository<'_> {
        TxUserRepository::new(self.txn)
    }
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    db: Arc<DatabaseConnection>,
    user_repo: Arc<UserStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance over a shared connection handle
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        let user_repo = Arc::new(UserStore::new(db.clone()));
        Self { db, user_repo }
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send,
    {
        let txn = self.db.begin().await.map_err(AppError::from)?;

        let ctx = TransactionContext::new(&txn);

        match f(ctx).await {
            Ok(result) => {
                txn.commit().await.map_err(AppError::from)?;
                Ok(result)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}

/// Transaction-scoped user repository (the write side).
///
/// `find_by_id` returns the raw entity model rather than the domain type
/// because `update` and `delete` must receive back the exact instance
/// that was fetched inside the transaction.
pub struct TxUserRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxUserRepository<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Fetch a user row for a subsequent write in the same transaction
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<user::Model>> {
        user::Entity::find_by_id(id)
            .one(self.txn)
            .await
            .map_err(AppError::from)
    }

    /// Insert a new user; the store assigns the id.
    ///
    /// A violation of the email uniqueness constraint surfaces as
    /// [`AppError::DuplicateEmail`].
    pub async fn insert(
        &self,
        nombre: String,
        email: String,
        password: String,
    ) -> AppResult<Usuario> {
        let active = user::ActiveModel {
            id: NotSet,
            nombre: Set(nombre),
            email: Set(email),
            password: Set(password),
        };

        let model = active.insert(self.txn).await.map_err(classify_db_err)?;

        Ok(Usuario::from(model))
    }

    /// Replace all mutable fields on a previously fetched row and persist it
    pub async fn update(
        &self,
        model: user::Model,
        nombre: String,
        email: String,
        password: String,
    ) -> AppResult<Usuario> {
        let mut active: user::ActiveModel = model.into();
        active.nombre = Set(nombre);
        active.email = Set(email);
        active.password = Set(password);

        let model = active.update(self.txn).await.map_err(classify_db_err)?;

        Ok(Usuario::from(model))
    }

    /// Delete a previously fetched row
    pub async fn delete(&self, model: user::Model) -> AppResult<()> {
        model.delete(self.txn).await.map_err(AppError::from)?;
        Ok(())
    }
}
