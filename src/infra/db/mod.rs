//! Database connection and initialization.

use std::sync::Arc;

use sea_orm::{ConnectionTrait, Database as SeaDatabase, DatabaseConnection, DbErr, Statement};
use sea_orm_migration::MigratorTrait;

use crate::config::Config;

pub mod migrations;

pub use migrations::Migrator;

/// Shared handle to the database connection.
///
/// The pool handle lives behind an `Arc` so every holder (repositories,
/// unit of work, health check) shares the same connection rather than
/// duplicating it.
#[derive(Clone)]
pub struct Database {
    connection: Arc<DatabaseConnection>,
}

impl Database {
    /// Connect and bring the schema up to date.
    pub async fn connect(config: &Config) -> Result<Self, DbErr> {
        let connection = SeaDatabase::connect(&config.database_url).await?;
        Migrator::up(&connection, None).await?;
        tracing::info!("Database connected and migrations applied");

        Ok(Self {
            connection: Arc::new(connection),
        })
    }

    /// Connect without touching the schema; the migrate command applies
    /// migrations explicitly.
    pub async fn connect_without_migrations(config: &Config) -> Result<Self, DbErr> {
        let connection = SeaDatabase::connect(&config.database_url).await?;
        Ok(Self {
            connection: Arc::new(connection),
        })
    }

    /// Wrap an existing connection (used by tests).
    pub fn from_connection(connection: DatabaseConnection) -> Self {
        Self {
            connection: Arc::new(connection),
        }
    }

    /// Get a shared handle to the connection.
    pub fn get_connection(&self) -> Arc<DatabaseConnection> {
        self.connection.clone()
    }

    /// Run pending migrations.
    pub async fn run_migrations(&self) -> Result<(), DbErr> {
        Migrator::up(self.connection.as_ref(), None).await
    }

    /// Rollback the last applied migration.
    pub async fn rollback_migration(&self) -> Result<(), DbErr> {
        Migrator::down(self.connection.as_ref(), Some(1)).await
    }

    /// List every defined migration with its applied status.
    pub async fn migration_status(&self) -> Result<Vec<(String, bool)>, DbErr> {
        use sea_orm::{EntityTrait, QueryOrder};
        use sea_orm_migration::seaql_migrations;

        let applied: std::collections::HashSet<String> = seaql_migrations::Entity::find()
            .order_by_asc(seaql_migrations::Column::Version)
            .all(self.connection.as_ref())
            .await?
            .into_iter()
            .map(|m| m.version)
            .collect();

        Ok(Migrator::migrations()
            .iter()
            .map(|m| {
                let name = m.name().to_string();
                let done = applied.contains(&name);
                (name, done)
            })
            .collect())
    }

    /// Drop everything and re-run all migrations.
    pub async fn fresh_migrations(&self) -> Result<(), DbErr> {
        Migrator::fresh(self.connection.as_ref()).await
    }

    /// Check connectivity with a trivial query.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.connection
            .execute(Statement::from_string(
                self.connection.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_handles_are_shared_not_duplicated() {
        let db = Database::from_connection(DatabaseConnection::Disconnected);

        let a = db.get_connection();
        let b = db.get_connection();
        assert!(Arc::ptr_eq(&a, &b));

        let cloned = db.clone();
        assert!(Arc::ptr_eq(&a, &cloned.get_connection()));
    }
}
