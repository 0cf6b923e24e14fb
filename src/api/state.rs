//! Application state - explicitly wired dependency container.
//!
//! Components are constructed once at process start and passed by
//! reference into the router; there is no ambient lookup.

use std::sync::Arc;

use crate::infra::{Database, Persistence};
use crate::services::{UserManager, UserService};

/// Application state containing all services
#[derive(Clone)]
pub struct AppState {
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from a live database connection.
    ///
    /// Wires the Unit of Work over the connection and the user service
    /// on top of it.
    pub fn from_database(database: Arc<Database>) -> Self {
        let persistence = Arc::new(Persistence::new(database.get_connection()));
        let user_service: Arc<dyn UserService> = Arc::new(UserManager::new(persistence));

        Self {
            user_service,
            database,
        }
    }

    /// Create application state with a manually injected service
    /// (used by tests to substitute a double).
    pub fn new(user_service: Arc<dyn UserService>, database: Arc<Database>) -> Self {
        Self {
            user_service,
            database,
        }
    }
}
