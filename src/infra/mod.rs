//! Infrastructure layer - database, repositories, and transactions.

pub mod db;
pub mod repositories;
pub mod unit_of_work;

pub use db::Database;
pub use repositories::{UserRepository, UserStore};
pub use unit_of_work::{Persistence, TransactionContext, TxUserRepository, UnitOfWork};
