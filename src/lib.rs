//! Usuarios API - A small user-management REST service.
//!
//! CRUD over a single `Usuario` resource backed by a relational store,
//! with declarative request validation and a single error-to-HTTP
//! mapping point.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: The `Usuario` entity and its request/response DTOs
//! - **services**: Business rules (existence checks, transactional writes)
//! - **infra**: Infrastructure concerns (database, repositories, unit of work)
//! - **api**: HTTP handlers, extractors, and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Usuario, UsuarioPayload, UsuarioResponse};
pub use errors::{AppError, AppResult, ErrorBody};
