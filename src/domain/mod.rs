//! Domain layer - the `Usuario` entity and its request/response shapes.

pub mod user;

pub use user::{Usuario, UsuarioPayload, UsuarioResponse};
