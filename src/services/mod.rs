//! Services layer - Business logic and use cases
//!
//! Services orchestrate domain operations and enforce business rules.

mod user_service;

pub use user_service::{UserManager, UserService};
