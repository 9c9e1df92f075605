//! Domain layer - Pure business abstractions
//!
//! This layer contains NO framework dependencies (no SeaORM, no Axum).
//! Only trait definitions, entity shapes and domain error types.

pub mod errors;
pub mod membership;
pub mod repositories;

pub use errors::DomainError;
pub use membership::{MembershipField, SetMutation};
pub use repositories::*;
