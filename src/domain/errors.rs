//! Domain error types
//!
//! These errors are framework-agnostic and represent business-level failures.

/// Failure kinds surfaced at the service boundary.
///
/// Idempotent no-ops (duplicate add, removing an absent member, deleting a
/// missing entity) are successes and never produce one of these.
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    /// The named parent or referenced entity does not exist
    #[error("No {0} found for that id")]
    NotFound(&'static str),
    /// Request payload rejected before touching the store
    #[error("{0}")]
    Validation(String),
    /// Underlying store call failed (connectivity, constraint, decode)
    #[error("Store error: {0}")]
    Store(String),
}

impl DomainError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::NotFound(_))
    }
}

// Conversion from SeaORM errors (used in infrastructure layer)
impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        DomainError::Store(e.to_string())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(e: serde_json::Error) -> Self {
        DomainError::Store(format!("malformed document: {}", e))
    }
}
