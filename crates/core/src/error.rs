use crate::types::DbId;

/// Domain-level error type shared across the workspace.
///
/// The API layer maps these onto HTTP statuses; repositories and pure
/// functions return them directly.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// An entity lookup found nothing.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Input failed boundary validation (malformed time, negative amount,
    /// unknown enum value, ...).
    #[error("Validation error: {0}")]
    Validation(String),

    /// The request conflicts with existing state (duplicate budget,
    /// invalid status transition, ...).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// An invariant was violated or an unexpected condition occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}
