//! Error taxonomy for the domain layer.

/// Errors surfaced by domain validation and store mutations.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Invalid transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },
}
