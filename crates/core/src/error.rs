use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// A value error in otherwise well-formed input (e.g. a ranked answer
    /// listing fewer than two choices). Maps to HTTP 409.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// A request-shape validation failure. Maps to HTTP 400.
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
