use crate::rest_guard::RestRejection;
use crate::types::DocumentId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound {
        entity: &'static str,
        id: DocumentId,
    },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// A deliberate policy rejection surfaced to REST callers.
    #[error("Request rejected ({}): {}", .0.code, .0.message)]
    Rejected(RestRejection),

    #[error("Internal error: {0}")]
    Internal(String),
}
