//! Administrative error taxonomy.

use common::{RequestId, Status, TransitionError, UserId};
use request_store::StoreError;
use thiserror::Error;

/// Errors surfaced by administrative operations.
#[derive(Debug, Error)]
pub enum AdminError {
    /// The caller lacks administrative capability.
    #[error("user {user_id} is not authorized to change request status")]
    NotAuthorized { user_id: UserId },

    /// The target request does not exist.
    #[error("request not found: {0}")]
    NotFound(RequestId),

    /// The requested transition is not a legal lifecycle edge.
    #[error(transparent)]
    InvalidTransition(#[from] TransitionError),

    /// A concurrent writer changed the request between the read and the
    /// conditional write. Re-fetch and retry.
    #[error("request {request_id} changed concurrently: expected {expected}, found {actual}")]
    Conflict {
        request_id: RequestId,
        expected: Status,
        actual: Status,
    },

    /// Any other store failure.
    #[error("store error: {0}")]
    Store(StoreError),
}

impl From<StoreError> for AdminError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Conflict {
                request_id,
                expected,
                actual,
            } => AdminError::Conflict {
                request_id,
                expected,
                actual,
            },
            StoreError::RequestNotFound(id) => AdminError::NotFound(id),
            other => AdminError::Store(other),
        }
    }
}

/// Result type for administrative operations.
pub type Result<T> = std::result::Result<T, AdminError>;
