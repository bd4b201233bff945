use common::{Kind, RequestId, Status};
use thiserror::Error;

/// Errors that can occur when interacting with the request store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A conditional status update lost the compare-and-swap: the request's
    /// current status no longer matched what the caller expected.
    #[error("conflict on request {request_id}: expected status {expected}, found {actual}")]
    Conflict {
        request_id: RequestId,
        expected: Status,
        actual: Status,
    },

    /// The request was not found in the store.
    #[error("request not found: {0}")]
    RequestNotFound(RequestId),

    /// The request exists but is of a different kind than the caller named.
    #[error("request {request_id} is a {actual} request, not {expected}")]
    KindMismatch {
        request_id: RequestId,
        expected: Kind,
        actual: Kind,
    },

    /// A change stream could not be established.
    #[error("subscription failed for {kind} changes: {reason}")]
    Subscription { kind: Kind, reason: String },
}

/// Result type for request store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
