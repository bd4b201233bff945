//! Notification error types.

use common::Kind;
use request_store::StoreError;
use thiserror::Error;

/// Errors that can occur while establishing subscriptions.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// A per-kind subscription could not be established. Any subscriptions
    /// opened before the failure have already been torn down.
    #[error("could not subscribe to {kind} changes: {source}")]
    Subscription {
        kind: Kind,
        #[source]
        source: StoreError,
    },
}

/// Result type for notification operations.
pub type Result<T> = std::result::Result<T, NotifyError>;
