//! Domain error types.

use request_store::StoreError;
use thiserror::Error;

/// Errors that can occur during request submission.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Checkout was attempted with an empty cart.
    #[error("cart is empty")]
    EmptyCart,

    /// An input order was submitted without a delivery address.
    #[error("delivery address is required")]
    MissingDeliveryAddress,

    /// A booking was submitted with a zero duration.
    #[error("booking duration must be at least one {unit}")]
    InvalidDuration { unit: &'static str },

    /// An error occurred in the request store.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
