//! Change notifications for the farm-services marketplace core.
//!
//! This crate turns committed status transitions into user-facing
//! notifications and cache invalidations:
//! - [`Dispatcher`] opens per-kind, per-user change subscriptions
//! - [`NotificationSink`] and [`CacheInvalidator`] are the delivery seams
//! - [`status_message`] maps each (kind, status) pair to its message text

pub mod dispatcher;
pub mod error;
pub mod messages;

pub use dispatcher::{CacheInvalidator, Dispatcher, NotificationSink, SubscriptionHandle};
pub use error::{NotifyError, Result};
pub use messages::status_message;
