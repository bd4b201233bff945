//! Status change events pushed to subscribers.

use std::pin::Pin;

use chrono::{DateTime, Utc};
use common::{Kind, RequestId, Status, UserId};
use futures_core::Stream;
use serde::{Deserialize, Serialize};

/// A committed status transition on a request.
///
/// Delivery is at-least-once: consumers may see the same transition more
/// than once and must deduplicate by `(request_id, new_status)`. Events for
/// the same `request_id` arrive in commit order; no ordering is guaranteed
/// across different requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChanged {
    /// The request that changed.
    pub request_id: RequestId,

    /// The request's kind.
    pub kind: Kind,

    /// Status before the transition.
    pub old_status: Status,

    /// Status after the transition.
    pub new_status: Status,

    /// When the transition was committed.
    pub occurred_at: DateTime<Utc>,
}

/// A stream of committed status changes.
pub type ChangeStream = Pin<Box<dyn Stream<Item = StatusChanged> + Send>>;

/// Server-side filter applied to a change subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChangeFilter {
    /// Only deliver changes to requests owned by this user. `None` delivers
    /// changes for every requester.
    pub requester: Option<UserId>,
}

impl ChangeFilter {
    /// A filter matching every request of the subscribed kind.
    pub fn any() -> Self {
        Self::default()
    }

    /// A filter scoped to a single requester.
    pub fn for_requester(requester: UserId) -> Self {
        Self {
            requester: Some(requester),
        }
    }

    /// Returns true if a change for `requester` passes this filter.
    pub fn matches(&self, requester: UserId) -> bool {
        match self.requester {
            Some(wanted) => wanted == requester,
            None => true,
        }
    }
}
