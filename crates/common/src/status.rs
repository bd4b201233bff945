//! Request lifecycle state machine.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The fulfillment stage of a request.
///
/// Status transitions:
/// ```text
/// Requested ──► Accepted ──► InProgress ──► Completed
///     │             │
///     └─────────────┴──► Cancelled
/// ```
///
/// The same graph applies to all three request kinds. `Completed` and
/// `Cancelled` are terminal; cancellation is only possible before work
/// has started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Submitted by the farmer, awaiting operator review.
    #[default]
    Requested,

    /// Accepted by the operator, awaiting fulfillment.
    Accepted,

    /// Fulfillment under way (delivery in transit, service running).
    InProgress,

    /// Fulfilled (terminal state).
    Completed,

    /// Cancelled before work started (terminal state).
    Cancelled,
}

impl Status {
    /// Returns true if the request can be accepted from this status.
    pub fn can_accept(&self) -> bool {
        matches!(self, Status::Requested)
    }

    /// Returns true if fulfillment can start from this status.
    pub fn can_start(&self) -> bool {
        matches!(self, Status::Accepted)
    }

    /// Returns true if the request can be completed from this status.
    pub fn can_complete(&self) -> bool {
        matches!(self, Status::InProgress)
    }

    /// Returns true if the request can be cancelled from this status.
    pub fn can_cancel(&self) -> bool {
        matches!(self, Status::Requested | Status::Accepted)
    }

    /// Returns true if this is a terminal status (no further transitions).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Status::Completed | Status::Cancelled)
    }

    /// Returns true if `target` is reachable from this status in one step.
    pub fn can_transition_to(&self, target: Status) -> bool {
        match target {
            Status::Requested => false,
            Status::Accepted => self.can_accept(),
            Status::InProgress => self.can_start(),
            Status::Completed => self.can_complete(),
            Status::Cancelled => self.can_cancel(),
        }
    }

    /// Validates a single-step transition, returning the new status.
    pub fn transition_to(&self, target: Status) -> Result<Status, TransitionError> {
        if self.can_transition_to(target) {
            Ok(target)
        } else {
            Err(TransitionError {
                from: *self,
                to: target,
            })
        }
    }

    /// Returns the status name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Requested => "requested",
            Status::Accepted => "accepted",
            Status::InProgress => "in_progress",
            Status::Completed => "completed",
            Status::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error signalled when a requested status change is not an edge in the
/// lifecycle graph, including any attempt to leave a terminal status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid transition: {from} -> {to}")]
pub struct TransitionError {
    /// Status the request was in.
    pub from: Status,

    /// Status the caller asked for.
    pub to: Status,
}
