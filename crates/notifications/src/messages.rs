//! User-facing message text for status transitions.

use common::{Kind, Status};

/// Returns the notification text for a request of `kind` entering `status`.
///
/// The table is total: every (kind, status) pair has a message.
pub fn status_message(kind: Kind, status: Status) -> &'static str {
    match (kind, status) {
        (Kind::InputOrder, Status::Requested) => "Order placed successfully",
        (Kind::InputOrder, Status::Accepted) => "Your order has been accepted!",
        (Kind::InputOrder, Status::InProgress) => "Your order is now in transit",
        (Kind::InputOrder, Status::Completed) => "Your order has been delivered!",
        (Kind::InputOrder, Status::Cancelled) => "Your order has been cancelled",

        (Kind::Tractor, Status::Requested) => "Tractor booking submitted",
        (Kind::Tractor, Status::Accepted) => "Tractor booking confirmed!",
        (Kind::Tractor, Status::InProgress) => "Tractor service in progress",
        (Kind::Tractor, Status::Completed) => "Tractor service completed!",
        (Kind::Tractor, Status::Cancelled) => "Tractor booking cancelled",

        (Kind::Labor, Status::Requested) => "Labor booking submitted",
        (Kind::Labor, Status::Accepted) => "Labor booking confirmed!",
        (Kind::Labor, Status::InProgress) => "Worker is on the job",
        (Kind::Labor, Status::Completed) => "Work completed successfully!",
        (Kind::Labor, Status::Cancelled) => "Labor booking cancelled",
    }
}
