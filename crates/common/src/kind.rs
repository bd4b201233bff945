//! Request kind discriminator.

use serde::{Deserialize, Serialize};

/// The three varieties of request a farmer can submit.
///
/// The lifecycle state machine treats all kinds uniformly; the kind only
/// selects kind-specific detail payloads, notification wording, and the
/// client cache bucket to invalidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    /// An order for agricultural inputs (seeds, fertilizers, pesticides).
    InputOrder,

    /// A tractor service booking.
    Tractor,

    /// A labor hiring booking.
    Labor,
}

impl Kind {
    /// All kinds, in the order subscriptions are established.
    pub const ALL: [Kind; 3] = [Kind::InputOrder, Kind::Tractor, Kind::Labor];

    /// Returns the kind name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::InputOrder => "input_order",
            Kind::Tractor => "tractor",
            Kind::Labor => "labor",
        }
    }

    /// Returns the client cache bucket invalidated when a request of this
    /// kind changes.
    pub fn cache_key(&self) -> &'static str {
        match self {
            Kind::InputOrder => "orders",
            Kind::Tractor => "tractor-bookings",
            Kind::Labor => "labor-bookings",
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
