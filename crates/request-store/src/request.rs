//! Persisted request and line item records.

use chrono::{DateTime, NaiveDate, Utc};
use common::{Kind, LineItemId, Money, ProductId, RequestId, Status, UserId};
use serde::{Deserialize, Serialize};

/// A persisted request: an input order, tractor booking, or labor booking.
///
/// Created once at submission time with `status = Requested`. After creation
/// the only mutable fields are `status` and `updated_at`, and both change
/// exclusively through [`crate::RequestStore::update_status`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    /// Unique request identifier.
    pub id: RequestId,

    /// The farmer who submitted the request. Read access is scoped to this
    /// user; status mutation is reserved for administrators.
    pub requester_id: UserId,

    /// Current lifecycle status.
    pub status: Status,

    /// Committed amount, frozen at submission time. Never recomputed, even
    /// if the underlying catalog rates change later.
    pub total_amount: Money,

    /// When the request was created.
    pub created_at: DateTime<Utc>,

    /// When the status last changed.
    pub updated_at: DateTime<Utc>,

    /// Kind-specific payload. Opaque to the lifecycle machinery.
    pub detail: RequestDetail,
}

impl Request {
    /// Returns the request kind, derived from the detail payload.
    pub fn kind(&self) -> Kind {
        self.detail.kind()
    }
}

/// Kind-specific detail fields for a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RequestDetail {
    /// Delivery details for an input order.
    InputOrder {
        delivery_address: String,
        delivery_notes: Option<String>,
    },

    /// Schedule details for a tractor booking.
    Tractor {
        tractor_name: String,
        booking_date: NaiveDate,
        start_time: String,
        hours: u32,
        location: String,
        notes: Option<String>,
    },

    /// Schedule details for a labor booking.
    Labor {
        worker_name: String,
        work_type: String,
        booking_date: NaiveDate,
        days_required: u32,
        location: String,
        notes: Option<String>,
    },
}

impl RequestDetail {
    /// Returns the kind this detail payload belongs to.
    pub fn kind(&self) -> Kind {
        match self {
            RequestDetail::InputOrder { .. } => Kind::InputOrder,
            RequestDetail::Tractor { .. } => Kind::Tractor,
            RequestDetail::Labor { .. } => Kind::Labor,
        }
    }
}

/// Fields supplied when creating a request.
///
/// The store assigns the ID, timestamps, and the initial `Requested` status.
#[derive(Debug, Clone)]
pub struct NewRequest {
    /// The farmer submitting the request.
    pub requester_id: UserId,

    /// Committed amount computed at submission time.
    pub total_amount: Money,

    /// Kind-specific payload.
    pub detail: RequestDetail,
}

/// A line item on an input order.
///
/// Immutable once created; owned by its parent request and created
/// atomically with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Unique line item identifier.
    pub id: LineItemId,

    /// The parent request.
    pub request_id: RequestId,

    /// The catalog product this line was priced from.
    pub product_id: ProductId,

    /// Product name snapshot taken at checkout.
    pub product_name: String,

    /// Quantity ordered.
    pub quantity: u32,

    /// Raw catalog unit price at checkout, before subsidy.
    pub unit_price: Money,

    /// Effective (subsidy-applied) unit price × quantity, frozen at checkout.
    pub line_total: Money,
}

/// Fields supplied when creating a line item; the store assigns the ID.
#[derive(Debug, Clone)]
pub struct NewLineItem {
    pub product_id: ProductId,
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: Money,
    pub line_total: Money,
}
