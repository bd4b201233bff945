//! Booking service: the submission path for all three request kinds.

use chrono::NaiveDate;
use common::{RequestId, UserId};
use request_store::{LineItem, NewLineItem, NewRequest, Request, RequestDetail, RequestStore};

use crate::cart::Cart;
use crate::catalog::{TractorUnit, Worker};
use crate::error::DomainError;

/// Delivery details collected at checkout.
#[derive(Debug, Clone)]
pub struct DeliveryInfo {
    pub address: String,
    pub notes: Option<String>,
}

/// Schedule details for a tractor booking.
#[derive(Debug, Clone)]
pub struct TractorSchedule {
    pub booking_date: NaiveDate,
    pub start_time: String,
    pub hours: u32,
    pub location: String,
    pub notes: Option<String>,
}

/// Schedule details for a labor booking.
#[derive(Debug, Clone)]
pub struct LaborSchedule {
    pub booking_date: NaiveDate,
    pub days_required: u32,
    pub location: String,
    pub notes: Option<String>,
}

/// Service for submitting requests and reading them back.
///
/// Every request enters the lifecycle in `Requested` status with its amount
/// committed at submission time. Subsequent status changes go through the
/// administrative controller, never through this service.
pub struct BookingService<S: RequestStore> {
    store: S,
}

impl<S: RequestStore> BookingService<S> {
    /// Creates a new booking service backed by the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Checks out the cart as an input order.
    ///
    /// Creates the request header and its line items as a pair. The payable
    /// total and per-line totals are frozen here; later catalog price changes
    /// do not affect them.
    #[tracing::instrument(skip(self, cart))]
    pub async fn place_order(
        &self,
        requester: UserId,
        cart: &Cart,
        delivery: DeliveryInfo,
    ) -> Result<Request, DomainError> {
        if cart.is_empty() {
            return Err(DomainError::EmptyCart);
        }
        if delivery.address.trim().is_empty() {
            return Err(DomainError::MissingDeliveryAddress);
        }

        let totals = cart.totals();
        let request = self
            .store
            .create_request(NewRequest {
                requester_id: requester,
                total_amount: totals.payable,
                detail: RequestDetail::InputOrder {
                    delivery_address: delivery.address,
                    delivery_notes: delivery.notes,
                },
            })
            .await?;

        let lines = cart
            .lines()
            .iter()
            .map(|line| NewLineItem {
                product_id: line.product_id.clone(),
                product_name: line.name.clone(),
                quantity: line.quantity,
                unit_price: line.unit_price,
                line_total: line.line_total(),
            })
            .collect();
        self.store.create_line_items(request.id, lines).await?;

        tracing::info!(id = %request.id, total = %request.total_amount, "order placed");
        metrics::counter!("requests_submitted", "kind" => "input_order").increment(1);

        Ok(request)
    }

    /// Books a tractor for a number of hours.
    ///
    /// The committed amount is `hourly_rate × hours`, computed once here.
    #[tracing::instrument(skip(self, tractor), fields(tractor = %tractor.name))]
    pub async fn book_tractor(
        &self,
        requester: UserId,
        tractor: &TractorUnit,
        schedule: TractorSchedule,
    ) -> Result<Request, DomainError> {
        if schedule.hours == 0 {
            return Err(DomainError::InvalidDuration { unit: "hour" });
        }

        let request = self
            .store
            .create_request(NewRequest {
                requester_id: requester,
                total_amount: tractor.hourly_rate.multiply(schedule.hours),
                detail: RequestDetail::Tractor {
                    tractor_name: tractor.name.clone(),
                    booking_date: schedule.booking_date,
                    start_time: schedule.start_time,
                    hours: schedule.hours,
                    location: schedule.location,
                    notes: schedule.notes,
                },
            })
            .await?;

        tracing::info!(id = %request.id, total = %request.total_amount, "tractor booked");
        metrics::counter!("requests_submitted", "kind" => "tractor").increment(1);

        Ok(request)
    }

    /// Hires a worker for a number of days.
    ///
    /// The committed amount is `daily_rate × days_required`, computed once
    /// here.
    #[tracing::instrument(skip(self, worker), fields(worker = %worker.full_name))]
    pub async fn hire_labor(
        &self,
        requester: UserId,
        worker: &Worker,
        schedule: LaborSchedule,
    ) -> Result<Request, DomainError> {
        if schedule.days_required == 0 {
            return Err(DomainError::InvalidDuration { unit: "day" });
        }

        let request = self
            .store
            .create_request(NewRequest {
                requester_id: requester,
                total_amount: worker.daily_rate.multiply(schedule.days_required),
                detail: RequestDetail::Labor {
                    worker_name: worker.full_name.clone(),
                    work_type: worker.skill.as_str().to_string(),
                    booking_date: schedule.booking_date,
                    days_required: schedule.days_required,
                    location: schedule.location,
                    notes: schedule.notes,
                },
            })
            .await?;

        tracing::info!(id = %request.id, total = %request.total_amount, "labor hired");
        metrics::counter!("requests_submitted", "kind" => "labor").increment(1);

        Ok(request)
    }

    /// Returns all of the requester's own requests, newest first.
    #[tracing::instrument(skip(self))]
    pub async fn my_requests(&self, requester: UserId) -> Result<Vec<Request>, DomainError> {
        Ok(self.store.get_requests_by_requester(requester).await?)
    }

    /// Returns the line items of an input order.
    #[tracing::instrument(skip(self))]
    pub async fn order_line_items(
        &self,
        request_id: RequestId,
    ) -> Result<Vec<LineItem>, DomainError> {
        Ok(self.store.get_line_items(request_id).await?)
    }
}
