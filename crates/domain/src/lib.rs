//! Domain layer for the farm-services marketplace core.
//!
//! This crate provides:
//! - The cart pricing aggregator ([`Cart`], [`CartLine`], [`CartTotals`])
//! - Catalog input types ([`Product`], [`TractorUnit`], [`Worker`])
//! - The [`BookingService`] submission path that turns a priced cart or a
//!   rate × duration quote into a persisted request

pub mod cart;
pub mod catalog;
pub mod error;
pub mod service;

pub use cart::{Cart, CartLine, CartTotals};
pub use catalog::{Product, Skill, TractorUnit, Worker};
pub use error::DomainError;
pub use service::{BookingService, DeliveryInfo, LaborSchedule, TractorSchedule};
