//! Shared vocabulary for the farm-services marketplace core.
//!
//! This crate provides the types every other crate speaks:
//! - Identifier newtypes ([`RequestId`], [`UserId`], [`ProductId`], [`LineItemId`])
//! - The [`Kind`] discriminator for the three request varieties
//! - The [`Status`] lifecycle state machine shared by all kinds
//! - [`Money`] amounts in integer paise

pub mod kind;
pub mod money;
pub mod status;
pub mod types;

pub use kind::Kind;
pub use money::Money;
pub use status::{Status, TransitionError};
pub use types::{LineItemId, ProductId, RequestId, UserId};
