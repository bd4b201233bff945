//! Administrative surface for the farm-services marketplace core.
//!
//! Status transitions are privileged: only an [`Actor`] with the admin role
//! may drive a request along its lifecycle, and every write is conditional
//! on the status the admin last read.

pub mod actor;
pub mod error;
pub mod service;

pub use actor::{Actor, Role};
pub use error::{AdminError, Result};
pub use service::AdminService;
