pub mod change;
pub mod error;
pub mod memory;
pub mod request;
pub mod store;

pub use change::{ChangeFilter, ChangeStream, StatusChanged};
pub use error::{Result, StoreError};
pub use memory::InMemoryRequestStore;
pub use request::{LineItem, NewLineItem, NewRequest, Request, RequestDetail};
pub use store::RequestStore;
