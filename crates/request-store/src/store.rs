use async_trait::async_trait;
use common::{Kind, RequestId, Status, UserId};

use crate::{ChangeFilter, ChangeStream, LineItem, NewLineItem, NewRequest, Request, Result};

/// Narrow persistence contract the core depends on.
///
/// Any backing engine satisfying this contract is conformant. The two hard
/// requirements are that [`update_status`](RequestStore::update_status) is a
/// single atomic conditional write, and that change streams deliver events
/// for the same request in commit order with at-least-once semantics.
///
/// All implementations must be thread-safe (Send + Sync); none of the
/// methods may be called while holding a lock across the suspension.
#[async_trait]
pub trait RequestStore: Send + Sync {
    /// Creates a request with a fresh ID, `Requested` status, and current
    /// timestamps. Returns the stored record.
    async fn create_request(&self, new: NewRequest) -> Result<Request>;

    /// Creates the line items for an input order.
    ///
    /// Callers invoke this immediately after [`create_request`]; the pair is
    /// both-or-neither. Fails if the parent request does not exist.
    ///
    /// [`create_request`]: RequestStore::create_request
    async fn create_line_items(
        &self,
        request_id: RequestId,
        lines: Vec<NewLineItem>,
    ) -> Result<Vec<LineItem>>;

    /// Retrieves a request by ID. Returns `None` if it does not exist.
    async fn get_request(&self, id: RequestId) -> Result<Option<Request>>;

    /// Retrieves all requests submitted by a user, newest first.
    async fn get_requests_by_requester(&self, requester: UserId) -> Result<Vec<Request>>;

    /// Retrieves all requests of a kind across all users, newest first.
    async fn get_all_requests(&self, kind: Kind) -> Result<Vec<Request>>;

    /// Retrieves the line items of an input order, in creation order.
    async fn get_line_items(&self, request_id: RequestId) -> Result<Vec<LineItem>>;

    /// Atomically sets a request's status, conditional on its current status.
    ///
    /// The write succeeds only if the stored status still equals `expected`;
    /// otherwise it fails with [`StoreError::Conflict`] and the caller may
    /// re-fetch and retry. On success `updated_at` is bumped, a
    /// [`StatusChanged`] event is published to matching subscribers, and the
    /// updated record is returned.
    ///
    /// [`StoreError::Conflict`]: crate::StoreError::Conflict
    /// [`StatusChanged`]: crate::StatusChanged
    async fn update_status(
        &self,
        id: RequestId,
        kind: Kind,
        expected: Status,
        new_status: Status,
    ) -> Result<Request>;

    /// Opens a change stream for committed status transitions on requests of
    /// `kind` passing `filter`.
    ///
    /// The stream ends when the store is dropped or the subscriber is pruned;
    /// it never yields errors once established.
    async fn subscribe_to_status_changes(
        &self,
        kind: Kind,
        filter: ChangeFilter,
    ) -> Result<ChangeStream>;
}
