use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use common::{Kind, LineItemId, RequestId, Status, UserId};
use tokio::sync::RwLock;
use tokio::sync::mpsc;

use crate::{
    ChangeFilter, ChangeStream, LineItem, NewLineItem, NewRequest, Request, Result, StatusChanged,
    StoreError, store::RequestStore,
};

/// In-memory request store.
///
/// Backs the core's own tests and any session that does not need durable
/// storage. Provides the same contract as a database-backed implementation:
/// compare-and-swap status updates and per-subscriber change streams with
/// per-request ordering.
#[derive(Clone, Default)]
pub struct InMemoryRequestStore {
    inner: Arc<RwLock<Inner>>,
}

#[derive(Default)]
struct Inner {
    requests: HashMap<RequestId, Request>,
    /// Insertion order, used for deterministic newest-first reads.
    insertion: Vec<RequestId>,
    line_items: HashMap<RequestId, Vec<LineItem>>,
    subscribers: Vec<Subscriber>,
}

struct Subscriber {
    kind: Kind,
    filter: ChangeFilter,
    tx: mpsc::UnboundedSender<StatusChanged>,
}

impl InMemoryRequestStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the total number of requests stored.
    pub async fn request_count(&self) -> usize {
        self.inner.read().await.requests.len()
    }

    /// Returns the number of live change subscribers.
    pub async fn subscriber_count(&self) -> usize {
        self.inner.read().await.subscribers.len()
    }
}

impl Inner {
    /// Publishes a committed change to matching subscribers, pruning any
    /// whose receiving side has been dropped.
    fn publish(&mut self, event: &StatusChanged, requester: UserId) {
        self.subscribers.retain(|sub| {
            if sub.kind != event.kind || !sub.filter.matches(requester) {
                return true;
            }
            sub.tx.send(event.clone()).is_ok()
        });
    }
}

#[async_trait]
impl RequestStore for InMemoryRequestStore {
    async fn create_request(&self, new: NewRequest) -> Result<Request> {
        let now = Utc::now();
        let request = Request {
            id: RequestId::new(),
            requester_id: new.requester_id,
            status: Status::Requested,
            total_amount: new.total_amount,
            created_at: now,
            updated_at: now,
            detail: new.detail,
        };

        let mut inner = self.inner.write().await;
        inner.insertion.push(request.id);
        inner.requests.insert(request.id, request.clone());

        tracing::debug!(id = %request.id, kind = %request.kind(), "request created");
        metrics::counter!("store_requests_created").increment(1);

        Ok(request)
    }

    async fn create_line_items(
        &self,
        request_id: RequestId,
        lines: Vec<NewLineItem>,
    ) -> Result<Vec<LineItem>> {
        let mut inner = self.inner.write().await;
        if !inner.requests.contains_key(&request_id) {
            return Err(StoreError::RequestNotFound(request_id));
        }

        let items: Vec<LineItem> = lines
            .into_iter()
            .map(|line| LineItem {
                id: LineItemId::new(),
                request_id,
                product_id: line.product_id,
                product_name: line.product_name,
                quantity: line.quantity,
                unit_price: line.unit_price,
                line_total: line.line_total,
            })
            .collect();

        inner
            .line_items
            .entry(request_id)
            .or_default()
            .extend(items.iter().cloned());

        Ok(items)
    }

    async fn get_request(&self, id: RequestId) -> Result<Option<Request>> {
        let inner = self.inner.read().await;
        Ok(inner.requests.get(&id).cloned())
    }

    async fn get_requests_by_requester(&self, requester: UserId) -> Result<Vec<Request>> {
        let inner = self.inner.read().await;
        Ok(inner
            .insertion
            .iter()
            .rev()
            .filter_map(|id| inner.requests.get(id))
            .filter(|r| r.requester_id == requester)
            .cloned()
            .collect())
    }

    async fn get_all_requests(&self, kind: Kind) -> Result<Vec<Request>> {
        let inner = self.inner.read().await;
        Ok(inner
            .insertion
            .iter()
            .rev()
            .filter_map(|id| inner.requests.get(id))
            .filter(|r| r.kind() == kind)
            .cloned()
            .collect())
    }

    async fn get_line_items(&self, request_id: RequestId) -> Result<Vec<LineItem>> {
        let inner = self.inner.read().await;
        Ok(inner.line_items.get(&request_id).cloned().unwrap_or_default())
    }

    async fn update_status(
        &self,
        id: RequestId,
        kind: Kind,
        expected: Status,
        new_status: Status,
    ) -> Result<Request> {
        let mut inner = self.inner.write().await;

        let request = inner
            .requests
            .get_mut(&id)
            .ok_or(StoreError::RequestNotFound(id))?;

        let actual_kind = request.kind();
        if actual_kind != kind {
            return Err(StoreError::KindMismatch {
                request_id: id,
                expected: kind,
                actual: actual_kind,
            });
        }

        if request.status != expected {
            return Err(StoreError::Conflict {
                request_id: id,
                expected,
                actual: request.status,
            });
        }

        let old_status = request.status;
        request.status = new_status;
        request.updated_at = Utc::now();

        let requester = request.requester_id;
        let event = StatusChanged {
            request_id: id,
            kind,
            old_status,
            new_status,
            occurred_at: request.updated_at,
        };
        let updated = request.clone();

        inner.publish(&event, requester);

        tracing::debug!(%id, %old_status, %new_status, "status updated");
        metrics::counter!("store_status_updates").increment(1);

        Ok(updated)
    }

    async fn subscribe_to_status_changes(
        &self,
        kind: Kind,
        filter: ChangeFilter,
    ) -> Result<ChangeStream> {
        let (tx, rx) = mpsc::unbounded_channel();

        let mut inner = self.inner.write().await;
        inner.subscribers.push(Subscriber { kind, filter, tx });

        let stream = futures_util::stream::unfold(rx, |mut rx| async move {
            rx.recv().await.map(|event| (event, rx))
        });
        Ok(Box::pin(stream))
    }
}
