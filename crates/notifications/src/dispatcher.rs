//! Change notification dispatcher.
//!
//! The dispatcher opens one change subscription per request kind, scoped to a
//! single user, and pumps each stream into the notification sink and cache
//! invalidator. The store delivers at-least-once, so each pump deduplicates
//! by the last `(request_id, new_status)` it has seen.

use std::collections::HashMap;
use std::sync::Arc;

use common::{Kind, RequestId, Status, UserId};
use futures_util::StreamExt;
use request_store::{ChangeFilter, ChangeStream, RequestStore, StatusChanged};
use tokio::task::JoinHandle;

use crate::error::{NotifyError, Result};
use crate::messages::status_message;

/// Receives user-facing notification text for delivered status changes.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, message: &str, request_id: RequestId, kind: Kind);
}

/// Invalidates a cached query result keyed by request kind.
///
/// Invalidation is unconditional per delivered event; only deduplicated
/// duplicates skip it.
pub trait CacheInvalidator: Send + Sync {
    fn invalidate(&self, kind: Kind);
}

/// Per-user change notification dispatcher.
pub struct Dispatcher {
    sink: Arc<dyn NotificationSink>,
    cache: Arc<dyn CacheInvalidator>,
}

impl Dispatcher {
    /// Creates a dispatcher delivering through the given sink and invalidator.
    pub fn new(sink: Arc<dyn NotificationSink>, cache: Arc<dyn CacheInvalidator>) -> Self {
        Self { sink, cache }
    }

    /// Establishes change subscriptions for every request kind, filtered to
    /// `user_id`'s own requests, and starts pumping them.
    ///
    /// If any subscription fails to establish, the ones opened before it are
    /// torn down and the error is surfaced without retry.
    #[tracing::instrument(skip(self, store))]
    pub async fn subscribe<S: RequestStore>(
        &self,
        store: &S,
        user_id: UserId,
    ) -> Result<SubscriptionHandle> {
        let mut tasks: Vec<JoinHandle<()>> = Vec::with_capacity(Kind::ALL.len());

        for kind in Kind::ALL {
            let stream = match store
                .subscribe_to_status_changes(kind, ChangeFilter::for_requester(user_id))
                .await
            {
                Ok(stream) => stream,
                Err(source) => {
                    for task in &tasks {
                        task.abort();
                    }
                    return Err(NotifyError::Subscription { kind, source });
                }
            };

            let sink = Arc::clone(&self.sink);
            let cache = Arc::clone(&self.cache);
            tasks.push(tokio::spawn(pump(kind, stream, sink, cache)));
        }

        tracing::debug!(%user_id, "change subscriptions established");

        Ok(SubscriptionHandle { tasks })
    }
}

/// A live set of per-kind subscription pumps for one user.
///
/// Dropping the handle stops delivery.
pub struct SubscriptionHandle {
    tasks: Vec<JoinHandle<()>>,
}

impl SubscriptionHandle {
    /// Stops all pumps, aborting any in-flight delivery. Idempotent.
    pub fn unsubscribe(&mut self) {
        for task in self.tasks.drain(..) {
            task.abort();
        }
    }

    /// Returns true if the pumps are still running.
    pub fn is_active(&self) -> bool {
        !self.tasks.is_empty()
    }
}

impl Drop for SubscriptionHandle {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

async fn pump(
    kind: Kind,
    mut stream: ChangeStream,
    sink: Arc<dyn NotificationSink>,
    cache: Arc<dyn CacheInvalidator>,
) {
    let mut last_seen: HashMap<RequestId, Status> = HashMap::new();

    while let Some(event) = stream.next().await {
        deliver(&mut last_seen, &event, sink.as_ref(), cache.as_ref());
    }

    tracing::debug!(%kind, "change stream closed");
}

/// Delivers one change event, dropping redelivered duplicates whole.
///
/// Returns true if the event was delivered, false if it was deduplicated.
fn deliver(
    last_seen: &mut HashMap<RequestId, Status>,
    event: &StatusChanged,
    sink: &dyn NotificationSink,
    cache: &dyn CacheInvalidator,
) -> bool {
    if last_seen.get(&event.request_id) == Some(&event.new_status) {
        metrics::counter!("notifications_deduped", "kind" => event.kind.as_str()).increment(1);
        return false;
    }
    last_seen.insert(event.request_id, event.new_status);

    sink.notify(
        status_message(event.kind, event.new_status),
        event.request_id,
        event.kind,
    );
    cache.invalidate(event.kind);

    tracing::debug!(
        kind = %event.kind,
        request = %event.request_id.short(),
        status = %event.new_status,
        "notification delivered"
    );
    metrics::counter!("notifications_emitted", "kind" => event.kind.as_str()).increment(1);

    true
}
