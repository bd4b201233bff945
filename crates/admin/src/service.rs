//! Administrative transition controller.

use common::{Kind, RequestId, Status};
use request_store::{Request, RequestStore};

use crate::actor::Actor;
use crate::error::{AdminError, Result};

/// Drives request status transitions on behalf of administrators.
///
/// `set_status` validates the lifecycle edge against the request's current
/// status and then writes conditionally on that same status, so a concurrent
/// writer causes a [`AdminError::Conflict`] instead of a silent overwrite.
pub struct AdminService<S: RequestStore> {
    store: S,
}

impl<S: RequestStore> AdminService<S> {
    /// Creates a new admin service backed by the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns all non-terminal requests of a kind, newest first.
    #[tracing::instrument(skip(self))]
    pub async fn list_pending(&self, kind: Kind) -> Result<Vec<Request>> {
        let mut requests = self.store.get_all_requests(kind).await?;
        requests.retain(|r| !r.status.is_terminal());
        Ok(requests)
    }

    /// Moves a request along a lifecycle edge.
    ///
    /// Fails before touching the store if the caller is not an admin or the
    /// edge is not legal from the request's current status.
    #[tracing::instrument(skip(self), fields(actor = %actor.user_id))]
    pub async fn set_status(
        &self,
        actor: Actor,
        id: RequestId,
        kind: Kind,
        target: Status,
    ) -> Result<Request> {
        if !actor.is_admin() {
            return Err(AdminError::NotAuthorized {
                user_id: actor.user_id,
            });
        }

        let current = self
            .store
            .get_request(id)
            .await?
            .ok_or(AdminError::NotFound(id))?;

        let validated = current.status.transition_to(target)?;
        let updated = self
            .store
            .update_status(id, kind, current.status, validated)
            .await?;

        tracing::info!(
            %id,
            from = %current.status,
            to = %updated.status,
            "status transition applied"
        );
        metrics::counter!("admin_transitions", "kind" => kind.as_str()).increment(1);

        Ok(updated)
    }
}
