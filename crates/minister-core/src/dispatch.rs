//! Send-then-commit status transitions.
//!
//! A status change is only recorded after the webhook accepts the message,
//! so the stored status always reflects what the channel last saw.

use chrono::NaiveDateTime;
use tracing::{debug, info, warn};

use crate::action::Action;
use crate::error::{CoreError, NotifyError};
use crate::integrations::Notifier;
use crate::status::Status;
use crate::storage::StateStore;

/// Result of a [`StatusDispatcher::change_status`] call.
#[derive(Debug)]
pub enum DispatchOutcome {
    /// No endpoint configured; nothing was sent or stored.
    Skipped,
    /// Message delivered and the status recorded.
    Delivered(Status),
    /// Delivery failed; the stored status is unchanged.
    NotDelivered(NotifyError),
}

impl DispatchOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, DispatchOutcome::Delivered(_))
    }
}

pub struct StatusDispatcher<S, N> {
    store: S,
    notifier: N,
}

impl<S: StateStore, N: Notifier> StatusDispatcher<S, N> {
    pub fn new(store: S, notifier: N) -> Self {
        Self { store, notifier }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Broadcast `text` and, once delivered, record `target` as the status.
    ///
    /// # Errors
    /// Only state store failures are returned as errors. Delivery failures
    /// are reported through [`DispatchOutcome::NotDelivered`].
    pub async fn change_status(
        &self,
        target: Status,
        text: &str,
    ) -> Result<DispatchOutcome, CoreError> {
        let endpoint = self.store.webhook_endpoint()?;
        if endpoint.is_empty() {
            debug!(%target, "no webhook endpoint configured, skipping");
            return Ok(DispatchOutcome::Skipped);
        }

        debug!(%target, "sending status message");
        if let Err(err) = self.notifier.send(&endpoint, text).await {
            warn!(%target, error = %err, "status message not delivered");
            return Ok(DispatchOutcome::NotDelivered(err));
        }

        self.store.set_status(target)?;
        info!(status = %target, "status changed");
        Ok(DispatchOutcome::Delivered(target))
    }

    /// Render the message for `action` at `now` and dispatch it.
    pub async fn perform(
        &self,
        action: Action,
        now: NaiveDateTime,
    ) -> Result<DispatchOutcome, CoreError> {
        let text = action.message(now);
        self.change_status(action.target_status(), &text).await
    }
}
