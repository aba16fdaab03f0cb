//! Write-then-Notify Coordinator
//!
//! The local store is the system of record; the vehicle registry only
//! mirrors it.
//!
//! ```text
//! persist ──ok──► notify registry ──► (saved, NotificationOutcome)
//!    │                  │
//!    └─err──► Storage   └─err──► still Ok, outcome carries the warning
//! ```
//!
//! A failed persist means no notification. A failed notification never
//! fails the operation and never undoes the write.

use std::future::Future;
use std::sync::Arc;

use police_domain::{
    NotificationOutcome, NotificationSubject, Plate, RepositoryError, VehicleRegistry,
    VehicleStatus,
};
use tracing::{debug, warn};

use crate::dispatcher::{DetachedNotification, NotificationDispatcher, NotificationJob};
use crate::error::ServiceError;

pub struct WriteThenNotify {
    registry: Arc<dyn VehicleRegistry>,
    dispatcher: NotificationDispatcher,
}

impl WriteThenNotify {
    pub fn new(registry: Arc<dyn VehicleRegistry>, dispatcher: NotificationDispatcher) -> Self {
        Self {
            registry,
            dispatcher,
        }
    }

    /// Persist, then notify the registry and wait for the answer
    pub async fn commit_with_notification<T, F>(
        &self,
        persist: F,
        status: VehicleStatus,
    ) -> Result<(T, NotificationOutcome), ServiceError>
    where
        T: NotificationSubject,
        F: Future<Output = Result<T, RepositoryError>>,
    {
        let saved = persist.await.map_err(log_storage_failure)?;
        let outcome = self.notify(&saved.notification_plates(), status).await;
        Ok((saved, outcome))
    }

    /// Persist, then queue the notification without waiting for it
    pub async fn commit_with_detached_notification<T, F>(
        &self,
        persist: F,
        status: VehicleStatus,
    ) -> Result<(T, DetachedNotification), ServiceError>
    where
        T: NotificationSubject,
        F: Future<Output = Result<T, RepositoryError>>,
    {
        let saved = persist.await.map_err(log_storage_failure)?;

        let mut handoff = DetachedNotification::Queued;
        for plate in saved.notification_plates() {
            let result = self
                .dispatcher
                .dispatch(NotificationJob::StatusUpdate { plate, status });
            if !result.is_queued() {
                handoff = result;
            }
        }
        Ok((saved, handoff))
    }

    /// Succeeds only when every plate was accepted by the registry
    async fn notify(&self, plates: &[Plate], status: VehicleStatus) -> NotificationOutcome {
        let mut failures = Vec::new();

        for plate in plates {
            match self.registry.notify_status(plate, status).await {
                Ok(()) => debug!(plate = %plate, status = %status, "Registry notified"),
                Err(err) => {
                    warn!(plate = %plate, status = %status, error = %err, "Registry notification failed");
                    failures.push(format!("{}: {}", plate, err));
                }
            }
        }

        if failures.is_empty() {
            NotificationOutcome::delivered()
        } else {
            NotificationOutcome::failed(failures.join("; "))
        }
    }
}

fn log_storage_failure(err: RepositoryError) -> ServiceError {
    warn!(error = %err, "Write failed, skipping registry notification");
    err.into()
}
