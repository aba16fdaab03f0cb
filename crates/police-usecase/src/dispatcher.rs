//! Notification Dispatcher - Fire-and-forget side effects
//!
//! ```text
//! request task ──try_send──► [ bounded queue ] ──► worker task
//!                                                  ├─► VehicleRegistry
//!                                                  └─► MailNotifier
//! ```
//!
//! `dispatch` never waits. A full queue rejects the job instead of blocking
//! the request. The worker logs every outcome and never retries.

use std::sync::Arc;

use police_domain::{MailMessage, MailNotifier, Plate, VehicleRegistry, VehicleStatus};
use tokio::sync::mpsc::{self, error::TrySendError};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// A unit of deferred work
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationJob {
    StatusUpdate { plate: Plate, status: VehicleStatus },
    PaymentReceipt(MailMessage),
}

impl core::fmt::Display for NotificationJob {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            NotificationJob::StatusUpdate { plate, status } => {
                write!(f, "status update {} for {}", status, plate)
            }
            NotificationJob::PaymentReceipt(message) => {
                write!(f, "payment receipt to {}", message.to)
            }
        }
    }
}

/// What happened to a detached notification at hand-off time
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetachedNotification {
    Queued,
    Rejected { reason: String },
}

impl DetachedNotification {
    pub fn is_queued(&self) -> bool {
        matches!(self, DetachedNotification::Queued)
    }

    /// Warning text for the caller, present only on rejection
    pub fn warning(&self) -> Option<String> {
        match self {
            DetachedNotification::Queued => None,
            DetachedNotification::Rejected { reason } => Some(format!(
                "Record saved, but the notification was not queued: {}",
                reason
            )),
        }
    }
}

/// Sending half, cloned into every service that defers work
#[derive(Debug, Clone)]
pub struct NotificationDispatcher {
    sender: mpsc::Sender<NotificationJob>,
}

/// Receiving half; drains the queue once `run` is awaited
pub struct NotificationWorker {
    receiver: mpsc::Receiver<NotificationJob>,
}

impl NotificationDispatcher {
    /// Create a queue holding at most `capacity` pending jobs
    pub fn new(capacity: usize) -> (Self, NotificationWorker) {
        let (sender, receiver) = mpsc::channel(capacity.max(1));
        (Self { sender }, NotificationWorker { receiver })
    }

    /// Create the queue and spawn its worker on the current runtime
    pub fn spawn(
        capacity: usize,
        registry: Arc<dyn VehicleRegistry>,
        mailer: Arc<dyn MailNotifier>,
    ) -> (Self, JoinHandle<()>) {
        let (dispatcher, worker) = Self::new(capacity);
        let handle = tokio::spawn(worker.run(registry, mailer));
        (dispatcher, handle)
    }

    /// Hand a job to the worker without waiting
    pub fn dispatch(&self, job: NotificationJob) -> DetachedNotification {
        match self.sender.try_send(job) {
            Ok(()) => DetachedNotification::Queued,
            Err(TrySendError::Full(job)) => {
                warn!(job = %job, "Notification queue is full, dropping job");
                DetachedNotification::Rejected {
                    reason: "notification queue is full".to_string(),
                }
            }
            Err(TrySendError::Closed(job)) => {
                warn!(job = %job, "Notification worker is gone, dropping job");
                DetachedNotification::Rejected {
                    reason: "notification worker is not running".to_string(),
                }
            }
        }
    }
}

impl NotificationWorker {
    /// Process jobs until every dispatcher handle is dropped
    pub async fn run(mut self, registry: Arc<dyn VehicleRegistry>, mailer: Arc<dyn MailNotifier>) {
        info!("Notification worker started");

        while let Some(job) = self.receiver.recv().await {
            match &job {
                NotificationJob::StatusUpdate { plate, status } => {
                    match registry.notify_status(plate, *status).await {
                        Ok(()) => debug!(plate = %plate, status = %status, "Registry notified"),
                        Err(err) => warn!(
                            plate = %plate,
                            status = %status,
                            error = %err,
                            "Detached registry notification failed"
                        ),
                    }
                }
                NotificationJob::PaymentReceipt(message) => match mailer.send(message).await {
                    Ok(()) => debug!(to = %message.to, "Payment receipt sent"),
                    Err(err) => warn!(to = %message.to, error = %err, "Payment receipt failed"),
                },
            }
        }

        info!("Notification worker stopped");
    }

    #[cfg(test)]
    pub(crate) fn try_next(&mut self) -> Option<NotificationJob> {
        self.receiver.try_recv().ok()
    }
}
