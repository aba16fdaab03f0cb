//! Violations - Issue, look up, pay and dismiss tickets

use std::sync::Arc;

use police_domain::{MailMessage, NewViolation, Plate, RecordId, Violation, ViolationRepository, ViolationStatus};
use tracing::info;

use crate::dispatcher::{DetachedNotification, NotificationDispatcher, NotificationJob};
use crate::error::ServiceError;

pub struct ViolationService {
    violations: Arc<dyn ViolationRepository>,
    dispatcher: NotificationDispatcher,
}

impl ViolationService {
    pub fn new(violations: Arc<dyn ViolationRepository>, dispatcher: NotificationDispatcher) -> Self {
        Self {
            violations,
            dispatcher,
        }
    }

    pub async fn issue(&self, violation: NewViolation) -> Result<Violation, ServiceError> {
        let violation = self.violations.create(violation).await?;
        info!(
            id = %violation.id,
            plate = %violation.plate,
            fine = %violation.fine_amount,
            "Violation issued"
        );
        Ok(violation)
    }

    /// Every violation for the plate, whatever its status
    pub async fn by_plate(&self, plate: &Plate) -> Result<Vec<Violation>, ServiceError> {
        Ok(self.violations.find_by_plate(plate).await?)
    }

    /// Mark a PENDING violation PAID.
    ///
    /// A receipt is queued when the offender left an email address; the
    /// second value says what happened to it.
    pub async fn pay(
        &self,
        id: RecordId,
    ) -> Result<(Violation, Option<DetachedNotification>), ServiceError> {
        let violation = self.violations.update_status(id, ViolationStatus::Paid).await?;
        info!(id = %id, plate = %violation.plate, "Violation paid");

        let receipt = violation.offender_email.as_deref().map(|to| {
            self.dispatcher.dispatch(NotificationJob::PaymentReceipt(
                MailMessage::payment_receipt(&violation, to),
            ))
        });
        Ok((violation, receipt))
    }

    pub async fn dismiss(&self, id: RecordId) -> Result<Violation, ServiceError> {
        let violation = self
            .violations
            .update_status(id, ViolationStatus::Dismissed)
            .await?;
        info!(id = %id, plate = %violation.plate, "Violation dismissed");
        Ok(violation)
    }
}
