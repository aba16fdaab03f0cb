//! Mail Notifier - Port to the email notification service

use async_trait::async_trait;
use serde::Serialize;

use crate::gateway::vehicle_registry::RemoteFailure;
use crate::model::violation::Violation;

/// One outgoing email
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MailMessage {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl MailMessage {
    /// Receipt sent to the offender after a violation is paid
    pub fn payment_receipt(violation: &Violation, to: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            subject: format!("Payment received for violation #{}", violation.id),
            body: format!(
                "Your payment of {} for the {} violation on vehicle {} has been received. \
                 The violation is now closed.",
                violation.fine_amount.round_dp(2),
                violation.violation_type.as_str(),
                violation.plate
            ),
        }
    }
}

#[async_trait]
pub trait MailNotifier: Send + Sync {
    async fn send(&self, message: &MailMessage) -> Result<(), RemoteFailure>;
}
