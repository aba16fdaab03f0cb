//! HttpMailNotifier - reqwest client for the notification service

use std::time::Duration;

use async_trait::async_trait;
use police_domain::{MailMessage, MailNotifier, RemoteFailure};
use reqwest::Url;
use tracing::debug;

use super::{
    build_client, endpoint, parse_base_url, status_failure, transport_failure, GatewayError,
};

const EMAIL_PATH: &str = "/api/notifications/email";

#[derive(Debug, Clone)]
pub struct HttpMailNotifier {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpMailNotifier {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, GatewayError> {
        Ok(Self {
            client: build_client(timeout)?,
            base_url: parse_base_url(base_url)?,
        })
    }
}

#[async_trait]
impl MailNotifier for HttpMailNotifier {
    async fn send(&self, message: &MailMessage) -> Result<(), RemoteFailure> {
        let url = endpoint(&self.base_url, EMAIL_PATH)?;

        let response = self
            .client
            .post(url)
            .json(message)
            .send()
            .await
            .map_err(|e| transport_failure(&e))?;

        if response.status().is_success() {
            debug!(to = %message.to, "Email accepted by notification service");
            Ok(())
        } else {
            Err(status_failure(response).await)
        }
    }
}
