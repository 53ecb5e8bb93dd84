//! HTTP transactional-mail transport.
//!
//! Posts messages as JSON to a configured mail-API endpoint. Any
//! non-success status or transport error surfaces as `EmailDelivery`.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use vilarica_core::config::mail::MailConfig;
use vilarica_core::{AppError, AppResult};

use crate::message::EmailMessage;
use crate::Mailer;

/// Mailer backed by a transactional-mail HTTP API.
#[derive(Debug, Clone)]
pub struct HttpMailer {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    from_address: String,
}

/// Request body shape expected by the mail API.
#[derive(Serialize)]
struct SendRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text: &'a str,
}

impl HttpMailer {
    /// Creates a new HTTP mailer from configuration.
    pub fn new(config: &MailConfig) -> AppResult<Self> {
        if config.endpoint.is_empty() {
            return Err(AppError::configuration(
                "mail.endpoint is required for the 'http' provider",
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::configuration(format!("Failed to build mail HTTP client: {e}"))
            })?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
            from_address: config.from_address.clone(),
        })
    }
}

#[async_trait]
impl Mailer for HttpMailer {
    async fn send(&self, message: &EmailMessage) -> AppResult<()> {
        debug!(to = %message.to, subject = %message.subject, "Dispatching email");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&SendRequest {
                from: &self.from_address,
                to: &message.to,
                subject: &message.subject,
                text: &message.body,
            })
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    vilarica_core::ErrorKind::EmailDelivery,
                    format!("Mail API request failed: {e}"),
                    e,
                )
            })?;

        if !response.status().is_success() {
            return Err(AppError::email_delivery(format!(
                "Mail API returned status {}",
                response.status()
            )));
        }

        Ok(())
    }
}
