//! Log-only mail transport for local development.

use async_trait::async_trait;
use tracing::info;

use vilarica_core::AppResult;

use crate::message::EmailMessage;
use crate::Mailer;

/// Mailer that writes messages to the application log instead of
/// dispatching them. Always succeeds.
#[derive(Debug, Clone)]
pub struct LogMailer {
    from_address: String,
}

impl LogMailer {
    /// Creates a new log mailer.
    pub fn new(from_address: String) -> Self {
        Self { from_address }
    }
}

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, message: &EmailMessage) -> AppResult<()> {
        info!(
            from = %self.from_address,
            to = %message.to,
            subject = %message.subject,
            body = %message.body,
            "Email (log transport, not dispatched)"
        );
        Ok(())
    }
}
