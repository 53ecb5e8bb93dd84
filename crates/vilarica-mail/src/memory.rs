//! In-memory mail capture for tests.

use std::sync::Mutex;

use async_trait::async_trait;

use vilarica_core::{AppError, AppResult};

use crate::message::EmailMessage;
use crate::Mailer;

/// Mailer that records sent messages in memory.
///
/// Tests read captured messages back to assert on dispatched codes, and
/// can flip `fail_next` to exercise the delivery-failure path.
#[derive(Debug, Default)]
pub struct MemoryMailer {
    sent: Mutex<Vec<EmailMessage>>,
    fail_next: Mutex<bool>,
}

impl MemoryMailer {
    /// Creates an empty capture mailer.
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages sent so far, in order.
    pub fn sent(&self) -> Vec<EmailMessage> {
        self.sent.lock().expect("mailer lock poisoned").clone()
    }

    /// The most recently sent message, if any.
    pub fn last(&self) -> Option<EmailMessage> {
        self.sent.lock().expect("mailer lock poisoned").last().cloned()
    }

    /// Make the next `send` call fail with `EmailDelivery`.
    pub fn fail_next(&self) {
        *self.fail_next.lock().expect("mailer lock poisoned") = true;
    }
}

#[async_trait]
impl Mailer for MemoryMailer {
    async fn send(&self, message: &EmailMessage) -> AppResult<()> {
        let mut fail = self.fail_next.lock().expect("mailer lock poisoned");
        if *fail {
            *fail = false;
            return Err(AppError::email_delivery("Simulated mail transport failure"));
        }
        drop(fail);

        self.sent
            .lock()
            .expect("mailer lock poisoned")
            .push(message.clone());
        Ok(())
    }
}
