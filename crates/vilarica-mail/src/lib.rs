//! # vilarica-mail
//!
//! Transactional email dispatch for the Vila Rica backend. The [`Mailer`]
//! trait is the seam the recovery service depends on; transports behind
//! it cover a transactional-mail HTTP API, a log-only mode for local
//! development, and an in-memory capture used by tests.

pub mod http;
pub mod log;
pub mod memory;
pub mod message;

use std::sync::Arc;

use async_trait::async_trait;

use vilarica_core::AppResult;

pub use http::HttpMailer;
pub use log::LogMailer;
pub use memory::MemoryMailer;
pub use message::EmailMessage;

/// Dispatches transactional email.
///
/// Implementations report only success or failure of the dispatch; the
/// caller decides what a failure means for already-committed state.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Send one message. `Ok(())` means the transport acknowledged it.
    async fn send(&self, message: &EmailMessage) -> AppResult<()>;
}

/// Build a mailer from configuration.
pub fn from_config(config: &vilarica_core::config::mail::MailConfig) -> AppResult<Arc<dyn Mailer>> {
    match config.provider.as_str() {
        "http" => Ok(Arc::new(HttpMailer::new(config)?)),
        "log" => Ok(Arc::new(LogMailer::new(config.from_address.clone()))),
        other => Err(vilarica_core::AppError::configuration(format!(
            "Unknown mail provider: '{other}'. Expected 'http' or 'log'"
        ))),
    }
}
