//! Transactional mail configuration.

use serde::{Deserialize, Serialize};

/// Mail transport configuration.
///
/// The `provider` field selects the transport implementation:
/// `"http"` posts to a transactional-mail HTTP API, `"log"` writes the
/// message to the application log instead of dispatching it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailConfig {
    /// Transport provider: `"http"` or `"log"`.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// HTTP API endpoint for the `"http"` provider.
    #[serde(default)]
    pub endpoint: String,
    /// API key sent as a bearer token to the mail API.
    #[serde(default)]
    pub api_key: String,
    /// Sender address placed on outgoing messages.
    #[serde(default = "default_from")]
    pub from_address: String,
    /// Request timeout for the mail API in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            endpoint: String::new(),
            api_key: String::new(),
            from_address: default_from(),
            timeout_seconds: default_timeout(),
        }
    }
}

fn default_provider() -> String {
    "log".to_string()
}

fn default_from() -> String {
    "no-reply@vilarica.app".to_string()
}

fn default_timeout() -> u64 {
    10
}
