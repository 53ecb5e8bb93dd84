//! Outgoing email message shape.

use serde::{Deserialize, Serialize};

/// One outgoing transactional email.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailMessage {
    /// Recipient address.
    pub to: String,
    /// Subject line.
    pub subject: String,
    /// Plain-text body.
    pub body: String,
}

impl EmailMessage {
    /// Build the password-recovery message carrying a code.
    pub fn recovery_code(to: &str, name: &str, code: &str) -> Self {
        Self {
            to: to.to_string(),
            subject: "Código de recuperação de senha".to_string(),
            body: format!(
                "Olá, {name}.\n\nSeu código de recuperação de senha é: {code}\n\n\
                 Se você não solicitou a recuperação, ignore este email."
            ),
        }
    }
}
