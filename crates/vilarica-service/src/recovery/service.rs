//! The password-recovery state machine.
//!
//! Three steps, each an independent request:
//!
//! 1. **issue_code** — bind a fresh code to the account and email it.
//! 2. **verify_code** — check a candidate without consuming the code,
//!    so the client can move to the reset screen while it stays valid.
//! 3. **reset_password** — re-validate and consume the code while
//!    overwriting the credential, in one transaction.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::{info, warn};

use vilarica_auth::password::{PasswordHasher, PasswordPolicy};
use vilarica_auth::recovery::CodeGenerator;
use vilarica_core::config::AuthConfig;
use vilarica_core::{AppError, AppResult};
use vilarica_database::repositories::account::AccountRepository;
use vilarica_database::repositories::recovery::RecoveryCodeRepository;
use vilarica_entity::account::Account;
use vilarica_mail::{EmailMessage, Mailer};

/// Orchestrates recovery-code issuance, verification, and the consuming
/// password reset.
pub struct RecoveryService {
    account_repo: Arc<AccountRepository>,
    recovery_repo: Arc<RecoveryCodeRepository>,
    mailer: Arc<dyn Mailer>,
    generator: CodeGenerator,
    hasher: Arc<PasswordHasher>,
    policy: PasswordPolicy,
    code_ttl_minutes: i64,
}

impl RecoveryService {
    /// Creates a new recovery service.
    pub fn new(
        config: &AuthConfig,
        account_repo: Arc<AccountRepository>,
        recovery_repo: Arc<RecoveryCodeRepository>,
        mailer: Arc<dyn Mailer>,
        hasher: Arc<PasswordHasher>,
    ) -> Self {
        Self {
            account_repo,
            recovery_repo,
            mailer,
            generator: CodeGenerator::new(config),
            hasher,
            policy: PasswordPolicy::new(config),
            code_ttl_minutes: config.recovery_code_ttl_minutes as i64,
        }
    }

    /// Issue a fresh recovery code for the account and email it.
    ///
    /// The code is persisted before dispatch. If the mail transport then
    /// fails, the stored code stays valid and the caller sees
    /// `EmailDelivery`: retrying simply issues a new code that supersedes
    /// the stranded one.
    pub async fn issue_code(&self, email: &str) -> AppResult<()> {
        let account = self.find_account(email).await?;

        let code = self.generator.generate();
        let issued_at = Utc::now();
        let expires_at = issued_at + Duration::minutes(self.code_ttl_minutes);

        self.recovery_repo
            .upsert(account.id, &code, issued_at, expires_at)
            .await?;

        info!(account_id = %account.id, "Recovery code issued");

        let message = EmailMessage::recovery_code(&account.email, &account.name, &code);
        if let Err(e) = self.mailer.send(&message).await {
            warn!(
                account_id = %account.id,
                error = %e,
                "Recovery code persisted but email dispatch failed"
            );
            return Err(e);
        }

        Ok(())
    }

    /// Verify a candidate code without consuming it.
    ///
    /// Comparison is exact and case-sensitive; an absent or expired code
    /// fails the same way as a mismatch.
    pub async fn verify_code(&self, email: &str, candidate: &str) -> AppResult<()> {
        let account = self.find_account(email).await?;

        let stored = self
            .recovery_repo
            .find_by_account(account.id)
            .await?
            .ok_or_else(|| AppError::invalid_code("No recovery code outstanding"))?;

        if !stored.matches(candidate) {
            return Err(AppError::invalid_code("Recovery code is invalid or expired"));
        }

        Ok(())
    }

    /// Reset the account credential using a valid code.
    ///
    /// The password policy runs before any store access. The code is then
    /// re-validated and consumed inside the same transaction that writes
    /// the new credential: the consume is conditional on the presented
    /// code still being the stored, unexpired one, so a concurrent
    /// re-issue or a second reset attempt loses cleanly.
    pub async fn reset_password(
        &self,
        email: &str,
        code: &str,
        new_password: &str,
    ) -> AppResult<()> {
        self.policy.validate(new_password)?;

        let account = self.find_account(email).await?;

        let new_hash = self.hasher.hash_password(new_password)?;

        let consumed = self
            .recovery_repo
            .consume_for_reset(account.id, code, &new_hash)
            .await?;

        if !consumed {
            return Err(AppError::invalid_code("Recovery code is invalid or expired"));
        }

        info!(account_id = %account.id, "Password reset completed");
        Ok(())
    }

    async fn find_account(&self, email: &str) -> AppResult<Account> {
        self.account_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::not_found("Account not found"))
    }
}
