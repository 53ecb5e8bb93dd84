//! Registration and login.

use std::str::FromStr;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use vilarica_auth::password::{PasswordHasher, PasswordPolicy};
use vilarica_auth::token::TokenEncoder;
use vilarica_core::config::AuthConfig;
use vilarica_core::{AppError, AppResult};
use vilarica_database::repositories::account::AccountRepository;
use vilarica_entity::account::{Account, AccountRole, CreateAccount};

/// Handles account registration and login.
pub struct AuthService {
    account_repo: Arc<AccountRepository>,
    hasher: Arc<PasswordHasher>,
    policy: PasswordPolicy,
    encoder: Arc<TokenEncoder>,
}

/// Registration input as submitted by the client.
///
/// Field names follow the mobile client's register form; `tipo_acesso`
/// carries the role and `birth_date` the client's `dd/mm/yyyy` string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterData {
    /// Email address (unique key).
    pub email: String,
    /// Plaintext password, validated and hashed here.
    pub password: String,
    /// Display name.
    pub name: String,
    /// Block number.
    pub bloco: Option<String>,
    /// Apartment/unit number.
    pub apartamento: Option<String>,
    /// Relationship to the unit.
    pub relacao: Option<String>,
    /// CPF document number.
    pub cpf: Option<String>,
    /// Contact phone number.
    pub telefone: Option<String>,
    /// Date of birth as sent by the client.
    pub birth_date: Option<String>,
    /// Requested role ("morador", "sindico", "resident", "manager").
    pub tipo_acesso: String,
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginResult {
    /// The authenticated account (password hash not serialized).
    pub account: Account,
    /// Signed session token.
    pub token: String,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        config: &AuthConfig,
        account_repo: Arc<AccountRepository>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<TokenEncoder>,
    ) -> Self {
        Self {
            account_repo,
            hasher,
            policy: PasswordPolicy::new(config),
            encoder,
        }
    }

    /// Register a new account.
    ///
    /// The role string is validated into the closed enum here, at write
    /// time, so no later read needs to normalize it.
    pub async fn register(&self, data: RegisterData) -> AppResult<Account> {
        if data.email.trim().is_empty() || data.name.trim().is_empty() {
            return Err(AppError::validation("Email and name are required"));
        }
        if !data.email.contains('@') {
            return Err(AppError::validation("Invalid email format"));
        }

        self.policy.validate(&data.password)?;

        let role = AccountRole::from_str(&data.tipo_acesso)?;
        let birth_date = data.birth_date.as_deref().map(parse_client_date).transpose()?;

        if self.account_repo.find_by_email(&data.email).await?.is_some() {
            return Err(AppError::conflict("An account with this email already exists"));
        }

        let password_hash = self.hasher.hash_password(&data.password)?;

        let account = self
            .account_repo
            .create(&CreateAccount {
                email: data.email,
                name: data.name,
                password_hash,
                role,
                bloco: data.bloco,
                apartamento: data.apartamento,
                relacao: data.relacao,
                cpf: data.cpf,
                telefone: data.telefone,
                birth_date,
            })
            .await?;

        info!(account_id = %account.id, role = %account.role, "Account registered");
        Ok(account)
    }

    /// Authenticate an account and issue a session token.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<LoginResult> {
        let account = self
            .account_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::not_found("Account not found"))?;

        let valid = self.hasher.verify_password(password, &account.password_hash)?;
        if !valid {
            return Err(AppError::authentication("Incorrect password"));
        }

        let token = self.encoder.generate(&account)?;

        info!(account_id = %account.id, "Login successful");
        Ok(LoginResult { account, token })
    }
}

/// Parse the client's date formats: `dd/mm/yyyy` (register form) or ISO
/// `yyyy-mm-dd`.
fn parse_client_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%d/%m/%Y")
        .or_else(|_| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
        .map_err(|_| AppError::validation(format!("Invalid date: '{s}'")))
}
