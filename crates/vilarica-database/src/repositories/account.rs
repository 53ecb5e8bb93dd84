//! Account repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use vilarica_core::error::{AppError, ErrorKind};
use vilarica_core::result::AppResult;
use vilarica_entity::account::{Account, CreateAccount};

/// Repository for account persistence and lookup.
///
/// Emails are the natural key and are matched exactly as stored; no
/// case folding is applied.
#[derive(Debug, Clone)]
pub struct AccountRepository {
    pool: PgPool,
}

impl AccountRepository {
    /// Create a new account repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an account by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Account>> {
        sqlx::query_as::<_, Account>("SELECT * FROM accounts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find account by id", e)
            })
    }

    /// Find an account by its exact email.
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>> {
        sqlx::query_as::<_, Account>("SELECT * FROM accounts WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find account by email", e)
            })
    }

    /// List all accounts, ordered by display name.
    pub async fn find_all(&self) -> AppResult<Vec<Account>> {
        sqlx::query_as::<_, Account>("SELECT * FROM accounts ORDER BY name, email")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list accounts", e))
    }

    /// Insert a new account and return the stored row.
    pub async fn create(&self, data: &CreateAccount) -> AppResult<Account> {
        sqlx::query_as::<_, Account>(
            r#"
            INSERT INTO accounts
                (id, email, name, password_hash, role, bloco, apartamento,
                 relacao, cpf, telefone, birth_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&data.email)
        .bind(&data.name)
        .bind(&data.password_hash)
        .bind(data.role)
        .bind(&data.bloco)
        .bind(&data.apartamento)
        .bind(&data.relacao)
        .bind(&data.cpf)
        .bind(&data.telefone)
        .bind(data.birth_date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::conflict("An account with this email already exists")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create account", e),
        })
    }
}
