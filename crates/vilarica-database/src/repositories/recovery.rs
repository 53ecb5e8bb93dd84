//! Recovery code repository implementation.
//!
//! The `recovery_codes` table is keyed by account id, so an account holds
//! at most one outstanding code; issuing a new one supersedes the old via
//! upsert. Consumption happens inside the password-reset transaction with
//! a conditional delete keyed on the code value the caller presented, so
//! two concurrent resets cannot both consume the same code.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use vilarica_core::error::{AppError, ErrorKind};
use vilarica_core::result::AppResult;
use vilarica_entity::recovery::RecoveryCode;

/// Repository for recovery-code persistence and the consuming reset
/// transaction.
#[derive(Debug, Clone)]
pub struct RecoveryCodeRepository {
    pool: PgPool,
}

impl RecoveryCodeRepository {
    /// Create a new recovery-code repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Store a code for an account, superseding any outstanding one.
    pub async fn upsert(
        &self,
        account_id: Uuid,
        code: &str,
        issued_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> AppResult<RecoveryCode> {
        sqlx::query_as::<_, RecoveryCode>(
            r#"
            INSERT INTO recovery_codes (account_id, code, issued_at, expires_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (account_id)
            DO UPDATE SET code = $2, issued_at = $3, expires_at = $4
            RETURNING *
            "#,
        )
        .bind(account_id)
        .bind(code)
        .bind(issued_at)
        .bind(expires_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to store recovery code", e)
        })
    }

    /// Find the outstanding code for an account, if any.
    pub async fn find_by_account(&self, account_id: Uuid) -> AppResult<Option<RecoveryCode>> {
        sqlx::query_as::<_, RecoveryCode>("SELECT * FROM recovery_codes WHERE account_id = $1")
            .bind(account_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find recovery code", e)
            })
    }

    /// Consume the code and overwrite the account credential atomically.
    ///
    /// Returns `false` when no unexpired row matched the presented code,
    /// in which case nothing was changed. The conditional delete and the
    /// credential update commit together or not at all.
    pub async fn consume_for_reset(
        &self,
        account_id: Uuid,
        code: &str,
        new_password_hash: &str,
    ) -> AppResult<bool> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin reset transaction", e)
        })?;

        let consumed: Option<Uuid> = sqlx::query_scalar(
            r#"
            DELETE FROM recovery_codes
            WHERE account_id = $1 AND code = $2 AND expires_at > NOW()
            RETURNING account_id
            "#,
        )
        .bind(account_id)
        .bind(code)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to consume recovery code", e)
        })?;

        if consumed.is_none() {
            tx.rollback().await.map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to roll back reset", e)
            })?;
            return Ok(false);
        }

        sqlx::query("UPDATE accounts SET password_hash = $2, updated_at = NOW() WHERE id = $1")
            .bind(account_id)
            .bind(new_password_hash)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to update credential", e)
            })?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit reset transaction", e)
        })?;

        Ok(true)
    }
}
