//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use vilarica_auth::password::PasswordHasher;
use vilarica_auth::token::{TokenDecoder, TokenEncoder};
use vilarica_core::config::AppConfig;
use vilarica_database::repositories::account::AccountRepository;
use vilarica_database::repositories::comment::CommentRepository;
use vilarica_database::repositories::notice::NoticeRepository;
use vilarica_database::repositories::recovery::RecoveryCodeRepository;
use vilarica_mail::Mailer;
use vilarica_service::auth::AuthService;
use vilarica_service::comment::CommentService;
use vilarica_service::directory::DirectoryService;
use vilarica_service::notice::NoticeService;
use vilarica_service::recovery::RecoveryService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,
    /// Session token validator.
    pub token_decoder: Arc<TokenDecoder>,
    /// Account repository (used by the startup seed and tests).
    pub account_repo: Arc<AccountRepository>,
    /// Registration and login.
    pub auth_service: Arc<AuthService>,
    /// Password recovery state machine.
    pub recovery_service: Arc<RecoveryService>,
    /// Notice registry.
    pub notice_service: Arc<NoticeService>,
    /// Comment threads.
    pub comment_service: Arc<CommentService>,
    /// Resident directory.
    pub directory_service: Arc<DirectoryService>,
}

impl AppState {
    /// Wire repositories and services around a connected pool.
    ///
    /// The mailer is injected so the binary can pick a transport from
    /// configuration while tests pass an in-memory capture.
    pub fn build(config: Arc<AppConfig>, db_pool: PgPool, mailer: Arc<dyn Mailer>) -> Self {
        let account_repo = Arc::new(AccountRepository::new(db_pool.clone()));
        let recovery_repo = Arc::new(RecoveryCodeRepository::new(db_pool.clone()));
        let notice_repo = Arc::new(NoticeRepository::new(db_pool.clone()));
        let comment_repo = Arc::new(CommentRepository::new(db_pool.clone()));

        let hasher = Arc::new(PasswordHasher::new());
        let token_encoder = Arc::new(TokenEncoder::new(&config.auth));
        let token_decoder = Arc::new(TokenDecoder::new(&config.auth));

        let auth_service = Arc::new(AuthService::new(
            &config.auth,
            account_repo.clone(),
            hasher.clone(),
            token_encoder,
        ));
        let recovery_service = Arc::new(RecoveryService::new(
            &config.auth,
            account_repo.clone(),
            recovery_repo,
            mailer,
            hasher,
        ));
        let notice_service = Arc::new(NoticeService::new(notice_repo.clone()));
        let comment_service = Arc::new(CommentService::new(comment_repo, notice_repo));
        let directory_service = Arc::new(DirectoryService::new(account_repo.clone()));

        Self {
            config,
            db_pool,
            token_decoder,
            account_repo,
            auth_service,
            recovery_service,
            notice_service,
            comment_service,
            directory_service,
        }
    }
}
