//! Vila Rica Server — Condominium Resident Management Backend
//!
//! Main entry point that wires all crates together and starts the server.

use std::str::FromStr;
use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use vilarica_core::config::{AppConfig, SeedConfig};
use vilarica_core::error::AppError;
use vilarica_database::repositories::account::AccountRepository;
use vilarica_entity::account::{AccountRole, CreateAccount};

#[tokio::main]
async fn main() {
    let env = std::env::var("VILARICA_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Vila Rica server v{}", env!("CARGO_PKG_VERSION"));

    tracing::info!("Connecting to database...");
    let db_pool = vilarica_database::connect(&config.database).await?;

    tracing::info!("Running database migrations...");
    vilarica_database::migration::run_migrations(&db_pool).await?;
    tracing::info!("Database migrations complete");

    if config.seed.enabled {
        seed_default_account(&config.seed, &db_pool).await?;
    }

    let mailer = vilarica_mail::from_config(&config.mail)?;
    tracing::info!(provider = %config.mail.provider, "Mail transport ready");

    let config = Arc::new(config);
    let state = vilarica_api::AppState::build(config.clone(), db_pool, mailer);
    let app = vilarica_api::build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("Vila Rica server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            tracing::info!("Shutdown signal received, starting graceful shutdown...");
        })
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    tracing::info!("Vila Rica server shut down gracefully");
    Ok(())
}

/// Create the configured default account if its email is not registered.
///
/// Keeps local client development working against an empty database.
async fn seed_default_account(seed: &SeedConfig, pool: &sqlx::PgPool) -> Result<(), AppError> {
    let repo = AccountRepository::new(pool.clone());

    if repo.find_by_email(&seed.email).await?.is_some() {
        tracing::debug!(email = %seed.email, "Seed account already present");
        return Ok(());
    }

    let role = AccountRole::from_str(&seed.role)?;
    let hasher = vilarica_auth::password::PasswordHasher::new();
    let password_hash = hasher.hash_password(&seed.password)?;

    repo.create(&CreateAccount {
        email: seed.email.clone(),
        name: seed.name.clone(),
        password_hash,
        role,
        bloco: None,
        apartamento: None,
        relacao: None,
        cpf: None,
        telefone: None,
        birth_date: None,
    })
    .await?;

    tracing::info!(email = %seed.email, "Seed account created");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
