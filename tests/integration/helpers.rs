//! Shared test helpers for integration tests.

use std::str::FromStr;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use vilarica_core::config::AppConfig;
use vilarica_entity::account::AccountRole;
use vilarica_mail::MemoryMailer;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db_pool: PgPool,
    /// Application config
    pub config: AppConfig,
    /// Captured outgoing mail
    pub mailer: Arc<MemoryMailer>,
}

impl TestApp {
    /// Create a new test application
    pub async fn new() -> Self {
        let config = AppConfig::load_from("tests/fixtures/test_config")
            .expect("Failed to load test config");

        let db_pool = vilarica_database::connect(&config.database)
            .await
            .expect("Failed to connect to test database");

        vilarica_database::migration::run_migrations(&db_pool)
            .await
            .expect("Failed to run migrations");

        Self::clean_database(&db_pool).await;

        let mailer = Arc::new(MemoryMailer::new());

        let state = vilarica_api::AppState::build(
            Arc::new(config.clone()),
            db_pool.clone(),
            mailer.clone(),
        );
        let router = vilarica_api::build_router(state);

        Self {
            router,
            db_pool,
            config,
            mailer,
        }
    }

    /// Clean all test data from the database
    async fn clean_database(pool: &PgPool) {
        let tables = [
            "comment_replies",
            "comments",
            "notices",
            "recovery_codes",
            "accounts",
        ];

        for table in &tables {
            let query = format!("DELETE FROM {}", table);
            let _ = sqlx::query(&query).execute(pool).await;
        }
    }

    /// Create a test account and return its ID
    pub async fn create_test_account(&self, email: &str, password: &str, role: &str) -> Uuid {
        let hasher = vilarica_auth::password::PasswordHasher::new();
        let hash = hasher.hash_password(password).expect("Failed to hash password");
        let role = AccountRole::from_str(role).expect("Invalid test role");
        let id = Uuid::new_v4();

        sqlx::query(
            r#"INSERT INTO accounts (id, email, name, password_hash, role, created_at, updated_at)
               VALUES ($1, $2, $3, $4, $5, NOW(), NOW())"#,
        )
        .bind(id)
        .bind(email)
        .bind(email.split('@').next().unwrap_or(email))
        .bind(&hash)
        .bind(role)
        .execute(&self.db_pool)
        .await
        .expect("Failed to create test account");

        id
    }

    /// Login and return the session token
    pub async fn login(&self, email: &str, password: &str) -> String {
        let body = serde_json::json!({
            "email": email,
            "password": password,
        });

        let response = self.request("POST", "/login", Some(body), None).await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response
            .body
            .get("token")
            .and_then(|v| v.as_str())
            .expect("No token in login response")
            .to_string()
    }

    /// The recovery code currently stored for an account, if any
    pub async fn stored_recovery_code(&self, email: &str) -> Option<String> {
        sqlx::query_scalar(
            r#"SELECT rc.code FROM recovery_codes rc
               JOIN accounts a ON a.id = rc.account_id
               WHERE a.email = $1"#,
        )
        .bind(email)
        .fetch_optional(&self.db_pool)
        .await
        .expect("Failed to query recovery code")
    }

    /// Force the stored recovery code for an account into the past
    pub async fn expire_recovery_code(&self, email: &str) {
        sqlx::query(
            r#"UPDATE recovery_codes
               SET expires_at = NOW() - INTERVAL '1 minute'
               WHERE account_id = (SELECT id FROM accounts WHERE email = $1)"#,
        )
        .bind(email)
        .execute(&self.db_pool)
        .await
        .expect("Failed to expire recovery code");
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}
