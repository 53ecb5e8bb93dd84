//! Integration tests for registration and login.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_login_success() {
    let app = helpers::TestApp::new().await;
    app.create_test_account("ana@x.com", "password123", "morador")
        .await;

    let response = app
        .request(
            "POST",
            "/login",
            Some(serde_json::json!({
                "email": "ana@x.com",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["ok"], true);
    assert!(response.body["token"].as_str().is_some());
    assert_eq!(response.body["user"]["email"], "ana@x.com");
    assert_eq!(response.body["user"]["role"], "resident");
    assert!(
        response.body["user"].get("passwordHash").is_none(),
        "password hash must never be serialized"
    );
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = helpers::TestApp::new().await;
    app.create_test_account("ana@x.com", "password123", "morador")
        .await;

    let response = app
        .request(
            "POST",
            "/login",
            Some(serde_json::json!({
                "email": "ana@x.com",
                "password": "wrong",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["ok"], false);
}

#[tokio::test]
async fn test_login_unknown_email() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/login",
            Some(serde_json::json!({
                "email": "nobody@x.com",
                "password": "whatever",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_login_email_is_case_sensitive() {
    let app = helpers::TestApp::new().await;
    app.create_test_account("ana@x.com", "password123", "morador")
        .await;

    let response = app
        .request(
            "POST",
            "/login",
            Some(serde_json::json!({
                "email": "Ana@x.com",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_login_missing_fields() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/login",
            Some(serde_json::json!({ "email": "ana@x.com" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_success() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "email": "novo@x.com",
                "password": "abcdef",
                "name": "Novo Morador",
                "bloco": "7",
                "apartamento": "42",
                "relacao": "proprietário",
                "birthDate": "05/03/1990",
                "tipoAcesso": "morador",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    assert_eq!(response.body["user"]["role"], "resident");
    assert_eq!(response.body["user"]["bloco"], "7");
    assert_eq!(response.body["user"]["birthDate"], "1990-03-05");

    // The new account can log in straight away.
    app.login("novo@x.com", "abcdef").await;
}

#[tokio::test]
async fn test_register_accented_manager_role() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "email": "sindico@x.com",
                "password": "abcdef",
                "name": "Sindico",
                "tipoAcesso": "síndico",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    assert_eq!(response.body["user"]["role"], "manager");
}

#[tokio::test]
async fn test_register_rejects_unknown_role() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "email": "x@x.com",
                "password": "abcdef",
                "name": "X",
                "tipoAcesso": "porteiro",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_rejects_short_password() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "email": "x@x.com",
                "password": "abcde",
                "name": "X",
                "tipoAcesso": "morador",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "WEAK_CREDENTIAL");
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = helpers::TestApp::new().await;
    app.create_test_account("ana@x.com", "password123", "morador")
        .await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "email": "ana@x.com",
                "password": "abcdef",
                "name": "Ana Again",
                "tipoAcesso": "morador",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_directory_requires_auth() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/users", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_directory_lists_accounts() {
    let app = helpers::TestApp::new().await;
    app.create_test_account("ana@x.com", "password123", "morador")
        .await;
    app.create_test_account("beto@x.com", "password123", "sindico")
        .await;

    let token = app.login("ana@x.com", "password123").await;
    let response = app.request("GET", "/api/users", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    let users = response.body["users"].as_array().unwrap();
    assert_eq!(users.len(), 2);
}

#[tokio::test]
async fn test_health_reports_database() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["ok"], true);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["database"], "connected");
}
