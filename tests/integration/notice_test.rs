//! Integration tests for the notice registry.

mod helpers;

use http::StatusCode;

async fn manager_token(app: &helpers::TestApp) -> String {
    app.create_test_account("gestor@x.com", "password123", "sindico")
        .await;
    app.login("gestor@x.com", "password123").await
}

async fn resident_token(app: &helpers::TestApp) -> String {
    app.create_test_account("morador@x.com", "password123", "morador")
        .await;
    app.login("morador@x.com", "password123").await
}

#[tokio::test]
async fn test_manager_creates_notice() {
    let app = helpers::TestApp::new().await;
    let token = manager_token(&app).await;

    let response = app
        .request(
            "POST",
            "/api/notices",
            Some(serde_json::json!({
                "title": "Corte de energia",
                "description": "Manutenção no transformador",
                "startDate": "2026-09-01",
                "endDate": "2026-09-01",
                "referentes": [{ "type": "Bloco", "value": 7 }],
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    assert_eq!(response.body["notice"]["title"], "Corte de energia");
    assert_eq!(response.body["notice"]["status"], "active");
    assert_eq!(response.body["notice"]["referentes"][0]["type"], "Bloco");
    assert_eq!(response.body["notice"]["referentes"][0]["value"], 7);
}

#[tokio::test]
async fn test_resident_cannot_create_notice() {
    let app = helpers::TestApp::new().await;
    let token = resident_token(&app).await;

    let response = app
        .request(
            "POST",
            "/api/notices",
            Some(serde_json::json!({
                "title": "Festa",
                "startDate": "2026-09-01",
                "referentes": [{ "type": "Todos", "value": "Todos" }],
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_create_rejects_empty_audience() {
    let app = helpers::TestApp::new().await;
    let token = manager_token(&app).await;

    let response = app
        .request(
            "POST",
            "/api/notices",
            Some(serde_json::json!({
                "title": "Sem alvo",
                "startDate": "2026-09-01",
                "referentes": [],
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "INVALID_REFERENCE_SET");
}

#[tokio::test]
async fn test_create_rejects_todos_mixed_with_specific() {
    let app = helpers::TestApp::new().await;
    let token = manager_token(&app).await;

    let response = app
        .request(
            "POST",
            "/api/notices",
            Some(serde_json::json!({
                "title": "Alvo ambíguo",
                "startDate": "2026-09-01",
                "referentes": [
                    { "type": "Todos", "value": "Todos" },
                    { "type": "Bloco", "value": 2 },
                ],
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "INVALID_REFERENCE_SET");
}

#[tokio::test]
async fn test_list_newest_first() {
    let app = helpers::TestApp::new().await;
    let token = manager_token(&app).await;

    for title in ["Primeiro", "Segundo"] {
        app.request(
            "POST",
            "/api/notices",
            Some(serde_json::json!({
                "title": title,
                "startDate": "2026-09-01",
                "referentes": [{ "type": "Todos", "value": "Todos" }],
            })),
            Some(&token),
        )
        .await;
    }

    let response = app.request("GET", "/api/notices", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);

    let notices = response.body["notices"].as_array().unwrap();
    assert_eq!(notices.len(), 2);
    assert_eq!(notices[0]["title"], "Segundo");
    assert_eq!(notices[1]["title"], "Primeiro");
}

#[tokio::test]
async fn test_manager_closes_notice() {
    let app = helpers::TestApp::new().await;
    let token = manager_token(&app).await;

    let created = app
        .request(
            "POST",
            "/api/notices",
            Some(serde_json::json!({
                "title": "Obra",
                "startDate": "2026-09-01",
                "referentes": [{ "type": "Todos", "value": "Todos" }],
            })),
            Some(&token),
        )
        .await;
    let id = created.body["notice"]["id"].as_str().unwrap().to_string();

    let response = app
        .request(
            "PUT",
            &format!("/api/notices/{}", id),
            Some(serde_json::json!({ "status": "closed" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["notice"]["status"], "closed");
}

#[tokio::test]
async fn test_status_update_rejects_unknown_value() {
    let app = helpers::TestApp::new().await;
    let token = manager_token(&app).await;

    let created = app
        .request(
            "POST",
            "/api/notices",
            Some(serde_json::json!({
                "title": "Obra",
                "startDate": "2026-09-01",
                "referentes": [{ "type": "Todos", "value": "Todos" }],
            })),
            Some(&token),
        )
        .await;
    let id = created.body["notice"]["id"].as_str().unwrap().to_string();

    let response = app
        .request(
            "PUT",
            &format!("/api/notices/{}", id),
            Some(serde_json::json!({ "status": "archived" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "INVALID_STATUS");
}

#[tokio::test]
async fn test_resident_cannot_change_status() {
    let app = helpers::TestApp::new().await;
    let manager = manager_token(&app).await;
    let resident = resident_token(&app).await;

    let created = app
        .request(
            "POST",
            "/api/notices",
            Some(serde_json::json!({
                "title": "Obra",
                "startDate": "2026-09-01",
                "referentes": [{ "type": "Todos", "value": "Todos" }],
            })),
            Some(&manager),
        )
        .await;
    let id = created.body["notice"]["id"].as_str().unwrap().to_string();

    let response = app
        .request(
            "PUT",
            &format!("/api/notices/{}", id),
            Some(serde_json::json!({ "status": "closed" })),
            Some(&resident),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_create_without_start_date_is_validation_error() {
    let app = helpers::TestApp::new().await;
    let token = manager_token(&app).await;

    let response = app
        .request(
            "POST",
            "/api/notices",
            Some(serde_json::json!({
                "title": "Sem data",
                "referentes": [{ "type": "Todos", "value": "Todos" }],
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST, "{:?}", response.body);
    assert_eq!(response.body["ok"], false);
    assert_eq!(response.body["error"], "VALIDATION");
}

#[tokio::test]
async fn test_get_reflects_closed_status() {
    let app = helpers::TestApp::new().await;
    let token = manager_token(&app).await;

    let created = app
        .request(
            "POST",
            "/api/notices",
            Some(serde_json::json!({
                "title": "Dedetização",
                "startDate": "2026-09-01",
                "referentes": [{ "type": "Todos", "value": "Todos" }],
            })),
            Some(&token),
        )
        .await;
    let id = created.body["notice"]["id"].as_str().unwrap().to_string();

    app.request(
        "PUT",
        &format!("/api/notices/{}", id),
        Some(serde_json::json!({ "status": "closed" })),
        Some(&token),
    )
    .await;

    let response = app
        .request("GET", &format!("/api/notices/{}", id), None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["notice"]["title"], "Dedetização");
    assert_eq!(response.body["notice"]["status"], "closed");
}

#[tokio::test]
async fn test_get_unknown_notice() {
    let app = helpers::TestApp::new().await;
    let token = manager_token(&app).await;

    let response = app
        .request(
            "GET",
            "/api/notices/00000000-0000-0000-0000-000000000000",
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_status_update_unknown_notice() {
    let app = helpers::TestApp::new().await;
    let token = manager_token(&app).await;

    let response = app
        .request(
            "PUT",
            "/api/notices/00000000-0000-0000-0000-000000000000",
            Some(serde_json::json!({ "status": "closed" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
