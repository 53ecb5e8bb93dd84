//! Integration tests for comment threads under notices.

mod helpers;

use http::StatusCode;

async fn setup_notice(app: &helpers::TestApp) -> (String, String) {
    app.create_test_account("gestor@x.com", "password123", "sindico")
        .await;
    let manager = app.login("gestor@x.com", "password123").await;

    let created = app
        .request(
            "POST",
            "/api/notices",
            Some(serde_json::json!({
                "title": "Corte de energia",
                "startDate": "2026-09-01",
                "referentes": [{ "type": "Bloco", "value": 7 }],
            })),
            Some(&manager),
        )
        .await;
    let id = created.body["notice"]["id"].as_str().unwrap().to_string();

    (manager, id)
}

#[tokio::test]
async fn test_comment_and_reply_thread() {
    let app = helpers::TestApp::new().await;
    let (manager, notice_id) = setup_notice(&app).await;

    app.create_test_account("morador@x.com", "password123", "morador")
        .await;
    let resident = app.login("morador@x.com", "password123").await;

    // A resident asks a question.
    let response = app
        .request(
            "POST",
            &format!("/api/notices/{}/comments", notice_id),
            Some(serde_json::json!({ "text": "Quando volta?" })),
            Some(&resident),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    assert_eq!(response.body["comment"]["text"], "Quando volta?");
    assert_eq!(response.body["comment"]["authorName"], "morador");
    let comment_id = response.body["comment"]["id"].as_str().unwrap().to_string();

    // The manager answers in a reply.
    let response = app
        .request(
            "POST",
            &format!("/api/notices/{}/comments/{}/reply", notice_id, comment_id),
            Some(serde_json::json!({ "text": "Às 18h" })),
            Some(&manager),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    assert_eq!(response.body["reply"]["text"], "Às 18h");

    // The thread view nests replies under their comment.
    let response = app
        .request(
            "GET",
            &format!("/api/notices/{}/comments", notice_id),
            None,
            Some(&resident),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let comments = response.body["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0]["replies"][0]["text"], "Às 18h");
}

#[tokio::test]
async fn test_comment_requires_auth() {
    let app = helpers::TestApp::new().await;
    let (_, notice_id) = setup_notice(&app).await;

    let response = app
        .request(
            "POST",
            &format!("/api/notices/{}/comments", notice_id),
            Some(serde_json::json!({ "text": "anon" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_comment_rejects_blank_text() {
    let app = helpers::TestApp::new().await;
    let (manager, notice_id) = setup_notice(&app).await;

    let response = app
        .request(
            "POST",
            &format!("/api/notices/{}/comments", notice_id),
            Some(serde_json::json!({ "text": "   " })),
            Some(&manager),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_comment_on_unknown_notice() {
    let app = helpers::TestApp::new().await;
    let (manager, _) = setup_notice(&app).await;

    let response = app
        .request(
            "POST",
            "/api/notices/00000000-0000-0000-0000-000000000000/comments",
            Some(serde_json::json!({ "text": "eco" })),
            Some(&manager),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_reply_to_unknown_comment() {
    let app = helpers::TestApp::new().await;
    let (manager, notice_id) = setup_notice(&app).await;

    let response = app
        .request(
            "POST",
            &format!(
                "/api/notices/{}/comments/00000000-0000-0000-0000-000000000000/reply",
                notice_id
            ),
            Some(serde_json::json!({ "text": "eco" })),
            Some(&manager),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_reply_to_reply_is_rejected() {
    let app = helpers::TestApp::new().await;
    let (manager, notice_id) = setup_notice(&app).await;

    let comment = app
        .request(
            "POST",
            &format!("/api/notices/{}/comments", notice_id),
            Some(serde_json::json!({ "text": "pergunta" })),
            Some(&manager),
        )
        .await;
    let comment_id = comment.body["comment"]["id"].as_str().unwrap().to_string();

    let reply = app
        .request(
            "POST",
            &format!("/api/notices/{}/comments/{}/reply", notice_id, comment_id),
            Some(serde_json::json!({ "text": "resposta" })),
            Some(&manager),
        )
        .await;
    let reply_id = reply.body["reply"]["id"].as_str().unwrap().to_string();

    // A reply id is not addressable as a comment, so threads stay one deep.
    let response = app
        .request(
            "POST",
            &format!("/api/notices/{}/comments/{}/reply", notice_id, reply_id),
            Some(serde_json::json!({ "text": "tréplica" })),
            Some(&manager),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
