use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use tower::ServiceExt;

use banq_accounts::{Bank, BankConfig};
use banq_server::{
    app::{AppConfig, BanqApp},
    server,
};

async fn init_router(seed_demo_data: bool) -> anyhow::Result<Router> {
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;
    let bank = Bank::init(
        BankConfig::builder()
            .pool(pool)
            .exec_migrations(true)
            .build()?,
    )
    .await?;
    let app = BanqApp::run(bank, AppConfig { seed_demo_data }).await?;
    Ok(server::router(app))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("valid request")
}

fn with_json_body(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("valid request")
}

async fn body_json(response: Response) -> anyhow::Result<serde_json::Value> {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

async fn body_text(response: Response) -> anyhow::Result<String> {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    Ok(String::from_utf8(bytes.to_vec())?)
}

#[tokio::test]
async fn create_returns_created_account_with_assigned_id() -> anyhow::Result<()> {
    let router = init_router(false).await?;

    let response = router
        .oneshot(with_json_body(
            "POST",
            "/accounts",
            r#"{"balance": 100.5, "creationDate": "2024-03-15", "accountType": "CURRENT"}"#,
        ))
        .await?;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await?;
    assert!(json["id"].is_i64());
    assert_eq!(json["balance"], 100.5);
    assert_eq!(json["creationDate"], "2024-03-15");
    assert_eq!(json["accountType"], "CURRENT");
    Ok(())
}

#[tokio::test]
async fn create_discards_caller_supplied_id() -> anyhow::Result<()> {
    let router = init_router(false).await?;

    let response = router
        .oneshot(with_json_body(
            "POST",
            "/accounts",
            r#"{"id": 999, "balance": 1.0, "creationDate": "2024-03-15", "accountType": "SAVINGS"}"#,
        ))
        .await?;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await?;
    assert_eq!(json["id"], 1);
    Ok(())
}

#[tokio::test]
async fn create_without_body_is_bad_request() -> anyhow::Result<()> {
    let router = init_router(false).await?;

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/accounts")
                .body(Body::empty())?,
        )
        .await?;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn get_missing_account_is_not_found() -> anyhow::Result<()> {
    let router = init_router(false).await?;

    let response = router.oneshot(get("/accounts/42")).await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn non_numeric_id_is_bad_request() -> anyhow::Result<()> {
    let router = init_router(false).await?;

    let response = router.oneshot(get("/accounts/abc")).await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn update_replaces_fields_and_keeps_id() -> anyhow::Result<()> {
    let router = init_router(false).await?;

    let response = router
        .clone()
        .oneshot(with_json_body(
            "POST",
            "/accounts",
            r#"{"balance": 100.0, "creationDate": "2024-03-15", "accountType": "CURRENT"}"#,
        ))
        .await?;
    let created = body_json(response).await?;
    let id = created["id"].as_i64().expect("assigned id");

    let response = router
        .clone()
        .oneshot(with_json_body(
            "PUT",
            &format!("/accounts/{id}"),
            r#"{"balance": -25.0, "creationDate": "2025-01-01", "accountType": "SAVINGS"}"#,
        ))
        .await?;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await?;
    assert_eq!(updated["id"], id);
    assert_eq!(updated["balance"], -25.0);
    assert_eq!(updated["creationDate"], "2025-01-01");
    assert_eq!(updated["accountType"], "SAVINGS");

    let response = router.oneshot(get(&format!("/accounts/{id}"))).await?;
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = body_json(response).await?;
    assert_eq!(fetched, updated);
    Ok(())
}

#[tokio::test]
async fn update_missing_account_is_not_found() -> anyhow::Result<()> {
    let router = init_router(false).await?;

    let response = router
        .oneshot(with_json_body(
            "PUT",
            "/accounts/42",
            r#"{"balance": 1.0, "creationDate": "2024-03-15", "accountType": "CURRENT"}"#,
        ))
        .await?;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn delete_returns_no_content_then_not_found() -> anyhow::Result<()> {
    let router = init_router(true).await?;

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/accounts/1")
                .body(Body::empty())?,
        )
        .await?;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = router
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/accounts/1")
                .body(Body::empty())?,
        )
        .await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn unknown_type_is_bad_request_listing_valid_values() -> anyhow::Result<()> {
    let router = init_router(false).await?;

    let response = router.oneshot(get("/accounts/type/GOLD")).await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await?;
    let message = json["error"].as_str().expect("error message");
    assert!(message.contains("CURRENT"));
    assert!(message.contains("SAVINGS"));
    Ok(())
}

#[tokio::test]
async fn type_filter_is_case_insensitive() -> anyhow::Result<()> {
    let router = init_router(true).await?;

    let response = router.oneshot(get("/accounts/type/savings")).await?;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await?;
    assert_eq!(json.as_array().expect("array").len(), 3);
    Ok(())
}

#[tokio::test]
async fn balance_filter_is_strictly_greater() -> anyhow::Result<()> {
    let router = init_router(true).await?;

    let response = router
        .clone()
        .oneshot(get("/accounts/balance-min/5000"))
        .await?;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await?;
    assert_eq!(json.as_array().expect("array").len(), 3);

    // 7600 is a seeded balance; strict inequality excludes it.
    let response = router
        .oneshot(get("/accounts/balance-min/7600"))
        .await?;
    let json = body_json(response).await?;
    assert_eq!(json.as_array().expect("array").len(), 2);
    Ok(())
}

#[tokio::test]
async fn non_numeric_balance_threshold_is_bad_request() -> anyhow::Result<()> {
    let router = init_router(false).await?;

    let response = router.oneshot(get("/accounts/balance-min/lots")).await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn statistics_reports_totals_per_type() -> anyhow::Result<()> {
    let router = init_router(true).await?;

    let response = router.oneshot(get("/accounts/statistics")).await?;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await?;
    assert_eq!(json["total"], 5);
    assert_eq!(json["current"], 2);
    assert_eq!(json["savings"], 3);
    Ok(())
}

#[tokio::test]
async fn exists_reports_id_and_flag() -> anyhow::Result<()> {
    let router = init_router(true).await?;

    let response = router.clone().oneshot(get("/accounts/1/exists")).await?;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await?;
    assert_eq!(json, serde_json::json!({"id": 1, "exists": true}));

    let response = router.oneshot(get("/accounts/42/exists")).await?;
    let json = body_json(response).await?;
    assert_eq!(json, serde_json::json!({"id": 42, "exists": false}));
    Ok(())
}

#[tokio::test]
async fn list_returns_all_accounts() -> anyhow::Result<()> {
    let router = init_router(true).await?;

    let response = router.oneshot(get("/accounts")).await?;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await?;
    assert_eq!(json.as_array().expect("array").len(), 5);
    Ok(())
}

#[tokio::test]
async fn health_reports_running_status_and_count() -> anyhow::Result<()> {
    let router = init_router(true).await?;

    let response = router.oneshot(get("/accounts/health")).await?;
    assert_eq!(response.status(), StatusCode::OK);
    let text = body_text(response).await?;
    assert!(text.contains("running"));
    assert!(text.contains('5'));
    Ok(())
}
