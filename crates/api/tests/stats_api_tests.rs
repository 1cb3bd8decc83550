mod helpers;

use axum::http::StatusCode;
use helpers::*;
use serde_json::json;

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app();

    let (status, body) = get(&app, "/api/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"OK");
}

#[tokio::test]
async fn test_seed_stats() {
    let app = create_test_app();

    let (status, json) = get_json(&app, "/api/stats").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!({
            "blocked": 1,
            "restricted": 1,
            "warning": 0,
            "soft_blocked": 1,
            "total": 3
        })
    );
}
