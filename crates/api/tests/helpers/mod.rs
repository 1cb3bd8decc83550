use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::{NaiveDate, NaiveDateTime};
use http_body_util::BodyExt;
use restriction_board_api::{create_api_routes, create_page_routes, AppState};
use restriction_board_application::{ports::Clock, BoardContext};
use restriction_board_infrastructure::repositories::InMemoryRestrictionRepository;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Noon on 1 January 2026.
pub fn test_clock() -> Arc<FixedClock> {
    Arc::new(FixedClock(
        NaiveDate::from_ymd_opt(2026, 1, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap(),
    ))
}

pub fn create_test_state() -> AppState {
    let board = BoardContext::new(
        Arc::new(InMemoryRestrictionRepository::seeded()),
        test_clock(),
        7,
    );
    AppState::new(board, "Test board")
}

pub fn create_test_app() -> Router {
    let state = create_test_state();
    Router::new()
        .merge(create_page_routes(state.clone()))
        .nest("/api", create_api_routes(state))
}

#[allow(dead_code)]
pub async fn get(app: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

#[allow(dead_code)]
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get(app, uri).await;
    (status, serde_json::from_slice(&body).unwrap())
}

#[allow(dead_code)]
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}
