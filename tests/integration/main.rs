//! End-to-end tests for the score service.
//!
//! Each test builds a fresh router, which stands in for a freshly started
//! process, and walks through the game's request sequence.

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::ServiceExt;

use snake_score::api::{create_router, AppState};

/// Fresh service with an empty store.
fn fresh_app() -> Router {
    create_router(AppState::new())
}

async fn get_high_score(app: &Router) -> Value {
    let request = Request::builder()
        .uri("/high-score")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response.into_body()).await
}

async fn submit(app: &Router, score: i64) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/high-score")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "score": score }).to_string()))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    (status, body_json(response.into_body()).await)
}

async fn body_json(body: Body) -> Value {
    let bytes = to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Scenario B: a fresh service records 42.
async fn app_with_42() -> Router {
    let app = fresh_app();
    let (status, body) = submit(&app, 42).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"highScore": 42}));
    app
}

#[tokio::test]
async fn scenario_a_fresh_start_reads_zero() {
    let app = fresh_app();
    assert_eq!(get_high_score(&app).await, json!({"highScore": 0}));
}

#[tokio::test]
async fn scenario_b_higher_score_is_recorded() {
    let app = app_with_42().await;
    assert_eq!(get_high_score(&app).await, json!({"highScore": 42}));
}

#[tokio::test]
async fn scenario_c_lower_score_keeps_record() {
    let app = app_with_42().await;

    let (status, body) = submit(&app, 10).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"highScore": 42}));
}

#[tokio::test]
async fn scenario_d_negative_score_is_rejected() {
    let app = app_with_42().await;

    let (status, body) = submit(&app, -5).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"detail": "Score must be 0 or higher."}));
    assert_eq!(get_high_score(&app).await, json!({"highScore": 42}));
}

#[tokio::test]
async fn scenario_e_equal_score_is_not_an_error() {
    let app = app_with_42().await;

    let (status, body) = submit(&app, 42).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"highScore": 42}));
}

#[tokio::test]
async fn health_is_ok_regardless_of_state() {
    let app = app_with_42().await;
    submit(&app, -1).await;

    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response.into_body()).await, json!({"status": "ok"}));
}

#[tokio::test]
async fn any_submission_order_ends_at_maximum() {
    let scores = [3, 250, 0, 17, 249, 250, 1];

    for rotation in 0..scores.len() {
        let app = fresh_app();
        let mut ordered = scores;
        ordered.rotate_left(rotation);

        for score in ordered {
            submit(&app, score).await;
        }

        assert_eq!(get_high_score(&app).await, json!({"highScore": 250}));
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_requests_do_not_lose_updates() {
    let app = fresh_app();

    let tasks: Vec<_> = (0..200i64)
        .map(|score| {
            let app = app.clone();
            tokio::spawn(async move { submit(&app, score).await })
        })
        .collect();

    for task in tasks {
        let (status, _) = task.await.unwrap();
        assert_eq!(status, StatusCode::OK);
    }

    assert_eq!(get_high_score(&app).await, json!({"highScore": 199}));
}
