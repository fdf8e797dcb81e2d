use axum::{
    body::{to_bytes, Body},
    http::{header, Request},
};
use quotery_server::{api::app_router, build_state, config::Config};
use tower::ServiceExt;

fn test_router() -> axum::Router {
    let config = Config::from_env();
    let state = build_state();
    app_router(state, &config)
}

async fn get(app: axum::Router, uri: &str) -> axum::response::Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

fn cache_control(response: &axum::response::Response) -> &str {
    response
        .headers()
        .get(header::CACHE_CONTROL)
        .expect("Cache-Control header missing")
        .to_str()
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn healthz_works() {
    let response = get(test_router(), "/api/v1/healthz").await;
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn no_params_returns_a_random_quote() {
    let response = get(test_router(), "/api/v1/quotes").await;
    assert_eq!(response.status(), 200);
    assert_eq!(cache_control(&response), "public, max-age=60");

    let json = json_body(response).await;
    assert!(json.is_object());
    assert!(!json["id"].as_str().unwrap().is_empty());
    assert!(!json["text"].as_str().unwrap().is_empty());
    assert!(!json["author"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn lookup_by_id_returns_the_exact_quote() {
    let response = get(test_router(), "/api/v1/quotes?id=3").await;
    assert_eq!(response.status(), 200);
    assert_eq!(cache_control(&response), "public, max-age=86400");

    let json = json_body(response).await;
    assert_eq!(
        json,
        serde_json::json!({
            "id": "3",
            "text": "Your time is limited, so don't waste it living someone else's life.",
            "author": "Steve Jobs",
            "tags": ["life", "time"],
        })
    );
}

#[tokio::test]
async fn unknown_id_returns_404_with_error_payload() {
    let response = get(test_router(), "/api/v1/quotes?id=nonexistent").await;
    assert_eq!(response.status(), 404);
    assert_eq!(cache_control(&response), "no-cache");

    let json = json_body(response).await;
    assert_eq!(json["error"], "Quote not found");
    assert!(!json["message"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn lookup_by_tag_returns_matches_in_seed_order() {
    let response = get(test_router(), "/api/v1/quotes?tag=motivation").await;
    assert_eq!(response.status(), 200);
    assert_eq!(cache_control(&response), "public, max-age=3600");

    let json = json_body(response).await;
    let ids: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["2", "8"]);
}

#[tokio::test]
async fn unknown_tag_returns_404_with_error_payload() {
    let response = get(test_router(), "/api/v1/quotes?tag=nonexistent-tag").await;
    assert_eq!(response.status(), 404);
    assert_eq!(cache_control(&response), "no-cache");

    let json = json_body(response).await;
    assert_eq!(json["error"], "No quotes found");
}

#[tokio::test]
async fn id_takes_precedence_over_tag() {
    let response = get(test_router(), "/api/v1/quotes?id=3&tag=motivation").await;
    assert_eq!(response.status(), 200);

    let json = json_body(response).await;
    assert_eq!(json["id"], "3");
}
