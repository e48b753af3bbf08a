use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use similar_products_api::{
    config::UpstreamConfig, routes::create_app, state::AppState, upstream::UpstreamClient,
};
use tower::ServiceExt;

// Health must answer without touching the upstream, so nothing listens behind the client.
#[tokio::test]
async fn health_check_is_served_without_upstream() {
    let upstream = UpstreamClient::new(&UpstreamConfig::default()).expect("upstream client");
    let app = create_app(AppState::new(upstream));

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["message"], "Health check");
    assert_eq!(body["data"]["status"], "ok");
}
