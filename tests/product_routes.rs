use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use rust_decimal::Decimal;
use similar_products_api::{
    error::{AppError, AppResult},
    models::{ProductDetail, ProductId},
    repository::ProductRepository,
    routes::create_app,
    state::AppState,
};
use tower::ServiceExt;

// Handler-level checks against a canned repository, no network involved.
enum Canned {
    Products(Vec<ProductDetail>),
    NotFound,
    Upstream,
    Unexpected,
}

struct CannedRepository(Canned);

#[async_trait]
impl ProductRepository for CannedRepository {
    async fn get_similar_ids(&self, product_id: &str) -> AppResult<Vec<ProductId>> {
        match &self.0 {
            Canned::Products(products) => Ok(products.iter().map(|p| p.id.clone()).collect()),
            Canned::NotFound => Err(AppError::NotFound(product_id.to_string())),
            Canned::Upstream => Err(AppError::upstream(product_id, "similar ids")),
            Canned::Unexpected => Err(anyhow::anyhow!("Unexpected").into()),
        }
    }

    async fn get_detail(&self, product_id: &str) -> AppResult<Option<ProductDetail>> {
        match &self.0 {
            Canned::Products(products) => Ok(products.iter().find(|p| p.id == product_id).cloned()),
            _ => Ok(None),
        }
    }
}

async fn call(canned: Canned) -> (StatusCode, String) {
    let app = create_app(AppState::new(CannedRepository(canned)));
    let response = app
        .oneshot(
            Request::builder()
                .uri("/product/1/similar")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn renders_similar_products_as_json_array() {
    let (status, body) = call(Canned::Products(vec![ProductDetail {
        id: "2".into(),
        name: "Product 2".into(),
        price: Decimal::new(1000, 2),
        availability: true,
    }]))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        r#"[{"id":"2","name":"Product 2","price":10.00,"availability":true}]"#
    );
}

#[tokio::test]
async fn renders_empty_array_when_no_similar_products() {
    let (status, body) = call(Canned::Products(vec![])).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "[]");
}

#[tokio::test]
async fn maps_not_found_to_404() {
    let (status, body) = call(Canned::NotFound).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "Product Not found");
}

#[tokio::test]
async fn maps_upstream_error_to_502() {
    let (status, body) = call(Canned::Upstream).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body, "Upstream service error");
}

#[tokio::test]
async fn maps_unexpected_error_to_500() {
    let (status, body) = call(Canned::Unexpected).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "An unexpected error occurred");
}

#[tokio::test]
async fn serves_openapi_docs() {
    let app = create_app(AppState::new(CannedRepository(Canned::Products(vec![]))));
    let response = app
        .oneshot(Request::builder().uri("/docs").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
