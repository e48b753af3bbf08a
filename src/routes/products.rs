use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use crate::{
    dto::products::SimilarProductList,
    error::AppResult,
    models::ProductId,
    services::product_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/{product_id}/similar", get(get_similar_products))
}

#[utoipa::path(
    get,
    path = "/product/{product_id}/similar",
    params(
        ("product_id" = String, Path, description = "Product identifier")
    ),
    responses(
        (status = 200, description = "Similar products, most similar first", body = SimilarProductList),
        (status = 404, description = "Product Not found", body = String, content_type = "text/plain"),
        (status = 502, description = "Upstream service error", body = String, content_type = "text/plain"),
        (status = 500, description = "An unexpected error occurred", body = String, content_type = "text/plain"),
    ),
    tag = "Similar Products"
)]
pub async fn get_similar_products(
    State(state): State<AppState>,
    Path(product_id): Path<ProductId>,
) -> AppResult<Json<SimilarProductList>> {
    let products = product_service::get_similar_products(&state, &product_id).await?;
    Ok(Json(products))
}
