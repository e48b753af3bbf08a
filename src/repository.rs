use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::{ProductDetail, ProductId},
};

/// Source of product data the aggregation flow reads from.
///
/// Implementations are shared by every in-flight request and every fan-out
/// task, so they must be usable concurrently without external locking.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Ordered ids the upstream considers similar to `product_id`.
    async fn get_similar_ids(&self, product_id: &str) -> AppResult<Vec<ProductId>>;

    /// Full detail of `product_id`; a missing product is `AppError::NotFound`.
    async fn get_detail(&self, product_id: &str) -> AppResult<Option<ProductDetail>>;
}
