use std::sync::Arc;

use tokio::task::JoinSet;

use crate::{
    dto::products::SimilarProductList,
    error::{AppError, AppResult},
    models::ProductDetail,
    state::AppState,
};

/// Resolves the products similar to `product_id`.
///
/// Only a failure of the similar-ids lookup fails the call. Every detail
/// lookup runs as its own task; a detail that is missing or errors is left
/// out of the result, and the survivors keep the upstream ordering no matter
/// which lookup finishes first.
pub async fn get_similar_products(
    state: &AppState,
    product_id: &str,
) -> AppResult<SimilarProductList> {
    let similar_ids = state.products.get_similar_ids(product_id).await?;
    if similar_ids.is_empty() {
        return Ok(SimilarProductList::default());
    }

    tracing::debug!(product_id, count = similar_ids.len(), "fetching similar product details");

    let mut tasks = JoinSet::new();
    for (position, id) in similar_ids.iter().cloned().enumerate() {
        let products = Arc::clone(&state.products);
        tasks.spawn(async move {
            let detail = match products.get_detail(&id).await {
                Ok(Some(detail)) => Some(detail),
                Ok(None) | Err(AppError::NotFound(_)) => {
                    tracing::debug!(product_id = %id, "similar product not found, skipping");
                    None
                }
                Err(err) => {
                    tracing::warn!(product_id = %id, error = ?err, "similar product lookup failed, skipping");
                    None
                }
            };
            (position, detail)
        });
    }

    // Each task owns exactly one slot.
    let mut slots: Vec<Option<ProductDetail>> = vec![None; similar_ids.len()];
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((position, detail)) => slots[position] = detail,
            Err(err) => tracing::warn!(error = %err, "similar product task aborted, skipping"),
        }
    }

    Ok(SimilarProductList {
        items: slots.into_iter().flatten().collect(),
    })
}
