use serde::Serialize;
use utoipa::ToSchema;

use crate::models::ProductDetail;

/// Similar products in the order the upstream ranked them.
#[derive(Debug, Default, Serialize, ToSchema)]
#[serde(transparent)]
pub struct SimilarProductList {
    #[schema(value_type = Vec<ProductDetail>)]
    pub items: Vec<ProductDetail>,
}
