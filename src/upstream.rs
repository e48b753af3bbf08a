use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::{
    config::UpstreamConfig,
    error::{AppError, AppResult},
    models::{ProductDetail, ProductId},
    repository::ProductRepository,
};

const SIMILAR_IDS: &str = "similar ids";
const PRODUCT_DETAIL: &str = "product detail";

/// HTTP client for the upstream product service.
///
/// Cloning is cheap and clones share the same connection pool.
#[derive(Clone)]
pub struct UpstreamClient {
    client: reqwest::Client,
    base_url: Url,
}

impl UpstreamClient {
    pub fn new(config: &UpstreamConfig) -> anyhow::Result<Self> {
        let base_url = Url::parse(&config.base_url)?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("upstream base url {} cannot carry a path", config.base_url);
        }

        let client = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .build()?;

        Ok(Self { client, base_url })
    }

    // Segments are percent-encoded, so ids can never escape the /product/ prefix.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().push("product").extend(segments);
        }
        url
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        url: Url,
        product_id: &str,
        operation: &'static str,
    ) -> AppResult<T> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| AppError::transport(product_id, operation, err))?;

        let status = response.status();
        tracing::debug!(product_id, operation, %status, "upstream responded");

        if status == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(product_id.to_string()));
        }
        if !status.is_success() {
            return Err(AppError::upstream(product_id, operation));
        }

        response
            .json::<T>()
            .await
            .map_err(|err| AppError::transport(product_id, operation, err))
    }
}

#[async_trait]
impl ProductRepository for UpstreamClient {
    async fn get_similar_ids(&self, product_id: &str) -> AppResult<Vec<ProductId>> {
        let url = self.endpoint(&[product_id, "similarids"]);
        self.fetch(url, product_id, SIMILAR_IDS).await
    }

    async fn get_detail(&self, product_id: &str) -> AppResult<Option<ProductDetail>> {
        let url = self.endpoint(&[product_id]);
        self.fetch(url, product_id, PRODUCT_DETAIL).await
    }
}
