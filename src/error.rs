use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::models::ProductId;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    #[error("Error calling {operation} for product {product_id}")]
    Upstream {
        product_id: ProductId,
        operation: &'static str,
        #[source]
        source: Option<reqwest::Error>,
    },

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn upstream(product_id: impl Into<ProductId>, operation: &'static str) -> Self {
        AppError::Upstream {
            product_id: product_id.into(),
            operation,
            source: None,
        }
    }

    pub fn transport(
        product_id: impl Into<ProductId>,
        operation: &'static str,
        source: reqwest::Error,
    ) -> Self {
        AppError::Upstream {
            product_id: product_id.into(),
            operation,
            source: Some(source),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Upstream { .. } => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::NotFound(_) => "Product Not found",
            AppError::Upstream { .. } => "Upstream service error",
            AppError::Internal(_) => "An unexpected error occurred",
        };

        if status.is_server_error() {
            tracing::error!(error = ?self, %status, "request failed");
        } else {
            tracing::info!(error = %self, %status, "request rejected");
        }

        (status, message).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
