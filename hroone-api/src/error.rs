use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use hroone_catalog::ProductError;
use hroone_core::pagination::PageError;
use hroone_order::OrderError;
use serde_json::json;

#[derive(Debug)]
pub enum ApiError {
    /// Client input rejected; the message names the offending field or rule.
    Validation(String),
    /// The backing store failed or timed out. Nothing was committed, so the
    /// caller may retry.
    Store(String),
}

impl ApiError {
    pub fn store<E: std::fmt::Display>(err: E) -> Self {
        Self::Store(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Store(msg) => {
                tracing::error!("Store unavailable: {}", msg);
                (StatusCode::SERVICE_UNAVAILABLE, "store unavailable".to_string())
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<ProductError> for ApiError {
    fn from(err: ProductError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<PageError> for ApiError {
    fn from(err: PageError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<OrderError> for ApiError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::Store(source) => Self::Store(source.to_string()),
            other => Self::Validation(other.to_string()),
        }
    }
}
