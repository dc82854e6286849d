use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Ошибки обращения к хранилищу каталога
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("upstream request failed: {0}")]
    Upstream(String),

    #[error("upstream returned HTTP {0}")]
    Status(u16),

    #[error("failed to decode upstream response: {0}")]
    Decode(String),

    #[error("upstream GraphQL error: {0}")]
    GraphQl(String),
}

impl From<reqwest::Error> for CatalogError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            CatalogError::Decode(e.to_string())
        } else {
            CatalogError::Upstream(e.to_string())
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        tracing::error!("catalog request failed: {}", self);
        (
            StatusCode::BAD_GATEWAY,
            Json(json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}
