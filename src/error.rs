use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid request body: {0}")]
    InvalidBody(String),
    #[error("invalid identifier: {0:?}")]
    InvalidIdentifier(String),
    #[error("invalid query: {0}")]
    InvalidQuery(String),
    #[error("document not found")]
    NotFound,
    #[error("{0}")]
    StoreUnavailable(String),
    #[error("document store operation timed out")]
    Timeout,
    #[error("{0}")]
    Internal(String),
    #[error("missing or invalid operator token")]
    Unauthorized,
    #[error("operator interface is disabled")]
    OperatorDisabled,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidBody(_)
            | AppError::InvalidIdentifier(_)
            | AppError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::StoreUnavailable(_) | AppError::Timeout => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::OperatorDisabled => StatusCode::FORBIDDEN,
        }
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Unavailable(_) => AppError::StoreUnavailable(e.to_string()),
            StoreError::Timeout => AppError::Timeout,
            StoreError::Query(_) | StoreError::Decode(_) => AppError::Internal(e.to_string()),
        }
    }
}

/// Wire shape of every failed response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, %status, "request failed");
        } else {
            tracing::debug!(error = %self, %status, "request rejected");
        }
        (
            status,
            Json(ErrorBody {
                message: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Rewrites the router's own bodyless rejections (unknown path, wrong method)
/// into the JSON error shape. Responses that already carry a body type pass
/// through untouched.
pub async fn json_rejections(res: Response) -> Response {
    let status = res.status();
    if !status.is_client_error() || res.headers().contains_key(header::CONTENT_TYPE) {
        return res;
    }
    let message = match status {
        StatusCode::NOT_FOUND => "no such route".to_string(),
        StatusCode::METHOD_NOT_ALLOWED => "method not allowed on this route".to_string(),
        other => other
            .canonical_reason()
            .unwrap_or("request rejected")
            .to_lowercase(),
    };
    let allow = res.headers().get(header::ALLOW).cloned();
    let mut out = (status, Json(ErrorBody { message })).into_response();
    if let Some(allow) = allow {
        out.headers_mut().insert(header::ALLOW, allow);
    }
    out
}
