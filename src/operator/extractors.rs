use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use tracing::warn;

use crate::{error::AppError, state::AppState};

/// Proof that the caller presented the configured operator token.
pub struct OperatorAuth;

#[async_trait]
impl FromRequestParts<AppState> for OperatorAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(expected) = state.config.operator_token.as_deref() else {
            warn!("operator request while no OPERATOR_TOKEN is configured");
            return Err(AppError::OperatorDisabled);
        };

        // Expect "Bearer <token>"
        let token = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .and_then(|auth| {
                auth.strip_prefix("Bearer ")
                    .or_else(|| auth.strip_prefix("bearer "))
            })
            .ok_or(AppError::Unauthorized)?;

        if !constant_time_eq(token.as_bytes(), expected.as_bytes()) {
            warn!("operator token mismatch");
            return Err(AppError::Unauthorized);
        }
        Ok(OperatorAuth)
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
