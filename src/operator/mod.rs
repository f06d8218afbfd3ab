//! Administrative endpoints kept off the public resource surface.
//!
//! Bulk deletes live here and require `Authorization: Bearer <OPERATOR_TOKEN>`.

use axum::{extract::State, response::Response, routing::delete, Router};
use tracing::{instrument, warn};

use crate::{error::AppError, state::AppState, wire::emptied};

mod extractors;

pub use extractors::OperatorAuth;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", delete(delete_users))
        .route("/posts", delete(delete_posts))
}

#[instrument(skip(state, _auth))]
pub async fn delete_users(
    State(state): State<AppState>,
    _auth: OperatorAuth,
) -> Result<Response, AppError> {
    state.users.delete_all().await?;
    warn!("users collection dropped by operator");
    Ok(emptied())
}

#[instrument(skip(state, _auth))]
pub async fn delete_posts(
    State(state): State<AppState>,
    _auth: OperatorAuth,
) -> Result<Response, AppError> {
    state.posts.delete_all().await?;
    warn!("posts collection dropped by operator");
    Ok(emptied())
}
