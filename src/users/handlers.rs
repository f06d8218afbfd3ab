use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, rejection::QueryRejection, Path, Query, State},
    response::Response,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};

use super::{
    dto::{CreateUserRequest, UserResponse},
    repo_types::User,
};
use crate::{
    error::AppError,
    state::AppState,
    wire::{created, json_body, Pagination},
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(create_user).get(list_users))
        .route("/users/:id", get(get_user))
}

#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Bytes, BytesRejection>,
) -> Result<Response, AppError> {
    let user = User::from(json_body::<CreateUserRequest>(payload)?);
    let id = state.users.insert(&user).await?;
    info!(%id, "user created");
    Ok(created("/users", id))
}

#[instrument(skip(state, query))]
pub async fn list_users(
    State(state): State<AppState>,
    query: Result<Query<Pagination>, QueryRejection>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let page = Pagination::from_query(query)?;
    let users = state.users.list_all(page).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.users.get_by_id(&id).await?;
    Ok(Json(user.into()))
}
