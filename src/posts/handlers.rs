use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, rejection::QueryRejection, Path, Query, State},
    response::Response,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};

use super::{
    dto::{CreatePostRequest, PostResponse},
    repo_types::Post,
};
use crate::{
    error::AppError,
    state::AppState,
    wire::{created, json_body, Pagination},
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/posts", post(create_post).get(list_posts))
        .route("/posts/:id", get(get_post))
        .route("/posts/:id/users", get(list_posts_by_user))
}

fn to_responses(posts: Vec<Post>) -> Json<Vec<PostResponse>> {
    Json(posts.into_iter().map(PostResponse::from).collect())
}

#[instrument(skip(state, payload))]
pub async fn create_post(
    State(state): State<AppState>,
    payload: Result<Bytes, BytesRejection>,
) -> Result<Response, AppError> {
    let post = Post::try_from(json_body::<CreatePostRequest>(payload)?)?;
    let id = state.posts.insert(&post).await?;
    info!(%id, account_id = ?post.account_id, "post created");
    Ok(created("/posts", id))
}

#[instrument(skip(state, query))]
pub async fn list_posts(
    State(state): State<AppState>,
    query: Result<Query<Pagination>, QueryRejection>,
) -> Result<Json<Vec<PostResponse>>, AppError> {
    let page = Pagination::from_query(query)?;
    Ok(to_responses(state.posts.list_all(page).await?))
}

#[instrument(skip(state))]
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PostResponse>, AppError> {
    let post = state.posts.get_by_id(&id).await?;
    Ok(Json(post.into()))
}

/// Posts whose `accountid` is the given user id. The user itself is not looked up.
#[instrument(skip(state, query))]
pub async fn list_posts_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    query: Result<Query<Pagination>, QueryRejection>,
) -> Result<Json<Vec<PostResponse>>, AppError> {
    let page = Pagination::from_query(query)?;
    Ok(to_responses(state.posts.list_by_owner(&user_id, page).await?))
}
