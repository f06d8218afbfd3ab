mod dto;
pub mod handlers;
pub mod repo_types;

use crate::state::AppState;
use axum::Router;

pub use repo_types::User;

pub fn router() -> Router<AppState> {
    handlers::routes()
}
