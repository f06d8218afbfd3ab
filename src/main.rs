mod app;
mod config;
mod error;
mod ids;
mod operator;
mod posts;
mod resource;
mod state;
mod store;
mod users;
mod wire;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "instadupe=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let state = state::AppState::init().await?;
    if state.config.operator_token.is_none() {
        tracing::info!("OPERATOR_TOKEN not set; bulk delete endpoints are disabled");
    }

    app::serve(app::build_app(state)).await
}
