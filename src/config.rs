use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct MongoConfig {
    pub uri: String,
    pub database: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub mongo: MongoConfig,
    /// Upper bound for every single store round-trip.
    pub store_timeout: Duration,
    /// Bearer token for the operator endpoints. `None` disables them.
    pub operator_token: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let mongo = MongoConfig {
            uri: std::env::var("MONGODB_URI")
                .unwrap_or_else(|_| "mongodb://localhost:27017".into()),
            database: std::env::var("MONGODB_DATABASE").unwrap_or_else(|_| "instadupe".into()),
        };
        let store_timeout_secs = match std::env::var("STORE_TIMEOUT_SECS") {
            Ok(v) => v
                .parse::<u64>()
                .with_context(|| format!("STORE_TIMEOUT_SECS is not a number: {v}"))?,
            Err(_) => 10,
        };
        let operator_token = std::env::var("OPERATOR_TOKEN")
            .ok()
            .filter(|t| !t.trim().is_empty());

        Ok(Self {
            mongo,
            store_timeout: Duration::from_secs(store_timeout_secs),
            operator_token,
        })
    }
}
