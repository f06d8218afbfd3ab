use std::sync::Arc;

use crate::config::AppConfig;
use crate::posts::Post;
use crate::resource::Repo;
use crate::store::{DocumentStore, MongoStore};
use crate::users::User;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub users: Repo<User>,
    pub posts: Repo<Post>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        let store = Arc::new(MongoStore::connect(&config.mongo).await?) as Arc<dyn DocumentStore>;
        Ok(Self::from_parts(config, store))
    }

    pub fn from_parts(config: Arc<AppConfig>, store: Arc<dyn DocumentStore>) -> Self {
        Self {
            users: Repo::new(Arc::clone(&store), config.store_timeout),
            posts: Repo::new(store, config.store_timeout),
            config,
        }
    }

    #[cfg(test)]
    pub fn fake() -> Self {
        use crate::config::MongoConfig;
        use crate::store::memory::MemoryStore;

        let config = Arc::new(AppConfig {
            mongo: MongoConfig {
                uri: "memory".into(),
                database: "test".into(),
            },
            store_timeout: std::time::Duration::from_secs(5),
            operator_token: Some("test-operator".into()),
        });
        Self::from_parts(config, Arc::new(MemoryStore::new()))
    }
}
