use anyhow::Context;
use async_trait::async_trait;
use bson::{doc, oid::ObjectId, Document};
use futures::{StreamExt, TryStreamExt};
use mongodb::{error::ErrorKind, options::FindOptions, Client, Database};
use tracing::debug;

use super::{DocumentCursor, DocumentStore, Page, StoreError};
use crate::config::MongoConfig;

#[derive(Clone)]
pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    pub async fn connect(cfg: &MongoConfig) -> anyhow::Result<Self> {
        let client = Client::with_uri_str(&cfg.uri)
            .await
            .context("parse mongodb uri")?;
        let db = client.database(&cfg.database);
        db.run_command(doc! { "ping": 1 }, None)
            .await
            .context("ping mongodb")?;
        debug!(database = %cfg.database, "mongodb connected");
        Ok(Self { db })
    }

    fn collection(&self, name: &str) -> mongodb::Collection<Document> {
        self.db.collection::<Document>(name)
    }
}

impl From<mongodb::error::Error> for StoreError {
    fn from(e: mongodb::error::Error) -> Self {
        match e.kind.as_ref() {
            ErrorKind::ServerSelection { .. }
            | ErrorKind::Io(_)
            | ErrorKind::ConnectionPoolCleared { .. }
            | ErrorKind::DnsResolve { .. } => StoreError::Unavailable(e.to_string()),
            ErrorKind::BsonDeserialization(_) => StoreError::Decode(e.to_string()),
            _ => StoreError::Query(e.to_string()),
        }
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn insert_one(&self, collection: &str, doc: Document) -> Result<ObjectId, StoreError> {
        let res = self.collection(collection).insert_one(doc, None).await?;
        res.inserted_id
            .as_object_id()
            .ok_or_else(|| StoreError::Query(format!("unexpected inserted id {}", res.inserted_id)))
    }

    async fn find(
        &self,
        collection: &str,
        filter: Document,
        page: Page,
    ) -> Result<DocumentCursor, StoreError> {
        let mut opts = FindOptions::default();
        opts.limit = page.limit;
        opts.skip = page.skip;
        let cursor = self.collection(collection).find(filter, opts).await?;
        Ok(cursor.map_err(StoreError::from).boxed())
    }

    async fn find_one(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Option<Document>, StoreError> {
        Ok(self.collection(collection).find_one(filter, None).await?)
    }

    async fn drop_collection(&self, collection: &str) -> Result<(), StoreError> {
        self.collection(collection).drop(None).await?;
        Ok(())
    }
}
