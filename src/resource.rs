use std::{future::Future, marker::PhantomData, sync::Arc, time::Duration};

use bson::{doc, oid::ObjectId, Document};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use crate::{
    error::AppError,
    ids::parse_object_id,
    store::{drain, DocumentStore, Page, StoreError},
};

/// A type persisted as one document in a named collection.
pub trait StoredDocument: Serialize + DeserializeOwned + Send + Sync + 'static {
    const COLLECTION: &'static str;
}

/// Documents that carry a copy of another document's id.
pub trait ForeignKeyed: StoredDocument {
    /// Stored field holding the foreign id.
    const OWNER_FIELD: &'static str;
}

/// Generic controller over one collection.
pub struct Repo<T> {
    store: Arc<dyn DocumentStore>,
    timeout: Duration,
    _doc: PhantomData<fn() -> T>,
}

impl<T> Clone for Repo<T> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            timeout: self.timeout,
            _doc: PhantomData,
        }
    }
}

impl<T: StoredDocument> Repo<T> {
    pub fn new(store: Arc<dyn DocumentStore>, timeout: Duration) -> Self {
        Self {
            store,
            timeout,
            _doc: PhantomData,
        }
    }

    async fn bounded<R>(
        &self,
        fut: impl Future<Output = Result<R, StoreError>>,
    ) -> Result<R, StoreError> {
        match tokio::time::timeout(self.timeout, fut).await {
            Ok(res) => res,
            Err(_) => {
                warn!(collection = T::COLLECTION, timeout = ?self.timeout, "store call timed out");
                Err(StoreError::Timeout)
            }
        }
    }

    pub async fn insert(&self, doc: &T) -> Result<ObjectId, AppError> {
        let raw = bson::to_document(doc).map_err(|e| AppError::Internal(e.to_string()))?;
        let id = self
            .bounded(self.store.insert_one(T::COLLECTION, raw))
            .await?;
        debug!(collection = T::COLLECTION, %id, "document inserted");
        Ok(id)
    }

    pub async fn list_all(&self, page: Page) -> Result<Vec<T>, AppError> {
        self.list_where(doc! {}, page).await
    }

    pub async fn get_by_id(&self, raw_id: &str) -> Result<T, AppError> {
        let id = parse_object_id(raw_id)?;
        let found = self
            .bounded(self.store.find_one(T::COLLECTION, doc! { "_id": id }))
            .await?;
        let raw = found.ok_or(AppError::NotFound)?;
        bson::from_document(raw).map_err(|e| StoreError::Decode(e.to_string()).into())
    }

    /// Drops the whole collection. Irreversible.
    pub async fn delete_all(&self) -> Result<(), AppError> {
        self.bounded(self.store.drop_collection(T::COLLECTION))
            .await?;
        Ok(())
    }

    async fn list_where(&self, filter: Document, page: Page) -> Result<Vec<T>, AppError> {
        let docs = self
            .bounded(async {
                let cursor = self.store.find(T::COLLECTION, filter, page).await?;
                drain::<T, _>(cursor).await
            })
            .await?;
        debug!(collection = T::COLLECTION, count = docs.len(), "documents listed");
        Ok(docs)
    }
}

impl<T: ForeignKeyed> Repo<T> {
    /// Every document whose foreign id equals `raw_owner_id`.
    pub async fn list_by_owner(&self, raw_owner_id: &str, page: Page) -> Result<Vec<T>, AppError> {
        let owner = parse_object_id(raw_owner_id)?;
        let mut filter = Document::new();
        filter.insert(T::OWNER_FIELD, owner);
        self.list_where(filter, page).await
    }
}
