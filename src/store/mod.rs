use async_trait::async_trait;
use bson::{oid::ObjectId, Document};
use futures::stream::BoxStream;
use thiserror::Error;

pub mod cursor;
#[cfg(test)]
pub mod memory;
pub mod mongo;

pub use cursor::drain;
pub use mongo::MongoStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("document store unavailable: {0}")]
    Unavailable(String),
    #[error("document store operation timed out")]
    Timeout,
    #[error("document store query failed: {0}")]
    Query(String),
    #[error("failed to decode document: {0}")]
    Decode(String),
}

/// Live result set of a `find`. Dropping it releases the server-side cursor.
pub type DocumentCursor = BoxStream<'static, Result<Document, StoreError>>;

/// Optional window over a result set. The default reads everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Page {
    pub limit: Option<i64>,
    pub skip: Option<u64>,
}

/// Minimal document-store capability the resource controllers run on.
///
/// Filters are exact-match BSON documents; an empty document matches
/// everything in the collection.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Persists `doc` and returns the identifier the store assigned to it.
    async fn insert_one(&self, collection: &str, doc: Document) -> Result<ObjectId, StoreError>;

    async fn find(
        &self,
        collection: &str,
        filter: Document,
        page: Page,
    ) -> Result<DocumentCursor, StoreError>;

    async fn find_one(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Option<Document>, StoreError>;

    /// Removes the collection and every document in it.
    async fn drop_collection(&self, collection: &str) -> Result<(), StoreError>;
}
