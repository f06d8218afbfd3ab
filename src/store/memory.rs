use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use bson::{oid::ObjectId, Bson, Document};
use futures::{stream, StreamExt};

use super::{DocumentCursor, DocumentStore, Page, StoreError};

/// In-process stand-in for MongoDB. Keeps insertion order per collection.
#[derive(Default)]
pub struct MemoryStore {
    collections: Mutex<HashMap<String, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn snapshot(&self, collection: &str, filter: &Document) -> Vec<Document> {
        let guard = self.collections.lock().unwrap_or_else(|e| e.into_inner());
        guard
            .get(collection)
            .map(|docs| docs.iter().filter(|d| matches(d, filter)).cloned().collect())
            .unwrap_or_default()
    }
}

fn matches(doc: &Document, filter: &Document) -> bool {
    filter.iter().all(|(k, v)| doc.get(k) == Some(v))
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert_one(&self, collection: &str, mut doc: Document) -> Result<ObjectId, StoreError> {
        let id = match doc.get("_id") {
            Some(Bson::ObjectId(id)) => *id,
            Some(other) => {
                return Err(StoreError::Query(format!("unsupported _id {other}")));
            }
            None => {
                let id = ObjectId::new();
                doc.insert("_id", id);
                id
            }
        };
        let mut guard = self.collections.lock().unwrap_or_else(|e| e.into_inner());
        guard.entry(collection.to_string()).or_default().push(doc);
        Ok(id)
    }

    async fn find(
        &self,
        collection: &str,
        filter: Document,
        page: Page,
    ) -> Result<DocumentCursor, StoreError> {
        let skip = page.skip.unwrap_or(0) as usize;
        let limit = match page.limit {
            Some(n) if n > 0 => n as usize,
            _ => usize::MAX,
        };
        let docs: Vec<_> = self
            .snapshot(collection, &filter)
            .into_iter()
            .skip(skip)
            .take(limit)
            .map(Ok)
            .collect();
        Ok(stream::iter(docs).boxed())
    }

    async fn find_one(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Option<Document>, StoreError> {
        Ok(self.snapshot(collection, &filter).into_iter().next())
    }

    async fn drop_collection(&self, collection: &str) -> Result<(), StoreError> {
        let mut guard = self.collections.lock().unwrap_or_else(|e| e.into_inner());
        guard.remove(collection);
        Ok(())
    }
}
