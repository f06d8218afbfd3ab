use bson::Document;
use futures::{Stream, StreamExt};
use serde::de::DeserializeOwned;

use super::StoreError;

/// Reads `cursor` to exhaustion, decoding every document into `T`.
///
/// The first iteration or decode error aborts the read and is returned on its
/// own; documents decoded before it are discarded. The cursor is consumed and
/// dropped on every path.
pub async fn drain<T, S>(cursor: S) -> Result<Vec<T>, StoreError>
where
    T: DeserializeOwned,
    S: Stream<Item = Result<Document, StoreError>>,
{
    let mut cursor = std::pin::pin!(cursor);
    let mut out = Vec::new();
    while let Some(next) = cursor.next().await {
        let raw = next?;
        let doc = bson::from_document::<T>(raw).map_err(|e| StoreError::Decode(e.to_string()))?;
        out.push(doc);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;
    use futures::stream;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Named {
        name: String,
    }

    #[tokio::test]
    async fn drains_in_cursor_order() {
        let cursor = stream::iter(vec![
            Ok(doc! { "name": "a" }),
            Ok(doc! { "name": "b" }),
        ]);
        let out: Vec<Named> = drain(cursor).await.unwrap();
        assert_eq!(
            out,
            vec![Named { name: "a".into() }, Named { name: "b".into() }]
        );
    }

    #[tokio::test]
    async fn empty_cursor_is_empty_vec() {
        let cursor = stream::iter(Vec::<Result<Document, StoreError>>::new());
        let out: Vec<Named> = drain(cursor).await.unwrap();
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn decode_failure_aborts_whole_read() {
        let cursor = stream::iter(vec![
            Ok(doc! { "name": "a" }),
            Ok(doc! { "name": 42 }),
            Ok(doc! { "name": "c" }),
        ]);
        let err = drain::<Named, _>(cursor).await.unwrap_err();
        assert!(matches!(err, StoreError::Decode(_)));
    }

    #[tokio::test]
    async fn trailing_iteration_error_fails_the_read() {
        let cursor = stream::iter(vec![
            Ok(doc! { "name": "a" }),
            Err(StoreError::Query("cursor killed".into())),
        ]);
        let err = drain::<Named, _>(cursor).await.unwrap_err();
        assert!(err.to_string().contains("cursor killed"));
    }
}
