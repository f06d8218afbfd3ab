use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, QueryRejection},
        Query,
    },
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use bson::oid::ObjectId;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::{error::AppError, store::Page};

/// Acknowledgement returned for a successful insert.
#[derive(Debug, Serialize, Deserialize)]
pub struct InsertAck {
    #[serde(rename = "InsertedID")]
    pub inserted_id: String,
}

/// 201 with the ack body and a `Location` pointing at the new document.
pub fn created(collection_path: &str, id: ObjectId) -> Response {
    let id = id.to_hex();
    let mut headers = HeaderMap::new();
    if let Ok(location) = HeaderValue::from_str(&format!("{collection_path}/{id}")) {
        headers.insert(header::LOCATION, location);
    }
    (StatusCode::CREATED, headers, Json(InsertAck { inserted_id: id })).into_response()
}

/// Empty 200 that still declares the JSON content type.
pub fn emptied() -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
    )
        .into_response()
}

/// Decodes a request body as JSON whatever `Content-Type` the client sent.
pub fn json_body<T: DeserializeOwned>(payload: Result<Bytes, BytesRejection>) -> Result<T, AppError> {
    let bytes = payload.map_err(|rejection| AppError::InvalidBody(rejection.body_text()))?;
    serde_json::from_slice(&bytes).map_err(|e| AppError::InvalidBody(e.to_string()))
}

/// Optional `?limit=&skip=` window for listings. Absent means unbounded.
#[derive(Debug, Default, Deserialize)]
pub struct Pagination {
    pub limit: Option<i64>,
    pub skip: Option<u64>,
}

impl Pagination {
    pub fn from_query(query: Result<Query<Pagination>, QueryRejection>) -> Result<Page, AppError> {
        let Query(p) = query.map_err(|rejection| AppError::InvalidQuery(rejection.body_text()))?;
        if let Some(limit) = p.limit {
            if limit <= 0 {
                return Err(AppError::InvalidQuery(format!(
                    "limit must be positive, got {limit}"
                )));
            }
        }
        Ok(Page {
            limit: p.limit,
            skip: p.skip,
        })
    }
}

/// Treats an empty string the same as an absent field.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_sets_location_and_ack() {
        let id = ObjectId::new();
        let res = created("/users", id);
        assert_eq!(res.status(), StatusCode::CREATED);
        assert_eq!(
            res.headers().get(header::LOCATION).unwrap(),
            &format!("/users/{}", id.to_hex())
        );
    }

    #[test]
    fn emptied_is_json_typed() {
        let res = emptied();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(
            res.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Named {
        name: Option<String>,
    }

    #[test]
    fn json_body_decodes_raw_bytes() {
        let body: Named = json_body(Ok(Bytes::from_static(br#"{"name":"Ada"}"#))).unwrap();
        assert_eq!(body.name.as_deref(), Some("Ada"));
    }

    #[test]
    fn json_body_rejects_undecodable_payloads() {
        for raw in [&b"name=Ada"[..], b"", br#"{"name":5}"#] {
            let err = json_body::<Named>(Ok(Bytes::copy_from_slice(raw))).unwrap_err();
            assert!(matches!(err, AppError::InvalidBody(_)));
        }
    }

    #[test]
    fn pagination_defaults_to_unbounded() {
        let page = Pagination::from_query(Ok(Query(Pagination::default()))).unwrap();
        assert_eq!(page, Page::default());
    }

    #[test]
    fn pagination_rejects_non_positive_limit() {
        let q = Pagination {
            limit: Some(0),
            skip: None,
        };
        let err = Pagination::from_query(Ok(Query(q))).unwrap_err();
        assert!(matches!(err, AppError::InvalidQuery(_)));
    }

    #[test]
    fn non_empty_drops_blank_strings() {
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some("x".into())), Some("x".into()));
    }
}
