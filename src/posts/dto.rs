use bson::DateTime;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::repo_types::Post;
use crate::{error::AppError, ids::parse_object_id, wire::non_empty};

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub accountid: Option<String>,
    pub caption: Option<String>,
    pub imageurl: Option<String>,
    #[serde(rename = "posted_Timestamp", default, with = "time::serde::rfc3339::option")]
    pub posted_at: Option<OffsetDateTime>,
}

impl TryFrom<CreatePostRequest> for Post {
    type Error = AppError;

    fn try_from(req: CreatePostRequest) -> Result<Self, Self::Error> {
        let account_id = match non_empty(req.accountid) {
            Some(raw) => Some(parse_object_id(&raw).map_err(|_| {
                AppError::InvalidBody(format!("accountid is not a valid identifier: {raw:?}"))
            })?),
            None => None,
        };
        Ok(Post {
            id: None,
            account_id,
            caption: non_empty(req.caption),
            image_url: non_empty(req.imageurl),
            // BSON datetimes hold milliseconds; finer digits are truncated.
            posted_at: req.posted_at.map(DateTime::from_time_0_3),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct PostResponse {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accountid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imageurl: Option<String>,
    #[serde(
        rename = "posted_Timestamp",
        skip_serializing_if = "Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub posted_at: Option<OffsetDateTime>,
}

impl From<Post> for PostResponse {
    fn from(p: Post) -> Self {
        Self {
            id: p.id.map(|id| id.to_hex()),
            accountid: p.account_id.map(|id| id.to_hex()),
            caption: p.caption,
            imageurl: p.image_url,
            posted_at: p.posted_at.map(DateTime::to_time_0_3),
        }
    }
}
