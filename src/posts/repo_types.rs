use bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::resource::{ForeignKeyed, StoredDocument};

/// Stored shape of a post.
///
/// `accountid` is a plain copy of a user id; nothing checks that the user
/// exists, then or later.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(rename = "accountid", skip_serializing_if = "Option::is_none")]
    pub account_id: Option<ObjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(rename = "imageurl", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(rename = "Posted_Timestamp", skip_serializing_if = "Option::is_none")]
    pub posted_at: Option<DateTime>,
}

impl StoredDocument for Post {
    const COLLECTION: &'static str = "posts";
}

impl ForeignKeyed for Post {
    const OWNER_FIELD: &'static str = "accountid";
}
