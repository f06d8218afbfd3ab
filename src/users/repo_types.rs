use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::resource::StoredDocument;

/// Stored shape of a user. Absent fields are left out of the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    // Kept verbatim; no hashing happens here.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl StoredDocument for User {
    const COLLECTION: &'static str = "users";
}
