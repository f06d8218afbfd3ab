use bson::oid::ObjectId;

use crate::error::AppError;

/// Decodes a 24-character hex path parameter into an `ObjectId`.
pub fn parse_object_id(raw: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(raw).map_err(|_| AppError::InvalidIdentifier(raw.to_string()))
}
