use serde::{Deserialize, Serialize};

use super::repo_types::User;
use crate::wire::non_empty;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl From<CreateUserRequest> for User {
    fn from(req: CreateUserRequest) -> Self {
        User {
            id: None,
            name: non_empty(req.name),
            email: non_empty(req.email),
            password: non_empty(req.password),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct UserResponse {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id.map(|id| id.to_hex()),
            name: u.name,
            email: u.email,
            password: u.password,
        }
    }
}
