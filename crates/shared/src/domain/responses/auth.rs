use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::User;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: i32,
    pub email: String,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "ativo")]
    pub active: bool,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        UserResponse {
            id: value.id,
            email: value.email,
            name: value.name,
            active: value.active,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserResponse>,
}

impl LoginResponse {
    pub fn failure(message: impl Into<String>) -> Self {
        LoginResponse {
            success: false,
            message: message.into(),
            token: None,
            user: None,
        }
    }

    pub fn success(message: impl Into<String>, token: String, user: UserResponse) -> Self {
        LoginResponse {
            success: true,
            message: message.into(),
            token: Some(token),
            user: Some(user),
        }
    }
}
