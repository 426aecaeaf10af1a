use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "gerente@loja.com.br")]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    #[serde(rename = "senha")]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateAccountRequest {
    #[serde(skip_deserializing)]
    pub id: i32,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    /// When absent, the stored password hash is left untouched.
    #[validate(length(min = 6, message = "Password must have at least 6 characters"))]
    #[serde(rename = "senha")]
    pub password: Option<String>,

    #[validate(length(min = 1, message = "Name is required"))]
    #[serde(rename = "nome")]
    pub name: String,

    #[serde(rename = "ativo", default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "vendedora@loja.com.br")]
    pub email: String,

    #[validate(length(min = 6, message = "Password must have at least 6 characters"))]
    #[serde(rename = "senha")]
    pub password: String,

    #[validate(length(min = 1, message = "Name is required"))]
    #[serde(rename = "nome")]
    pub name: String,
}
