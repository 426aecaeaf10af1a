use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, IntoParams)]
pub struct NameQuery {
    #[serde(rename = "nome")]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCustomerRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    #[serde(rename = "nome")]
    #[schema(example = "Maria Silva")]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[serde(rename = "telefone")]
    pub phone: Option<String>,

    #[validate(length(min = 11, max = 14, message = "CPF must have 11 to 14 characters"))]
    #[schema(example = "123.456.789-00")]
    pub cpf: Option<String>,

    #[serde(rename = "endereco")]
    pub address: Option<String>,

    #[serde(rename = "cidade")]
    pub city: Option<String>,

    #[validate(length(equal = 2, message = "State must be a two-letter code"))]
    #[serde(rename = "estado")]
    pub state: Option<String>,

    pub cep: Option<String>,

    #[serde(rename = "dataNascimento")]
    pub birth_date: Option<NaiveDateTime>,

    #[serde(rename = "observacoes")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCustomerRequest {
    #[serde(skip_deserializing)]
    pub id: i32,

    #[validate(length(min = 1, message = "Name is required"))]
    #[serde(rename = "nome")]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[serde(rename = "telefone")]
    pub phone: Option<String>,

    #[validate(length(min = 11, max = 14, message = "CPF must have 11 to 14 characters"))]
    pub cpf: Option<String>,

    #[serde(rename = "endereco")]
    pub address: Option<String>,

    #[serde(rename = "cidade")]
    pub city: Option<String>,

    #[validate(length(equal = 2, message = "State must be a two-letter code"))]
    #[serde(rename = "estado")]
    pub state: Option<String>,

    pub cep: Option<String>,

    #[serde(rename = "dataNascimento")]
    pub birth_date: Option<NaiveDateTime>,

    #[serde(rename = "observacoes")]
    pub notes: Option<String>,

    #[serde(rename = "ativo", default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}
