use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::Customer;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CustomerResponse {
    pub id: i32,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: Option<String>,
    #[serde(rename = "telefone")]
    pub phone: Option<String>,
    pub cpf: Option<String>,
    #[serde(rename = "endereco")]
    pub address: Option<String>,
    #[serde(rename = "cidade")]
    pub city: Option<String>,
    #[serde(rename = "estado")]
    pub state: Option<String>,
    pub cep: Option<String>,
    #[serde(rename = "dataNascimento")]
    pub birth_date: Option<NaiveDateTime>,
    #[serde(rename = "observacoes")]
    pub notes: Option<String>,
    #[serde(rename = "ativo")]
    pub active: bool,
    #[serde(rename = "dataCadastro")]
    pub created_at: NaiveDateTime,
    #[serde(rename = "dataAtualizacao")]
    pub updated_at: NaiveDateTime,
}

impl From<Customer> for CustomerResponse {
    fn from(value: Customer) -> Self {
        CustomerResponse {
            id: value.id,
            name: value.name,
            email: value.email,
            phone: value.phone,
            cpf: value.cpf,
            address: value.address,
            city: value.city,
            state: value.state,
            cep: value.cep,
            birth_date: value.birth_date,
            notes: value.notes,
            active: value.active,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}
