use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::model::LedgerDirection;

use super::validate_positive_amount;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, IntoParams)]
pub struct DescriptionQuery {
    #[serde(rename = "descricao")]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCashEntryRequest {
    #[validate(length(min = 1, message = "Description is required"))]
    #[serde(rename = "descricao")]
    #[schema(example = "Venda no balcão")]
    pub description: String,

    #[serde(rename = "entradaOuSaida")]
    pub direction: LedgerDirection,

    #[validate(custom(function = validate_positive_amount))]
    #[serde(rename = "valor")]
    #[schema(value_type = f64, example = 150.0)]
    pub amount: BigDecimal,

    /// Running balance after this entry. The ledger never recomputes it;
    /// the caller is responsible for keeping it consistent.
    #[serde(rename = "saldo")]
    #[schema(value_type = f64, example = 1250.0)]
    pub balance: BigDecimal,

    #[serde(rename = "observacoes")]
    pub notes: Option<String>,
}
