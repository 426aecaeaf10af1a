use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::CashEntry;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CashEntryResponse {
    pub id: i32,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "entradaOuSaida")]
    pub direction: String,
    #[serde(rename = "valor")]
    #[schema(value_type = f64)]
    pub amount: BigDecimal,
    #[serde(rename = "saldo")]
    #[schema(value_type = f64)]
    pub balance: BigDecimal,
    #[serde(rename = "data")]
    pub entry_date: NaiveDateTime,
    #[serde(rename = "observacoes")]
    pub notes: Option<String>,
}

impl From<CashEntry> for CashEntryResponse {
    fn from(value: CashEntry) -> Self {
        CashEntryResponse {
            id: value.id,
            description: value.description,
            direction: value.direction,
            amount: value.amount,
            balance: value.balance,
            entry_date: value.entry_date,
            notes: value.notes,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CashBalanceResponse {
    #[serde(rename = "saldo")]
    #[schema(value_type = f64)]
    pub balance: BigDecimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CashSummaryResponse {
    #[serde(rename = "totalEntradas")]
    #[schema(value_type = f64)]
    pub total_inflows: BigDecimal,
    #[serde(rename = "totalSaidas")]
    #[schema(value_type = f64)]
    pub total_outflows: BigDecimal,
}
