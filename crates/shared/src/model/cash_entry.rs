use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, FromRow)]
pub struct CashEntry {
    pub id: i32,
    #[sqlx(rename = "descricao")]
    pub description: String,
    #[sqlx(rename = "entrada_ou_saida")]
    pub direction: String,
    #[sqlx(rename = "valor")]
    pub amount: BigDecimal,
    #[sqlx(rename = "saldo")]
    pub balance: BigDecimal,
    #[sqlx(rename = "data")]
    pub entry_date: NaiveDateTime,
    #[sqlx(rename = "observacoes")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum LedgerDirection {
    #[serde(rename = "entrada")]
    Inflow,
    #[serde(rename = "saida")]
    Outflow,
}

impl LedgerDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            LedgerDirection::Inflow => "entrada",
            LedgerDirection::Outflow => "saida",
        }
    }
}

impl std::fmt::Display for LedgerDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
