use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CustomerStatsResponse {
    #[serde(rename = "totalClientes")]
    pub total_customers: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductStatsResponse {
    #[serde(rename = "totalProdutos")]
    pub total_products: i64,
    #[serde(rename = "valorTotalEstoque")]
    #[schema(value_type = f64)]
    pub total_stock_value: BigDecimal,
    #[serde(rename = "produtosEstoqueBaixo")]
    pub low_stock_products: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SaleStatsResponse {
    #[serde(rename = "totalVendasDia")]
    #[schema(value_type = f64)]
    pub total_today: BigDecimal,
    #[serde(rename = "vendasConcluidas")]
    pub completed: i64,
    #[serde(rename = "vendasPendentes")]
    pub pending: i64,
    #[serde(rename = "vendasCanceladas")]
    pub cancelled: i64,
}
