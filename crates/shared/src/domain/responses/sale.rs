use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{Sale, SaleItem};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SaleItemResponse {
    pub id: i32,
    #[serde(rename = "vendaId")]
    pub sale_id: i32,
    #[serde(rename = "produtoId")]
    pub product_id: i32,
    #[serde(rename = "quantidade")]
    pub quantity: i32,
    #[serde(rename = "precoUnitario")]
    #[schema(value_type = f64)]
    pub unit_price: BigDecimal,
    #[serde(rename = "descontoItem")]
    #[schema(value_type = f64)]
    pub item_discount: BigDecimal,
    #[schema(value_type = f64)]
    pub subtotal: BigDecimal,
}

impl From<SaleItem> for SaleItemResponse {
    fn from(value: SaleItem) -> Self {
        SaleItemResponse {
            id: value.id,
            sale_id: value.sale_id,
            product_id: value.product_id,
            quantity: value.quantity,
            unit_price: value.unit_price,
            item_discount: value.item_discount,
            subtotal: value.subtotal,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SaleResponse {
    pub id: i32,
    #[serde(rename = "clienteId")]
    pub customer_id: Option<i32>,
    #[serde(rename = "dataVenda")]
    pub sale_date: NaiveDateTime,
    #[serde(rename = "valorTotal")]
    #[schema(value_type = f64)]
    pub total_amount: BigDecimal,
    #[serde(rename = "desconto")]
    #[schema(value_type = f64)]
    pub discount: BigDecimal,
    #[serde(rename = "valorFinal")]
    #[schema(value_type = f64)]
    pub final_amount: BigDecimal,
    #[serde(rename = "formaPagamento")]
    pub payment_method: Option<String>,
    pub status: String,
    #[serde(rename = "observacoes")]
    pub notes: Option<String>,
    #[serde(rename = "itens", skip_serializing_if = "Vec::is_empty", default)]
    pub items: Vec<SaleItemResponse>,
}

impl From<Sale> for SaleResponse {
    fn from(value: Sale) -> Self {
        SaleResponse {
            id: value.id,
            customer_id: value.customer_id,
            sale_date: value.sale_date,
            total_amount: value.total_amount,
            discount: value.discount,
            final_amount: value.final_amount,
            payment_method: value.payment_method,
            status: value.status,
            notes: value.notes,
            items: Vec::new(),
        }
    }
}

impl SaleResponse {
    pub fn with_items(sale: Sale, items: Vec<SaleItem>) -> Self {
        let mut response = SaleResponse::from(sale);
        response.items = items.into_iter().map(SaleItemResponse::from).collect();
        response
    }
}
