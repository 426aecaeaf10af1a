use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::model::{PaymentMethod, SaleStatus};

use super::{validate_non_negative_amount, validate_positive_amount};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, IntoParams)]
pub struct PeriodQuery {
    #[serde(rename = "inicio")]
    #[schema(value_type = String, example = "2025-07-01T00:00:00")]
    pub start: NaiveDateTime,

    #[serde(rename = "fim")]
    #[schema(value_type = String, example = "2025-07-31T23:59:59")]
    pub end: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateSaleItemRequest {
    #[validate(range(min = 1, message = "Product ID is required"))]
    #[serde(rename = "produtoId")]
    #[schema(example = 1)]
    pub product_id: i32,

    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    #[serde(rename = "quantidade")]
    #[schema(example = 2)]
    pub quantity: i32,

    #[validate(custom(function = validate_positive_amount))]
    #[serde(rename = "precoUnitario")]
    #[schema(value_type = f64, example = 49.90)]
    pub unit_price: BigDecimal,

    #[validate(custom(function = validate_non_negative_amount))]
    #[serde(rename = "descontoItem")]
    #[schema(value_type = Option<f64>)]
    pub item_discount: Option<BigDecimal>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateSaleRequest {
    #[serde(rename = "clienteId")]
    pub customer_id: Option<i32>,

    #[validate(custom(function = validate_positive_amount))]
    #[serde(rename = "valorTotal")]
    #[schema(value_type = f64, example = 389.80)]
    pub total_amount: BigDecimal,

    #[validate(custom(function = validate_non_negative_amount))]
    #[serde(rename = "desconto")]
    #[schema(value_type = Option<f64>)]
    pub discount: Option<BigDecimal>,

    #[serde(rename = "formaPagamento")]
    pub payment_method: Option<PaymentMethod>,

    pub status: Option<SaleStatus>,

    #[serde(rename = "observacoes")]
    pub notes: Option<String>,

    #[validate(length(min = 1, message = "A sale needs at least one item"), nested)]
    #[serde(rename = "itens")]
    pub items: Vec<CreateSaleItemRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateSaleStatusRequest {
    pub status: SaleStatus,
}
