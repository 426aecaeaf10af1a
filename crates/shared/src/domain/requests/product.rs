use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::{validate_non_negative_amount, validate_positive_amount};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, IntoParams)]
pub struct StockQuery {
    #[serde(rename = "quantidade")]
    pub quantity: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, IntoParams)]
pub struct PriceRangeQuery {
    #[schema(value_type = f64, example = 20.0)]
    #[param(value_type = f64, example = 20.0)]
    pub min: BigDecimal,
    #[schema(value_type = f64, example = 150.0)]
    #[param(value_type = f64, example = 150.0)]
    pub max: BigDecimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    #[serde(rename = "nome")]
    #[schema(example = "Camisa Polo")]
    pub name: String,

    #[serde(rename = "descricao")]
    pub description: Option<String>,

    #[serde(rename = "categoria")]
    pub category: Option<String>,

    #[serde(rename = "tamanho")]
    pub size: Option<String>,

    #[serde(rename = "cor")]
    pub color: Option<String>,

    #[validate(custom(function = validate_positive_amount))]
    #[serde(rename = "preco")]
    #[schema(value_type = f64, example = 49.90)]
    pub price: BigDecimal,

    #[validate(custom(function = validate_non_negative_amount))]
    #[serde(rename = "precoCusto")]
    #[schema(value_type = Option<f64>)]
    pub cost_price: Option<BigDecimal>,

    #[validate(range(min = 0, message = "Stock quantity must not be negative"))]
    #[serde(rename = "quantidadeEstoque", default)]
    pub stock_quantity: i32,

    #[validate(range(min = 0, message = "Minimum stock must not be negative"))]
    #[serde(rename = "estoqueMinimo", default)]
    pub min_stock: i32,

    #[serde(rename = "codigoBarras")]
    pub barcode: Option<String>,

    #[serde(rename = "marca")]
    pub brand: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    #[serde(skip_deserializing)]
    pub id: i32,

    #[validate(length(min = 1, message = "Name is required"))]
    #[serde(rename = "nome")]
    pub name: String,

    #[serde(rename = "descricao")]
    pub description: Option<String>,

    #[serde(rename = "categoria")]
    pub category: Option<String>,

    #[serde(rename = "tamanho")]
    pub size: Option<String>,

    #[serde(rename = "cor")]
    pub color: Option<String>,

    #[validate(custom(function = validate_positive_amount))]
    #[serde(rename = "preco")]
    #[schema(value_type = f64)]
    pub price: BigDecimal,

    #[validate(custom(function = validate_non_negative_amount))]
    #[serde(rename = "precoCusto")]
    #[schema(value_type = Option<f64>)]
    pub cost_price: Option<BigDecimal>,

    #[validate(range(min = 0, message = "Stock quantity must not be negative"))]
    #[serde(rename = "quantidadeEstoque", default)]
    pub stock_quantity: i32,

    #[validate(range(min = 0, message = "Minimum stock must not be negative"))]
    #[serde(rename = "estoqueMinimo", default)]
    pub min_stock: i32,

    #[serde(rename = "codigoBarras")]
    pub barcode: Option<String>,

    #[serde(rename = "marca")]
    pub brand: Option<String>,

    #[serde(rename = "ativo", default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}
