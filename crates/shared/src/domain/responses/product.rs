use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::Product;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    pub id: i32,
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
    #[serde(rename = "preco")]
    #[schema(value_type = f64)]
    pub price: BigDecimal,
    #[serde(rename = "precoCusto")]
    #[schema(value_type = Option<f64>)]
    pub cost_price: Option<BigDecimal>,
    #[serde(rename = "quantidadeEstoque")]
    pub stock_quantity: i32,
    #[serde(rename = "estoqueMinimo")]
    pub min_stock: i32,
    #[serde(rename = "codigoBarras")]
    pub barcode: Option<String>,
    #[serde(rename = "marca")]
    pub brand: Option<String>,
    #[serde(rename = "ativo")]
    pub active: bool,
    #[serde(rename = "dataCadastro")]
    pub created_at: NaiveDateTime,
    #[serde(rename = "dataAtualizacao")]
    pub updated_at: NaiveDateTime,
}

impl From<Product> for ProductResponse {
    fn from(value: Product) -> Self {
        ProductResponse {
            id: value.id,
            name: value.name,
            description: value.description,
            category: value.category,
            size: value.size,
            color: value.color,
            price: value.price,
            cost_price: value.cost_price,
            stock_quantity: value.stock_quantity,
            min_stock: value.min_stock,
            barcode: value.barcode,
            brand: value.brand,
            active: value.active,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}
