use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct Product {
    pub id: i32,
    #[sqlx(rename = "nome")]
    pub name: String,
    #[sqlx(rename = "descricao")]
    pub description: Option<String>,
    #[sqlx(rename = "categoria")]
    pub category: Option<String>,
    #[sqlx(rename = "tamanho")]
    pub size: Option<String>,
    #[sqlx(rename = "cor")]
    pub color: Option<String>,
    #[sqlx(rename = "preco")]
    pub price: BigDecimal,
    #[sqlx(rename = "preco_custo")]
    pub cost_price: Option<BigDecimal>,
    #[sqlx(rename = "quantidade_estoque")]
    pub stock_quantity: i32,
    #[sqlx(rename = "estoque_minimo")]
    pub min_stock: i32,
    #[sqlx(rename = "codigo_barras")]
    pub barcode: Option<String>,
    #[sqlx(rename = "marca")]
    pub brand: Option<String>,
    #[sqlx(rename = "ativo")]
    pub active: bool,
    #[sqlx(rename = "data_cadastro")]
    pub created_at: NaiveDateTime,
    #[sqlx(rename = "data_atualizacao")]
    pub updated_at: NaiveDateTime,
}

impl Product {
    /// A product is low on stock once its quantity falls to the configured
    /// minimum or below.
    pub fn is_low_stock(&self) -> bool {
        self.stock_quantity <= self.min_stock
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(stock: i32, min: i32) -> Product {
        Product {
            id: 1,
            name: "Camisa".into(),
            description: None,
            category: None,
            size: None,
            color: None,
            price: "49.90".parse().unwrap(),
            cost_price: None,
            stock_quantity: stock,
            min_stock: min,
            barcode: None,
            brand: None,
            active: true,
            created_at: chrono::NaiveDateTime::default(),
            updated_at: chrono::NaiveDateTime::default(),
        }
    }

    #[test]
    fn low_stock_at_threshold() {
        assert!(product(3, 3).is_low_stock());
        assert!(product(2, 3).is_low_stock());
        assert!(!product(4, 3).is_low_stock());
    }

    #[test]
    fn low_stock_with_zero_minimum() {
        assert!(product(0, 0).is_low_stock());
        assert!(!product(1, 0).is_low_stock());
    }
}
