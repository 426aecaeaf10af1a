use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, FromRow)]
pub struct Sale {
    pub id: i32,
    #[sqlx(rename = "cliente_id")]
    pub customer_id: Option<i32>,
    #[sqlx(rename = "data_venda")]
    pub sale_date: NaiveDateTime,
    #[sqlx(rename = "valor_total")]
    pub total_amount: BigDecimal,
    #[sqlx(rename = "desconto")]
    pub discount: BigDecimal,
    #[sqlx(rename = "valor_final")]
    pub final_amount: BigDecimal,
    #[sqlx(rename = "forma_pagamento")]
    pub payment_method: Option<String>,
    pub status: String,
    #[sqlx(rename = "observacoes")]
    pub notes: Option<String>,
}

impl Sale {
    /// Final amount owed for a sale. The total is always caller-supplied;
    /// only the final amount is derived. A discount larger than the total
    /// yields a negative result on purpose.
    pub fn compute_final(total: &BigDecimal, discount: Option<&BigDecimal>) -> BigDecimal {
        match discount {
            Some(d) => total - d,
            None => total.clone(),
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct SaleItem {
    pub id: i32,
    #[sqlx(rename = "venda_id")]
    pub sale_id: i32,
    #[sqlx(rename = "produto_id")]
    pub product_id: i32,
    #[sqlx(rename = "quantidade")]
    pub quantity: i32,
    #[sqlx(rename = "preco_unitario")]
    pub unit_price: BigDecimal,
    #[sqlx(rename = "desconto_item")]
    pub item_discount: BigDecimal,
    pub subtotal: BigDecimal,
}

impl SaleItem {
    /// Line subtotal: unit price times quantity, minus the item discount.
    /// Not floored at zero; see the sale computation notes in DESIGN.md.
    pub fn compute_subtotal(
        unit_price: &BigDecimal,
        quantity: i32,
        item_discount: Option<&BigDecimal>,
    ) -> BigDecimal {
        let gross = unit_price * BigDecimal::from(quantity);
        match item_discount {
            Some(d) => gross - d,
            None => gross,
        }
    }
}

/// Row values for a sale insert, with the derived final amount already
/// computed by the service layer.
#[derive(Debug, Clone)]
pub struct NewSale {
    pub customer_id: Option<i32>,
    pub total_amount: BigDecimal,
    pub discount: BigDecimal,
    pub final_amount: BigDecimal,
    pub payment_method: Option<String>,
    pub status: String,
    pub notes: Option<String>,
}

/// Row values for a line-item insert, subtotal precomputed.
#[derive(Debug, Clone)]
pub struct NewSaleItem {
    pub product_id: i32,
    pub quantity: i32,
    pub unit_price: BigDecimal,
    pub item_discount: BigDecimal,
    pub subtotal: BigDecimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum PaymentMethod {
    #[serde(rename = "dinheiro")]
    Cash,
    #[serde(rename = "cartao_debito")]
    DebitCard,
    #[serde(rename = "cartao_credito")]
    CreditCard,
    #[serde(rename = "pix")]
    Pix,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "dinheiro",
            PaymentMethod::DebitCard => "cartao_debito",
            PaymentMethod::CreditCard => "cartao_credito",
            PaymentMethod::Pix => "pix",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum SaleStatus {
    #[serde(rename = "pendente")]
    Pending,
    #[serde(rename = "concluida")]
    Completed,
    #[serde(rename = "cancelada")]
    Cancelled,
}

impl SaleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SaleStatus::Pending => "pendente",
            SaleStatus::Completed => "concluida",
            SaleStatus::Cancelled => "cancelada",
        }
    }
}

impl std::fmt::Display for SaleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    fn dec(v: &str) -> BigDecimal {
        v.parse().unwrap()
    }

    #[test]
    fn subtotal_without_discount() {
        let subtotal = SaleItem::compute_subtotal(&dec("49.90"), 2, None);
        assert_eq!(subtotal, dec("99.80"));
    }

    #[test]
    fn subtotal_subtracts_item_discount() {
        let subtotal = SaleItem::compute_subtotal(&dec("100.00"), 3, Some(&dec("50.00")));
        assert_eq!(subtotal, dec("250.00"));
    }

    #[test]
    fn subtotal_recomputes_after_discount_change() {
        let price = dec("80.00");
        let first = SaleItem::compute_subtotal(&price, 1, Some(&dec("10.00")));
        assert_eq!(first, dec("70.00"));

        let second = SaleItem::compute_subtotal(&price, 1, Some(&dec("25.00")));
        assert_eq!(second, dec("55.00"));
    }

    #[test]
    fn subtotal_may_go_negative() {
        let subtotal = SaleItem::compute_subtotal(&dec("10.00"), 1, Some(&dec("15.00")));
        assert_eq!(subtotal, dec("-5.00"));
    }

    #[test]
    fn final_amount_subtracts_discount() {
        assert_eq!(Sale::compute_final(&dec("389.80"), Some(&dec("39.80"))), dec("350.00"));
        assert_eq!(Sale::compute_final(&dec("389.80"), None), dec("389.80"));
    }

    #[test]
    fn final_amount_may_go_negative() {
        assert_eq!(Sale::compute_final(&dec("50.00"), Some(&dec("60.00"))), dec("-10.00"));
    }

    #[test]
    fn status_and_payment_wire_names() {
        assert_eq!(SaleStatus::Completed.as_str(), "concluida");
        assert_eq!(PaymentMethod::Pix.as_str(), "pix");
        assert_eq!(
            serde_json::to_string(&PaymentMethod::DebitCard).unwrap(),
            "\"cartao_debito\""
        );
    }
}
