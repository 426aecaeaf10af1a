use crate::{
    abstract_trait::SaleRepositoryTrait,
    config::ConnectionPool,
    errors::RepositoryError,
    model::{NewSale, NewSaleItem, Sale, SaleItem},
};
use async_trait::async_trait;
use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use tracing::{error, info};

const SALE_COLUMNS: &str = "id, cliente_id, data_venda, valor_total, desconto, valor_final, \
                            forma_pagamento, status, observacoes";
const ITEM_COLUMNS: &str =
    "id, venda_id, produto_id, quantidade, preco_unitario, desconto_item, subtotal";

#[derive(Clone)]
pub struct SaleRepository {
    db: ConnectionPool,
}

impl SaleRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SaleRepositoryTrait for SaleRepository {
    async fn create(
        &self,
        sale: &NewSale,
        items: &[NewSaleItem],
    ) -> Result<(Sale, Vec<SaleItem>), RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        // Stock is adjusted before the sale rows land so an insufficient
        // quantity rolls everything back.
        for item in items {
            let stock = sqlx::query_scalar::<_, i32>(
                "SELECT quantidade_estoque FROM produtos WHERE id = $1 FOR UPDATE",
            )
            .bind(item.product_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(RepositoryError::from)?
            .ok_or(RepositoryError::NotFound)?;

            let remaining = stock - item.quantity;
            if remaining < 0 {
                error!(
                    "❌ Insufficient stock for product ID {}: {} requested, {} available",
                    item.product_id, item.quantity, stock
                );
                return Err(RepositoryError::InsufficientStock(format!(
                    "Product {} has only {} units in stock",
                    item.product_id, stock
                )));
            }

            sqlx::query(
                "UPDATE produtos \
                 SET quantidade_estoque = $2, data_atualizacao = current_timestamp \
                 WHERE id = $1",
            )
            .bind(item.product_id)
            .bind(remaining)
            .execute(&mut *tx)
            .await
            .map_err(RepositoryError::from)?;
        }

        let sale_sql = format!(
            "INSERT INTO vendas \
             (cliente_id, valor_total, desconto, valor_final, forma_pagamento, status, observacoes) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {SALE_COLUMNS}"
        );

        let created_sale = sqlx::query_as::<_, Sale>(&sale_sql)
            .bind(sale.customer_id)
            .bind(&sale.total_amount)
            .bind(&sale.discount)
            .bind(&sale.final_amount)
            .bind(&sale.payment_method)
            .bind(&sale.status)
            .bind(&sale.notes)
            .fetch_one(&mut *tx)
            .await
            .map_err(|err| {
                error!("❌ Failed to insert sale: {:?}", err);
                RepositoryError::from(err)
            })?;

        let item_sql = format!(
            "INSERT INTO itens_venda \
             (venda_id, produto_id, quantidade, preco_unitario, desconto_item, subtotal) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {ITEM_COLUMNS}"
        );

        let mut created_items = Vec::with_capacity(items.len());
        for item in items {
            let created = sqlx::query_as::<_, SaleItem>(&item_sql)
                .bind(created_sale.id)
                .bind(item.product_id)
                .bind(item.quantity)
                .bind(&item.unit_price)
                .bind(&item.item_discount)
                .bind(&item.subtotal)
                .fetch_one(&mut *tx)
                .await
                .map_err(|err| {
                    error!("❌ Failed to insert sale item: {:?}", err);
                    RepositoryError::from(err)
                })?;
            created_items.push(created);
        }

        tx.commit().await.map_err(RepositoryError::from)?;

        info!(
            "✅ Created sale ID {} with {} item(s)",
            created_sale.id,
            created_items.len()
        );
        Ok((created_sale, created_items))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Sale>, RepositoryError> {
        let sql = format!("SELECT {SALE_COLUMNS} FROM vendas WHERE id = $1");

        sqlx::query_as::<_, Sale>(&sql)
            .bind(id)
            .fetch_optional(&self.db)
            .await
            .map_err(RepositoryError::from)
    }

    async fn find_items(&self, sale_id: i32) -> Result<Vec<SaleItem>, RepositoryError> {
        let sql = format!("SELECT {ITEM_COLUMNS} FROM itens_venda WHERE venda_id = $1 ORDER BY id");

        sqlx::query_as::<_, SaleItem>(&sql)
            .bind(sale_id)
            .fetch_all(&self.db)
            .await
            .map_err(RepositoryError::from)
    }

    async fn find_all(&self) -> Result<Vec<Sale>, RepositoryError> {
        let sql = format!("SELECT {SALE_COLUMNS} FROM vendas ORDER BY data_venda DESC");

        sqlx::query_as::<_, Sale>(&sql)
            .fetch_all(&self.db)
            .await
            .map_err(RepositoryError::from)
    }

    async fn find_today(&self) -> Result<Vec<Sale>, RepositoryError> {
        let sql = format!(
            "SELECT {SALE_COLUMNS} FROM vendas \
             WHERE data_venda::date = CURRENT_DATE \
             ORDER BY data_venda DESC"
        );

        sqlx::query_as::<_, Sale>(&sql)
            .fetch_all(&self.db)
            .await
            .map_err(RepositoryError::from)
    }

    async fn find_by_period(
        &self,
        start: &NaiveDateTime,
        end: &NaiveDateTime,
    ) -> Result<Vec<Sale>, RepositoryError> {
        let sql = format!(
            "SELECT {SALE_COLUMNS} FROM vendas \
             WHERE data_venda BETWEEN $1 AND $2 \
             ORDER BY data_venda DESC"
        );

        sqlx::query_as::<_, Sale>(&sql)
            .bind(start)
            .bind(end)
            .fetch_all(&self.db)
            .await
            .map_err(RepositoryError::from)
    }

    async fn find_by_status(&self, status: &str) -> Result<Vec<Sale>, RepositoryError> {
        let sql = format!(
            "SELECT {SALE_COLUMNS} FROM vendas WHERE status = $1 ORDER BY data_venda DESC"
        );

        sqlx::query_as::<_, Sale>(&sql)
            .bind(status)
            .fetch_all(&self.db)
            .await
            .map_err(RepositoryError::from)
    }

    async fn find_by_customer(&self, customer_id: i32) -> Result<Vec<Sale>, RepositoryError> {
        let sql = format!(
            "SELECT {SALE_COLUMNS} FROM vendas WHERE cliente_id = $1 ORDER BY data_venda DESC"
        );

        sqlx::query_as::<_, Sale>(&sql)
            .bind(customer_id)
            .fetch_all(&self.db)
            .await
            .map_err(RepositoryError::from)
    }

    async fn update_status(&self, id: i32, status: &str) -> Result<Sale, RepositoryError> {
        let sql = format!(
            "UPDATE vendas SET status = $2 WHERE id = $1 RETURNING {SALE_COLUMNS}"
        );

        let sale = sqlx::query_as::<_, Sale>(&sql)
            .bind(id)
            .bind(status)
            .fetch_optional(&self.db)
            .await
            .map_err(|err| {
                error!("❌ Failed to update status of sale ID {}: {:?}", id, err);
                RepositoryError::from(err)
            })?
            .ok_or(RepositoryError::NotFound)?;

        info!("🔄 Sale ID {} status = {}", id, status);
        Ok(sale)
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        // itens_venda rows go with the sale via ON DELETE CASCADE.
        let result = sqlx::query("DELETE FROM vendas WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(|err| {
                error!("❌ Failed to delete sale ID {}: {:?}", id, err);
                RepositoryError::from(err)
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        info!("🗑️ Sale ID {} deleted with its items", id);
        Ok(())
    }

    async fn total_today(&self) -> Result<BigDecimal, RepositoryError> {
        sqlx::query_scalar::<_, BigDecimal>(
            "SELECT COALESCE(SUM(valor_final), 0) FROM vendas \
             WHERE data_venda::date = CURRENT_DATE AND status = 'concluida'",
        )
        .fetch_one(&self.db)
        .await
        .map_err(RepositoryError::from)
    }

    async fn count_by_status(&self, status: &str) -> Result<i64, RepositoryError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM vendas WHERE status = $1")
            .bind(status)
            .fetch_one(&self.db)
            .await
            .map_err(RepositoryError::from)
    }
}
