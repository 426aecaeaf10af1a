use crate::{
    abstract_trait::CashEntryRepositoryTrait, config::ConnectionPool,
    domain::requests::CreateCashEntryRequest, errors::RepositoryError, model::CashEntry,
};
use async_trait::async_trait;
use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use tracing::{error, info};

const COLUMNS: &str = "id, descricao, entrada_ou_saida, valor, saldo, data, observacoes";

#[derive(Clone)]
pub struct CashEntryRepository {
    db: ConnectionPool,
}

impl CashEntryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CashEntryRepositoryTrait for CashEntryRepository {
    async fn create(&self, req: &CreateCashEntryRequest) -> Result<CashEntry, RepositoryError> {
        let sql = format!(
            "INSERT INTO caixa (descricao, entrada_ou_saida, valor, saldo, observacoes) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );

        let entry = sqlx::query_as::<_, CashEntry>(&sql)
            .bind(&req.description)
            .bind(req.direction.as_str())
            .bind(&req.amount)
            .bind(&req.balance)
            .bind(&req.notes)
            .fetch_one(&self.db)
            .await
            .map_err(|err| {
                error!("❌ Failed to create ledger entry: {:?}", err);
                RepositoryError::from(err)
            })?;

        info!(
            "✅ Ledger entry ID {} ({} {})",
            entry.id, entry.direction, entry.amount
        );
        Ok(entry)
    }

    async fn find_all(&self) -> Result<Vec<CashEntry>, RepositoryError> {
        let sql = format!("SELECT {COLUMNS} FROM caixa ORDER BY data DESC");

        sqlx::query_as::<_, CashEntry>(&sql)
            .fetch_all(&self.db)
            .await
            .map_err(RepositoryError::from)
    }

    async fn find_by_direction(&self, direction: &str) -> Result<Vec<CashEntry>, RepositoryError> {
        let sql = format!(
            "SELECT {COLUMNS} FROM caixa WHERE entrada_ou_saida = $1 ORDER BY data DESC"
        );

        sqlx::query_as::<_, CashEntry>(&sql)
            .bind(direction)
            .fetch_all(&self.db)
            .await
            .map_err(RepositoryError::from)
    }

    async fn find_by_period(
        &self,
        start: &NaiveDateTime,
        end: &NaiveDateTime,
    ) -> Result<Vec<CashEntry>, RepositoryError> {
        let sql = format!(
            "SELECT {COLUMNS} FROM caixa WHERE data BETWEEN $1 AND $2 ORDER BY data DESC"
        );

        sqlx::query_as::<_, CashEntry>(&sql)
            .bind(start)
            .bind(end)
            .fetch_all(&self.db)
            .await
            .map_err(RepositoryError::from)
    }

    async fn search_by_description(
        &self,
        description: &str,
    ) -> Result<Vec<CashEntry>, RepositoryError> {
        let sql = format!(
            "SELECT {COLUMNS} FROM caixa \
             WHERE LOWER(descricao) LIKE LOWER('%' || $1 || '%') \
             ORDER BY data DESC"
        );

        sqlx::query_as::<_, CashEntry>(&sql)
            .bind(description)
            .fetch_all(&self.db)
            .await
            .map_err(RepositoryError::from)
    }

    async fn latest_balance(&self) -> Result<Option<BigDecimal>, RepositoryError> {
        sqlx::query_scalar::<_, BigDecimal>("SELECT saldo FROM caixa ORDER BY data DESC LIMIT 1")
            .fetch_optional(&self.db)
            .await
            .map_err(RepositoryError::from)
    }

    async fn total_by_direction(
        &self,
        direction: &str,
        start: &NaiveDateTime,
        end: &NaiveDateTime,
    ) -> Result<BigDecimal, RepositoryError> {
        sqlx::query_scalar::<_, BigDecimal>(
            "SELECT COALESCE(SUM(valor), 0) FROM caixa \
             WHERE entrada_ou_saida = $1 AND data BETWEEN $2 AND $3",
        )
        .bind(direction)
        .bind(start)
        .bind(end)
        .fetch_one(&self.db)
        .await
        .map_err(RepositoryError::from)
    }
}
