use crate::{
    abstract_trait::{CashEntryServiceTrait, DynCashEntryRepository},
    domain::{
        requests::{CreateCashEntryRequest, PeriodQuery},
        responses::{CashBalanceResponse, CashEntryResponse, CashSummaryResponse},
    },
    errors::ServiceError,
    model::LedgerDirection,
};
use async_trait::async_trait;
use bigdecimal::BigDecimal;
use tracing::info;

pub struct CashEntryService {
    repository: DynCashEntryRepository,
}

impl CashEntryService {
    pub fn new(repository: DynCashEntryRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CashEntryServiceTrait for CashEntryService {
    async fn create_entry(
        &self,
        req: &CreateCashEntryRequest,
    ) -> Result<CashEntryResponse, ServiceError> {
        info!(
            "🧾 Ledger entry: {} {} ({})",
            req.direction, req.amount, req.description
        );

        // The running balance is taken as-is from the request; nothing is
        // recomputed against previous entries.
        let entry = self.repository.create(req).await?;
        Ok(CashEntryResponse::from(entry))
    }

    async fn list_all(&self) -> Result<Vec<CashEntryResponse>, ServiceError> {
        let entries = self.repository.find_all().await?;
        Ok(entries.into_iter().map(CashEntryResponse::from).collect())
    }

    async fn find_by_direction(
        &self,
        direction: LedgerDirection,
    ) -> Result<Vec<CashEntryResponse>, ServiceError> {
        let entries = self.repository.find_by_direction(direction.as_str()).await?;
        Ok(entries.into_iter().map(CashEntryResponse::from).collect())
    }

    async fn find_by_period(
        &self,
        period: &PeriodQuery,
    ) -> Result<Vec<CashEntryResponse>, ServiceError> {
        let entries = self
            .repository
            .find_by_period(&period.start, &period.end)
            .await?;
        Ok(entries.into_iter().map(CashEntryResponse::from).collect())
    }

    async fn search_by_description(
        &self,
        description: &str,
    ) -> Result<Vec<CashEntryResponse>, ServiceError> {
        let entries = self.repository.search_by_description(description).await?;
        Ok(entries.into_iter().map(CashEntryResponse::from).collect())
    }

    async fn latest_balance(&self) -> Result<CashBalanceResponse, ServiceError> {
        let balance = self
            .repository
            .latest_balance()
            .await?
            .unwrap_or_else(|| BigDecimal::from(0));

        Ok(CashBalanceResponse { balance })
    }

    async fn summary(&self, period: &PeriodQuery) -> Result<CashSummaryResponse, ServiceError> {
        let total_inflows = self
            .repository
            .total_by_direction(
                LedgerDirection::Inflow.as_str(),
                &period.start,
                &period.end,
            )
            .await?;
        let total_outflows = self
            .repository
            .total_by_direction(
                LedgerDirection::Outflow.as_str(),
                &period.start,
                &period.end,
            )
            .await?;

        Ok(CashSummaryResponse {
            total_inflows,
            total_outflows,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{errors::RepositoryError, model::CashEntry};
    use chrono::NaiveDateTime;
    use std::sync::{Arc, Mutex};

    fn dec(v: &str) -> BigDecimal {
        v.parse().unwrap()
    }

    #[derive(Default)]
    struct InMemoryLedger {
        rows: Mutex<Vec<CashEntry>>,
    }

    #[async_trait]
    impl crate::abstract_trait::CashEntryRepositoryTrait for InMemoryLedger {
        async fn create(
            &self,
            req: &CreateCashEntryRequest,
        ) -> Result<CashEntry, RepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            let entry = CashEntry {
                id: rows.len() as i32 + 1,
                description: req.description.clone(),
                direction: req.direction.as_str().to_string(),
                amount: req.amount.clone(),
                balance: req.balance.clone(),
                entry_date: NaiveDateTime::default(),
                notes: req.notes.clone(),
            };
            rows.push(entry.clone());
            Ok(entry)
        }

        async fn find_all(&self) -> Result<Vec<CashEntry>, RepositoryError> {
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn find_by_direction(
            &self,
            direction: &str,
        ) -> Result<Vec<CashEntry>, RepositoryError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .filter(|e| e.direction == direction)
                .cloned()
                .collect())
        }

        async fn find_by_period(
            &self,
            _start: &NaiveDateTime,
            _end: &NaiveDateTime,
        ) -> Result<Vec<CashEntry>, RepositoryError> {
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn search_by_description(
            &self,
            description: &str,
        ) -> Result<Vec<CashEntry>, RepositoryError> {
            let needle = description.to_lowercase();
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .filter(|e| e.description.to_lowercase().contains(&needle))
                .cloned()
                .collect())
        }

        async fn latest_balance(&self) -> Result<Option<BigDecimal>, RepositoryError> {
            Ok(self.rows.lock().unwrap().last().map(|e| e.balance.clone()))
        }

        async fn total_by_direction(
            &self,
            direction: &str,
            _start: &NaiveDateTime,
            _end: &NaiveDateTime,
        ) -> Result<BigDecimal, RepositoryError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .filter(|e| e.direction == direction)
                .map(|e| e.amount.clone())
                .sum())
        }
    }

    fn entry(
        description: &str,
        direction: LedgerDirection,
        amount: &str,
        balance: &str,
    ) -> CreateCashEntryRequest {
        CreateCashEntryRequest {
            description: description.into(),
            direction,
            amount: dec(amount),
            balance: dec(balance),
            notes: None,
        }
    }

    #[tokio::test]
    async fn balance_is_caller_supplied() {
        let service = CashEntryService::new(Arc::new(InMemoryLedger::default()));

        service
            .create_entry(&entry("Venda", LedgerDirection::Inflow, "100.00", "100.00"))
            .await
            .unwrap();
        let created = service
            .create_entry(&entry("Aluguel", LedgerDirection::Outflow, "40.00", "60.00"))
            .await
            .unwrap();

        // Stored exactly as supplied, no recomputation.
        assert_eq!(created.balance, dec("60.00"));
        assert_eq!(service.latest_balance().await.unwrap().balance, dec("60.00"));
    }

    #[tokio::test]
    async fn empty_ledger_reports_zero_balance() {
        let service = CashEntryService::new(Arc::new(InMemoryLedger::default()));

        let response = service.latest_balance().await.unwrap();
        assert_eq!(response.balance, BigDecimal::from(0));
    }

    #[tokio::test]
    async fn summary_totals_split_by_direction() {
        let service = CashEntryService::new(Arc::new(InMemoryLedger::default()));

        service
            .create_entry(&entry("Venda", LedgerDirection::Inflow, "100.00", "100.00"))
            .await
            .unwrap();
        service
            .create_entry(&entry("Venda", LedgerDirection::Inflow, "50.00", "150.00"))
            .await
            .unwrap();
        service
            .create_entry(&entry("Luz", LedgerDirection::Outflow, "30.00", "120.00"))
            .await
            .unwrap();

        let period = PeriodQuery {
            start: NaiveDateTime::default(),
            end: NaiveDateTime::default(),
        };
        let summary = service.summary(&period).await.unwrap();
        assert_eq!(summary.total_inflows, dec("150.00"));
        assert_eq!(summary.total_outflows, dec("30.00"));
    }

    #[tokio::test]
    async fn search_matches_description_case_insensitively() {
        let service = CashEntryService::new(Arc::new(InMemoryLedger::default()));

        service
            .create_entry(&entry("Compra de tecido", LedgerDirection::Outflow, "10.00", "90.00"))
            .await
            .unwrap();

        let found = service.search_by_description("TECIDO").await.unwrap();
        assert_eq!(found.len(), 1);
    }
}
