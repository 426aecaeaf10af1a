use crate::{
    domain::{
        requests::{CreateCashEntryRequest, PeriodQuery},
        responses::{CashBalanceResponse, CashEntryResponse, CashSummaryResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::{CashEntry, LedgerDirection},
};
use async_trait::async_trait;
use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use std::sync::Arc;

pub type DynCashEntryRepository = Arc<dyn CashEntryRepositoryTrait + Send + Sync>;
pub type DynCashEntryService = Arc<dyn CashEntryServiceTrait + Send + Sync>;

#[async_trait]
pub trait CashEntryRepositoryTrait {
    async fn create(&self, req: &CreateCashEntryRequest) -> Result<CashEntry, RepositoryError>;
    async fn find_all(&self) -> Result<Vec<CashEntry>, RepositoryError>;
    async fn find_by_direction(&self, direction: &str) -> Result<Vec<CashEntry>, RepositoryError>;
    async fn find_by_period(
        &self,
        start: &NaiveDateTime,
        end: &NaiveDateTime,
    ) -> Result<Vec<CashEntry>, RepositoryError>;
    async fn search_by_description(
        &self,
        description: &str,
    ) -> Result<Vec<CashEntry>, RepositoryError>;
    async fn latest_balance(&self) -> Result<Option<BigDecimal>, RepositoryError>;
    async fn total_by_direction(
        &self,
        direction: &str,
        start: &NaiveDateTime,
        end: &NaiveDateTime,
    ) -> Result<BigDecimal, RepositoryError>;
}

#[async_trait]
pub trait CashEntryServiceTrait {
    async fn create_entry(
        &self,
        req: &CreateCashEntryRequest,
    ) -> Result<CashEntryResponse, ServiceError>;
    async fn list_all(&self) -> Result<Vec<CashEntryResponse>, ServiceError>;
    async fn find_by_direction(
        &self,
        direction: LedgerDirection,
    ) -> Result<Vec<CashEntryResponse>, ServiceError>;
    async fn find_by_period(
        &self,
        period: &PeriodQuery,
    ) -> Result<Vec<CashEntryResponse>, ServiceError>;
    async fn search_by_description(
        &self,
        description: &str,
    ) -> Result<Vec<CashEntryResponse>, ServiceError>;
    async fn latest_balance(&self) -> Result<CashBalanceResponse, ServiceError>;
    async fn summary(&self, period: &PeriodQuery) -> Result<CashSummaryResponse, ServiceError>;
}
