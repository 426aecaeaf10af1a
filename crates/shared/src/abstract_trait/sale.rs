use crate::{
    domain::{
        requests::{CreateSaleRequest, PeriodQuery},
        responses::{SaleResponse, SaleStatsResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::{NewSale, NewSaleItem, Sale, SaleItem, SaleStatus},
};
use async_trait::async_trait;
use bigdecimal::BigDecimal;
use std::sync::Arc;

pub type DynSaleRepository = Arc<dyn SaleRepositoryTrait + Send + Sync>;
pub type DynSaleService = Arc<dyn SaleServiceTrait + Send + Sync>;

#[async_trait]
pub trait SaleRepositoryTrait {
    /// Inserts the sale and its items and decrements product stock, all in
    /// one transaction. Fails with `InsufficientStock` when any decrement
    /// would drive a quantity below zero.
    async fn create(
        &self,
        sale: &NewSale,
        items: &[NewSaleItem],
    ) -> Result<(Sale, Vec<SaleItem>), RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Sale>, RepositoryError>;
    async fn find_items(&self, sale_id: i32) -> Result<Vec<SaleItem>, RepositoryError>;
    async fn find_all(&self) -> Result<Vec<Sale>, RepositoryError>;
    async fn find_today(&self) -> Result<Vec<Sale>, RepositoryError>;
    async fn find_by_period(
        &self,
        start: &chrono::NaiveDateTime,
        end: &chrono::NaiveDateTime,
    ) -> Result<Vec<Sale>, RepositoryError>;
    async fn find_by_status(&self, status: &str) -> Result<Vec<Sale>, RepositoryError>;
    async fn find_by_customer(&self, customer_id: i32) -> Result<Vec<Sale>, RepositoryError>;
    async fn update_status(&self, id: i32, status: &str) -> Result<Sale, RepositoryError>;
    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
    async fn total_today(&self) -> Result<BigDecimal, RepositoryError>;
    async fn count_by_status(&self, status: &str) -> Result<i64, RepositoryError>;
}

#[async_trait]
pub trait SaleServiceTrait {
    async fn create_sale(&self, req: &CreateSaleRequest) -> Result<SaleResponse, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<SaleResponse, ServiceError>;
    async fn list_all(&self) -> Result<Vec<SaleResponse>, ServiceError>;
    async fn list_today(&self) -> Result<Vec<SaleResponse>, ServiceError>;
    async fn find_by_period(&self, period: &PeriodQuery)
    -> Result<Vec<SaleResponse>, ServiceError>;
    async fn find_by_status(&self, status: SaleStatus) -> Result<Vec<SaleResponse>, ServiceError>;
    async fn find_by_customer(&self, customer_id: i32)
    -> Result<Vec<SaleResponse>, ServiceError>;
    async fn update_status(&self, id: i32, status: SaleStatus)
    -> Result<SaleResponse, ServiceError>;
    async fn remove(&self, id: i32) -> Result<(), ServiceError>;
    async fn stats(&self) -> Result<SaleStatsResponse, ServiceError>;
}
