use crate::{
    domain::{
        requests::{CreateProductRequest, UpdateProductRequest},
        responses::{ProductResponse, ProductStatsResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::Product,
};
use async_trait::async_trait;
use bigdecimal::BigDecimal;
use std::sync::Arc;

pub type DynProductRepository = Arc<dyn ProductRepositoryTrait + Send + Sync>;
pub type DynProductService = Arc<dyn ProductServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductRepositoryTrait {
    async fn create(&self, req: &CreateProductRequest) -> Result<Product, RepositoryError>;
    async fn update(&self, req: &UpdateProductRequest) -> Result<Product, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError>;
    async fn find_active(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn search_by_name(&self, name: &str) -> Result<Vec<Product>, RepositoryError>;
    async fn find_by_category(&self, category: &str) -> Result<Vec<Product>, RepositoryError>;
    async fn find_by_brand(&self, brand: &str) -> Result<Vec<Product>, RepositoryError>;
    async fn find_by_barcode(&self, barcode: &str) -> Result<Option<Product>, RepositoryError>;
    async fn find_by_price_range(
        &self,
        min: &BigDecimal,
        max: &BigDecimal,
    ) -> Result<Vec<Product>, RepositoryError>;
    async fn find_low_stock(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn list_categories(&self) -> Result<Vec<String>, RepositoryError>;
    async fn list_brands(&self) -> Result<Vec<String>, RepositoryError>;
    async fn set_stock(&self, id: i32, quantity: i32) -> Result<Product, RepositoryError>;
    async fn set_active(&self, id: i32, active: bool) -> Result<Product, RepositoryError>;
    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
    async fn count_active(&self) -> Result<i64, RepositoryError>;
    async fn total_stock_value(&self) -> Result<BigDecimal, RepositoryError>;
}

#[async_trait]
pub trait ProductServiceTrait {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductResponse, ServiceError>;
    async fn update_product(
        &self,
        req: &UpdateProductRequest,
    ) -> Result<ProductResponse, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<ProductResponse, ServiceError>;
    async fn list_active(&self) -> Result<Vec<ProductResponse>, ServiceError>;
    async fn list_all(&self) -> Result<Vec<ProductResponse>, ServiceError>;
    async fn search_by_name(&self, name: &str) -> Result<Vec<ProductResponse>, ServiceError>;
    async fn find_by_category(&self, category: &str)
    -> Result<Vec<ProductResponse>, ServiceError>;
    async fn find_by_brand(&self, brand: &str) -> Result<Vec<ProductResponse>, ServiceError>;
    async fn find_by_barcode(&self, barcode: &str) -> Result<ProductResponse, ServiceError>;
    async fn find_by_price_range(
        &self,
        min: &BigDecimal,
        max: &BigDecimal,
    ) -> Result<Vec<ProductResponse>, ServiceError>;
    async fn list_low_stock(&self) -> Result<Vec<ProductResponse>, ServiceError>;
    async fn list_categories(&self) -> Result<Vec<String>, ServiceError>;
    async fn list_brands(&self) -> Result<Vec<String>, ServiceError>;
    async fn set_stock(&self, id: i32, quantity: i32) -> Result<ProductResponse, ServiceError>;
    async fn reduce_stock(&self, id: i32, quantity: i32) -> Result<ProductResponse, ServiceError>;
    async fn activate(&self, id: i32) -> Result<ProductResponse, ServiceError>;
    async fn deactivate(&self, id: i32) -> Result<ProductResponse, ServiceError>;
    async fn remove(&self, id: i32) -> Result<(), ServiceError>;
    async fn stats(&self) -> Result<ProductStatsResponse, ServiceError>;
}
