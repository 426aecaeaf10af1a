use crate::{
    domain::{
        requests::{CreateCustomerRequest, UpdateCustomerRequest},
        responses::{CustomerResponse, CustomerStatsResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::Customer,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynCustomerRepository = Arc<dyn CustomerRepositoryTrait + Send + Sync>;
pub type DynCustomerService = Arc<dyn CustomerServiceTrait + Send + Sync>;

#[async_trait]
pub trait CustomerRepositoryTrait {
    async fn create(&self, req: &CreateCustomerRequest) -> Result<Customer, RepositoryError>;
    async fn update(&self, req: &UpdateCustomerRequest) -> Result<Customer, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Customer>, RepositoryError>;
    async fn find_active(&self) -> Result<Vec<Customer>, RepositoryError>;
    async fn find_all(&self) -> Result<Vec<Customer>, RepositoryError>;
    async fn search_by_name(&self, name: &str) -> Result<Vec<Customer>, RepositoryError>;
    async fn find_by_cpf(&self, cpf: &str) -> Result<Option<Customer>, RepositoryError>;
    async fn exists_by_cpf(&self, cpf: &str) -> Result<bool, RepositoryError>;
    async fn exists_by_email(&self, email: &str) -> Result<bool, RepositoryError>;
    async fn set_active(&self, id: i32, active: bool) -> Result<Customer, RepositoryError>;
    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
    async fn count_active(&self) -> Result<i64, RepositoryError>;
}

#[async_trait]
pub trait CustomerServiceTrait {
    async fn create_customer(
        &self,
        req: &CreateCustomerRequest,
    ) -> Result<CustomerResponse, ServiceError>;
    async fn update_customer(
        &self,
        req: &UpdateCustomerRequest,
    ) -> Result<CustomerResponse, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<CustomerResponse, ServiceError>;
    async fn list_active(&self) -> Result<Vec<CustomerResponse>, ServiceError>;
    async fn list_all(&self) -> Result<Vec<CustomerResponse>, ServiceError>;
    async fn search_by_name(&self, name: &str) -> Result<Vec<CustomerResponse>, ServiceError>;
    async fn find_by_cpf(&self, cpf: &str) -> Result<CustomerResponse, ServiceError>;
    async fn activate(&self, id: i32) -> Result<CustomerResponse, ServiceError>;
    async fn deactivate(&self, id: i32) -> Result<CustomerResponse, ServiceError>;
    async fn remove(&self, id: i32) -> Result<(), ServiceError>;
    async fn stats(&self) -> Result<CustomerStatsResponse, ServiceError>;
}
