use crate::{
    domain::{
        requests::{RegisterRequest, UpdateAccountRequest},
        responses::UserResponse,
    },
    errors::{RepositoryError, ServiceError},
    model::User,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynUserRepository = Arc<dyn UserRepositoryTrait + Send + Sync>;
pub type DynAuthService = Arc<dyn AuthServiceTrait + Send + Sync>;

#[async_trait]
pub trait UserRepositoryTrait {
    async fn create(
        &self,
        email: &str,
        password_hash: &str,
        name: &str,
    ) -> Result<User, RepositoryError>;
    async fn update(
        &self,
        req: &UpdateAccountRequest,
        password_hash: Option<&str>,
    ) -> Result<User, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepositoryError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
    async fn exists_by_email(&self, email: &str) -> Result<bool, RepositoryError>;
    async fn set_active(&self, id: i32, active: bool) -> Result<User, RepositoryError>;
    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait AuthServiceTrait {
    async fn register(&self, req: &RegisterRequest) -> Result<UserResponse, ServiceError>;
    async fn authenticate(&self, email: &str, password: &str)
    -> Result<UserResponse, ServiceError>;
    async fn find_by_email(&self, email: &str) -> Result<UserResponse, ServiceError>;
    async fn update_account(&self, req: &UpdateAccountRequest)
    -> Result<UserResponse, ServiceError>;
    async fn activate(&self, id: i32) -> Result<UserResponse, ServiceError>;
    async fn deactivate(&self, id: i32) -> Result<UserResponse, ServiceError>;
    async fn remove(&self, id: i32) -> Result<(), ServiceError>;
}
