use crate::{
    abstract_trait::{AuthServiceTrait, DynHashing, DynUserRepository},
    domain::{
        requests::{RegisterRequest, UpdateAccountRequest},
        responses::UserResponse,
    },
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;
use tracing::{error, info, warn};

pub struct AuthService {
    hashing: DynHashing,
    repository: DynUserRepository,
}

impl AuthService {
    pub fn new(hashing: DynHashing, repository: DynUserRepository) -> Self {
        Self {
            hashing,
            repository,
        }
    }
}

#[async_trait]
impl AuthServiceTrait for AuthService {
    async fn register(&self, req: &RegisterRequest) -> Result<UserResponse, ServiceError> {
        info!("📝 Registering account: {}", req.email);

        if self.repository.exists_by_email(&req.email).await? {
            error!("❌ Email already registered: {}", req.email);
            return Err(ServiceError::Repo(RepositoryError::AlreadyExists(format!(
                "Email {} is already registered",
                req.email
            ))));
        }

        let password_hash = self.hashing.hash_password(&req.password).await?;
        let user = self
            .repository
            .create(&req.email, &password_hash, &req.name)
            .await?;

        info!("✅ Account created: {} (ID: {})", user.email, user.id);
        Ok(UserResponse::from(user))
    }

    async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<UserResponse, ServiceError> {
        info!("🔐 Login attempt for {email}");

        let user = match self.repository.find_by_email(email).await? {
            Some(user) => user,
            None => {
                warn!("❌ Unknown email: {email}");
                return Err(ServiceError::InvalidCredentials);
            }
        };

        // Inactive accounts fail exactly like wrong passwords so the
        // response does not leak which accounts exist.
        if !user.active {
            warn!("❌ Inactive account: {email}");
            return Err(ServiceError::InvalidCredentials);
        }

        self.hashing
            .compare_password(&user.password, password)
            .await?;

        info!("✅ Authenticated {} (ID: {})", user.email, user.id);
        Ok(UserResponse::from(user))
    }

    async fn find_by_email(&self, email: &str) -> Result<UserResponse, ServiceError> {
        let user = self
            .repository
            .find_by_email(email)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        Ok(UserResponse::from(user))
    }

    async fn update_account(
        &self,
        req: &UpdateAccountRequest,
    ) -> Result<UserResponse, ServiceError> {
        info!("✏️ Updating account ID {}", req.id);

        let password_hash = match &req.password {
            Some(password) if !password.is_empty() => {
                Some(self.hashing.hash_password(password).await?)
            }
            _ => None,
        };

        let user = self
            .repository
            .update(req, password_hash.as_deref())
            .await?;

        Ok(UserResponse::from(user))
    }

    async fn activate(&self, id: i32) -> Result<UserResponse, ServiceError> {
        info!("🔄 Activating account ID {id}");
        let user = self.repository.set_active(id, true).await?;
        Ok(UserResponse::from(user))
    }

    async fn deactivate(&self, id: i32) -> Result<UserResponse, ServiceError> {
        info!("🗑️ Deactivating account ID {id}");
        let user = self.repository.set_active(id, false).await?;
        Ok(UserResponse::from(user))
    }

    async fn remove(&self, id: i32) -> Result<(), ServiceError> {
        info!("💀 Permanently removing account ID {id}");
        self.repository.delete(id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{abstract_trait::UserRepositoryTrait, config::Hashing, model::User};
    use std::sync::{Arc, Mutex};

    struct InMemoryUsers {
        rows: Mutex<Vec<User>>,
    }

    #[async_trait]
    impl UserRepositoryTrait for InMemoryUsers {
        async fn create(
            &self,
            email: &str,
            password_hash: &str,
            name: &str,
        ) -> Result<User, RepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            let user = User {
                id: rows.len() as i32 + 1,
                email: email.to_string(),
                password: password_hash.to_string(),
                name: name.to_string(),
                active: true,
            };
            rows.push(user.clone());
            Ok(user)
        }

        async fn update(
            &self,
            req: &UpdateAccountRequest,
            password_hash: Option<&str>,
        ) -> Result<User, RepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            let row = rows
                .iter_mut()
                .find(|u| u.id == req.id)
                .ok_or(RepositoryError::NotFound)?;
            row.email = req.email.clone();
            row.name = req.name.clone();
            row.active = req.active;
            if let Some(hash) = password_hash {
                row.password = hash.to_string();
            }
            Ok(row.clone())
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepositoryError> {
            Ok(self.rows.lock().unwrap().iter().find(|u| u.id == id).cloned())
        }

        async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.email == email)
                .cloned())
        }

        async fn exists_by_email(&self, email: &str) -> Result<bool, RepositoryError> {
            Ok(self.rows.lock().unwrap().iter().any(|u| u.email == email))
        }

        async fn set_active(&self, id: i32, active: bool) -> Result<User, RepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            let row = rows
                .iter_mut()
                .find(|u| u.id == id)
                .ok_or(RepositoryError::NotFound)?;
            row.active = active;
            Ok(row.clone())
        }

        async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|u| u.id != id);
            if rows.len() == before {
                return Err(RepositoryError::NotFound);
            }
            Ok(())
        }
    }

    fn empty_service() -> AuthService {
        AuthService::new(
            Arc::new(Hashing::new()),
            Arc::new(InMemoryUsers {
                rows: Mutex::new(vec![]),
            }),
        )
    }

    fn register_request(email: &str) -> RegisterRequest {
        RegisterRequest {
            email: email.to_string(),
            password: "segredo123".into(),
            name: "Gerente".into(),
        }
    }

    #[tokio::test]
    async fn register_then_authenticate() {
        let service = empty_service();
        service.register(&register_request("g@loja.com")).await.unwrap();

        let user = service.authenticate("g@loja.com", "segredo123").await.unwrap();
        assert_eq!(user.email, "g@loja.com");
        assert!(user.active);
    }

    #[tokio::test]
    async fn register_duplicate_email_conflicts() {
        let service = empty_service();
        service.register(&register_request("g@loja.com")).await.unwrap();

        let result = service.register(&register_request("g@loja.com")).await;
        assert!(matches!(
            result,
            Err(ServiceError::Repo(RepositoryError::AlreadyExists(_)))
        ));
    }

    #[tokio::test]
    async fn password_is_hashed_at_rest() {
        let service = empty_service();
        let created = service.register(&register_request("g@loja.com")).await.unwrap();

        let stored = service
            .repository
            .find_by_id(created.id)
            .await
            .unwrap()
            .unwrap();
        assert_ne!(stored.password, "segredo123");
    }

    #[tokio::test]
    async fn wrong_password_is_rejected() {
        let service = empty_service();
        service.register(&register_request("g@loja.com")).await.unwrap();

        let result = service.authenticate("g@loja.com", "errada").await;
        assert!(matches!(result, Err(ServiceError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn unknown_email_is_rejected() {
        let service = empty_service();

        let result = service.authenticate("quem@loja.com", "segredo123").await;
        assert!(matches!(result, Err(ServiceError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn inactive_account_fails_even_with_correct_password() {
        let service = empty_service();
        let created = service.register(&register_request("g@loja.com")).await.unwrap();
        service.deactivate(created.id).await.unwrap();

        let result = service.authenticate("g@loja.com", "segredo123").await;
        assert!(matches!(result, Err(ServiceError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn find_by_email_and_remove() {
        let service = empty_service();
        let created = service.register(&register_request("g@loja.com")).await.unwrap();

        let found = service.find_by_email("g@loja.com").await.unwrap();
        assert_eq!(found.id, created.id);

        service.remove(created.id).await.unwrap();
        let result = service.find_by_email("g@loja.com").await;
        assert!(matches!(
            result,
            Err(ServiceError::Repo(RepositoryError::NotFound))
        ));
    }

    #[tokio::test]
    async fn update_without_password_keeps_old_hash() {
        let service = empty_service();
        let created = service.register(&register_request("g@loja.com")).await.unwrap();

        let req = UpdateAccountRequest {
            id: created.id,
            email: "g@loja.com".into(),
            password: None,
            name: "Gerente Geral".into(),
            active: true,
        };
        service.update_account(&req).await.unwrap();

        // Old password still authenticates.
        let user = service.authenticate("g@loja.com", "segredo123").await.unwrap();
        assert_eq!(user.name, "Gerente Geral");
    }
}
