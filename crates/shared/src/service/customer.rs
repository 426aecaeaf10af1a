use crate::{
    abstract_trait::{CustomerServiceTrait, DynCustomerRepository},
    domain::{
        requests::{CreateCustomerRequest, UpdateCustomerRequest},
        responses::{CustomerResponse, CustomerStatsResponse},
    },
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct CustomerService {
    repository: DynCustomerRepository,
}

impl CustomerService {
    pub fn new(repository: DynCustomerRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CustomerServiceTrait for CustomerService {
    async fn create_customer(
        &self,
        req: &CreateCustomerRequest,
    ) -> Result<CustomerResponse, ServiceError> {
        info!("🏗️ Creating customer: {}", req.name);

        // Uniqueness is checked over active and inactive records alike; a
        // soft-deleted customer still owns its CPF and email.
        if let Some(cpf) = &req.cpf {
            if self.repository.exists_by_cpf(cpf).await? {
                error!("❌ CPF already registered: {cpf}");
                return Err(ServiceError::Repo(RepositoryError::AlreadyExists(format!(
                    "CPF {cpf} is already registered"
                ))));
            }
        }

        if let Some(email) = &req.email {
            if self.repository.exists_by_email(email).await? {
                error!("❌ Email already registered: {email}");
                return Err(ServiceError::Repo(RepositoryError::AlreadyExists(format!(
                    "Email {email} is already registered"
                ))));
            }
        }

        let customer = self.repository.create(req).await?;

        info!("✅ Customer created: {} (ID: {})", customer.name, customer.id);
        Ok(CustomerResponse::from(customer))
    }

    async fn update_customer(
        &self,
        req: &UpdateCustomerRequest,
    ) -> Result<CustomerResponse, ServiceError> {
        info!("✏️ Updating customer ID {}", req.id);

        let current = self
            .repository
            .find_by_id(req.id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        // Re-check uniqueness only when the value is being changed, so a
        // customer can keep their own CPF/email on every update.
        if let Some(cpf) = &req.cpf {
            if current.cpf.as_deref() != Some(cpf.as_str())
                && self.repository.exists_by_cpf(cpf).await?
            {
                return Err(ServiceError::Repo(RepositoryError::AlreadyExists(format!(
                    "CPF {cpf} is already registered"
                ))));
            }
        }

        if let Some(email) = &req.email {
            if current.email.as_deref() != Some(email.as_str())
                && self.repository.exists_by_email(email).await?
            {
                return Err(ServiceError::Repo(RepositoryError::AlreadyExists(format!(
                    "Email {email} is already registered"
                ))));
            }
        }

        let customer = self.repository.update(req).await?;

        info!("✅ Customer updated: ID {}", customer.id);
        Ok(CustomerResponse::from(customer))
    }

    async fn find_by_id(&self, id: i32) -> Result<CustomerResponse, ServiceError> {
        let customer = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        Ok(CustomerResponse::from(customer))
    }

    async fn list_active(&self) -> Result<Vec<CustomerResponse>, ServiceError> {
        let customers = self.repository.find_active().await?;
        Ok(customers.into_iter().map(CustomerResponse::from).collect())
    }

    async fn list_all(&self) -> Result<Vec<CustomerResponse>, ServiceError> {
        let customers = self.repository.find_all().await?;
        Ok(customers.into_iter().map(CustomerResponse::from).collect())
    }

    async fn search_by_name(&self, name: &str) -> Result<Vec<CustomerResponse>, ServiceError> {
        let customers = self.repository.search_by_name(name).await?;
        Ok(customers.into_iter().map(CustomerResponse::from).collect())
    }

    async fn find_by_cpf(&self, cpf: &str) -> Result<CustomerResponse, ServiceError> {
        let customer = self
            .repository
            .find_by_cpf(cpf)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        Ok(CustomerResponse::from(customer))
    }

    async fn activate(&self, id: i32) -> Result<CustomerResponse, ServiceError> {
        info!("🔄 Activating customer ID {id}");
        let customer = self.repository.set_active(id, true).await?;
        Ok(CustomerResponse::from(customer))
    }

    async fn deactivate(&self, id: i32) -> Result<CustomerResponse, ServiceError> {
        info!("🗑️ Deactivating customer ID {id}");
        let customer = self.repository.set_active(id, false).await?;
        Ok(CustomerResponse::from(customer))
    }

    async fn remove(&self, id: i32) -> Result<(), ServiceError> {
        info!("💀 Permanently removing customer ID {id}");
        self.repository.delete(id).await?;
        Ok(())
    }

    async fn stats(&self) -> Result<CustomerStatsResponse, ServiceError> {
        let total_customers = self.repository.count_active().await?;
        Ok(CustomerStatsResponse { total_customers })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Customer;
    use chrono::NaiveDateTime;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct InMemoryCustomers {
        rows: Mutex<Vec<Customer>>,
    }

    fn sample(id: i32, cpf: Option<&str>, email: Option<&str>, active: bool) -> Customer {
        Customer {
            id,
            name: format!("Cliente {id}"),
            email: email.map(str::to_string),
            phone: None,
            cpf: cpf.map(str::to_string),
            address: None,
            city: None,
            state: None,
            cep: None,
            birth_date: None,
            notes: None,
            active,
            created_at: NaiveDateTime::default(),
            updated_at: NaiveDateTime::default(),
        }
    }

    #[async_trait]
    impl crate::abstract_trait::CustomerRepositoryTrait for InMemoryCustomers {
        async fn create(
            &self,
            req: &CreateCustomerRequest,
        ) -> Result<Customer, RepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            let id = rows.len() as i32 + 1;
            let mut customer = sample(id, req.cpf.as_deref(), req.email.as_deref(), true);
            customer.name = req.name.clone();
            rows.push(customer.clone());
            Ok(customer)
        }

        async fn update(
            &self,
            req: &UpdateCustomerRequest,
        ) -> Result<Customer, RepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            let row = rows
                .iter_mut()
                .find(|c| c.id == req.id)
                .ok_or(RepositoryError::NotFound)?;
            row.name = req.name.clone();
            row.cpf = req.cpf.clone();
            row.email = req.email.clone();
            row.active = req.active;
            Ok(row.clone())
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<Customer>, RepositoryError> {
            Ok(self.rows.lock().unwrap().iter().find(|c| c.id == id).cloned())
        }

        async fn find_active(&self) -> Result<Vec<Customer>, RepositoryError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .filter(|c| c.active)
                .cloned()
                .collect())
        }

        async fn find_all(&self) -> Result<Vec<Customer>, RepositoryError> {
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn search_by_name(&self, name: &str) -> Result<Vec<Customer>, RepositoryError> {
            let needle = name.to_lowercase();
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .filter(|c| c.active && c.name.to_lowercase().contains(&needle))
                .cloned()
                .collect())
        }

        async fn find_by_cpf(&self, cpf: &str) -> Result<Option<Customer>, RepositoryError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .find(|c| c.active && c.cpf.as_deref() == Some(cpf))
                .cloned())
        }

        async fn exists_by_cpf(&self, cpf: &str) -> Result<bool, RepositoryError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .any(|c| c.cpf.as_deref() == Some(cpf)))
        }

        async fn exists_by_email(&self, email: &str) -> Result<bool, RepositoryError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .any(|c| c.email.as_deref() == Some(email)))
        }

        async fn set_active(&self, id: i32, active: bool) -> Result<Customer, RepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            let row = rows
                .iter_mut()
                .find(|c| c.id == id)
                .ok_or(RepositoryError::NotFound)?;
            row.active = active;
            Ok(row.clone())
        }

        async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|c| c.id != id);
            if rows.len() == before {
                return Err(RepositoryError::NotFound);
            }
            Ok(())
        }

        async fn count_active(&self) -> Result<i64, RepositoryError> {
            Ok(self.rows.lock().unwrap().iter().filter(|c| c.active).count() as i64)
        }
    }

    fn service_with(rows: Vec<Customer>) -> CustomerService {
        let repo = InMemoryCustomers {
            rows: Mutex::new(rows),
        };
        CustomerService::new(Arc::new(repo))
    }

    fn create_request(cpf: Option<&str>, email: Option<&str>) -> CreateCustomerRequest {
        CreateCustomerRequest {
            name: "Maria Silva".into(),
            email: email.map(str::to_string),
            phone: None,
            cpf: cpf.map(str::to_string),
            address: None,
            city: None,
            state: None,
            cep: None,
            birth_date: None,
            notes: None,
        }
    }

    #[tokio::test]
    async fn duplicate_cpf_is_refused() {
        let service = service_with(vec![sample(1, Some("12345678900"), None, true)]);

        let result = service
            .create_customer(&create_request(Some("12345678900"), None))
            .await;

        assert!(matches!(
            result,
            Err(ServiceError::Repo(RepositoryError::AlreadyExists(_)))
        ));
    }

    #[tokio::test]
    async fn duplicate_cpf_of_inactive_customer_is_refused() {
        let service = service_with(vec![sample(1, Some("12345678900"), None, false)]);

        let result = service
            .create_customer(&create_request(Some("12345678900"), None))
            .await;

        assert!(matches!(
            result,
            Err(ServiceError::Repo(RepositoryError::AlreadyExists(_)))
        ));
    }

    #[tokio::test]
    async fn duplicate_email_is_refused() {
        let service = service_with(vec![sample(1, None, Some("maria@ex.com"), true)]);

        let result = service
            .create_customer(&create_request(None, Some("maria@ex.com")))
            .await;

        assert!(matches!(
            result,
            Err(ServiceError::Repo(RepositoryError::AlreadyExists(_)))
        ));
    }

    #[tokio::test]
    async fn create_without_collisions_succeeds() {
        let service = service_with(vec![sample(1, Some("11111111111"), None, true)]);

        let created = service
            .create_customer(&create_request(Some("22222222222"), Some("nova@ex.com")))
            .await
            .unwrap();

        assert_eq!(created.name, "Maria Silva");
        assert!(created.active);
    }

    #[tokio::test]
    async fn update_keeps_own_cpf() {
        let service = service_with(vec![sample(1, Some("12345678900"), None, true)]);

        let req = UpdateCustomerRequest {
            id: 1,
            name: "Maria Atualizada".into(),
            email: None,
            phone: None,
            cpf: Some("12345678900".into()),
            address: None,
            city: None,
            state: None,
            cep: None,
            birth_date: None,
            notes: None,
            active: true,
        };

        let updated = service.update_customer(&req).await.unwrap();
        assert_eq!(updated.name, "Maria Atualizada");
    }

    #[tokio::test]
    async fn deactivate_then_activate_round_trips() {
        let service = service_with(vec![sample(7, Some("12345678900"), None, true)]);

        let deactivated = service.deactivate(7).await.unwrap();
        assert!(!deactivated.active);

        let reactivated = service.activate(7).await.unwrap();
        assert!(reactivated.active);
        assert_eq!(reactivated.cpf.as_deref(), Some("12345678900"));
    }

    #[tokio::test]
    async fn activate_unknown_id_is_not_found() {
        let service = service_with(vec![]);

        let result = service.activate(99).await;
        assert!(matches!(
            result,
            Err(ServiceError::Repo(RepositoryError::NotFound))
        ));
    }

    #[tokio::test]
    async fn stats_count_only_active_customers() {
        let service = service_with(vec![
            sample(1, None, None, true),
            sample(2, None, None, false),
            sample(3, None, None, true),
        ]);

        let stats = service.stats().await.unwrap();
        assert_eq!(stats.total_customers, 2);
    }
}
