use crate::{
    abstract_trait::CustomerRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateCustomerRequest, UpdateCustomerRequest},
    errors::RepositoryError,
    model::Customer,
};
use async_trait::async_trait;
use tracing::{error, info};

const COLUMNS: &str = "id, nome, email, telefone, cpf, endereco, cidade, estado, cep, \
                       data_nascimento, observacoes, ativo, data_cadastro, data_atualizacao";

#[derive(Clone)]
pub struct CustomerRepository {
    db: ConnectionPool,
}

impl CustomerRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CustomerRepositoryTrait for CustomerRepository {
    async fn create(&self, req: &CreateCustomerRequest) -> Result<Customer, RepositoryError> {
        let sql = format!(
            "INSERT INTO clientes \
             (nome, email, telefone, cpf, endereco, cidade, estado, cep, data_nascimento, observacoes) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {COLUMNS}"
        );

        let customer = sqlx::query_as::<_, Customer>(&sql)
            .bind(&req.name)
            .bind(&req.email)
            .bind(&req.phone)
            .bind(&req.cpf)
            .bind(&req.address)
            .bind(&req.city)
            .bind(&req.state)
            .bind(&req.cep)
            .bind(req.birth_date)
            .bind(&req.notes)
            .fetch_one(&self.db)
            .await
            .map_err(|err| {
                error!("❌ Failed to create customer {}: {:?}", req.name, err);
                RepositoryError::from(err)
            })?;

        info!("✅ Created customer ID {} ({})", customer.id, customer.name);
        Ok(customer)
    }

    async fn update(&self, req: &UpdateCustomerRequest) -> Result<Customer, RepositoryError> {
        let sql = format!(
            "UPDATE clientes \
             SET nome = $2, email = $3, telefone = $4, cpf = $5, endereco = $6, cidade = $7, \
                 estado = $8, cep = $9, data_nascimento = $10, observacoes = $11, ativo = $12, \
                 data_atualizacao = current_timestamp \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );

        let customer = sqlx::query_as::<_, Customer>(&sql)
            .bind(req.id)
            .bind(&req.name)
            .bind(&req.email)
            .bind(&req.phone)
            .bind(&req.cpf)
            .bind(&req.address)
            .bind(&req.city)
            .bind(&req.state)
            .bind(&req.cep)
            .bind(req.birth_date)
            .bind(&req.notes)
            .bind(req.active)
            .fetch_optional(&self.db)
            .await
            .map_err(|err| {
                error!("❌ Failed to update customer ID {}: {:?}", req.id, err);
                RepositoryError::from(err)
            })?
            .ok_or(RepositoryError::NotFound)?;

        info!("🔄 Updated customer ID {}", customer.id);
        Ok(customer)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Customer>, RepositoryError> {
        let sql = format!("SELECT {COLUMNS} FROM clientes WHERE id = $1");

        sqlx::query_as::<_, Customer>(&sql)
            .bind(id)
            .fetch_optional(&self.db)
            .await
            .map_err(RepositoryError::from)
    }

    async fn find_active(&self) -> Result<Vec<Customer>, RepositoryError> {
        let sql = format!("SELECT {COLUMNS} FROM clientes WHERE ativo = TRUE ORDER BY nome");

        sqlx::query_as::<_, Customer>(&sql)
            .fetch_all(&self.db)
            .await
            .map_err(RepositoryError::from)
    }

    async fn find_all(&self) -> Result<Vec<Customer>, RepositoryError> {
        let sql = format!("SELECT {COLUMNS} FROM clientes ORDER BY nome");

        sqlx::query_as::<_, Customer>(&sql)
            .fetch_all(&self.db)
            .await
            .map_err(RepositoryError::from)
    }

    async fn search_by_name(&self, name: &str) -> Result<Vec<Customer>, RepositoryError> {
        let sql = format!(
            "SELECT {COLUMNS} FROM clientes \
             WHERE LOWER(nome) LIKE LOWER('%' || $1 || '%') AND ativo = TRUE \
             ORDER BY nome"
        );

        sqlx::query_as::<_, Customer>(&sql)
            .bind(name)
            .fetch_all(&self.db)
            .await
            .map_err(RepositoryError::from)
    }

    async fn find_by_cpf(&self, cpf: &str) -> Result<Option<Customer>, RepositoryError> {
        let sql = format!("SELECT {COLUMNS} FROM clientes WHERE cpf = $1 AND ativo = TRUE");

        sqlx::query_as::<_, Customer>(&sql)
            .bind(cpf)
            .fetch_optional(&self.db)
            .await
            .map_err(RepositoryError::from)
    }

    async fn exists_by_cpf(&self, cpf: &str) -> Result<bool, RepositoryError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM clientes WHERE cpf = $1)")
            .bind(cpf)
            .fetch_one(&self.db)
            .await
            .map_err(RepositoryError::from)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, RepositoryError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM clientes WHERE email = $1)")
            .bind(email)
            .fetch_one(&self.db)
            .await
            .map_err(RepositoryError::from)
    }

    async fn set_active(&self, id: i32, active: bool) -> Result<Customer, RepositoryError> {
        let sql = format!(
            "UPDATE clientes SET ativo = $2, data_atualizacao = current_timestamp \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );

        let customer = sqlx::query_as::<_, Customer>(&sql)
            .bind(id)
            .bind(active)
            .fetch_optional(&self.db)
            .await
            .map_err(|err| {
                error!("❌ Failed to toggle customer ID {}: {:?}", id, err);
                RepositoryError::from(err)
            })?
            .ok_or(RepositoryError::NotFound)?;

        info!("🔄 Customer ID {} ativo = {}", id, active);
        Ok(customer)
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM clientes WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(|err| {
                error!("❌ Failed to delete customer ID {}: {:?}", id, err);
                RepositoryError::from(err)
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        info!("🗑️ Customer ID {} permanently deleted", id);
        Ok(())
    }

    async fn count_active(&self) -> Result<i64, RepositoryError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM clientes WHERE ativo = TRUE")
            .fetch_one(&self.db)
            .await
            .map_err(RepositoryError::from)
    }
}
