use crate::{
    abstract_trait::UserRepositoryTrait, config::ConnectionPool,
    domain::requests::UpdateAccountRequest, errors::RepositoryError, model::User,
};
use async_trait::async_trait;
use tracing::{error, info};

const COLUMNS: &str = "id, email, senha, nome, ativo";

#[derive(Clone)]
pub struct UserRepository {
    db: ConnectionPool,
}

impl UserRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    async fn create(
        &self,
        email: &str,
        password_hash: &str,
        name: &str,
    ) -> Result<User, RepositoryError> {
        let sql = format!(
            "INSERT INTO usuarios (email, senha, nome) VALUES ($1, $2, $3) RETURNING {COLUMNS}"
        );

        let user = sqlx::query_as::<_, User>(&sql)
            .bind(email)
            .bind(password_hash)
            .bind(name)
            .fetch_one(&self.db)
            .await
            .map_err(|err| {
                error!("❌ Failed to create account {}: {:?}", email, err);
                RepositoryError::from(err)
            })?;

        info!("✅ Created account ID {} ({})", user.id, user.email);
        Ok(user)
    }

    async fn update(
        &self,
        req: &UpdateAccountRequest,
        password_hash: Option<&str>,
    ) -> Result<User, RepositoryError> {
        // COALESCE keeps the stored hash when no new password was supplied.
        let sql = format!(
            "UPDATE usuarios \
             SET email = $2, nome = $3, ativo = $4, senha = COALESCE($5, senha) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );

        let user = sqlx::query_as::<_, User>(&sql)
            .bind(req.id)
            .bind(&req.email)
            .bind(&req.name)
            .bind(req.active)
            .bind(password_hash)
            .fetch_optional(&self.db)
            .await
            .map_err(|err| {
                error!("❌ Failed to update account ID {}: {:?}", req.id, err);
                RepositoryError::from(err)
            })?
            .ok_or(RepositoryError::NotFound)?;

        info!("🔄 Updated account ID {}", user.id);
        Ok(user)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepositoryError> {
        let sql = format!("SELECT {COLUMNS} FROM usuarios WHERE id = $1");

        sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .fetch_optional(&self.db)
            .await
            .map_err(RepositoryError::from)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let sql = format!("SELECT {COLUMNS} FROM usuarios WHERE email = $1");

        sqlx::query_as::<_, User>(&sql)
            .bind(email)
            .fetch_optional(&self.db)
            .await
            .map_err(RepositoryError::from)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, RepositoryError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM usuarios WHERE email = $1)")
            .bind(email)
            .fetch_one(&self.db)
            .await
            .map_err(RepositoryError::from)
    }

    async fn set_active(&self, id: i32, active: bool) -> Result<User, RepositoryError> {
        let sql = format!("UPDATE usuarios SET ativo = $2 WHERE id = $1 RETURNING {COLUMNS}");

        let user = sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .bind(active)
            .fetch_optional(&self.db)
            .await
            .map_err(|err| {
                error!("❌ Failed to toggle account ID {}: {:?}", id, err);
                RepositoryError::from(err)
            })?
            .ok_or(RepositoryError::NotFound)?;

        info!("🔄 Account ID {} ativo = {}", id, active);
        Ok(user)
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM usuarios WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(|err| {
                error!("❌ Failed to delete account ID {}: {:?}", id, err);
                RepositoryError::from(err)
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        info!("🗑️ Account ID {} permanently deleted", id);
        Ok(())
    }
}
