use crate::{
    abstract_trait::ProductRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateProductRequest, UpdateProductRequest},
    errors::RepositoryError,
    model::Product,
};
use async_trait::async_trait;
use bigdecimal::BigDecimal;
use tracing::{error, info};

const COLUMNS: &str = "id, nome, descricao, categoria, tamanho, cor, preco, preco_custo, \
                       quantidade_estoque, estoque_minimo, codigo_barras, marca, ativo, \
                       data_cadastro, data_atualizacao";

#[derive(Clone)]
pub struct ProductRepository {
    db: ConnectionPool,
}

impl ProductRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepositoryTrait for ProductRepository {
    async fn create(&self, req: &CreateProductRequest) -> Result<Product, RepositoryError> {
        let sql = format!(
            "INSERT INTO produtos \
             (nome, descricao, categoria, tamanho, cor, preco, preco_custo, quantidade_estoque, \
              estoque_minimo, codigo_barras, marca) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             RETURNING {COLUMNS}"
        );

        let product = sqlx::query_as::<_, Product>(&sql)
            .bind(&req.name)
            .bind(&req.description)
            .bind(&req.category)
            .bind(&req.size)
            .bind(&req.color)
            .bind(&req.price)
            .bind(&req.cost_price)
            .bind(req.stock_quantity)
            .bind(req.min_stock)
            .bind(&req.barcode)
            .bind(&req.brand)
            .fetch_one(&self.db)
            .await
            .map_err(|err| {
                error!("❌ Failed to create product {}: {:?}", req.name, err);
                RepositoryError::from(err)
            })?;

        info!("✅ Created product ID {} ({})", product.id, product.name);
        Ok(product)
    }

    async fn update(&self, req: &UpdateProductRequest) -> Result<Product, RepositoryError> {
        let sql = format!(
            "UPDATE produtos \
             SET nome = $2, descricao = $3, categoria = $4, tamanho = $5, cor = $6, preco = $7, \
                 preco_custo = $8, quantidade_estoque = $9, estoque_minimo = $10, \
                 codigo_barras = $11, marca = $12, ativo = $13, \
                 data_atualizacao = current_timestamp \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );

        let product = sqlx::query_as::<_, Product>(&sql)
            .bind(req.id)
            .bind(&req.name)
            .bind(&req.description)
            .bind(&req.category)
            .bind(&req.size)
            .bind(&req.color)
            .bind(&req.price)
            .bind(&req.cost_price)
            .bind(req.stock_quantity)
            .bind(req.min_stock)
            .bind(&req.barcode)
            .bind(&req.brand)
            .bind(req.active)
            .fetch_optional(&self.db)
            .await
            .map_err(|err| {
                error!("❌ Failed to update product ID {}: {:?}", req.id, err);
                RepositoryError::from(err)
            })?
            .ok_or(RepositoryError::NotFound)?;

        info!("🔄 Updated product ID {}", product.id);
        Ok(product)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError> {
        let sql = format!("SELECT {COLUMNS} FROM produtos WHERE id = $1");

        sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(&self.db)
            .await
            .map_err(RepositoryError::from)
    }

    async fn find_active(&self) -> Result<Vec<Product>, RepositoryError> {
        let sql = format!("SELECT {COLUMNS} FROM produtos WHERE ativo = TRUE ORDER BY nome");

        sqlx::query_as::<_, Product>(&sql)
            .fetch_all(&self.db)
            .await
            .map_err(RepositoryError::from)
    }

    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let sql = format!("SELECT {COLUMNS} FROM produtos ORDER BY nome");

        sqlx::query_as::<_, Product>(&sql)
            .fetch_all(&self.db)
            .await
            .map_err(RepositoryError::from)
    }

    async fn search_by_name(&self, name: &str) -> Result<Vec<Product>, RepositoryError> {
        let sql = format!(
            "SELECT {COLUMNS} FROM produtos \
             WHERE LOWER(nome) LIKE LOWER('%' || $1 || '%') AND ativo = TRUE \
             ORDER BY nome"
        );

        sqlx::query_as::<_, Product>(&sql)
            .bind(name)
            .fetch_all(&self.db)
            .await
            .map_err(RepositoryError::from)
    }

    async fn find_by_category(&self, category: &str) -> Result<Vec<Product>, RepositoryError> {
        let sql =
            format!("SELECT {COLUMNS} FROM produtos WHERE categoria = $1 AND ativo = TRUE ORDER BY nome");

        sqlx::query_as::<_, Product>(&sql)
            .bind(category)
            .fetch_all(&self.db)
            .await
            .map_err(RepositoryError::from)
    }

    async fn find_by_brand(&self, brand: &str) -> Result<Vec<Product>, RepositoryError> {
        let sql =
            format!("SELECT {COLUMNS} FROM produtos WHERE marca = $1 AND ativo = TRUE ORDER BY nome");

        sqlx::query_as::<_, Product>(&sql)
            .bind(brand)
            .fetch_all(&self.db)
            .await
            .map_err(RepositoryError::from)
    }

    async fn find_by_barcode(&self, barcode: &str) -> Result<Option<Product>, RepositoryError> {
        let sql = format!("SELECT {COLUMNS} FROM produtos WHERE codigo_barras = $1 AND ativo = TRUE");

        sqlx::query_as::<_, Product>(&sql)
            .bind(barcode)
            .fetch_optional(&self.db)
            .await
            .map_err(RepositoryError::from)
    }

    async fn find_by_price_range(
        &self,
        min: &BigDecimal,
        max: &BigDecimal,
    ) -> Result<Vec<Product>, RepositoryError> {
        let sql = format!(
            "SELECT {COLUMNS} FROM produtos \
             WHERE preco BETWEEN $1 AND $2 AND ativo = TRUE \
             ORDER BY preco"
        );

        sqlx::query_as::<_, Product>(&sql)
            .bind(min)
            .bind(max)
            .fetch_all(&self.db)
            .await
            .map_err(RepositoryError::from)
    }

    async fn find_low_stock(&self) -> Result<Vec<Product>, RepositoryError> {
        let sql = format!(
            "SELECT {COLUMNS} FROM produtos \
             WHERE quantidade_estoque <= estoque_minimo AND ativo = TRUE \
             ORDER BY quantidade_estoque"
        );

        sqlx::query_as::<_, Product>(&sql)
            .fetch_all(&self.db)
            .await
            .map_err(RepositoryError::from)
    }

    async fn list_categories(&self) -> Result<Vec<String>, RepositoryError> {
        sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT categoria FROM produtos \
             WHERE categoria IS NOT NULL AND ativo = TRUE \
             ORDER BY categoria",
        )
        .fetch_all(&self.db)
        .await
        .map_err(RepositoryError::from)
    }

    async fn list_brands(&self) -> Result<Vec<String>, RepositoryError> {
        sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT marca FROM produtos \
             WHERE marca IS NOT NULL AND ativo = TRUE \
             ORDER BY marca",
        )
        .fetch_all(&self.db)
        .await
        .map_err(RepositoryError::from)
    }

    async fn set_stock(&self, id: i32, quantity: i32) -> Result<Product, RepositoryError> {
        let sql = format!(
            "UPDATE produtos \
             SET quantidade_estoque = $2, data_atualizacao = current_timestamp \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );

        let product = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .bind(quantity)
            .fetch_optional(&self.db)
            .await
            .map_err(|err| {
                error!("❌ Failed to set stock of product ID {}: {:?}", id, err);
                RepositoryError::from(err)
            })?
            .ok_or(RepositoryError::NotFound)?;

        info!(
            "📦 Product ID {} stock set to {}",
            product.id, product.stock_quantity
        );
        Ok(product)
    }

    async fn set_active(&self, id: i32, active: bool) -> Result<Product, RepositoryError> {
        let sql = format!(
            "UPDATE produtos SET ativo = $2, data_atualizacao = current_timestamp \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );

        let product = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .bind(active)
            .fetch_optional(&self.db)
            .await
            .map_err(|err| {
                error!("❌ Failed to toggle product ID {}: {:?}", id, err);
                RepositoryError::from(err)
            })?
            .ok_or(RepositoryError::NotFound)?;

        info!("🔄 Product ID {} ativo = {}", id, active);
        Ok(product)
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM produtos WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(|err| {
                error!("❌ Failed to delete product ID {}: {:?}", id, err);
                RepositoryError::from(err)
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        info!("🗑️ Product ID {} permanently deleted", id);
        Ok(())
    }

    async fn count_active(&self) -> Result<i64, RepositoryError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM produtos WHERE ativo = TRUE")
            .fetch_one(&self.db)
            .await
            .map_err(RepositoryError::from)
    }

    async fn total_stock_value(&self) -> Result<BigDecimal, RepositoryError> {
        sqlx::query_scalar::<_, BigDecimal>(
            "SELECT COALESCE(SUM(preco * quantidade_estoque), 0) FROM produtos WHERE ativo = TRUE",
        )
        .fetch_one(&self.db)
        .await
        .map_err(RepositoryError::from)
    }
}
