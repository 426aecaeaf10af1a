use crate::{
    abstract_trait::{DynProductRepository, ProductServiceTrait},
    domain::{
        requests::{CreateProductRequest, UpdateProductRequest},
        responses::{ProductResponse, ProductStatsResponse},
    },
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;
use bigdecimal::BigDecimal;
use tracing::{error, info};

pub struct ProductService {
    repository: DynProductRepository,
}

impl ProductService {
    pub fn new(repository: DynProductRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ProductServiceTrait for ProductService {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductResponse, ServiceError> {
        info!("🏗️ Creating product: {}", req.name);

        let product = self.repository.create(req).await?;

        info!("✅ Product created: {} (ID: {})", product.name, product.id);
        Ok(ProductResponse::from(product))
    }

    async fn update_product(
        &self,
        req: &UpdateProductRequest,
    ) -> Result<ProductResponse, ServiceError> {
        info!("✏️ Updating product ID {}", req.id);

        let product = self.repository.update(req).await?;
        Ok(ProductResponse::from(product))
    }

    async fn find_by_id(&self, id: i32) -> Result<ProductResponse, ServiceError> {
        let product = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        Ok(ProductResponse::from(product))
    }

    async fn list_active(&self) -> Result<Vec<ProductResponse>, ServiceError> {
        let products = self.repository.find_active().await?;
        Ok(products.into_iter().map(ProductResponse::from).collect())
    }

    async fn list_all(&self) -> Result<Vec<ProductResponse>, ServiceError> {
        let products = self.repository.find_all().await?;
        Ok(products.into_iter().map(ProductResponse::from).collect())
    }

    async fn search_by_name(&self, name: &str) -> Result<Vec<ProductResponse>, ServiceError> {
        let products = self.repository.search_by_name(name).await?;
        Ok(products.into_iter().map(ProductResponse::from).collect())
    }

    async fn find_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<ProductResponse>, ServiceError> {
        let products = self.repository.find_by_category(category).await?;
        Ok(products.into_iter().map(ProductResponse::from).collect())
    }

    async fn find_by_brand(&self, brand: &str) -> Result<Vec<ProductResponse>, ServiceError> {
        let products = self.repository.find_by_brand(brand).await?;
        Ok(products.into_iter().map(ProductResponse::from).collect())
    }

    async fn find_by_barcode(&self, barcode: &str) -> Result<ProductResponse, ServiceError> {
        let product = self
            .repository
            .find_by_barcode(barcode)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        Ok(ProductResponse::from(product))
    }

    async fn find_by_price_range(
        &self,
        min: &BigDecimal,
        max: &BigDecimal,
    ) -> Result<Vec<ProductResponse>, ServiceError> {
        let products = self.repository.find_by_price_range(min, max).await?;
        Ok(products.into_iter().map(ProductResponse::from).collect())
    }

    async fn list_low_stock(&self) -> Result<Vec<ProductResponse>, ServiceError> {
        let products = self.repository.find_low_stock().await?;
        Ok(products.into_iter().map(ProductResponse::from).collect())
    }

    async fn list_categories(&self) -> Result<Vec<String>, ServiceError> {
        Ok(self.repository.list_categories().await?)
    }

    async fn list_brands(&self) -> Result<Vec<String>, ServiceError> {
        Ok(self.repository.list_brands().await?)
    }

    async fn set_stock(&self, id: i32, quantity: i32) -> Result<ProductResponse, ServiceError> {
        info!("📦 Setting stock of product ID {id} to {quantity}");

        // Manual correction: overwrites whatever is stored, no guard.
        let product = self.repository.set_stock(id, quantity).await?;
        Ok(ProductResponse::from(product))
    }

    async fn reduce_stock(&self, id: i32, quantity: i32) -> Result<ProductResponse, ServiceError> {
        info!("📉 Reducing stock of product ID {id} by {quantity}");

        if quantity <= 0 {
            error!("❌ Quantity to reduce must be positive");
            return Err(ServiceError::Custom(
                "Quantity to reduce must be positive".to_string(),
            ));
        }

        let product = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        let remaining = product.stock_quantity - quantity;
        if remaining < 0 {
            error!(
                "❌ Insufficient stock for product {}: {} requested, {} available",
                product.name, quantity, product.stock_quantity
            );
            return Err(ServiceError::Repo(RepositoryError::InsufficientStock(
                format!("Product {} has only {} units in stock", product.name, product.stock_quantity),
            )));
        }

        let updated = self.repository.set_stock(id, remaining).await?;

        info!(
            "✅ Stock reduced: {} (ID: {}), remaining {}",
            updated.name, updated.id, updated.stock_quantity
        );
        Ok(ProductResponse::from(updated))
    }

    async fn activate(&self, id: i32) -> Result<ProductResponse, ServiceError> {
        info!("🔄 Activating product ID {id}");
        let product = self.repository.set_active(id, true).await?;
        Ok(ProductResponse::from(product))
    }

    async fn deactivate(&self, id: i32) -> Result<ProductResponse, ServiceError> {
        info!("🗑️ Deactivating product ID {id}");
        let product = self.repository.set_active(id, false).await?;
        Ok(ProductResponse::from(product))
    }

    async fn remove(&self, id: i32) -> Result<(), ServiceError> {
        info!("💀 Permanently removing product ID {id}");
        self.repository.delete(id).await?;
        Ok(())
    }

    async fn stats(&self) -> Result<ProductStatsResponse, ServiceError> {
        let total_products = self.repository.count_active().await?;
        let total_stock_value = self.repository.total_stock_value().await?;
        let low_stock_products = self.repository.find_low_stock().await?.len() as i64;

        Ok(ProductStatsResponse {
            total_products,
            total_stock_value,
            low_stock_products,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Product;
    use chrono::NaiveDateTime;
    use std::sync::{Arc, Mutex};

    struct InMemoryProducts {
        rows: Mutex<Vec<Product>>,
    }

    fn sample(id: i32, stock: i32, min_stock: i32) -> Product {
        Product {
            id,
            name: "Camisa".into(),
            description: None,
            category: Some("camisas".into()),
            size: Some("M".into()),
            color: None,
            price: "49.90".parse().unwrap(),
            cost_price: None,
            stock_quantity: stock,
            min_stock,
            barcode: None,
            brand: None,
            active: true,
            created_at: NaiveDateTime::default(),
            updated_at: NaiveDateTime::default(),
        }
    }

    #[async_trait]
    impl crate::abstract_trait::ProductRepositoryTrait for InMemoryProducts {
        async fn create(&self, req: &CreateProductRequest) -> Result<Product, RepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            let mut product = sample(rows.len() as i32 + 1, req.stock_quantity, req.min_stock);
            product.name = req.name.clone();
            product.price = req.price.clone();
            rows.push(product.clone());
            Ok(product)
        }

        async fn update(&self, req: &UpdateProductRequest) -> Result<Product, RepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            let row = rows
                .iter_mut()
                .find(|p| p.id == req.id)
                .ok_or(RepositoryError::NotFound)?;
            row.name = req.name.clone();
            row.stock_quantity = req.stock_quantity;
            row.min_stock = req.min_stock;
            Ok(row.clone())
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError> {
            Ok(self.rows.lock().unwrap().iter().find(|p| p.id == id).cloned())
        }

        async fn find_active(&self) -> Result<Vec<Product>, RepositoryError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .filter(|p| p.active)
                .cloned()
                .collect())
        }

        async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn search_by_name(&self, name: &str) -> Result<Vec<Product>, RepositoryError> {
            let needle = name.to_lowercase();
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .filter(|p| p.active && p.name.to_lowercase().contains(&needle))
                .cloned()
                .collect())
        }

        async fn find_by_category(&self, category: &str) -> Result<Vec<Product>, RepositoryError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .filter(|p| p.active && p.category.as_deref() == Some(category))
                .cloned()
                .collect())
        }

        async fn find_by_brand(&self, brand: &str) -> Result<Vec<Product>, RepositoryError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .filter(|p| p.active && p.brand.as_deref() == Some(brand))
                .cloned()
                .collect())
        }

        async fn find_by_barcode(&self, barcode: &str) -> Result<Option<Product>, RepositoryError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .find(|p| p.active && p.barcode.as_deref() == Some(barcode))
                .cloned())
        }

        async fn find_by_price_range(
            &self,
            min: &BigDecimal,
            max: &BigDecimal,
        ) -> Result<Vec<Product>, RepositoryError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .filter(|p| p.active && p.price >= *min && p.price <= *max)
                .cloned()
                .collect())
        }

        async fn find_low_stock(&self) -> Result<Vec<Product>, RepositoryError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .filter(|p| p.active && p.is_low_stock())
                .cloned()
                .collect())
        }

        async fn list_categories(&self) -> Result<Vec<String>, RepositoryError> {
            Ok(vec![])
        }

        async fn list_brands(&self) -> Result<Vec<String>, RepositoryError> {
            Ok(vec![])
        }

        async fn set_stock(&self, id: i32, quantity: i32) -> Result<Product, RepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            let row = rows
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or(RepositoryError::NotFound)?;
            row.stock_quantity = quantity;
            Ok(row.clone())
        }

        async fn set_active(&self, id: i32, active: bool) -> Result<Product, RepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            let row = rows
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or(RepositoryError::NotFound)?;
            row.active = active;
            Ok(row.clone())
        }

        async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|p| p.id != id);
            if rows.len() == before {
                return Err(RepositoryError::NotFound);
            }
            Ok(())
        }

        async fn count_active(&self) -> Result<i64, RepositoryError> {
            Ok(self.rows.lock().unwrap().iter().filter(|p| p.active).count() as i64)
        }

        async fn total_stock_value(&self) -> Result<BigDecimal, RepositoryError> {
            let rows = self.rows.lock().unwrap();
            Ok(rows
                .iter()
                .filter(|p| p.active)
                .map(|p| &p.price * BigDecimal::from(p.stock_quantity))
                .sum())
        }
    }

    fn service_with(rows: Vec<Product>) -> ProductService {
        ProductService::new(Arc::new(InMemoryProducts {
            rows: Mutex::new(rows),
        }))
    }

    #[tokio::test]
    async fn reduce_stock_within_bounds_succeeds() {
        let service = service_with(vec![sample(1, 10, 3)]);

        let product = service.reduce_stock(1, 8).await.unwrap();
        assert_eq!(product.stock_quantity, 2);
    }

    #[tokio::test]
    async fn reduce_stock_beyond_quantity_fails_and_keeps_stock() {
        let service = service_with(vec![sample(1, 2, 3)]);

        let result = service.reduce_stock(1, 3).await;
        assert!(matches!(
            result,
            Err(ServiceError::Repo(RepositoryError::InsufficientStock(_)))
        ));

        let untouched = service.find_by_id(1).await.unwrap();
        assert_eq!(untouched.stock_quantity, 2);
    }

    #[tokio::test]
    async fn reduce_stock_rejects_non_positive_quantity() {
        let service = service_with(vec![sample(1, 10, 3)]);

        assert!(matches!(
            service.reduce_stock(1, 0).await,
            Err(ServiceError::Custom(_))
        ));
    }

    #[tokio::test]
    async fn set_stock_overwrites_unconditionally() {
        let service = service_with(vec![sample(1, 2, 3)]);

        let product = service.set_stock(1, 50).await.unwrap();
        assert_eq!(product.stock_quantity, 50);
    }

    #[tokio::test]
    async fn low_stock_listing_follows_threshold() {
        // 10 units with a minimum of 3: not low. After dropping to 2, low.
        let service = service_with(vec![sample(1, 10, 3)]);
        assert!(service.list_low_stock().await.unwrap().is_empty());

        service.reduce_stock(1, 8).await.unwrap();
        let low = service.list_low_stock().await.unwrap();
        assert_eq!(low.len(), 1);
        assert_eq!(low[0].stock_quantity, 2);
    }

    #[tokio::test]
    async fn stats_aggregate_active_products() {
        let mut inactive = sample(2, 5, 1);
        inactive.active = false;
        let service = service_with(vec![sample(1, 2, 3), inactive]);

        let stats = service.stats().await.unwrap();
        assert_eq!(stats.total_products, 1);
        assert_eq!(stats.low_stock_products, 1);
        assert_eq!(stats.total_stock_value, "99.80".parse::<BigDecimal>().unwrap());
    }
}
