use crate::{
    abstract_trait::{DynSaleRepository, SaleServiceTrait},
    domain::{
        requests::{CreateSaleRequest, PeriodQuery},
        responses::{SaleResponse, SaleStatsResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::{NewSale, NewSaleItem, Sale, SaleItem, SaleStatus},
};
use async_trait::async_trait;
use bigdecimal::BigDecimal;
use tracing::info;

pub struct SaleService {
    repository: DynSaleRepository,
}

impl SaleService {
    pub fn new(repository: DynSaleRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl SaleServiceTrait for SaleService {
    async fn create_sale(&self, req: &CreateSaleRequest) -> Result<SaleResponse, ServiceError> {
        info!("🧾 Creating sale with {} item(s)", req.items.len());

        let discount = req.discount.clone().unwrap_or_else(|| BigDecimal::from(0));
        let final_amount = Sale::compute_final(&req.total_amount, Some(&discount));

        let items: Vec<NewSaleItem> = req
            .items
            .iter()
            .map(|item| {
                let item_discount = item
                    .item_discount
                    .clone()
                    .unwrap_or_else(|| BigDecimal::from(0));
                let subtotal = SaleItem::compute_subtotal(
                    &item.unit_price,
                    item.quantity,
                    Some(&item_discount),
                );
                NewSaleItem {
                    product_id: item.product_id,
                    quantity: item.quantity,
                    unit_price: item.unit_price.clone(),
                    item_discount,
                    subtotal,
                }
            })
            .collect();

        let sale = NewSale {
            customer_id: req.customer_id,
            total_amount: req.total_amount.clone(),
            discount,
            final_amount,
            payment_method: req.payment_method.map(|m| m.to_string()),
            status: req.status.unwrap_or(SaleStatus::Completed).to_string(),
            notes: req.notes.clone(),
        };

        let (created, created_items) = self.repository.create(&sale, &items).await?;

        info!(
            "✅ Sale created: ID {} (final {})",
            created.id, created.final_amount
        );
        Ok(SaleResponse::with_items(created, created_items))
    }

    async fn find_by_id(&self, id: i32) -> Result<SaleResponse, ServiceError> {
        let sale = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(RepositoryError::NotFound)?;
        let items = self.repository.find_items(id).await?;

        Ok(SaleResponse::with_items(sale, items))
    }

    async fn list_all(&self) -> Result<Vec<SaleResponse>, ServiceError> {
        let sales = self.repository.find_all().await?;
        Ok(sales.into_iter().map(SaleResponse::from).collect())
    }

    async fn list_today(&self) -> Result<Vec<SaleResponse>, ServiceError> {
        let sales = self.repository.find_today().await?;
        Ok(sales.into_iter().map(SaleResponse::from).collect())
    }

    async fn find_by_period(
        &self,
        period: &PeriodQuery,
    ) -> Result<Vec<SaleResponse>, ServiceError> {
        let sales = self
            .repository
            .find_by_period(&period.start, &period.end)
            .await?;
        Ok(sales.into_iter().map(SaleResponse::from).collect())
    }

    async fn find_by_status(&self, status: SaleStatus) -> Result<Vec<SaleResponse>, ServiceError> {
        let sales = self.repository.find_by_status(status.as_str()).await?;
        Ok(sales.into_iter().map(SaleResponse::from).collect())
    }

    async fn find_by_customer(
        &self,
        customer_id: i32,
    ) -> Result<Vec<SaleResponse>, ServiceError> {
        let sales = self.repository.find_by_customer(customer_id).await?;
        Ok(sales.into_iter().map(SaleResponse::from).collect())
    }

    async fn update_status(
        &self,
        id: i32,
        status: SaleStatus,
    ) -> Result<SaleResponse, ServiceError> {
        info!("🔄 Sale ID {id} -> {status}");
        let sale = self.repository.update_status(id, status.as_str()).await?;
        Ok(SaleResponse::from(sale))
    }

    async fn remove(&self, id: i32) -> Result<(), ServiceError> {
        info!("💀 Removing sale ID {id}");
        self.repository.delete(id).await?;
        Ok(())
    }

    async fn stats(&self) -> Result<SaleStatsResponse, ServiceError> {
        let total_today = self.repository.total_today().await?;
        let completed = self
            .repository
            .count_by_status(SaleStatus::Completed.as_str())
            .await?;
        let pending = self
            .repository
            .count_by_status(SaleStatus::Pending.as_str())
            .await?;
        let cancelled = self
            .repository
            .count_by_status(SaleStatus::Cancelled.as_str())
            .await?;

        Ok(SaleStatsResponse {
            total_today,
            completed,
            pending,
            cancelled,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::requests::CreateSaleItemRequest;
    use crate::model::PaymentMethod;
    use chrono::NaiveDateTime;
    use std::sync::{Arc, Mutex};

    fn dec(v: &str) -> BigDecimal {
        v.parse().unwrap()
    }

    /// Products are a (id, stock) list; the sale rows mirror what the real
    /// repository would persist, including the transactional stock guard.
    struct InMemorySales {
        products: Mutex<Vec<(i32, i32)>>,
        sales: Mutex<Vec<Sale>>,
        items: Mutex<Vec<SaleItem>>,
    }

    impl InMemorySales {
        fn new(products: Vec<(i32, i32)>) -> Self {
            Self {
                products: Mutex::new(products),
                sales: Mutex::new(vec![]),
                items: Mutex::new(vec![]),
            }
        }
    }

    #[async_trait]
    impl crate::abstract_trait::SaleRepositoryTrait for InMemorySales {
        async fn create(
            &self,
            sale: &NewSale,
            items: &[NewSaleItem],
        ) -> Result<(Sale, Vec<SaleItem>), RepositoryError> {
            let mut products = self.products.lock().unwrap();

            // All-or-nothing: stage the decrements, bail before applying if
            // any would go negative.
            let mut staged = products.clone();
            for item in items {
                let product = staged
                    .iter_mut()
                    .find(|(id, _)| *id == item.product_id)
                    .ok_or(RepositoryError::NotFound)?;
                if product.1 - item.quantity < 0 {
                    return Err(RepositoryError::InsufficientStock(format!(
                        "Product {} has only {} units in stock",
                        item.product_id, product.1
                    )));
                }
                product.1 -= item.quantity;
            }
            *products = staged;

            let mut sales = self.sales.lock().unwrap();
            let created = Sale {
                id: sales.len() as i32 + 1,
                customer_id: sale.customer_id,
                sale_date: NaiveDateTime::default(),
                total_amount: sale.total_amount.clone(),
                discount: sale.discount.clone(),
                final_amount: sale.final_amount.clone(),
                payment_method: sale.payment_method.clone(),
                status: sale.status.clone(),
                notes: sale.notes.clone(),
            };
            sales.push(created.clone());

            let mut stored_items = self.items.lock().unwrap();
            let mut created_items = Vec::new();
            for item in items {
                let row = SaleItem {
                    id: stored_items.len() as i32 + 1,
                    sale_id: created.id,
                    product_id: item.product_id,
                    quantity: item.quantity,
                    unit_price: item.unit_price.clone(),
                    item_discount: item.item_discount.clone(),
                    subtotal: item.subtotal.clone(),
                };
                stored_items.push(row.clone());
                created_items.push(row);
            }

            Ok((created, created_items))
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<Sale>, RepositoryError> {
            Ok(self.sales.lock().unwrap().iter().find(|s| s.id == id).cloned())
        }

        async fn find_items(&self, sale_id: i32) -> Result<Vec<SaleItem>, RepositoryError> {
            Ok(self
                .items
                .lock()
                .unwrap()
                .iter()
                .filter(|i| i.sale_id == sale_id)
                .cloned()
                .collect())
        }

        async fn find_all(&self) -> Result<Vec<Sale>, RepositoryError> {
            Ok(self.sales.lock().unwrap().clone())
        }

        async fn find_today(&self) -> Result<Vec<Sale>, RepositoryError> {
            Ok(self.sales.lock().unwrap().clone())
        }

        async fn find_by_period(
            &self,
            _start: &NaiveDateTime,
            _end: &NaiveDateTime,
        ) -> Result<Vec<Sale>, RepositoryError> {
            Ok(self.sales.lock().unwrap().clone())
        }

        async fn find_by_status(&self, status: &str) -> Result<Vec<Sale>, RepositoryError> {
            Ok(self
                .sales
                .lock()
                .unwrap()
                .iter()
                .filter(|s| s.status == status)
                .cloned()
                .collect())
        }

        async fn find_by_customer(&self, customer_id: i32) -> Result<Vec<Sale>, RepositoryError> {
            Ok(self
                .sales
                .lock()
                .unwrap()
                .iter()
                .filter(|s| s.customer_id == Some(customer_id))
                .cloned()
                .collect())
        }

        async fn update_status(&self, id: i32, status: &str) -> Result<Sale, RepositoryError> {
            let mut sales = self.sales.lock().unwrap();
            let sale = sales
                .iter_mut()
                .find(|s| s.id == id)
                .ok_or(RepositoryError::NotFound)?;
            sale.status = status.to_string();
            Ok(sale.clone())
        }

        async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
            let mut sales = self.sales.lock().unwrap();
            let before = sales.len();
            sales.retain(|s| s.id != id);
            if sales.len() == before {
                return Err(RepositoryError::NotFound);
            }
            self.items.lock().unwrap().retain(|i| i.sale_id != id);
            Ok(())
        }

        async fn total_today(&self) -> Result<BigDecimal, RepositoryError> {
            Ok(self
                .sales
                .lock()
                .unwrap()
                .iter()
                .filter(|s| s.status == "concluida")
                .map(|s| s.final_amount.clone())
                .sum())
        }

        async fn count_by_status(&self, status: &str) -> Result<i64, RepositoryError> {
            Ok(self
                .sales
                .lock()
                .unwrap()
                .iter()
                .filter(|s| s.status == status)
                .count() as i64)
        }
    }

    fn request(items: Vec<CreateSaleItemRequest>) -> CreateSaleRequest {
        CreateSaleRequest {
            customer_id: Some(1),
            total_amount: dec("99.80"),
            discount: None,
            payment_method: Some(PaymentMethod::Pix),
            status: None,
            notes: None,
            items,
        }
    }

    fn item(product_id: i32, quantity: i32, unit_price: &str) -> CreateSaleItemRequest {
        CreateSaleItemRequest {
            product_id,
            quantity,
            unit_price: dec(unit_price),
            item_discount: None,
        }
    }

    #[tokio::test]
    async fn create_sale_computes_subtotals_and_final() {
        let repo = Arc::new(InMemorySales::new(vec![(1, 10)]));
        let service = SaleService::new(repo.clone());

        let mut req = request(vec![item(1, 2, "49.90")]);
        req.discount = Some(dec("9.80"));

        let sale = service.create_sale(&req).await.unwrap();

        assert_eq!(sale.final_amount, dec("90.00"));
        assert_eq!(sale.items.len(), 1);
        assert_eq!(sale.items[0].subtotal, dec("99.80"));
        assert_eq!(sale.status, "concluida");

        // Stock decremented by the sold quantity.
        assert_eq!(repo.products.lock().unwrap()[0].1, 8);
    }

    #[tokio::test]
    async fn item_discount_reduces_subtotal() {
        let repo = Arc::new(InMemorySales::new(vec![(1, 10)]));
        let service = SaleService::new(repo);

        let mut req = request(vec![item(1, 2, "49.90")]);
        req.items[0].item_discount = Some(dec("19.80"));

        let sale = service.create_sale(&req).await.unwrap();
        assert_eq!(sale.items[0].subtotal, dec("80.00"));
    }

    #[tokio::test]
    async fn insufficient_stock_aborts_sale() {
        let repo = Arc::new(InMemorySales::new(vec![(1, 1)]));
        let service = SaleService::new(repo.clone());

        let result = service.create_sale(&request(vec![item(1, 2, "49.90")])).await;

        assert!(matches!(
            result,
            Err(ServiceError::Repo(RepositoryError::InsufficientStock(_)))
        ));
        assert!(repo.sales.lock().unwrap().is_empty());
        assert_eq!(repo.products.lock().unwrap()[0].1, 1);
    }

    #[tokio::test]
    async fn update_status_transitions() {
        let repo = Arc::new(InMemorySales::new(vec![(1, 10)]));
        let service = SaleService::new(repo);

        let mut req = request(vec![item(1, 1, "49.90")]);
        req.status = Some(SaleStatus::Pending);
        let sale = service.create_sale(&req).await.unwrap();
        assert_eq!(sale.status, "pendente");

        let updated = service
            .update_status(sale.id, SaleStatus::Cancelled)
            .await
            .unwrap();
        assert_eq!(updated.status, "cancelada");
    }

    #[tokio::test]
    async fn stats_split_counts_by_status() {
        let repo = Arc::new(InMemorySales::new(vec![(1, 100)]));
        let service = SaleService::new(repo);

        service.create_sale(&request(vec![item(1, 1, "10.00")])).await.unwrap();

        let mut pending = request(vec![item(1, 1, "10.00")]);
        pending.status = Some(SaleStatus::Pending);
        service.create_sale(&pending).await.unwrap();

        let stats = service.stats().await.unwrap();
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.cancelled, 0);
        assert_eq!(stats.total_today, dec("99.80"));
    }

    #[tokio::test]
    async fn remove_deletes_items_with_the_sale() {
        let repo = Arc::new(InMemorySales::new(vec![(1, 10)]));
        let service = SaleService::new(repo.clone());

        let sale = service
            .create_sale(&request(vec![item(1, 1, "49.90")]))
            .await
            .unwrap();

        service.remove(sale.id).await.unwrap();
        assert!(repo.items.lock().unwrap().is_empty());

        let result = service.find_by_id(sale.id).await;
        assert!(matches!(
            result,
            Err(ServiceError::Repo(RepositoryError::NotFound))
        ));
    }
}
