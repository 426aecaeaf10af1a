use crate::{
    abstract_trait::{
        DynAuthService, DynCashEntryRepository, DynCashEntryService, DynCustomerRepository,
        DynCustomerService, DynHashing, DynProductRepository, DynProductService,
        DynSaleRepository, DynSaleService, DynUserRepository,
    },
    config::ConnectionPool,
    repository::{
        CashEntryRepository, CustomerRepository, ProductRepository, SaleRepository, UserRepository,
    },
    service::{AuthService, CashEntryService, CustomerService, ProductService, SaleService},
};
use std::{fmt, sync::Arc};

/// Explicit wiring of every repository and service. Built once at startup
/// and handed to the HTTP layer; nothing here is global.
#[derive(Clone)]
pub struct DependenciesInject {
    pub auth_service: DynAuthService,
    pub customer_service: DynCustomerService,
    pub product_service: DynProductService,
    pub sale_service: DynSaleService,
    pub cash_entry_service: DynCashEntryService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("auth_service", &"<AuthService>")
            .field("customer_service", &"<CustomerService>")
            .field("product_service", &"<ProductService>")
            .field("sale_service", &"<SaleService>")
            .field("cash_entry_service", &"<CashEntryService>")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool, hashing: DynHashing) -> Self {
        let user_repository =
            Arc::new(UserRepository::new(pool.clone())) as DynUserRepository;
        let customer_repository =
            Arc::new(CustomerRepository::new(pool.clone())) as DynCustomerRepository;
        let product_repository =
            Arc::new(ProductRepository::new(pool.clone())) as DynProductRepository;
        let sale_repository = Arc::new(SaleRepository::new(pool.clone())) as DynSaleRepository;
        let cash_entry_repository =
            Arc::new(CashEntryRepository::new(pool)) as DynCashEntryRepository;

        let auth_service =
            Arc::new(AuthService::new(hashing, user_repository)) as DynAuthService;
        let customer_service =
            Arc::new(CustomerService::new(customer_repository)) as DynCustomerService;
        let product_service =
            Arc::new(ProductService::new(product_repository)) as DynProductService;
        let sale_service = Arc::new(SaleService::new(sale_repository)) as DynSaleService;
        let cash_entry_service =
            Arc::new(CashEntryService::new(cash_entry_repository)) as DynCashEntryService;

        Self {
            auth_service,
            customer_service,
            product_service,
            sale_service,
            cash_entry_service,
        }
    }
}
