mod auth;
mod cash_entry;
mod customer;
mod hashing;
mod product;
mod sale;

pub use self::auth::{AuthServiceTrait, DynAuthService, DynUserRepository, UserRepositoryTrait};
pub use self::cash_entry::{
    CashEntryRepositoryTrait, CashEntryServiceTrait, DynCashEntryRepository, DynCashEntryService,
};
pub use self::customer::{
    CustomerRepositoryTrait, CustomerServiceTrait, DynCustomerRepository, DynCustomerService,
};
pub use self::hashing::{DynHashing, HashingTrait};
pub use self::product::{
    DynProductRepository, DynProductService, ProductRepositoryTrait, ProductServiceTrait,
};
pub use self::sale::{DynSaleRepository, DynSaleService, SaleRepositoryTrait, SaleServiceTrait};
