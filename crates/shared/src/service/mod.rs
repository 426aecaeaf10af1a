mod auth;
mod cash_entry;
mod customer;
mod product;
mod sale;

pub use self::auth::AuthService;
pub use self::cash_entry::CashEntryService;
pub use self::customer::CustomerService;
pub use self::product::ProductService;
pub use self::sale::SaleService;
