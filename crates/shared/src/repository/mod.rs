mod cash_entry;
mod customer;
mod product;
mod sale;
mod user;

pub use self::cash_entry::CashEntryRepository;
pub use self::customer::CustomerRepository;
pub use self::product::ProductRepository;
pub use self::sale::SaleRepository;
pub use self::user::UserRepository;
