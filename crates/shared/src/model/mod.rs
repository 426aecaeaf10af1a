mod cash_entry;
mod customer;
mod product;
mod sale;
mod user;

pub use self::cash_entry::{CashEntry, LedgerDirection};
pub use self::customer::Customer;
pub use self::product::Product;
pub use self::sale::{NewSale, NewSaleItem, PaymentMethod, Sale, SaleItem, SaleStatus};
pub use self::user::User;
