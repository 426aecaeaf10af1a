mod auth;
mod cash_entry;
mod customer;
mod product;
mod sale;
mod stats;

pub use self::auth::{LoginResponse, UserResponse};
pub use self::cash_entry::{CashBalanceResponse, CashEntryResponse, CashSummaryResponse};
pub use self::customer::CustomerResponse;
pub use self::product::ProductResponse;
pub use self::sale::{SaleItemResponse, SaleResponse};
pub use self::stats::{CustomerStatsResponse, ProductStatsResponse, SaleStatsResponse};
