mod auth;
mod cash_entry;
mod customer;
mod product;
mod sale;

pub use self::auth::{LoginRequest, RegisterRequest, UpdateAccountRequest};
pub use self::cash_entry::{CreateCashEntryRequest, DescriptionQuery};
pub use self::customer::{CreateCustomerRequest, NameQuery, UpdateCustomerRequest};
pub use self::product::{
    CreateProductRequest, PriceRangeQuery, StockQuery, UpdateProductRequest,
};
pub use self::sale::{
    CreateSaleItemRequest, CreateSaleRequest, PeriodQuery, UpdateSaleStatusRequest,
};

use bigdecimal::BigDecimal;
use validator::ValidationError;

pub(crate) fn validate_positive_amount(value: &BigDecimal) -> Result<(), ValidationError> {
    if *value > BigDecimal::from(0) {
        Ok(())
    } else {
        let mut error = ValidationError::new("positive_amount");
        error.message = Some("Must be greater than zero".into());
        Err(error)
    }
}

pub(crate) fn validate_non_negative_amount(value: &BigDecimal) -> Result<(), ValidationError> {
    if *value >= BigDecimal::from(0) {
        Ok(())
    } else {
        let mut error = ValidationError::new("non_negative_amount");
        error.message = Some("Must not be negative".into());
        Err(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_guards() {
        assert!(validate_positive_amount(&"0.01".parse().unwrap()).is_ok());
        assert!(validate_positive_amount(&BigDecimal::from(0)).is_err());
        assert!(validate_positive_amount(&"-1".parse().unwrap()).is_err());

        assert!(validate_non_negative_amount(&BigDecimal::from(0)).is_ok());
        assert!(validate_non_negative_amount(&"-0.01".parse().unwrap()).is_err());
    }
}
