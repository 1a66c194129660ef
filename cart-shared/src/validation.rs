use crate::models::{BasePrice, Item};

/// Checks applied to loaded data before it reaches the calculator
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ValidationError {
    #[error("entry {index}: product-type must not be empty")]
    EmptyProductType { index: usize },

    #[error("entry {index}: quantity must be at least 1")]
    ZeroQuantity { index: usize },

    #[error("entry {index}: option '{option}' lists no values")]
    EmptyOptionValues { index: usize, option: String },

    #[error("entry {index}: base-price {base_price} is negative")]
    NegativeBasePrice { index: usize, base_price: i64 },
}

impl Item {
    pub fn validate(&self, index: usize) -> Result<(), ValidationError> {
        if self.product_type.is_empty() {
            return Err(ValidationError::EmptyProductType { index });
        }
        if self.quantity == 0 {
            return Err(ValidationError::ZeroQuantity { index });
        }
        Ok(())
    }
}

impl BasePrice {
    pub fn validate(&self, index: usize) -> Result<(), ValidationError> {
        if self.product_type.is_empty() {
            return Err(ValidationError::EmptyProductType { index });
        }
        if self.base_price < 0 {
            return Err(ValidationError::NegativeBasePrice {
                index,
                base_price: self.base_price,
            });
        }
        if let Some((option, _)) = self.options.iter().find(|(_, values)| values.is_empty()) {
            return Err(ValidationError::EmptyOptionValues {
                index,
                option: option.clone(),
            });
        }
        Ok(())
    }
}

/// Validate every cart line, stopping at the first bad one
pub fn validate_cart(cart: &[Item]) -> Result<(), ValidationError> {
    cart.iter()
        .enumerate()
        .try_for_each(|(index, item)| item.validate(index))
}

pub fn validate_base_prices(base_prices: &[BasePrice]) -> Result<(), ValidationError> {
    base_prices
        .iter()
        .enumerate()
        .try_for_each(|(index, base_price)| base_price.validate(index))
}
