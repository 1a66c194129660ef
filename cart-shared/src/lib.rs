pub mod models;
pub mod validation;

pub use models::{BasePrice, Item, OptionValue};
pub use validation::{validate_base_prices, validate_cart, ValidationError};
