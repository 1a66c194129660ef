pub mod options;
pub mod price_table;
pub mod pricing;
pub mod calculator;
pub mod book;

pub use options::OptionsOrder;
pub use price_table::PriceTable;
pub use pricing::{PricingConfig, RoundingMode};
pub use calculator::{calculate_cart_total, CartCalculator, PricingError};
pub use book::{LineQuote, PriceBook, Quote};
