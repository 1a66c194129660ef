use cart_shared::{BasePrice, Item};

use crate::options::OptionsOrder;
use crate::price_table::PriceTable;
use crate::pricing::PricingConfig;

/// Cart pricing errors
#[derive(Debug, thiserror::Error)]
pub enum PricingError {
    #[error("{operation} called before the options order was derived")]
    Sequencing { operation: &'static str },

    #[error("Unknown product type: {0}")]
    UnknownProductType(String),

    #[error("Item of type {product_type} has no value for option '{option}'")]
    MissingOption { product_type: String, option: String },

    #[error("Price not found for key: {0}")]
    PriceNotFound(String),

    #[error("Rules for {product_type} disagree on option names: expected {expected:?}, found {found:?}")]
    InconsistentOptions {
        product_type: String,
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("Cart total overflowed")]
    Overflow,
}

/// Prices one cart against one base-price collection.
///
/// The derived options order and price table are cached on the calculator
/// and must be computed in order: `derive_options_order` first, then
/// `build_price_table`. `calculate_cart_total` runs every step itself.
pub struct CartCalculator<'a> {
    cart: &'a [Item],
    base_prices: &'a [BasePrice],
    config: PricingConfig,
    options_order: Option<OptionsOrder>,
    prices: Option<PriceTable>,
}

impl<'a> CartCalculator<'a> {
    pub fn new(cart: &'a [Item], base_prices: &'a [BasePrice]) -> Self {
        Self::with_config(cart, base_prices, PricingConfig::default())
    }

    pub fn with_config(cart: &'a [Item], base_prices: &'a [BasePrice], config: PricingConfig) -> Self {
        Self {
            cart,
            base_prices,
            config,
            options_order: None,
            prices: None,
        }
    }

    pub fn options_order(&self) -> Option<&OptionsOrder> {
        self.options_order.as_ref()
    }

    pub fn prices(&self) -> Option<&PriceTable> {
        self.prices.as_ref()
    }

    pub fn derive_options_order(&mut self) -> &OptionsOrder {
        self.options_order.insert(OptionsOrder::derive(self.base_prices))
    }

    pub fn build_price_table(&mut self) -> Result<&PriceTable, PricingError> {
        let options_order = self.options_order.as_ref().ok_or(PricingError::Sequencing {
            operation: "build_price_table",
        })?;
        let prices = PriceTable::build(self.base_prices, options_order)?;
        Ok(self.prices.insert(prices))
    }

    pub fn build_item_key(&self, item: &Item) -> Result<String, PricingError> {
        self.options_order
            .as_ref()
            .ok_or(PricingError::Sequencing {
                operation: "build_item_key",
            })?
            .item_key(item)
    }

    /// Total cost of the cart in cents
    pub fn calculate_cart_total(&mut self) -> Result<i64, PricingError> {
        self.derive_options_order();
        self.build_price_table()?;

        let mut total: i64 = 0;
        for item in self.cart {
            let key = self.build_item_key(item)?;
            let base_price = self
                .prices
                .as_ref()
                .and_then(|prices| prices.get(&key))
                .ok_or(PricingError::PriceNotFound(key))?;
            total = total
                .checked_add(line_total(&self.config, base_price, item)?)
                .ok_or(PricingError::Overflow)?;
        }

        Ok(total)
    }
}

/// `(base_price + markup) * quantity` with overflow checks
pub(crate) fn line_total(config: &PricingConfig, base_price: i64, item: &Item) -> Result<i64, PricingError> {
    config
        .unit_price(base_price, item.artist_markup)
        .and_then(|unit| unit.checked_mul(i64::from(item.quantity)))
        .ok_or(PricingError::Overflow)
}

/// Price a cart with a fresh calculator
pub fn calculate_cart_total(cart: &[Item], base_prices: &[BasePrice]) -> Result<i64, PricingError> {
    CartCalculator::new(cart, base_prices).calculate_cart_total()
}
