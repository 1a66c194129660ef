use cart_shared::{BasePrice, Item};
use serde::Serialize;

use crate::calculator::PricingError;
use crate::options::OptionsOrder;
use crate::price_table::PriceTable;
use crate::pricing::PricingConfig;

/// Derived lookup tables for one base-price collection, reusable across carts
#[derive(Debug, Clone)]
pub struct PriceBook {
    options_order: OptionsOrder,
    prices: PriceTable,
    config: PricingConfig,
}

/// Priced cart line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineQuote {
    pub key: String,
    pub base_price: i64,
    pub unit_price: i64,
    pub quantity: u32,
    pub line_total: i64,
}

/// Priced cart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    pub lines: Vec<LineQuote>,
    pub total: i64,
}

impl PriceBook {
    pub fn new(base_prices: &[BasePrice]) -> Result<Self, PricingError> {
        Self::with_config(base_prices, PricingConfig::default())
    }

    pub fn with_config(base_prices: &[BasePrice], config: PricingConfig) -> Result<Self, PricingError> {
        let options_order = OptionsOrder::derive(base_prices);
        let prices = PriceTable::build(base_prices, &options_order)?;
        Ok(Self {
            options_order,
            prices,
            config,
        })
    }

    pub fn options_order(&self) -> &OptionsOrder {
        &self.options_order
    }

    pub fn prices(&self) -> &PriceTable {
        &self.prices
    }

    fn lookup(&self, item: &Item) -> Result<(String, i64), PricingError> {
        let key = self.options_order.item_key(item)?;
        let base_price = self.prices.get(&key).ok_or_else(|| PricingError::PriceNotFound(key.clone()))?;
        Ok((key, base_price))
    }

    /// Base price of a single item, before markup
    pub fn base_price_of(&self, item: &Item) -> Result<i64, PricingError> {
        self.lookup(item).map(|(_, base_price)| base_price)
    }

    pub fn quote_line(&self, item: &Item) -> Result<LineQuote, PricingError> {
        let (key, base_price) = self.lookup(item)?;
        let unit_price = self
            .config
            .unit_price(base_price, item.artist_markup)
            .ok_or(PricingError::Overflow)?;
        let line_total = unit_price
            .checked_mul(i64::from(item.quantity))
            .ok_or(PricingError::Overflow)?;

        Ok(LineQuote {
            key,
            base_price,
            unit_price,
            quantity: item.quantity,
            line_total,
        })
    }

    /// Price every line; the first failing line aborts the quote
    pub fn quote(&self, cart: &[Item]) -> Result<Quote, PricingError> {
        let lines = cart
            .iter()
            .map(|item| self.quote_line(item))
            .collect::<Result<Vec<_>, _>>()?;
        let total = lines
            .iter()
            .try_fold(0i64, |acc, line| acc.checked_add(line.line_total))
            .ok_or(PricingError::Overflow)?;

        Ok(Quote { lines, total })
    }

    pub fn total(&self, cart: &[Item]) -> Result<i64, PricingError> {
        self.quote(cart).map(|quote| quote.total)
    }
}
