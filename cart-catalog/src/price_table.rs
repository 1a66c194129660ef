use cart_shared::BasePrice;
use std::collections::HashMap;

use crate::calculator::PricingError;
use crate::options::{OptionsOrder, KEY_DELIMITER};

/// Flat lookup from composite key to base price in cents
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceTable {
    prices: HashMap<String, i64>,
}

impl PriceTable {
    /// Expand every rule into one key per combination of its option values.
    ///
    /// A key produced by more than one rule keeps the price of the last rule.
    pub fn build(base_prices: &[BasePrice], options_order: &OptionsOrder) -> Result<Self, PricingError> {
        let mut prices = HashMap::new();

        for base_price in base_prices {
            let product_type = &base_price.product_type;
            let ordered_options = options_order
                .get(product_type)
                .ok_or_else(|| PricingError::UnknownProductType(product_type.clone()))?;

            if !base_price.options.keys().eq(ordered_options.iter()) {
                return Err(PricingError::InconsistentOptions {
                    product_type: product_type.clone(),
                    expected: ordered_options.to_vec(),
                    found: base_price.options.keys().cloned().collect(),
                });
            }

            let mut keys = vec![product_type.clone()];
            for option in ordered_options {
                let values = &base_price.options[option];
                keys = keys
                    .iter()
                    .flat_map(|prefix| {
                        values
                            .iter()
                            .map(move |value| format!("{}{}{}", prefix, KEY_DELIMITER, value))
                    })
                    .collect();
            }

            for key in keys {
                if let Some(previous) = prices.insert(key.clone(), base_price.base_price) {
                    tracing::debug!(%key, previous, current = base_price.base_price, "Overwrote price");
                }
            }
        }

        tracing::debug!(keys = prices.len(), "Built price table");
        Ok(Self { prices })
    }

    pub fn get(&self, key: &str) -> Option<i64> {
        self.prices.get(key).copied()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.prices.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.prices.iter().map(|(k, v)| (k.as_str(), *v))
    }
}
