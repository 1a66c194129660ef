use cart_shared::{BasePrice, Item};
use std::collections::HashMap;

use crate::calculator::PricingError;

/// Canonical option-name ordering per product type.
///
/// Keys built from this ordering look like `{product_type}_{value_1}_..._{value_n}`
/// with values taken in alphabetical order of their option names.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionsOrder {
    orders: HashMap<String, Vec<String>>,
}

pub(crate) const KEY_DELIMITER: char = '_';

impl OptionsOrder {
    /// Record the sorted option names of the first rule seen for each product type.
    /// Later rules for a known product type do not change its ordering.
    pub fn derive(base_prices: &[BasePrice]) -> Self {
        let mut orders: HashMap<String, Vec<String>> = HashMap::new();

        for base_price in base_prices {
            orders
                .entry(base_price.product_type.clone())
                // BTreeMap keys are already sorted
                .or_insert_with(|| base_price.options.keys().cloned().collect());
        }

        tracing::debug!(product_types = orders.len(), "Derived options order");
        Self { orders }
    }

    pub fn get(&self, product_type: &str) -> Option<&[String]> {
        self.orders.get(product_type).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.orders.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Build the price key for a cart item
    pub fn item_key(&self, item: &Item) -> Result<String, PricingError> {
        let options = self
            .get(&item.product_type)
            .ok_or_else(|| PricingError::UnknownProductType(item.product_type.clone()))?;

        let mut key = item.product_type.clone();
        for option in options {
            let value = item.options.get(option).ok_or_else(|| PricingError::MissingOption {
                product_type: item.product_type.clone(),
                option: option.clone(),
            })?;
            key.push(KEY_DELIMITER);
            key.push_str(&value.to_string());
        }

        Ok(key)
    }
}
