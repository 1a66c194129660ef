use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::OptionValue;

/// One line of a cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Item {
    pub product_type: String,
    pub options: BTreeMap<String, OptionValue>,
    /// Percentage surcharge on the base price
    pub artist_markup: i64,
    pub quantity: u32,
}

/// A price rule covering every combination of its option values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct BasePrice {
    pub product_type: String,
    pub options: BTreeMap<String, Vec<OptionValue>>,
    /// Price in cents
    pub base_price: i64,
}
