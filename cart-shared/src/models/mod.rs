pub mod cart;
pub mod option_value;

pub use cart::{BasePrice, Item};
pub use option_value::OptionValue;
