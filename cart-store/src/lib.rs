pub mod app_config;
pub mod loader;

pub use app_config::Config;
pub use loader::{load_base_prices, load_cart, LoadError};
