pub mod args;

pub use args::Args;

use anyhow::Context;
use cart_catalog::PriceBook;
use cart_store::{load_base_prices, load_cart, Config};

/// Command-line flags win over configured values
pub fn apply_overrides(args: &Args, mut config: Config) -> Config {
    if let Some(path) = &args.base_prices_path {
        config.paths.base_prices = path.clone();
    }
    if let Some(path) = &args.cart_path {
        config.paths.cart = path.clone();
    }
    if let Some(rounding) = args.rounding {
        config.pricing.rounding = rounding;
    }
    config
}

/// Load both files and price the cart
pub fn run(config: &Config, verbose: bool) -> anyhow::Result<i64> {
    let base_prices = load_base_prices(&config.paths.base_prices)?;
    let cart = load_cart(&config.paths.cart)?;

    let book = PriceBook::with_config(&base_prices, config.pricing.clone())
        .context("Failed to build price table")?;
    let quote = book
        .quote(&cart)
        .with_context(|| format!("Failed to price {}", config.paths.cart.display()))?;

    if verbose {
        for line in &quote.lines {
            tracing::info!(
                key = %line.key,
                base_price = line.base_price,
                unit_price = line.unit_price,
                quantity = line.quantity,
                line_total = line.line_total,
                "Priced line"
            );
        }
    }

    Ok(quote.total)
}
