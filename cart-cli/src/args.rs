use cart_catalog::RoundingMode;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cart-total")]
#[command(about = "Calculate the price of a cart in cents")]
#[command(version)]
pub struct Args {
    /// Absolute or relative path to your base prices JSON
    #[arg(long, alias = "base_prices_path")]
    pub base_prices_path: Option<PathBuf>,

    /// Absolute or relative path to your cart JSON
    #[arg(long, alias = "cart_path")]
    pub cart_path: Option<PathBuf>,

    /// half_even or half_away_from_zero
    #[arg(long)]
    pub rounding: Option<RoundingMode>,

    /// Log each priced line
    #[arg(short, long)]
    pub verbose: bool,
}
