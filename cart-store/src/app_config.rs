use cart_catalog::PricingConfig;
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

pub const DEFAULT_BASE_PRICES_PATH: &str = "data/base-prices.json";
pub const DEFAULT_CART_PATH: &str = "data/cart-4560.json";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub paths: PathsConfig,
    #[serde(default)]
    pub pricing: PricingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PathsConfig {
    pub base_prices: PathBuf,
    pub cart: PathBuf,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(Path::new("config"))
    }

    /// Layer built-in defaults, optional files under `config_dir`, then `CART_*` env vars
    pub fn load_from(config_dir: &Path) -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        let file = |name: &str| config::File::with_name(&config_dir.join(name).to_string_lossy()).required(false);

        let s = config::Config::builder()
            .set_default("paths.base_prices", DEFAULT_BASE_PRICES_PATH)?
            .set_default("paths.cart", DEFAULT_CART_PATH)?
            .set_default("pricing.rounding", "half_even")?
            .add_source(file("default"))
            .add_source(file(&run_mode))
            // Not checked in
            .add_source(file("local"))
            // Eg.. `CART_PATHS__CART=my-cart.json`
            .add_source(
                config::Environment::with_prefix("CART")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cart_catalog::RoundingMode;
    use std::fs;
    use std::sync::Mutex;

    // Env vars are process-wide
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_defaults_without_files() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(dir.path()).unwrap();

        assert_eq!(config.paths.base_prices, PathBuf::from(DEFAULT_BASE_PRICES_PATH));
        assert_eq!(config.paths.cart, PathBuf::from(DEFAULT_CART_PATH));
        assert_eq!(config.pricing.rounding, RoundingMode::HalfEven);
    }

    #[test]
    fn test_default_file_overrides() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("default.toml"),
            "[paths]\ncart = \"carts/big.json\"\n\n[pricing]\nrounding = \"half_away_from_zero\"\n",
        )
        .unwrap();

        let config = Config::load_from(dir.path()).unwrap();

        assert_eq!(config.paths.cart, PathBuf::from("carts/big.json"));
        assert_eq!(config.paths.base_prices, PathBuf::from(DEFAULT_BASE_PRICES_PATH));
        assert_eq!(config.pricing.rounding, RoundingMode::HalfAwayFromZero);
    }

    #[test]
    fn test_bad_rounding_is_rejected() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("default.toml"), "[pricing]\nrounding = \"up\"\n").unwrap();

        assert!(Config::load_from(dir.path()).is_err());
    }

    #[test]
    fn test_env_overrides_files() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("default.toml"), "[paths]\ncart = \"carts/big.json\"\n").unwrap();

        env::set_var("CART_PATHS__CART", "single.json");
        env::set_var("CART_PRICING__ROUNDING", "half_away_from_zero");
        let config = Config::load_from(dir.path());
        env::remove_var("CART_PATHS__CART");
        env::remove_var("CART_PRICING__ROUNDING");

        let config = config.unwrap();
        assert_eq!(config.paths.cart, PathBuf::from("single.json"));
        assert_eq!(config.paths.base_prices, PathBuf::from(DEFAULT_BASE_PRICES_PATH));
        assert_eq!(config.pricing.rounding, RoundingMode::HalfAwayFromZero);
    }
}
