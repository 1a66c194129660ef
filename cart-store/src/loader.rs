use cart_shared::{validate_base_prices, validate_cart, BasePrice, Item, ValidationError};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid data in {path}: {source}")]
    Validation {
        path: PathBuf,
        #[source]
        source: ValidationError,
    },
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_reader(BufReader::new(file)).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load and validate a cart file
pub fn load_cart(path: &Path) -> Result<Vec<Item>, LoadError> {
    let cart: Vec<Item> = read_json(path)?;
    validate_cart(&cart).map_err(|source| LoadError::Validation {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), items = cart.len(), "Loaded cart");
    Ok(cart)
}

/// Load and validate a base-price file
pub fn load_base_prices(path: &Path) -> Result<Vec<BasePrice>, LoadError> {
    let base_prices: Vec<BasePrice> = read_json(path)?;
    validate_base_prices(&base_prices).map_err(|source| LoadError::Validation {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), rules = base_prices.len(), "Loaded base prices");
    Ok(base_prices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_cart() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            "cart.json",
            r#"[{"product-type": "hoodie", "options": {"size": "small"}, "artist-markup": 20, "quantity": 1, "note": "gift"}]"#,
        );

        let cart = load_cart(&path).unwrap();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].product_type, "hoodie");
        assert_eq!(cart[0].artist_markup, 20);
    }

    #[test]
    fn test_load_base_prices() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            "base-prices.json",
            r#"[{"product-type": "hoodie", "options": {"size": ["small", "medium"]}, "base-price": 3800}]"#,
        );

        let base_prices = load_base_prices(&path).unwrap();
        assert_eq!(base_prices[0].base_price, 3800);
        assert_eq!(base_prices[0].options["size"].len(), 2);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_cart(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn test_missing_required_field() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "cart.json", r#"[{"product-type": "hoodie", "options": {}, "quantity": 1}]"#);

        let err = load_cart(&path).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
        assert!(err.to_string().contains("artist-markup"), "{}", err);
    }

    #[test]
    fn test_validation_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            "cart.json",
            r#"[{"product-type": "hoodie", "options": {}, "artist-markup": 0, "quantity": 0}]"#,
        );

        assert!(matches!(
            load_cart(&path).unwrap_err(),
            LoadError::Validation {
                source: ValidationError::ZeroQuantity { index: 0 },
                ..
            }
        ));
    }

    #[test]
    fn test_empty_value_list_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            "base-prices.json",
            r#"[{"product-type": "hoodie", "options": {"size": []}, "base-price": 3800}]"#,
        );

        assert!(matches!(load_base_prices(&path).unwrap_err(), LoadError::Validation { .. }));
    }
}
