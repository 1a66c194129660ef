use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

/// How a fractional markup cent is settled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Ties go to the even neighbour (49.5 -> 50, 2.5 -> 2)
    #[default]
    HalfEven,
    /// Ties go away from zero (2.5 -> 3)
    HalfAwayFromZero,
}

impl FromStr for RoundingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "half_even" => Ok(RoundingMode::HalfEven),
            "half_away_from_zero" => Ok(RoundingMode::HalfAwayFromZero),
            other => Err(format!(
                "unknown rounding mode '{}', expected half_even or half_away_from_zero",
                other
            )),
        }
    }
}

/// Pricing configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PricingConfig {
    #[serde(default)]
    pub rounding: RoundingMode,
}

impl PricingConfig {
    /// Markup in cents: `round(base_price * artist_markup / 100)`.
    ///
    /// Worked in integers so ties are detected exactly. Returns `None` on overflow.
    pub fn markup(&self, base_price: i64, artist_markup: i64) -> Option<i64> {
        let scaled = base_price.checked_mul(artist_markup)?;
        let quotient = scaled.div_euclid(100);
        let remainder = scaled.rem_euclid(100);

        let rounded = match remainder.cmp(&50) {
            Ordering::Less => quotient,
            Ordering::Greater => quotient + 1,
            Ordering::Equal => match self.rounding {
                RoundingMode::HalfEven if quotient % 2 == 0 => quotient,
                RoundingMode::HalfEven => quotient + 1,
                RoundingMode::HalfAwayFromZero if scaled >= 0 => quotient + 1,
                RoundingMode::HalfAwayFromZero => quotient,
            },
        };
        Some(rounded)
    }

    /// Base price plus rounded markup
    pub fn unit_price(&self, base_price: i64, artist_markup: i64) -> Option<i64> {
        base_price.checked_add(self.markup(base_price, artist_markup)?)
    }
}
