use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analytics::constants::*;
use crate::error::{MenuError, Result};

/// Runtime-configurable thresholds for every report.
///
/// Defaults mirror the constants in [`crate::analytics::constants`]; a JSON
/// file may override any subset of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub underperformer_margin: f64,
    pub excellent_average_margin: f64,
    pub warning_average_margin: f64,

    pub price_increase_margin: f64,
    pub target_margin: f64,
    pub discount_margin: f64,
    pub discount_min_sales: u32,
    pub discount_rate: f64,
    pub low_sales: u32,
    pub volume_booster_margin: f64,
    pub volume_booster_rate: f64,
    pub price_spread_factor: f64,

    pub high_volume_sales: u32,
    pub low_volume_sales: u32,
    pub category_decline_ratio: f64,
    pub quick_prep_minutes: u32,
    pub slow_prep_minutes: u32,
    pub quick_sales_uplift: f64,

    pub food_cost_excellent: f64,
    pub food_cost_good: f64,
    pub high_food_cost_ratio: f64,
    pub labor_prep_minutes: u32,
    pub single_use_ingredient_limit: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            underperformer_margin: UNDERPERFORMER_MARGIN,
            excellent_average_margin: EXCELLENT_AVERAGE_MARGIN,
            warning_average_margin: WARNING_AVERAGE_MARGIN,
            price_increase_margin: PRICE_INCREASE_MARGIN,
            target_margin: TARGET_MARGIN,
            discount_margin: DISCOUNT_MARGIN,
            discount_min_sales: DISCOUNT_MIN_SALES,
            discount_rate: DISCOUNT_RATE,
            low_sales: LOW_SALES,
            volume_booster_margin: VOLUME_BOOSTER_MARGIN,
            volume_booster_rate: VOLUME_BOOSTER_RATE,
            price_spread_factor: PRICE_SPREAD_FACTOR,
            high_volume_sales: HIGH_VOLUME_SALES,
            low_volume_sales: LOW_VOLUME_SALES,
            category_decline_ratio: CATEGORY_DECLINE_RATIO,
            quick_prep_minutes: QUICK_PREP_MINUTES,
            slow_prep_minutes: SLOW_PREP_MINUTES,
            quick_sales_uplift: QUICK_SALES_UPLIFT,
            food_cost_excellent: FOOD_COST_EXCELLENT,
            food_cost_good: FOOD_COST_GOOD,
            high_food_cost_ratio: HIGH_FOOD_COST_RATIO,
            labor_prep_minutes: LABOR_PREP_MINUTES,
            single_use_ingredient_limit: SINGLE_USE_INGREDIENT_LIMIT,
        }
    }
}

impl Thresholds {
    /// Divisor applied to food cost to get the recommended price.
    ///
    /// The recommended price is `food_cost / (target_margin / 100)`. Note that
    /// this puts food cost at `target_margin` percent of the price.
    pub fn target_price_divisor(&self) -> f64 {
        self.target_margin / 100.0
    }

    /// Reject values that would make a report divide by zero or compare
    /// against an impossible percentage.
    pub fn validate(&self) -> Result<()> {
        let percents = [
            ("underperformer_margin", self.underperformer_margin),
            ("excellent_average_margin", self.excellent_average_margin),
            ("warning_average_margin", self.warning_average_margin),
            ("price_increase_margin", self.price_increase_margin),
            ("target_margin", self.target_margin),
            ("discount_margin", self.discount_margin),
            ("volume_booster_margin", self.volume_booster_margin),
            ("food_cost_excellent", self.food_cost_excellent),
            ("food_cost_good", self.food_cost_good),
        ];
        for (key, value) in percents {
            if !(0.0..=100.0).contains(&value) {
                return Err(invalid_threshold(key, value, "must be between 0 and 100"));
            }
        }

        let positive = [
            ("target_margin", self.target_margin),
            ("price_spread_factor", self.price_spread_factor),
            ("quick_sales_uplift", self.quick_sales_uplift),
        ];
        for (key, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid_threshold(key, value, "must be greater than 0"));
            }
        }

        let non_negative = [
            ("discount_rate", self.discount_rate),
            ("volume_booster_rate", self.volume_booster_rate),
            ("category_decline_ratio", self.category_decline_ratio),
            ("high_food_cost_ratio", self.high_food_cost_ratio),
        ];
        for (key, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(invalid_threshold(key, value, "must not be negative"));
            }
        }

        Ok(())
    }
}

fn invalid_threshold(key: &str, value: f64, reason: &str) -> MenuError {
    MenuError::InvalidInput(format!("threshold '{}' = {} {}", key, value, reason))
}

/// Load thresholds from a JSON file. Keys that are absent keep their defaults;
/// out-of-range values are rejected.
pub fn load_thresholds<P: AsRef<Path>>(path: P) -> Result<Thresholds> {
    let content = fs::read_to_string(path)?;
    let thresholds: Thresholds = serde_json::from_str(&content)?;
    thresholds.validate()?;
    Ok(thresholds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_target_price_divisor() {
        let thresholds = Thresholds::default();
        assert!((thresholds.target_price_divisor() - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"low_sales": 25, "target_margin": 70.0}"#)
            .unwrap();

        let thresholds = load_thresholds(file.path()).unwrap();
        assert_eq!(thresholds.low_sales, 25);
        assert!((thresholds.target_margin - 70.0).abs() < 1e-9);
        assert_eq!(thresholds.high_volume_sales, HIGH_VOLUME_SALES);
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(Thresholds::default().validate().is_ok());
    }

    #[test]
    fn test_zero_target_margin_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"target_margin": 0}"#).unwrap();

        let err = load_thresholds(file.path()).unwrap_err();
        assert!(matches!(err, MenuError::InvalidInput(_)));
        assert!(err.to_string().contains("target_margin"));
    }

    #[test]
    fn test_out_of_range_values_rejected() {
        let cases = [
            Thresholds {
                price_spread_factor: 0.0,
                ..Thresholds::default()
            },
            Thresholds {
                discount_rate: -0.05,
                ..Thresholds::default()
            },
            Thresholds {
                excellent_average_margin: 150.0,
                ..Thresholds::default()
            },
            Thresholds {
                high_food_cost_ratio: f64::NAN,
                ..Thresholds::default()
            },
        ];
        let keys = [
            "price_spread_factor",
            "discount_rate",
            "excellent_average_margin",
            "high_food_cost_ratio",
        ];
        for (thresholds, key) in cases.iter().zip(keys) {
            let err = thresholds.validate().unwrap_err();
            assert!(err.to_string().contains(key), "{} not named in '{}'", key, err);
        }
    }
}
