use crate::error::{MenuError, Result};

/// Profit margin as a percentage of the selling price.
///
/// Defined as 0 for a zero selling price. Not clamped: a food cost above the
/// price yields a negative margin.
pub fn profit_margin(selling_price: f64, food_cost: f64) -> f64 {
    if selling_price == 0.0 {
        return 0.0;
    }
    (selling_price - food_cost) / selling_price * 100.0
}

/// Monthly profit: unit profit times monthly unit sales. May be negative.
pub fn monthly_profit(selling_price: f64, food_cost: f64, monthly_sales: u32) -> f64 {
    (selling_price - food_cost) * monthly_sales as f64
}

/// Profit per minute of preparation time.
///
/// Fails with [`MenuError::Arithmetic`] when `prep_time` is zero.
pub fn efficiency_score(selling_price: f64, food_cost: f64, prep_time: u32) -> Result<f64> {
    if prep_time == 0 {
        return Err(MenuError::Arithmetic(
            "efficiency score is undefined for zero prep time".to_string(),
        ));
    }
    Ok((selling_price - food_cost) / prep_time as f64)
}

/// Food cost as a fraction of the selling price.
///
/// Fails with [`MenuError::Arithmetic`] when the selling price is zero.
pub fn food_cost_ratio(selling_price: f64, food_cost: f64) -> Result<f64> {
    if selling_price == 0.0 {
        return Err(MenuError::Arithmetic(
            "food cost ratio is undefined for a zero selling price".to_string(),
        ));
    }
    Ok(food_cost / selling_price)
}

/// Arithmetic mean; 0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
