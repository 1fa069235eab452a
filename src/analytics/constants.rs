// ─────────────────────────────────────────────────────────────────────────────
// Profit report
// ─────────────────────────────────────────────────────────────────────────────

/// Items below this margin (percent) are candidates for the underperformer alert.
pub const UNDERPERFORMER_MARGIN: f64 = 30.0;

/// Average margin (percent) above which menu health is reported as excellent.
pub const EXCELLENT_AVERAGE_MARGIN: f64 = 65.0;

/// Average margin (percent) below which a margin warning is raised.
pub const WARNING_AVERAGE_MARGIN: f64 = 50.0;

// ─────────────────────────────────────────────────────────────────────────────
// Pricing report
// ─────────────────────────────────────────────────────────────────────────────

/// Margin (percent) below which a price increase is recommended.
pub const PRICE_INCREASE_MARGIN: f64 = 40.0;

/// Margin (percent) the price increase targets.
pub const TARGET_MARGIN: f64 = 60.0;

/// Margin (percent) above which a high-volume item may be discounted.
pub const DISCOUNT_MARGIN: f64 = 80.0;

/// Monthly sales above which a high-margin item counts as selling well.
pub const DISCOUNT_MIN_SALES: u32 = 100;

/// Fractional price cut suggested for high-margin, high-volume items.
pub const DISCOUNT_RATE: f64 = 0.05;

/// Monthly sales below which an item is considered slow-selling.
pub const LOW_SALES: u32 = 50;

/// Margin (percent) above which a slow seller gets a volume booster discount.
pub const VOLUME_BOOSTER_MARGIN: f64 = 60.0;

/// Fractional price cut suggested to stimulate demand.
pub const VOLUME_BOOSTER_RATE: f64 = 0.10;

/// A category's top price above this multiple of its mean triggers a consistency check.
pub const PRICE_SPREAD_FACTOR: f64 = 1.5;

// ─────────────────────────────────────────────────────────────────────────────
// Trend report
// ─────────────────────────────────────────────────────────────────────────────

/// Monthly sales above which an item is high-volume.
pub const HIGH_VOLUME_SALES: u32 = 150;

/// Monthly sales below which an item is low-volume.
pub const LOW_VOLUME_SALES: u32 = 30;

/// The weakest category is flagged when its sales fall below this share of the leader's.
pub const CATEGORY_DECLINE_RATIO: f64 = 0.3;

/// Items at or under this prep time (minutes) are quick.
pub const QUICK_PREP_MINUTES: u32 = 10;

/// Items over this prep time (minutes) are slow.
pub const SLOW_PREP_MINUTES: u32 = 20;

/// Quick items must outsell slow ones by this factor to report an efficiency trend.
pub const QUICK_SALES_UPLIFT: f64 = 1.2;

// ─────────────────────────────────────────────────────────────────────────────
// Cost report
// ─────────────────────────────────────────────────────────────────────────────

/// Overall food cost (percent of revenue) below which control is excellent.
pub const FOOD_COST_EXCELLENT: f64 = 30.0;

/// Overall food cost (percent of revenue) below which control is good.
pub const FOOD_COST_GOOD: f64 = 35.0;

/// Per-item food cost ratio above which an item is flagged.
pub const HIGH_FOOD_COST_RATIO: f64 = 0.4;

/// Prep time (minutes) above which labor cost is a concern.
pub const LABOR_PREP_MINUTES: u32 = 30;

/// Number of labor-intensive items considered.
pub const LABOR_INTENSIVE_TOP_N: usize = 3;

/// Single-use ingredient count above which utilization is flagged.
pub const SINGLE_USE_INGREDIENT_LIMIT: usize = 3;

// ─────────────────────────────────────────────────────────────────────────────
// Display thresholds
// ─────────────────────────────────────────────────────────────────────────────

/// Margin (percent) above which an item is badged as high margin.
pub const HIGH_MARGIN_BADGE: f64 = 70.0;

/// Margin (percent) below which an item is badged as low margin.
pub const LOW_MARGIN_BADGE: f64 = 30.0;
