/// Price Range Utility Module
///
/// Converts between ticks and human-readable prices, snaps ticks to a pool's tick
/// spacing, and builds validated price ranges for grid deployments.
///
/// Prices here are `f64` estimates for display and range selection. They follow
/// the pool's `1.0001^tick` convention but are not settlement math; anything that
/// moves funds goes through the exact Q64.96 functions in `crate::math`.
use crate::constants::{
    MAX_SQRT_RATIO, MAX_TICK, MIN_SQRT_RATIO, MIN_TICK, TICK_BASE, TICK_ROUNDING_EPSILON,
};
use crate::errors::{MathError, Result};
use crate::math::u256_to_f64;
use crate::token::{sort_tokens, Token};
use primitive_types::U256;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// A price in both directions, as returned by every tick/price conversion.
///
/// Inverting a price that is close to zero or infinity loses precision, so both
/// sides are computed once and handed to the caller together.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PricePair {
    /// Price of one token0 expressed in token1
    pub price_of_0_in_1: f64,
    /// Price of one token1 expressed in token0
    pub price_of_1_in_0: f64,
}

impl PricePair {
    fn from_price_of_0_in_1(price: f64) -> Result<Self> {
        let inverse = 1.0 / price;
        if !price.is_finite() || price <= 0.0 || !inverse.is_finite() || inverse <= 0.0 {
            return Err(MathError::NonFinitePrice);
        }
        Ok(Self {
            price_of_0_in_1: price,
            price_of_1_in_0: inverse,
        })
    }

    /// The price shown by the console: token0's price when displaying in token0,
    /// token1's price otherwise.
    pub fn select(&self, display_in_token0: bool) -> f64 {
        if display_in_token0 {
            self.price_of_0_in_1
        } else {
            self.price_of_1_in_0
        }
    }
}

/// Converts a tick index to a human-readable price pair
///
/// Computes `1.0001^tick` in floating point and rescales it from raw units to
/// human units by `10^(token0_decimals - token1_decimals)`.
///
/// # Arguments
/// * `tick` - The tick index to convert
/// * `token0_decimals` - Decimals of the pool's token0
/// * `token1_decimals` - Decimals of the pool's token1
///
/// # Returns
/// * `Result<PricePair>` - Both directions of the price
///
/// # Errors
/// * `TickOutOfBounds` - If the tick is outside [MIN_TICK, MAX_TICK]
/// * `NonFinitePrice` - If the decimals gap pushes the price past f64 range
///
/// # Example
/// ```
/// use grid_math::utils::price_range::tick_to_price;
///
/// let prices = tick_to_price(0, 18, 18).unwrap();
/// assert_eq!(prices.price_of_0_in_1, 1.0);
/// ```
pub fn tick_to_price(tick: i32, token0_decimals: u8, token1_decimals: u8) -> Result<PricePair> {
    if !(MIN_TICK..=MAX_TICK).contains(&tick) {
        return Err(MathError::TickOutOfBounds);
    }
    let ratio = TICK_BASE.powf(f64::from(tick));
    let scale = 10f64.powi(i32::from(token0_decimals) - i32::from(token1_decimals));
    PricePair::from_price_of_0_in_1(ratio * scale)
}

/// Converts a pool's `sqrtPriceX96` (as read from `slot0`) to a human-readable price pair
///
/// # Errors
/// * `InvalidSqrtPrice` - If the value is outside [MIN_SQRT_RATIO, MAX_SQRT_RATIO]
/// * `NonFinitePrice` - If the rescaled price is not a finite positive number
pub fn sqrt_price_x96_to_price(
    sqrt_price_x96: U256,
    token0_decimals: u8,
    token1_decimals: u8,
) -> Result<PricePair> {
    if sqrt_price_x96 < MIN_SQRT_RATIO || sqrt_price_x96 > MAX_SQRT_RATIO {
        return Err(MathError::InvalidSqrtPrice);
    }
    let sqrt_price = u256_to_f64(sqrt_price_x96) / 2f64.powi(96);
    let scale = 10f64.powi(i32::from(token0_decimals) - i32::from(token1_decimals));
    PricePair::from_price_of_0_in_1(sqrt_price * sqrt_price * scale)
}

/// Snaps a tick to the nearest multiple of the tick spacing
///
/// Ties go to the lower multiple. A result that would fall outside the protocol
/// range is moved one spacing back inside it, like the periphery's `nearestUsableTick`.
///
/// # Arguments
/// * `tick` - The tick to snap, within [MIN_TICK, MAX_TICK]
/// * `tick_spacing` - The pool's tick spacing, strictly positive
///
/// # Returns
/// * `Result<i32>` - The usable tick
pub fn nearest_usable_tick(tick: i32, tick_spacing: i32) -> Result<i32> {
    if tick_spacing <= 0 {
        return Err(MathError::InvalidTickSpacing);
    }
    if !(MIN_TICK..=MAX_TICK).contains(&tick) {
        return Err(MathError::TickOutOfBounds);
    }

    let tick = i64::from(tick);
    let spacing = i64::from(tick_spacing);
    let remainder = tick.rem_euclid(spacing);
    let lower = tick - remainder;
    let mut rounded = if remainder * 2 > spacing {
        lower + spacing
    } else {
        lower
    };

    if rounded < i64::from(MIN_TICK) {
        rounded += spacing;
    } else if rounded > i64::from(MAX_TICK) {
        rounded -= spacing;
    }

    i32::try_from(rounded).map_err(|_| MathError::Overflow)
}

/// Converts a human-readable price to the nearest usable pool tick
///
/// `price` is the amount of `quote` paid for one `base`. The pool ratio is always
/// token1 per token0 in raw units, so the price is inverted when `base` is the
/// pool's token1 and rescaled by the decimals gap either way. The raw tick is
/// `floor(log(ratio) / log(1.0001))`, clamped into the protocol range, then
/// snapped to the tick spacing.
///
/// This inverts a floating-point logarithm, so it only approximates the tick the
/// pool would pick. It is meant for range selection, not settlement.
///
/// # Arguments
/// * `base` - The token being priced
/// * `quote` - The token the price is expressed in
/// * `price` - Quote units per base unit, finite and positive
/// * `tick_spacing` - The pool's tick spacing, strictly positive
///
/// # Returns
/// * `Result<i32>` - A tick that is a multiple of `tick_spacing`
///
/// # Errors
/// * `InvalidTickSpacing` - If `tick_spacing <= 0`
/// * `InvalidPrice` - If the price is not finite and positive, or `base` and
///   `quote` are the same token
pub fn price_to_tick(base: &Token, quote: &Token, price: f64, tick_spacing: i32) -> Result<i32> {
    if tick_spacing <= 0 {
        return Err(MathError::InvalidTickSpacing);
    }
    if !price.is_finite() || price <= 0.0 || base.address == quote.address {
        return Err(MathError::InvalidPrice);
    }

    let ratio = if base.sorts_before(quote) {
        price * 10f64.powi(i32::from(quote.decimals) - i32::from(base.decimals))
    } else {
        (1.0 / price) * 10f64.powi(i32::from(base.decimals) - i32::from(quote.decimals))
    };
    if !ratio.is_finite() || ratio <= 0.0 {
        return Err(MathError::InvalidPrice);
    }

    let exact = ratio.ln() / TICK_BASE.ln();
    let nearest = exact.round();
    let raw_tick = if (exact - nearest).abs() < TICK_ROUNDING_EPSILON {
        nearest
    } else {
        exact.floor()
    };

    let tick = if raw_tick < f64::from(MIN_TICK) {
        warn!(price, raw_tick, "price below the protocol range, clamping to MIN_TICK");
        MIN_TICK
    } else if raw_tick > f64::from(MAX_TICK) {
        warn!(price, raw_tick, "price above the protocol range, clamping to MAX_TICK");
        MAX_TICK
    } else {
        raw_tick as i32
    };

    nearest_usable_tick(tick, tick_spacing)
}

/// Enum defining standard price range presets for grid deployments
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceRangePreset {
    /// ±5% around the current price
    Narrow,
    /// ±15% around the current price
    Medium,
    /// ±50% around the current price
    Wide,
    /// Bounds entered by the user
    Custom,
}

impl PriceRangePreset {
    /// Half-width of the preset in percent, `None` for `Custom`.
    pub fn percentage(self) -> Option<f64> {
        match self {
            PriceRangePreset::Narrow => Some(5.0),
            PriceRangePreset::Medium => Some(15.0),
            PriceRangePreset::Wide => Some(50.0),
            PriceRangePreset::Custom => None,
        }
    }
}

/// A validated tick range with its prices, ready to parameterize a grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    /// Lower tick index, always below `upper_tick`
    pub lower_tick: i32,
    /// Upper tick index
    pub upper_tick: i32,
    /// Prices at the lower tick
    pub lower_price: PricePair,
    /// Prices at the upper tick
    pub upper_price: PricePair,
    /// The preset used to create this range
    pub preset: PriceRangePreset,
}

impl PriceRange {
    /// Creates a range from explicit tick bounds
    ///
    /// # Errors
    /// * `InvalidTickRange` - If `lower_tick >= upper_tick`
    /// * `TickOutOfBounds` - If either tick is outside the protocol range
    pub fn new_from_ticks(
        lower_tick: i32,
        upper_tick: i32,
        token0_decimals: u8,
        token1_decimals: u8,
    ) -> Result<Self> {
        if lower_tick >= upper_tick {
            return Err(MathError::InvalidTickRange);
        }
        Ok(Self {
            lower_tick,
            upper_tick,
            lower_price: tick_to_price(lower_tick, token0_decimals, token1_decimals)?,
            upper_price: tick_to_price(upper_tick, token0_decimals, token1_decimals)?,
            preset: PriceRangePreset::Custom,
        })
    }

    /// Creates a range from two prices of `base` in `quote`
    ///
    /// The prices may be given in either order; when `base` is token1 a higher
    /// price maps to a lower tick, so the ticks are sorted after conversion.
    ///
    /// # Errors
    /// * `InvalidTickRange` - If both prices snap to the same usable tick
    pub fn new_from_prices(
        base: &Token,
        quote: &Token,
        price_a: f64,
        price_b: f64,
        tick_spacing: i32,
    ) -> Result<Self> {
        let tick_a = price_to_tick(base, quote, price_a, tick_spacing)?;
        let tick_b = price_to_tick(base, quote, price_b, tick_spacing)?;
        let (token0, token1) = sort_tokens(*base, *quote);
        Self::new_from_ticks(
            tick_a.min(tick_b),
            tick_a.max(tick_b),
            token0.decimals,
            token1.decimals,
        )
    }

    /// Creates a range spanning ±`percentage` around `current_price`
    ///
    /// # Errors
    /// * `InvalidPrice` - If the percentage is not in (0, 100)
    pub fn around_price(
        base: &Token,
        quote: &Token,
        current_price: f64,
        percentage: f64,
        tick_spacing: i32,
    ) -> Result<Self> {
        if !(percentage > 0.0 && percentage < 100.0) {
            return Err(MathError::InvalidPrice);
        }
        let delta = current_price * percentage / 100.0;
        Self::new_from_prices(
            base,
            quote,
            current_price - delta,
            current_price + delta,
            tick_spacing,
        )
    }

    /// Creates a range from a preset around `current_price`
    ///
    /// # Errors
    /// * `InvalidPrice` - For `PriceRangePreset::Custom`, which has no width
    pub fn new_from_preset(
        preset: PriceRangePreset,
        base: &Token,
        quote: &Token,
        current_price: f64,
        tick_spacing: i32,
    ) -> Result<Self> {
        let percentage = preset.percentage().ok_or(MathError::InvalidPrice)?;
        let mut range = Self::around_price(base, quote, current_price, percentage, tick_spacing)?;
        range.preset = preset;
        Ok(range)
    }

    /// Width of the range as a percentage of its lower price
    pub fn width_percentage(&self) -> f64 {
        ((self.upper_price.price_of_0_in_1 / self.lower_price.price_of_0_in_1) - 1.0) * 100.0
    }

    /// Checks whether the pool's current tick is inside the range
    ///
    /// Liquidity is active while `lower_tick <= tick < upper_tick`.
    pub fn contains_tick(&self, tick: i32) -> bool {
        self.lower_tick <= tick && tick < self.upper_tick
    }

    /// Number of whole tick-spacing steps covered by the range
    pub fn spacing_steps(&self, tick_spacing: i32) -> Result<i32> {
        if tick_spacing <= 0 {
            return Err(MathError::InvalidTickSpacing);
        }
        Ok((self.upper_tick - self.lower_tick) / tick_spacing)
    }
}
