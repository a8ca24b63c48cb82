/// Liquidity Decomposition Module
///
/// Splits a position's liquidity into the token amounts it represents. The raw
/// amounts are computed with the exact Q64.96 formulas in `crate::math`, so they
/// match what the position manager reports on-chain. Rebasing to human units
/// happens once, on the final integers.
use crate::errors::{MathError, Result};
use crate::math::{
    get_amount_0_delta, get_amount_1_delta, get_amounts_for_liquidity, get_sqrt_ratio_at_tick,
};
use crate::utils::token_amount::from_raw_token_amount;
use primitive_types::U256;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Token amounts of a position in raw units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAmounts {
    pub amount0: U256,
    pub amount1: U256,
}

impl RawAmounts {
    /// Rebases both amounts to human units.
    pub fn to_token_amounts(
        &self,
        token0_decimals: u8,
        token1_decimals: u8,
    ) -> Result<TokenAmounts> {
        Ok(TokenAmounts {
            amount0: from_raw_token_amount(self.amount0, token0_decimals)?,
            amount1: from_raw_token_amount(self.amount1, token1_decimals)?,
        })
    }
}

/// Token amounts of a position in human units, for display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenAmounts {
    pub amount0: f64,
    pub amount1: f64,
}

fn range_bounds(tick_lower: i32, tick_upper: i32) -> Result<(U256, U256)> {
    if tick_upper <= tick_lower {
        return Err(MathError::InvalidTickRange);
    }
    Ok((
        get_sqrt_ratio_at_tick(tick_lower)?,
        get_sqrt_ratio_at_tick(tick_upper)?,
    ))
}

/// Computes the full-range token amounts of a liquidity value in raw units
///
/// Each token is evaluated across the whole `[tick_lower, tick_upper]` range,
/// independently of the pool's current price: amount0 is the token0 needed if
/// the price sat at the lower bound and amount1 the token1 needed at the upper
/// bound. Both round up, matching the amounts a mint of this liquidity would pull.
///
/// # Arguments
/// * `liquidity` - The position's liquidity
/// * `tick_lower` - The lower tick of the position
/// * `tick_upper` - The upper tick of the position
///
/// # Returns
/// * `Result<RawAmounts>` - Raw token0 and token1 amounts
///
/// # Errors
/// * `InvalidTickRange` - If `tick_upper <= tick_lower`
/// * `TickOutOfBounds` - If either tick is outside the protocol range
pub fn liquidity_to_raw_amounts(
    liquidity: u128,
    tick_lower: i32,
    tick_upper: i32,
) -> Result<RawAmounts> {
    let (sqrt_lower, sqrt_upper) = range_bounds(tick_lower, tick_upper)?;
    let amounts = RawAmounts {
        amount0: get_amount_0_delta(sqrt_lower, sqrt_upper, liquidity, true)?,
        amount1: get_amount_1_delta(sqrt_lower, sqrt_upper, liquidity, true)?,
    };

    debug!(
        liquidity,
        tick_lower,
        tick_upper,
        amount0 = %amounts.amount0,
        amount1 = %amounts.amount1,
        "decomposed liquidity"
    );
    Ok(amounts)
}

/// Computes the full-range token amounts of a liquidity value in human units
///
/// Same as [`liquidity_to_raw_amounts`], with each amount then rebased by its
/// token's decimals.
///
/// # Example
/// ```
/// use grid_math::liquidity::liquidity_to_token_amounts;
///
/// let amounts = liquidity_to_token_amounts(1_000_000_000_000, -100, 100, 18, 6).unwrap();
/// assert!(amounts.amount0 > 0.0 && amounts.amount1 > 0.0);
/// ```
pub fn liquidity_to_token_amounts(
    liquidity: u128,
    tick_lower: i32,
    tick_upper: i32,
    token0_decimals: u8,
    token1_decimals: u8,
) -> Result<TokenAmounts> {
    liquidity_to_raw_amounts(liquidity, tick_lower, tick_upper)?
        .to_token_amounts(token0_decimals, token1_decimals)
}

/// Computes what a position actually holds at the pool's current price
///
/// Unlike [`liquidity_to_token_amounts`], the liquidity is split at
/// `sqrt_price_x96`: a position below the price holds only token1, one above it
/// only token0. Rounds down, like the amounts a burn would return.
pub fn liquidity_to_token_amounts_at_price(
    liquidity: u128,
    tick_lower: i32,
    tick_upper: i32,
    sqrt_price_x96: U256,
    token0_decimals: u8,
    token1_decimals: u8,
) -> Result<TokenAmounts> {
    let (sqrt_lower, sqrt_upper) = range_bounds(tick_lower, tick_upper)?;
    let (amount0, amount1) =
        get_amounts_for_liquidity(sqrt_price_x96, sqrt_lower, sqrt_upper, liquidity)?;
    RawAmounts { amount0, amount1 }.to_token_amounts(token0_decimals, token1_decimals)
}
