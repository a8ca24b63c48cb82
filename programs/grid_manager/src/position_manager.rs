// Position Manager Module
//
// Turns the raw positions of a grid into display rows and computes the grid-wide
// figures shown above them: the in-range position, total liquidity and total fees.
//
// Display convention: with `display_in_token0` prices are token0's price quoted
// in token1, and grid totals are expressed in token1. Otherwise prices are
// token1's price quoted in token0 and totals are expressed in token0.

use crate::errors::{ErrorCode, Result};
use crate::types::{GridPosition, GridState, PoolInfo, PoolMetadata, Position, PositionFees};
use grid_math::{from_raw_token_amount, liquidity_to_token_amounts, tick_to_price};
use primitive_types::U256;
use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::debug;

impl Position {
    /// Enriches a grid position with display prices, fees and token amounts
    ///
    /// # Arguments
    /// * `grid_position` - The position as returned by the grid contract
    /// * `pool` - The grid's pool, for token decimals
    /// * `fees` - Uncollected fees in raw units
    /// * `display_in_token0` - Which price direction to show
    ///
    /// # Returns
    /// * `Result<Position>` - The display row
    ///
    /// # Errors
    /// * `InvalidTickRange` - If the position's ticks are not strictly ordered
    pub fn from_grid_position(
        grid_position: GridPosition,
        pool: &PoolInfo,
        fees: PositionFees,
        display_in_token0: bool,
    ) -> Result<Self> {
        let decimals0 = pool.token0.decimals;
        let decimals1 = pool.token1.decimals;

        let amounts = liquidity_to_token_amounts(
            grid_position.liquidity,
            grid_position.tick_lower,
            grid_position.tick_upper,
            decimals0,
            decimals1,
        )?;
        let price_lower = tick_to_price(grid_position.tick_lower, decimals0, decimals1)?
            .select(display_in_token0);
        let price_upper = tick_to_price(grid_position.tick_upper, decimals0, decimals1)?
            .select(display_in_token0);

        Ok(Self {
            price_lower,
            price_upper,
            fees_token0: from_raw_token_amount(fees.amount0, decimals0)?,
            fees_token1: from_raw_token_amount(fees.amount1, decimals1)?,
            liquidity_token0: amounts.amount0,
            liquidity_token1: amounts.amount1,
            grid_position,
        })
    }

    pub fn token_id(&self) -> U256 {
        self.grid_position.token_id
    }

    /// Checks whether the pool's current tick is inside this position
    pub fn contains_tick(&self, tick: i32) -> bool {
        self.grid_position.tick_lower <= tick && tick < self.grid_position.tick_upper
    }
}

/// Builds the display rows of a grid, ordered by price
///
/// Positions without an entry in `fees` show zero fees. Rows are sorted by
/// `price_lower` when displaying in token0 and by `price_upper` otherwise, so the
/// list always reads from the cheapest edge upwards.
pub fn build_positions(
    grid_positions: Vec<GridPosition>,
    pool: &PoolInfo,
    fees: &HashMap<U256, PositionFees>,
    display_in_token0: bool,
) -> Result<Vec<Position>> {
    let mut positions = grid_positions
        .into_iter()
        .map(|grid_position| {
            let position_fees = fees
                .get(&grid_position.token_id)
                .copied()
                .unwrap_or_default();
            Position::from_grid_position(grid_position, pool, position_fees, display_in_token0)
        })
        .collect::<Result<Vec<_>>>()?;

    positions.sort_by(|a, b| {
        let (left, right) = if display_in_token0 {
            (a.price_lower, b.price_lower)
        } else {
            (a.price_upper, b.price_upper)
        };
        left.partial_cmp(&right).unwrap_or(Ordering::Equal)
    });

    debug!(
        positions = positions.len(),
        display_in_token0, "built grid positions"
    );
    Ok(positions)
}

/// Index of the first position whose range contains `current_tick`
pub fn in_range_position_index(positions: &[Position], current_tick: i32) -> Option<usize> {
    positions
        .iter()
        .position(|position| position.contains_tick(current_tick))
}

/// Looks up a position by its NFT id
pub fn find_position(positions: &[Position], token_id: U256) -> Result<&Position> {
    positions
        .iter()
        .find(|position| position.token_id() == token_id)
        .ok_or(ErrorCode::PositionNotFound(token_id))
}

/// Values a token0/token1 pair in the display quote token at the pool's tick
fn value_in_display_token(
    amount0: f64,
    amount1: f64,
    pool: &PoolMetadata,
    display_in_token0: bool,
) -> Result<f64> {
    let prices = tick_to_price(
        pool.tick,
        pool.pool.token0.decimals,
        pool.pool.token1.decimals,
    )?;
    Ok(if display_in_token0 {
        amount1 + amount0 * prices.price_of_0_in_1
    } else {
        amount0 + amount1 * prices.price_of_1_in_0
    })
}

/// Total value of the grid's idle and deployed balances
///
/// # Arguments
/// * `state` - The grid state with raw token0/token1 liquidity
/// * `pool` - The pool with its current tick
/// * `display_in_token0` - Which token the total is expressed in, see module docs
pub fn total_liquidity_value(
    state: &GridState,
    pool: &PoolMetadata,
    display_in_token0: bool,
) -> Result<f64> {
    let amount0 = from_raw_token_amount(state.token0_liquidity, pool.pool.token0.decimals)?;
    let amount1 = from_raw_token_amount(state.token1_liquidity, pool.pool.token1.decimals)?;
    value_in_display_token(amount0, amount1, pool, display_in_token0)
}

/// Total value of the uncollected fees of all positions
pub fn total_fees_value(
    positions: &[Position],
    pool: &PoolMetadata,
    display_in_token0: bool,
) -> Result<f64> {
    let (fees0, fees1) = positions.iter().fold((0.0, 0.0), |(fees0, fees1), position| {
        (fees0 + position.fees_token0, fees1 + position.fees_token1)
    });
    value_in_display_token(fees0, fees1, pool, display_in_token0)
}
