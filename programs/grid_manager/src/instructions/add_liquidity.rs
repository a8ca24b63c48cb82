/// Add Liquidity Instruction Module
///
/// Builds the `addLiquidityToPosition` call that tops up a single position of
/// a grid instead of redistributing across all of them.
use super::{slippage_to_bps, GridCall};
use crate::errors::Result;
use crate::position_manager::find_position;
use crate::types::{PoolInfo, Position};
use grid_math::to_raw_token_amount;
use primitive_types::U256;

/// Builds an `addLiquidityToPosition` call
///
/// # Arguments
/// * `pool` - The grid's pool, for token decimals
/// * `positions` - The grid's current positions
/// * `token_id` - The position to add to
/// * `token0_amount` - Human amount of token0
/// * `token1_amount` - Human amount of token1
/// * `slippage_percent` - Accepted slippage in percent, at most 5
///
/// # Errors
/// * `SlippageTooHigh` - If slippage exceeds 5%
/// * `PositionNotFound` - If `token_id` is not one of the grid's positions
pub fn handler(
    pool: &PoolInfo,
    positions: &[Position],
    token_id: U256,
    token0_amount: f64,
    token1_amount: f64,
    slippage_percent: f64,
) -> Result<GridCall> {
    let slippage_bps = slippage_to_bps(slippage_percent)?;
    find_position(positions, token_id)?;

    Ok(GridCall::AddLiquidityToPosition {
        token_id,
        slippage_bps,
        token0_amount: to_raw_token_amount(token0_amount, pool.token0.decimals)?,
        token1_amount: to_raw_token_amount(token1_amount, pool.token1.decimals)?,
    })
}
