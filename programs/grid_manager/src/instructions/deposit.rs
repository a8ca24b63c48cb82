/// Deposit Instruction Module
///
/// Validates a deposit form and builds the `deposit` call that adds funds to a
/// grid and redistributes them across its positions.
use super::{GridCall, RebalanceArgs};
use crate::errors::Result;
use crate::types::PoolInfo;
use grid_math::to_raw_token_amount;
use tracing::debug;

/// Builds a `deposit` call
///
/// # Arguments
/// * `pool` - The grid's pool, for token decimals
/// * `token0_amount` - Human amount of token0 to deposit
/// * `token1_amount` - Human amount of token1 to deposit
/// * `slippage_percent` - Accepted slippage in percent, at most 5
/// * `grid_type` - Raw `GridType` value from the form
/// * `distribution_type` - Raw `DistributionType` value from the form
///
/// # Returns
/// * `Result<GridCall>` - The call, with amounts floored to raw units
///
/// # Errors
/// * `SlippageTooHigh`, `InvalidGridType`, `InvalidDistributionType` - On bad options
/// * `NegativeAmount`, `InvalidAmount` - On bad amounts
pub fn handler(
    pool: &PoolInfo,
    token0_amount: f64,
    token1_amount: f64,
    slippage_percent: f64,
    grid_type: u8,
    distribution_type: u8,
) -> Result<GridCall> {
    let rebalance = RebalanceArgs::new(slippage_percent, grid_type, distribution_type)?;
    let token0_amount = to_raw_token_amount(token0_amount, pool.token0.decimals)?;
    let token1_amount = to_raw_token_amount(token1_amount, pool.token1.decimals)?;

    debug!(
        %token0_amount,
        %token1_amount,
        slippage_bps = rebalance.slippage_bps,
        "building deposit"
    );
    Ok(GridCall::Deposit {
        token0_amount,
        token1_amount,
        rebalance,
    })
}
