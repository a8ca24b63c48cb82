/// Minimum Fees Instruction Module
///
/// Builds the `setMinFees` call. A grid only compounds once each token's
/// collected fees reach its minimum.
use super::GridCall;
use crate::errors::Result;
use crate::types::PoolInfo;
use grid_math::to_raw_token_amount;

/// Builds a `setMinFees` call from human amounts
///
/// # Errors
/// * `NegativeAmount`, `InvalidAmount` - On bad amounts
pub fn handler(pool: &PoolInfo, token0_min_fees: f64, token1_min_fees: f64) -> Result<GridCall> {
    Ok(GridCall::SetMinFees {
        token0_min_fees: to_raw_token_amount(token0_min_fees, pool.token0.decimals)?,
        token1_min_fees: to_raw_token_amount(token1_min_fees, pool.token1.decimals)?,
    })
}
