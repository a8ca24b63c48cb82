/// Sweep Instruction Module
///
/// Builds the `sweep` call that moves the grid's idle balances into its
/// positions.
use super::{GridCall, RebalanceArgs};
use crate::errors::Result;

/// Builds a `sweep` call
///
/// # Errors
/// * `SlippageTooHigh`, `InvalidGridType`, `InvalidDistributionType` - On bad options
pub fn handler(slippage_percent: f64, grid_type: u8, distribution_type: u8) -> Result<GridCall> {
    Ok(GridCall::Sweep(RebalanceArgs::new(
        slippage_percent,
        grid_type,
        distribution_type,
    )?))
}
