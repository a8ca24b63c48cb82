/// Compound Instruction Module
///
/// Builds the `compound` call that collects every position's fees and puts
/// them back to work across the grid.
use super::{GridCall, RebalanceArgs};
use crate::errors::Result;

/// Builds a `compound` call
///
/// # Errors
/// * `SlippageTooHigh`, `InvalidGridType`, `InvalidDistributionType` - On bad options
pub fn handler(slippage_percent: f64, grid_type: u8, distribution_type: u8) -> Result<GridCall> {
    Ok(GridCall::Compound(RebalanceArgs::new(
        slippage_percent,
        grid_type,
        distribution_type,
    )?))
}
