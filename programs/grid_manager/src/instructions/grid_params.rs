/// Grid Parameters Instruction Module
///
/// Builds the calls that change a deployed grid's shape: how many positions it
/// holds and how many tick spacings each one spans.
use super::GridCall;
use crate::errors::{ErrorCode, Result};
use primitive_types::U256;

fn positive(value: U256) -> Result<U256> {
    if value.is_zero() {
        return Err(ErrorCode::InvalidGridParameter);
    }
    Ok(value)
}

/// Builds a `setGridQuantity` call
///
/// # Errors
/// * `InvalidGridParameter` - If `grid_quantity` is zero
pub fn set_grid_quantity(grid_quantity: U256) -> Result<GridCall> {
    Ok(GridCall::SetGridQuantity(positive(grid_quantity)?))
}

/// Builds a `setGridStep` call
///
/// # Errors
/// * `InvalidGridParameter` - If `grid_step` is zero
pub fn set_grid_step(grid_step: U256) -> Result<GridCall> {
    Ok(GridCall::SetGridStep(positive(grid_step)?))
}
