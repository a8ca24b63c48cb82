/// Token Approval Instruction Module
///
/// Builds the ERC-20 `approve` call that lets a grid pull a deposit.
use super::GridCall;
use crate::errors::Result;
use crate::types::TokenMetadata;
use grid_math::to_raw_token_amount;
use primitive_types::H160;

/// Builds an `approve(spender, amount)` call on `token`
///
/// # Errors
/// * `NegativeAmount`, `InvalidAmount` - On bad amounts
pub fn handler(token: &TokenMetadata, spender: H160, amount: f64) -> Result<GridCall> {
    Ok(GridCall::Approve {
        token: token.address,
        spender,
        amount: to_raw_token_amount(amount, token.decimals)?,
    })
}
