//! Raw <-> human token amount conversion.
//!
//! Raw amounts are exact `U256` integers in the token's smallest unit. Human
//! amounts are decimal strings or `f64` values for display. Every conversion
//! toward raw units floors, and every conversion toward `f64` never lands above
//! the exact value, so neither direction overstates a balance.

use crate::constants::MAX_DECIMALS;
use crate::errors::{MathError, Result};
use primitive_types::U256;

fn scale(decimals: u8) -> Result<U256> {
    if decimals > MAX_DECIMALS {
        return Err(MathError::InvalidDecimals);
    }
    Ok(U256::exp10(usize::from(decimals)))
}

/// Renders a raw amount as an exact decimal string
///
/// Trailing fractional zeros are dropped and whole amounts have no decimal
/// point, e.g. `1500000` with 6 decimals renders as `"1.5"`.
///
/// # Errors
/// * `InvalidDecimals` - If `decimals` exceeds 77
pub fn format_units(amount: U256, decimals: u8) -> Result<String> {
    let (integer, fraction) = amount.div_mod(scale(decimals)?);
    if fraction.is_zero() {
        return Ok(integer.to_string());
    }
    let padded = format!(
        "{:0>width$}",
        fraction.to_string(),
        width = usize::from(decimals)
    );
    Ok(format!("{}.{}", integer, padded.trim_end_matches('0')))
}

/// Parses a decimal string into a raw amount, truncating extra fractional digits
///
/// Accepts `digits[.digits]` with an optional leading `+`. Digits past
/// `decimals` are dropped, never rounded up.
///
/// # Errors
/// * `NegativeAmount` - If the string starts with `-`
/// * `InvalidAmount` - If the string is not a plain decimal number
/// * `AmountOverflow` - If the scaled amount does not fit in 256 bits
pub fn parse_units(value: &str, decimals: u8) -> Result<U256> {
    let scale = scale(decimals)?;
    let value = value.trim();
    if value.starts_with('-') {
        return Err(MathError::NegativeAmount);
    }
    let value = value.strip_prefix('+').unwrap_or(value);

    let (integer, fraction) = value.split_once('.').unwrap_or((value, ""));
    if integer.is_empty() && fraction.is_empty() {
        return Err(MathError::InvalidAmount);
    }
    let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !is_digits(integer) || !is_digits(fraction) {
        return Err(MathError::InvalidAmount);
    }

    let kept = &fraction[..fraction.len().min(usize::from(decimals))];
    let integer = if integer.is_empty() {
        U256::zero()
    } else {
        U256::from_dec_str(integer).map_err(|_| MathError::AmountOverflow)?
    };
    let fraction = if kept.is_empty() {
        U256::zero()
    } else {
        // kept has at most `decimals` digits, so this stays below `scale`
        U256::from_dec_str(kept).map_err(|_| MathError::AmountOverflow)?
            * U256::exp10(usize::from(decimals) - kept.len())
    };

    integer
        .checked_mul(scale)
        .and_then(|whole| whole.checked_add(fraction))
        .ok_or(MathError::AmountOverflow)
}

/// Converts a raw token amount to a human-readable number
///
/// The exact quotient `amount / 10^decimals` is rendered with at most
/// `decimals` fractional digits and parsed to the nearest `f64`. If that float
/// would read back as more than `amount`, it is stepped down until it does not,
/// so `to_raw_token_amount(from_raw_token_amount(a, d)?, d)? <= a` always holds.
///
/// # Arguments
/// * `amount` - The raw amount in the token's smallest unit
/// * `decimals` - The token's decimals
///
/// # Returns
/// * `Result<f64>` - The display amount
///
/// # Example
/// ```
/// use grid_math::utils::token_amount::from_raw_token_amount;
/// use primitive_types::U256;
///
/// assert_eq!(from_raw_token_amount(U256::from(1_500_000u64), 6).unwrap(), 1.5);
/// ```
pub fn from_raw_token_amount(amount: U256, decimals: u8) -> Result<f64> {
    let rendered = format_units(amount, decimals)?;
    let mut value: f64 = rendered.parse().map_err(|_| MathError::InvalidAmount)?;

    while value > 0.0 {
        match to_raw_token_amount(value, decimals) {
            Ok(raw) if raw <= amount => break,
            // the nearest float to a value close to U256::MAX can round past it
            Ok(_) | Err(MathError::AmountOverflow) => {
                value = f64::from_bits(value.to_bits() - 1);
            }
            Err(error) => return Err(error),
        }
    }
    Ok(value)
}

/// Converts a human-readable number to a raw token amount, rounding down
///
/// The float is read through its shortest round-trip decimal form, which is
/// what the user typed for any value with up to 15 significant digits, so
/// `1.1` with 6 decimals gives `1100000` rather than `1099999`.
///
/// # Arguments
/// * `amount` - The display amount, finite and non-negative
/// * `decimals` - The token's decimals
///
/// # Returns
/// * `Result<U256>` - `floor(amount * 10^decimals)`
///
/// # Errors
/// * `NegativeAmount` - If `amount < 0`
/// * `InvalidAmount` - If `amount` is NaN or infinite
/// * `AmountOverflow` - If the result does not fit in 256 bits
pub fn to_raw_token_amount(amount: f64, decimals: u8) -> Result<U256> {
    if !amount.is_finite() {
        return Err(MathError::InvalidAmount);
    }
    if amount < 0.0 {
        return Err(MathError::NegativeAmount);
    }
    // abs() drops the sign of -0.0
    parse_units(&amount.abs().to_string(), decimals)
}
