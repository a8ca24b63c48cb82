/// Grid Math Fixed-Point Library
///
/// Exact integer arithmetic mirroring the Uniswap V3 `TickMath`, `SqrtPriceMath`,
/// `FullMath` and `LiquidityAmounts` libraries. Sqrt prices are Q64.96 values held
/// in `U256`; products are widened to `U512` so no intermediate ever truncates.
///
/// Nothing in this module touches floating point. Float conversions live in
/// `utils::price_range` and `utils::token_amount` and are display-only.
use crate::constants::*;
use crate::errors::{MathError, Result};
use primitive_types::{U256, U512};

/// sqrt(1.0001)^-(2^i) in Q128.128 for i = 0..19, the multipliers `getSqrtRatioAtTick`
/// applies for every set bit of |tick|. Index 0 is only used as the starting value.
const SQRT_POWERS: [u128; 20] = [
    0xfffcb933bd6fad37aa2d162d1a594001,
    0xfff97272373d413259a46990580e213a,
    0xfff2e50f5f656932ef12357cf3c7fdcc,
    0xffe5caca7e10e4e61c3624eaa0941cd0,
    0xffcb9843d60f6159c9db58835c926644,
    0xff973b41fa98c081472e6896dfb254c0,
    0xff2ea16466c96a3843ec78b326b52861,
    0xfe5dee046a99a2a811c461f1969c3053,
    0xfcbe86c7900a88aedcffc83b479aa3a4,
    0xf987a7253ac413176f2b074cf7815e54,
    0xf3392b0822b70005940c7a398e4b70f3,
    0xe7159475a2c29b7443b29c7fa6e889d9,
    0xd097f3bdfd2022b8845ad8f792aa5825,
    0xa9f746462d870fdf8a65dc1f90e061e5,
    0x70d869a156d2a1b890bb3df62baf32f7,
    0x31be135f97d08fd981231505542fcfa6,
    0x9aa508b5b7a84e1c677de54f3e99bc9,
    0x5d6af8dedb81196699c329225ee604,
    0x2216e584f5fa1ea926041bedfe98,
    0x48a170391f7dc42444e8fa2,
];

#[inline(always)]
fn widen(x: U256) -> U512 {
    U512([x.0[0], x.0[1], x.0[2], x.0[3], 0, 0, 0, 0])
}

#[inline(always)]
fn narrow(x: U512) -> Result<U256> {
    if x.bits() > 256 {
        return Err(MathError::Overflow);
    }
    Ok(U256([x.0[0], x.0[1], x.0[2], x.0[3]]))
}

/// Computes `floor(a * b / denominator)` with a full 512-bit intermediate product
///
/// # Arguments
/// * `a` - The multiplicand
/// * `b` - The multiplier
/// * `denominator` - The divisor
///
/// # Returns
/// * `Result<U256>` - The quotient, or `DivisionByZero` / `Overflow` if the
///   denominator is zero or the quotient does not fit in 256 bits
///
/// # Example
/// ```
/// use grid_math::math::mul_div;
/// use primitive_types::U256;
///
/// let result = mul_div(U256::from(10u8), U256::from(10u8), U256::from(3u8)).unwrap();
/// assert_eq!(result, U256::from(33u8));
/// ```
pub fn mul_div(a: U256, b: U256, denominator: U256) -> Result<U256> {
    if denominator.is_zero() {
        return Err(MathError::DivisionByZero);
    }
    let product = widen(a) * widen(b);
    narrow(product / widen(denominator))
}

/// Computes `ceil(a * b / denominator)` with a full 512-bit intermediate product
///
/// # Arguments
/// * `a` - The multiplicand
/// * `b` - The multiplier
/// * `denominator` - The divisor
///
/// # Returns
/// * `Result<U256>` - The quotient rounded up, or an error on zero divisor or overflow
pub fn mul_div_rounding_up(a: U256, b: U256, denominator: U256) -> Result<U256> {
    if denominator.is_zero() {
        return Err(MathError::DivisionByZero);
    }
    let product = widen(a) * widen(b);
    let (quotient, remainder) = product.div_mod(widen(denominator));
    let quotient = narrow(quotient)?;
    if remainder.is_zero() {
        Ok(quotient)
    } else {
        quotient.checked_add(U256::one()).ok_or(MathError::Overflow)
    }
}

/// Divides `a` by `b`, rounding any remainder up
///
/// # Arguments
/// * `a` - The dividend
/// * `b` - The divisor
///
/// # Returns
/// * `Result<U256>` - `ceil(a / b)`, or `DivisionByZero`
pub fn div_rounding_up(a: U256, b: U256) -> Result<U256> {
    if b.is_zero() {
        return Err(MathError::DivisionByZero);
    }
    let (quotient, remainder) = a.div_mod(b);
    if remainder.is_zero() {
        Ok(quotient)
    } else {
        // quotient < a whenever b > 1, and b == 1 never leaves a remainder
        Ok(quotient + U256::one())
    }
}

/// Converts a `U256` to the nearest representable `f64`
///
/// Keeps the top 128 significant bits and rescales by a power of two, which is
/// well inside f64's 53-bit mantissa. Display-only.
pub fn u256_to_f64(value: U256) -> f64 {
    let bits = value.bits();
    if bits <= 128 {
        return value.low_u128() as f64;
    }
    let shift = bits - 128;
    ((value >> shift).low_u128() as f64) * 2f64.powi(shift as i32)
}

/// Converts a tick index to its sqrt price in Q64.96 fixed-point format
///
/// Bit-for-bit identical to the contract's `TickMath.getSqrtRatioAtTick`:
/// sqrt(1.0001^tick) * 2^96, computed in Q128.128 from the precomputed
/// powers and rounded up on the final shift.
///
/// # Arguments
/// * `tick` - The tick index to convert
///
/// # Returns
/// * `Result<U256>` - The sqrt price in Q64.96 format, or `TickOutOfBounds`
///
/// # Example
/// ```
/// use grid_math::constants::Q96;
/// use grid_math::math::get_sqrt_ratio_at_tick;
///
/// assert_eq!(get_sqrt_ratio_at_tick(0).unwrap(), Q96);
/// ```
pub fn get_sqrt_ratio_at_tick(tick: i32) -> Result<U256> {
    if !(MIN_TICK..=MAX_TICK).contains(&tick) {
        return Err(MathError::TickOutOfBounds);
    }

    let abs_tick = tick.unsigned_abs();

    let mut ratio = if abs_tick & 0x1 != 0 {
        U256::from(SQRT_POWERS[0])
    } else {
        U256::one() << 128
    };

    // ratio <= 2^128 and every multiplier < 2^128, so the product fits in 256 bits
    for (bit, multiplier) in SQRT_POWERS.iter().enumerate().skip(1) {
        if abs_tick & (1u32 << bit) != 0 {
            ratio = (ratio * U256::from(*multiplier)) >> 128;
        }
    }

    if tick > 0 {
        ratio = U256::MAX / ratio;
    }

    // Q128.128 -> Q64.96, rounding up so get_tick_at_sqrt_ratio is consistent
    let round_up = if ratio.low_u32() == 0 {
        U256::zero()
    } else {
        U256::one()
    };
    Ok((ratio >> 32) + round_up)
}

/// Converts a Q64.96 sqrt price to the greatest tick whose sqrt ratio does not exceed it
///
/// # Arguments
/// * `sqrt_price_x96` - The sqrt price to convert, in [MIN_SQRT_RATIO, MAX_SQRT_RATIO)
///
/// # Returns
/// * `Result<i32>` - The tick index, or `InvalidSqrtPrice` for out-of-range input
pub fn get_tick_at_sqrt_ratio(sqrt_price_x96: U256) -> Result<i32> {
    if sqrt_price_x96 < MIN_SQRT_RATIO || sqrt_price_x96 >= MAX_SQRT_RATIO {
        return Err(MathError::InvalidSqrtPrice);
    }

    // Largest tick t with get_sqrt_ratio_at_tick(t) <= sqrt_price_x96
    let mut low = MIN_TICK;
    let mut high = MAX_TICK;
    while low < high {
        let mid = low + (high - low + 1) / 2;
        if get_sqrt_ratio_at_tick(mid)? <= sqrt_price_x96 {
            low = mid;
        } else {
            high = mid - 1;
        }
    }

    Ok(low)
}

/// Calculates the amount of token 0 between two sqrt prices for a given liquidity
///
/// Mirrors `SqrtPriceMath.getAmount0Delta`:
/// amount0 = L * 2^96 * (sqrt_upper - sqrt_lower) / sqrt_upper / sqrt_lower
///
/// # Arguments
/// * `sqrt_price_lower_x96` - The lower sqrt price bound in Q64.96 format
/// * `sqrt_price_upper_x96` - The upper sqrt price bound in Q64.96 format
/// * `liquidity` - The amount of liquidity
/// * `round_up` - Whether to round the result up
///
/// # Returns
/// * `Result<U256>` - The amount of token 0 in raw units
///
/// # Errors
/// * `InvalidPriceRange` - If the lower bound is above the upper bound
/// * `InvalidSqrtPrice` - If the lower bound is zero
pub fn get_amount_0_delta(
    sqrt_price_lower_x96: U256,
    sqrt_price_upper_x96: U256,
    liquidity: u128,
    round_up: bool,
) -> Result<U256> {
    if sqrt_price_lower_x96 > sqrt_price_upper_x96 {
        return Err(MathError::InvalidPriceRange);
    }
    if sqrt_price_lower_x96.is_zero() {
        return Err(MathError::InvalidSqrtPrice);
    }

    let numerator1 = U256::from(liquidity) << RESOLUTION;
    let numerator2 = sqrt_price_upper_x96 - sqrt_price_lower_x96;

    if round_up {
        div_rounding_up(
            mul_div_rounding_up(numerator1, numerator2, sqrt_price_upper_x96)?,
            sqrt_price_lower_x96,
        )
    } else {
        Ok(mul_div(numerator1, numerator2, sqrt_price_upper_x96)? / sqrt_price_lower_x96)
    }
}

/// Calculates the amount of token 1 between two sqrt prices for a given liquidity
///
/// Mirrors `SqrtPriceMath.getAmount1Delta`:
/// amount1 = L * (sqrt_upper - sqrt_lower) / 2^96
///
/// # Arguments
/// * `sqrt_price_lower_x96` - The lower sqrt price bound in Q64.96 format
/// * `sqrt_price_upper_x96` - The upper sqrt price bound in Q64.96 format
/// * `liquidity` - The amount of liquidity
/// * `round_up` - Whether to round the result up
///
/// # Returns
/// * `Result<U256>` - The amount of token 1 in raw units
pub fn get_amount_1_delta(
    sqrt_price_lower_x96: U256,
    sqrt_price_upper_x96: U256,
    liquidity: u128,
    round_up: bool,
) -> Result<U256> {
    if sqrt_price_lower_x96 > sqrt_price_upper_x96 {
        return Err(MathError::InvalidPriceRange);
    }

    let diff = sqrt_price_upper_x96 - sqrt_price_lower_x96;
    if round_up {
        mul_div_rounding_up(U256::from(liquidity), diff, Q96)
    } else {
        mul_div(U256::from(liquidity), diff, Q96)
    }
}

fn to_liquidity(value: U256) -> Result<u128> {
    if value > U256::from(u128::MAX) {
        return Err(MathError::Overflow);
    }
    Ok(value.low_u128())
}

/// Calculates the liquidity received for a given amount of token 0 over a price range
///
/// Mirrors `LiquidityAmounts.getLiquidityForAmount0`, rounding down.
///
/// # Arguments
/// * `sqrt_price_lower_x96` - The lower sqrt price bound in Q64.96 format
/// * `sqrt_price_upper_x96` - The upper sqrt price bound in Q64.96 format
/// * `amount_0` - The amount of token 0 in raw units
///
/// # Returns
/// * `Result<u128>` - The liquidity, or an error if the range is empty or inverted
pub fn get_liquidity_for_amount0(
    sqrt_price_lower_x96: U256,
    sqrt_price_upper_x96: U256,
    amount_0: U256,
) -> Result<u128> {
    if sqrt_price_lower_x96 >= sqrt_price_upper_x96 {
        return Err(MathError::InvalidPriceRange);
    }
    let intermediate = mul_div(sqrt_price_lower_x96, sqrt_price_upper_x96, Q96)?;
    to_liquidity(mul_div(
        amount_0,
        intermediate,
        sqrt_price_upper_x96 - sqrt_price_lower_x96,
    )?)
}

/// Calculates the liquidity received for a given amount of token 1 over a price range
///
/// Mirrors `LiquidityAmounts.getLiquidityForAmount1`, rounding down.
pub fn get_liquidity_for_amount1(
    sqrt_price_lower_x96: U256,
    sqrt_price_upper_x96: U256,
    amount_1: U256,
) -> Result<u128> {
    if sqrt_price_lower_x96 >= sqrt_price_upper_x96 {
        return Err(MathError::InvalidPriceRange);
    }
    to_liquidity(mul_div(
        amount_1,
        Q96,
        sqrt_price_upper_x96 - sqrt_price_lower_x96,
    )?)
}

/// Calculates the maximum liquidity that the given token amounts can back at the current price
///
/// # Arguments
/// * `sqrt_price_x96` - The current pool sqrt price
/// * `sqrt_price_lower_x96` - The lower bound of the position
/// * `sqrt_price_upper_x96` - The upper bound of the position
/// * `amount_0` - Available token 0 in raw units
/// * `amount_1` - Available token 1 in raw units
///
/// # Returns
/// * `Result<u128>` - The liquidity limited by whichever token runs out first
pub fn get_liquidity_for_amounts(
    sqrt_price_x96: U256,
    sqrt_price_lower_x96: U256,
    sqrt_price_upper_x96: U256,
    amount_0: U256,
    amount_1: U256,
) -> Result<u128> {
    if sqrt_price_lower_x96 >= sqrt_price_upper_x96 {
        return Err(MathError::InvalidPriceRange);
    }

    if sqrt_price_x96 <= sqrt_price_lower_x96 {
        get_liquidity_for_amount0(sqrt_price_lower_x96, sqrt_price_upper_x96, amount_0)
    } else if sqrt_price_x96 < sqrt_price_upper_x96 {
        let liquidity_0 =
            get_liquidity_for_amount0(sqrt_price_x96, sqrt_price_upper_x96, amount_0)?;
        let liquidity_1 =
            get_liquidity_for_amount1(sqrt_price_lower_x96, sqrt_price_x96, amount_1)?;
        Ok(liquidity_0.min(liquidity_1))
    } else {
        get_liquidity_for_amount1(sqrt_price_lower_x96, sqrt_price_upper_x96, amount_1)
    }
}

/// Splits a position's liquidity into token amounts at the current pool price
///
/// Below the range the position is all token 0, above it all token 1, and inside
/// it is split at the current price. Rounds down like `LiquidityAmounts.getAmountsForLiquidity`.
///
/// # Returns
/// * `Result<(U256, U256)>` - `(amount0, amount1)` in raw units
pub fn get_amounts_for_liquidity(
    sqrt_price_x96: U256,
    sqrt_price_lower_x96: U256,
    sqrt_price_upper_x96: U256,
    liquidity: u128,
) -> Result<(U256, U256)> {
    if sqrt_price_lower_x96 >= sqrt_price_upper_x96 {
        return Err(MathError::InvalidPriceRange);
    }

    if sqrt_price_x96 <= sqrt_price_lower_x96 {
        let amount_0 =
            get_amount_0_delta(sqrt_price_lower_x96, sqrt_price_upper_x96, liquidity, false)?;
        Ok((amount_0, U256::zero()))
    } else if sqrt_price_x96 < sqrt_price_upper_x96 {
        let amount_0 = get_amount_0_delta(sqrt_price_x96, sqrt_price_upper_x96, liquidity, false)?;
        let amount_1 = get_amount_1_delta(sqrt_price_lower_x96, sqrt_price_x96, liquidity, false)?;
        Ok((amount_0, amount_1))
    } else {
        let amount_1 =
            get_amount_1_delta(sqrt_price_lower_x96, sqrt_price_upper_x96, liquidity, false)?;
        Ok((U256::zero(), amount_1))
    }
}
