/// Grid Math Protocol Constants
///
/// These mirror the deployed Uniswap V3 contracts the console reads from. Every
/// displayed price or amount is derived through them, so they must match the
/// on-chain TickMath and SqrtPriceMath libraries exactly.
use primitive_types::U256;

/// The minimum tick index supported by the pool
///
/// At this tick the price is approximately 2.94e-39.
pub const MIN_TICK: i32 = -887272;

/// The maximum tick index supported by the pool
///
/// At this tick the price is approximately 3.40e38.
pub const MAX_TICK: i32 = 887272;

/// Number of fractional bits in a Q64.96 sqrt price
pub const RESOLUTION: usize = 96;

/// 2^96, the scale of `sqrtPriceX96`
pub const Q96: U256 = U256([0, 1 << 32, 0, 0]);

/// The sqrt ratio at MIN_TICK in Q64.96, equal to `getSqrtRatioAtTick(MIN_TICK)`
pub const MIN_SQRT_RATIO: U256 = U256([4295128739, 0, 0, 0]);

/// The sqrt ratio at MAX_TICK in Q64.96, equal to `getSqrtRatioAtTick(MAX_TICK)`
///
/// 1461446703485210103287273052203988822378723970342
pub const MAX_SQRT_RATIO: U256 = U256([0x5d951d5263988d26, 0xefd1fc6a50648849, 0xfffd8963, 0]);

/// Tick base: price = 1.0001^tick
pub const TICK_BASE: f64 = 1.0001;

/// Ticks whose floating-point estimate lands within this distance of an integer
/// are treated as that integer. Keeps exact tick prices from flooring one tick low.
pub const TICK_ROUNDING_EPSILON: f64 = 1e-6;

/// Decimals assumed when a token's `decimals()` is not known
pub const DEFAULT_DECIMALS: u8 = 18;

/// Largest decimals count whose scale 10^decimals fits in a U256
pub const MAX_DECIMALS: u8 = 77;

/// Standard Uniswap V3 fee tiers (hundredths of a basis point)
///
/// Lowest fee tier (0.01%), used for stable pairs.
pub const FEE_TIER_LOWEST: u32 = 100;

/// Low fee tier (0.05%)
pub const FEE_TIER_LOW: u32 = 500;

/// Medium fee tier (0.3%)
pub const FEE_TIER_MEDIUM: u32 = 3000;

/// High fee tier (1%)
pub const FEE_TIER_HIGH: u32 = 10000;

/// Tick spacing per fee tier
pub const TICK_SPACING_LOWEST: i32 = 1;
pub const TICK_SPACING_LOW: i32 = 10;
pub const TICK_SPACING_MEDIUM: i32 = 60;
pub const TICK_SPACING_HIGH: i32 = 200;

/// Returns the tick spacing the Uniswap V3 factory enables for a fee tier.
pub fn tick_spacing_for_fee(fee: u32) -> Option<i32> {
    match fee {
        FEE_TIER_LOWEST => Some(TICK_SPACING_LOWEST),
        FEE_TIER_LOW => Some(TICK_SPACING_LOW),
        FEE_TIER_MEDIUM => Some(TICK_SPACING_MEDIUM),
        FEE_TIER_HIGH => Some(TICK_SPACING_HIGH),
        _ => None,
    }
}
