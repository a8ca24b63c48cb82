use crate::constants::*;
use crate::errors::MathError;
use crate::math::*;
use primitive_types::U256;

#[cfg(test)]
mod math_tests {
    use super::*;

    /// Sqrt ratios produced by the contract's `TickMath.getSqrtRatioAtTick`
    ///
    /// Each entry pairs a tick with the exact Q64.96 value the contract returns,
    /// covering both signs, single bits, multi-bit ticks and the range bounds.
    struct TickFixture {
        cases: Vec<(i32, &'static str)>,
    }

    impl TickFixture {
        fn new() -> Self {
            Self {
                cases: vec![
                    (MIN_TICK, "4295128739"),
                    (-200_000, "3598751819609688046946419"),
                    (-100, "78833030112140176575862854579"),
                    (-60, "78990846045029531151608375686"),
                    (-1, "79224201403219477170569942574"),
                    (0, "79228162514264337593543950336"),
                    (1, "79232123823359799118286999568"),
                    (60, "79466191966197645195421774833"),
                    (100, "79625275426524748796330556128"),
                    (200_000, "1744244129640337381386292603617838"),
                    (
                        MAX_TICK,
                        "1461446703485210103287273052203988822378723970342",
                    ),
                ],
            }
        }
    }

    fn u256(value: &str) -> U256 {
        U256::from_dec_str(value).unwrap()
    }

    #[test]
    fn test_mul_div_floor_and_ceil() {
        let a = U256::from(10u8);
        let b = U256::from(10u8);
        let d = U256::from(3u8);
        assert_eq!(mul_div(a, b, d).unwrap(), U256::from(33u8));
        assert_eq!(mul_div_rounding_up(a, b, d).unwrap(), U256::from(34u8));

        // exact division is not bumped
        assert_eq!(
            mul_div_rounding_up(a, b, U256::from(4u8)).unwrap(),
            U256::from(25u8)
        );
    }

    #[test]
    fn test_mul_div_keeps_full_precision() {
        // (2^255 * 4) / 8 overflows a 256-bit product but fits the result
        let a = U256::one() << 255;
        let result = mul_div(a, U256::from(4u8), U256::from(8u8)).unwrap();
        assert_eq!(result, U256::one() << 254);

        let result = mul_div(U256::MAX, U256::MAX, U256::MAX).unwrap();
        assert_eq!(result, U256::MAX);
    }

    #[test]
    fn test_mul_div_errors() {
        assert_eq!(
            mul_div(U256::one(), U256::one(), U256::zero()),
            Err(MathError::DivisionByZero)
        );
        assert_eq!(
            mul_div(U256::MAX, U256::from(2u8), U256::one()),
            Err(MathError::Overflow)
        );
        assert_eq!(
            mul_div_rounding_up(U256::MAX, U256::MAX, U256::MAX - 1),
            Err(MathError::Overflow)
        );
        assert_eq!(
            div_rounding_up(U256::one(), U256::zero()),
            Err(MathError::DivisionByZero)
        );
    }

    #[test]
    fn test_div_rounding_up() {
        assert_eq!(
            div_rounding_up(U256::from(7u8), U256::from(2u8)).unwrap(),
            U256::from(4u8)
        );
        assert_eq!(
            div_rounding_up(U256::from(8u8), U256::from(2u8)).unwrap(),
            U256::from(4u8)
        );
        assert_eq!(
            div_rounding_up(U256::MAX, U256::one()).unwrap(),
            U256::MAX
        );
    }

    #[test]
    fn test_u256_to_f64() {
        assert_eq!(u256_to_f64(U256::zero()), 0.0);
        assert_eq!(u256_to_f64(Q96), 2f64.powi(96));
        assert_eq!(u256_to_f64(U256::one() << 200), 2f64.powi(200));

        let max = u256_to_f64(U256::MAX);
        assert!((max / 2f64.powi(256) - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_sqrt_ratio_matches_contract() {
        let fixture = TickFixture::new();
        for (tick, expected) in fixture.cases {
            assert_eq!(
                get_sqrt_ratio_at_tick(tick).unwrap(),
                u256(expected),
                "tick {}",
                tick
            );
        }
    }

    #[test]
    fn test_sqrt_ratio_bounds_match_constants() {
        assert_eq!(get_sqrt_ratio_at_tick(MIN_TICK).unwrap(), MIN_SQRT_RATIO);
        assert_eq!(get_sqrt_ratio_at_tick(MAX_TICK).unwrap(), MAX_SQRT_RATIO);
        assert_eq!(get_sqrt_ratio_at_tick(0).unwrap(), Q96);
    }

    #[test]
    fn test_sqrt_ratio_rejects_out_of_range_ticks() {
        assert_eq!(
            get_sqrt_ratio_at_tick(MIN_TICK - 1),
            Err(MathError::TickOutOfBounds)
        );
        assert_eq!(
            get_sqrt_ratio_at_tick(MAX_TICK + 1),
            Err(MathError::TickOutOfBounds)
        );
    }

    #[test]
    fn test_tick_at_sqrt_ratio_inverts_fixture() {
        let fixture = TickFixture::new();
        for (tick, expected) in fixture.cases {
            if tick == MAX_TICK {
                continue;
            }
            assert_eq!(get_tick_at_sqrt_ratio(u256(expected)).unwrap(), tick);
        }
    }

    #[test]
    fn test_tick_at_sqrt_ratio_floors_between_ticks() {
        let at_60 = get_sqrt_ratio_at_tick(60).unwrap();
        let at_61 = get_sqrt_ratio_at_tick(61).unwrap();
        assert_eq!(get_tick_at_sqrt_ratio(at_60 + 1).unwrap(), 60);
        assert_eq!(get_tick_at_sqrt_ratio(at_61 - 1).unwrap(), 60);
        assert_eq!(get_tick_at_sqrt_ratio(MAX_SQRT_RATIO - 1).unwrap(), MAX_TICK - 1);
    }

    #[test]
    fn test_tick_at_sqrt_ratio_rejects_out_of_range() {
        assert_eq!(
            get_tick_at_sqrt_ratio(MIN_SQRT_RATIO - 1),
            Err(MathError::InvalidSqrtPrice)
        );
        assert_eq!(
            get_tick_at_sqrt_ratio(MAX_SQRT_RATIO),
            Err(MathError::InvalidSqrtPrice)
        );
    }

    #[test]
    fn test_amount_deltas_symmetric_range() {
        let lower = get_sqrt_ratio_at_tick(-60).unwrap();
        let upper = get_sqrt_ratio_at_tick(60).unwrap();
        let liquidity = 1_000_000_000_000_000_000u128;

        assert_eq!(
            get_amount_0_delta(lower, upper, liquidity, true).unwrap(),
            U256::from(5_999_709_018_652_707u64)
        );
        assert_eq!(
            get_amount_1_delta(lower, upper, liquidity, true).unwrap(),
            U256::from(5_999_709_018_652_707u64)
        );
        assert_eq!(
            get_amount_0_delta(lower, upper, liquidity, false).unwrap(),
            U256::from(5_999_709_018_652_706u64)
        );
        assert_eq!(
            get_amount_1_delta(lower, upper, liquidity, false).unwrap(),
            U256::from(5_999_709_018_652_706u64)
        );
    }

    #[test]
    fn test_amount_deltas_one_sided_range() {
        let lower = get_sqrt_ratio_at_tick(0).unwrap();
        let upper = get_sqrt_ratio_at_tick(60).unwrap();
        let liquidity = 1_000_000_000_000_000_000u128;

        assert_eq!(
            get_amount_0_delta(lower, upper, liquidity, true).unwrap(),
            U256::from(2_995_354_955_910_781u64)
        );
        assert_eq!(
            get_amount_1_delta(lower, upper, liquidity, true).unwrap(),
            U256::from(3_004_354_062_741_926u64)
        );
    }

    #[test]
    fn test_amount_deltas_empty_range_is_zero() {
        let price = get_sqrt_ratio_at_tick(0).unwrap();
        assert!(get_amount_0_delta(price, price, u128::MAX, true)
            .unwrap()
            .is_zero());
        assert!(get_amount_1_delta(price, price, u128::MAX, true)
            .unwrap()
            .is_zero());
    }

    #[test]
    fn test_amount_deltas_reject_inverted_range() {
        let lower = get_sqrt_ratio_at_tick(-60).unwrap();
        let upper = get_sqrt_ratio_at_tick(60).unwrap();
        assert_eq!(
            get_amount_0_delta(upper, lower, 1, true),
            Err(MathError::InvalidPriceRange)
        );
        assert_eq!(
            get_amount_1_delta(upper, lower, 1, true),
            Err(MathError::InvalidPriceRange)
        );
        assert_eq!(
            get_amount_0_delta(U256::zero(), upper, 1, true),
            Err(MathError::InvalidSqrtPrice)
        );
    }

    #[test]
    fn test_full_range_max_liquidity_does_not_overflow() {
        let lower = get_sqrt_ratio_at_tick(MIN_TICK).unwrap();
        let upper = get_sqrt_ratio_at_tick(MAX_TICK).unwrap();
        let amount_0 = get_amount_0_delta(lower, upper, u128::MAX, true).unwrap();
        let amount_1 = get_amount_1_delta(lower, upper, u128::MAX, true).unwrap();
        assert!(amount_0 > U256::from(u128::MAX));
        assert!(amount_1 > U256::from(u128::MAX));
    }

    #[test]
    fn test_liquidity_for_amounts_inverts_deltas() {
        let lower = get_sqrt_ratio_at_tick(-100).unwrap();
        let upper = get_sqrt_ratio_at_tick(100).unwrap();
        let amount = U256::from(9_999_541_694u64);

        let liquidity_0 = get_liquidity_for_amount0(lower, upper, amount).unwrap();
        let liquidity_1 = get_liquidity_for_amount1(lower, upper, amount).unwrap();
        assert_eq!(liquidity_0, 1_000_000_000_019);
        assert_eq!(liquidity_1, 1_000_000_000_019);
    }

    #[test]
    fn test_liquidity_for_amounts_picks_limiting_token() {
        let lower = get_sqrt_ratio_at_tick(-60).unwrap();
        let upper = get_sqrt_ratio_at_tick(60).unwrap();
        let amount_0 = U256::from(1_000_000u64);
        let amount_1 = U256::from(1_000_000u64);

        // below the range only token 0 counts
        let below = get_liquidity_for_amounts(lower - 1, lower, upper, amount_0, U256::zero())
            .unwrap();
        assert_eq!(
            below,
            get_liquidity_for_amount0(lower, upper, amount_0).unwrap()
        );

        // above the range only token 1 counts
        let above = get_liquidity_for_amounts(upper, lower, upper, U256::zero(), amount_1)
            .unwrap();
        assert_eq!(
            above,
            get_liquidity_for_amount1(lower, upper, amount_1).unwrap()
        );

        // inside, the scarcer side limits
        let current = get_sqrt_ratio_at_tick(0).unwrap();
        let inside = get_liquidity_for_amounts(current, lower, upper, amount_0, U256::from(10u8))
            .unwrap();
        assert_eq!(
            inside,
            get_liquidity_for_amount1(lower, current, U256::from(10u8)).unwrap()
        );
    }

    #[test]
    fn test_liquidity_for_amount_overflows_u128() {
        let lower = get_sqrt_ratio_at_tick(0).unwrap();
        let upper = get_sqrt_ratio_at_tick(1).unwrap();
        assert_eq!(
            get_liquidity_for_amount1(lower, upper, U256::from(u128::MAX)),
            Err(MathError::Overflow)
        );
        assert_eq!(
            get_liquidity_for_amount0(upper, lower, U256::one()),
            Err(MathError::InvalidPriceRange)
        );
    }

    #[test]
    fn test_amounts_for_liquidity_split_at_price() {
        let lower = get_sqrt_ratio_at_tick(-60).unwrap();
        let upper = get_sqrt_ratio_at_tick(60).unwrap();
        let current = get_sqrt_ratio_at_tick(0).unwrap();
        let liquidity = 1_000_000_000_000_000_000u128;

        let (amount_0, amount_1) =
            get_amounts_for_liquidity(current, lower, upper, liquidity).unwrap();
        assert_eq!(amount_0, U256::from(2_995_354_955_910_780u64));
        assert_eq!(amount_1, U256::from(2_995_354_955_910_780u64));

        let (amount_0, amount_1) =
            get_amounts_for_liquidity(lower, lower, upper, liquidity).unwrap();
        assert_eq!(amount_0, U256::from(5_999_709_018_652_706u64));
        assert!(amount_1.is_zero());

        let (amount_0, amount_1) =
            get_amounts_for_liquidity(upper, lower, upper, liquidity).unwrap();
        assert!(amount_0.is_zero());
        assert_eq!(amount_1, U256::from(5_999_709_018_652_706u64));
    }

    #[test]
    fn test_tick_spacing_for_fee() {
        assert_eq!(tick_spacing_for_fee(FEE_TIER_LOWEST), Some(TICK_SPACING_LOWEST));
        assert_eq!(tick_spacing_for_fee(FEE_TIER_LOW), Some(TICK_SPACING_LOW));
        assert_eq!(tick_spacing_for_fee(FEE_TIER_MEDIUM), Some(TICK_SPACING_MEDIUM));
        assert_eq!(tick_spacing_for_fee(FEE_TIER_HIGH), Some(TICK_SPACING_HIGH));
        assert_eq!(tick_spacing_for_fee(42), None);
    }
}
