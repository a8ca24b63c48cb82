#![no_main]

use arbitrary::Arbitrary;
use grid_math::constants::{MAX_TICK, MIN_TICK};
use grid_math::math::{get_sqrt_ratio_at_tick, get_tick_at_sqrt_ratio};
use grid_math::{nearest_usable_tick, price_to_tick, tick_to_price, Token};
use libfuzzer_sys::fuzz_target;
use primitive_types::H160;

#[derive(Arbitrary, Debug)]
struct TickPriceInput {
    tick: i32,
    tick_spacing: u16,
    decimals0: u8,
    decimals1: u8,
}

// Tick and price conversions must stay inside the tick range and agree with
// each other for every tick, spacing and decimals pair.
fuzz_target!(|input: TickPriceInput| {
    let tick = input.tick.clamp(MIN_TICK, MAX_TICK);
    let tick_spacing = i32::from(input.tick_spacing.max(1));

    let sqrt_price = get_sqrt_ratio_at_tick(tick).unwrap();
    assert_eq!(get_tick_at_sqrt_ratio(sqrt_price).unwrap(), tick);

    let usable = nearest_usable_tick(tick, tick_spacing).unwrap();
    assert_eq!(usable % tick_spacing, 0);
    assert!((MIN_TICK..=MAX_TICK).contains(&usable));

    let decimals0 = input.decimals0 % 78;
    let decimals1 = input.decimals1 % 78;
    let prices = match tick_to_price(tick, decimals0, decimals1) {
        Ok(prices) => prices,
        Err(_) => return,
    };
    let token0 = Token::new(H160::from_low_u64_be(1), decimals0);
    let token1 = Token::new(H160::from_low_u64_be(2), decimals1);
    if let Ok(from_price) = price_to_tick(&token0, &token1, prices.price_of_0_in_1, tick_spacing) {
        assert_eq!(from_price % tick_spacing, 0);
        assert!((MIN_TICK..=MAX_TICK).contains(&from_price));
    }
});
