/// Display-side conversions for the grid console
///
/// Tick/price conversions and raw/human token amount rebasing. Both sit on top
/// of the exact integer math in `crate::math`.
pub mod price_range;
pub mod token_amount;

pub use price_range::{
    nearest_usable_tick, price_to_tick, sqrt_price_x96_to_price, tick_to_price, PricePair,
    PriceRange, PriceRangePreset,
};
pub use token_amount::{format_units, from_raw_token_amount, parse_units, to_raw_token_amount};
