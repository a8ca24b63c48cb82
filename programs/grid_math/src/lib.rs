//! Tick, price and liquidity conversions for Uniswap V3 style pools.
//!
//! Exact Q64.96 math for anything that must match the contract, `f64` for
//! anything that is only displayed. Every function is pure and synchronous.

pub mod config;
pub mod constants;
pub mod errors;
pub mod liquidity;
pub mod math;
pub mod token;
pub mod utils;

#[cfg(test)]
mod unit_test;


pub use config::ConversionConfig;
pub use errors::{MathError, Result};
pub use liquidity::{
    liquidity_to_raw_amounts, liquidity_to_token_amounts, liquidity_to_token_amounts_at_price,
    RawAmounts, TokenAmounts,
};
pub use token::{sort_tokens, Token};
pub use utils::{
    format_units, from_raw_token_amount, nearest_usable_tick, parse_units, price_to_tick,
    sqrt_price_x96_to_price, tick_to_price, to_raw_token_amount, PricePair, PriceRange,
    PriceRangePreset,
};
