/// View-model types shared by the console pages.
///
/// They mirror what the grid contracts and the pool return, with raw on-chain
/// integers kept as `U256`/`u128` and display values as `f64`.
use crate::errors::{ErrorCode, Result};
use grid_math::constants::tick_spacing_for_fee;
use grid_math::Token;
use primitive_types::{H160, U256};
use serde::{Deserialize, Serialize};

/// ERC-20 metadata as read from the token contract.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenMetadata {
    pub address: H160,
    pub symbol: String,
    pub decimals: u8,
}

impl TokenMetadata {
    /// The part of the metadata the conversion functions need.
    pub fn token(&self) -> Token {
        Token::new(self.address, self.decimals)
    }
}

/// A pool as reported by a grid's `getPoolInfo`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolInfo {
    pub address: H160,
    pub token0: TokenMetadata,
    pub token1: TokenMetadata,
    /// Fee tier in hundredths of a basis point (3000 = 0.3%)
    pub fee: u32,
}

impl PoolInfo {
    /// Tick spacing the factory assigns to this pool's fee tier.
    pub fn tick_spacing(&self) -> Result<i32> {
        tick_spacing_for_fee(self.fee).ok_or(ErrorCode::UnsupportedFeeTier(self.fee))
    }

    /// Fee tier as a percentage with two decimals, e.g. `"0.30"`.
    pub fn fee_percentage(&self) -> String {
        format!("{:.2}", f64::from(self.fee) / 10_000.0)
    }
}

/// A pool together with its current tick from `slot0`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolMetadata {
    pub pool: PoolInfo,
    pub tick: i32,
}

/// One position of a grid, as returned by `getActivePositions`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridPosition {
    pub token_id: U256,
    pub tick_lower: i32,
    pub tick_upper: i32,
    pub liquidity: u128,
    pub index: U256,
}

/// A grid position enriched for display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub grid_position: GridPosition,
    /// Display price at `tick_lower`
    pub price_lower: f64,
    /// Display price at `tick_upper`
    pub price_upper: f64,
    pub fees_token0: f64,
    pub fees_token1: f64,
    pub liquidity_token0: f64,
    pub liquidity_token1: f64,
}

/// Uncollected fees of a position in raw units, from a simulated `collect`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionFees {
    pub amount0: U256,
    pub amount1: U256,
}

/// Grid-wide settings and balances read from a grid position manager.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridState {
    pub token0_min_fees: U256,
    pub token1_min_fees: U256,
    pub token0_liquidity: U256,
    pub token1_liquidity: U256,
    pub is_in_range: bool,
    pub grid_step: U256,
    pub grid_quantity: U256,
}
