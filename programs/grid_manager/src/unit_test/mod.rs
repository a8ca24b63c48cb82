mod instructions_test;

use crate::types::{PoolInfo, PoolMetadata, TokenMetadata};
use primitive_types::H160;

/// A WETH/USDC style pool: token0 has 18 decimals, token1 has 6.
pub(crate) fn weth_usdc_pool() -> PoolInfo {
    PoolInfo {
        address: H160::from_low_u64_be(0xfeed),
        token0: TokenMetadata {
            address: H160::from_low_u64_be(0x0a),
            symbol: "WETH".to_string(),
            decimals: 18,
        },
        token1: TokenMetadata {
            address: H160::from_low_u64_be(0x0b),
            symbol: "USDC".to_string(),
            decimals: 6,
        },
        fee: 3000,
    }
}

/// Two 18-decimals tokens, so prices read directly as `1.0001^tick`.
pub(crate) fn even_pool(tick: i32) -> PoolMetadata {
    let mut pool = weth_usdc_pool();
    pool.token1.decimals = 18;
    pool.token1.symbol = "DAI".to_string();
    PoolMetadata { pool, tick }
}
