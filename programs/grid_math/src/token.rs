/// Token value types consumed by the conversion functions.
///
/// Only the fields the math needs are carried: the address decides which side of
/// the pool a token is on, and decimals decide its human-readable scale.
use primitive_types::H160;
use serde::{Deserialize, Serialize};

/// One side of a pool, reduced to what price and amount conversions need.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    /// ERC-20 contract address
    pub address: H160,
    /// Value returned by the token's `decimals()`
    pub decimals: u8,
}

impl Token {
    pub const fn new(address: H160, decimals: u8) -> Self {
        Self { address, decimals }
    }

    /// True when this token is `token0` of a pool paired with `other`.
    ///
    /// Uniswap V3 orders pool tokens by ascending address.
    pub fn sorts_before(&self, other: &Token) -> bool {
        self.address < other.address
    }
}

/// Orders two tokens the way the pool factory does, returning `(token0, token1)`.
pub fn sort_tokens(a: Token, b: Token) -> (Token, Token) {
    if a.sorts_before(&b) {
        (a, b)
    } else {
        (b, a)
    }
}
