use crate::constants::DEFAULT_DECIMALS;
use serde::{Deserialize, Serialize};

/// Options for the conversion functions.
///
/// The console falls back to a fixed decimals count when a token's metadata has
/// not been fetched yet. Keeping that fallback here makes it explicit at every
/// call site instead of an implicit `?? 18`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConversionConfig {
    /// Decimals assumed for tokens whose `decimals()` is unknown
    pub default_decimals: u8,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            default_decimals: DEFAULT_DECIMALS,
        }
    }
}

impl ConversionConfig {
    /// Returns `decimals` when known, otherwise the configured default.
    pub fn decimals_or_default(&self, decimals: Option<u8>) -> u8 {
        decimals.unwrap_or(self.default_decimals)
    }
}
