use grid_math::MathError;
use primitive_types::U256;
use thiserror::Error;

/// Errors raised while validating console input or building contract calls.
///
/// Messages are the ones shown to the user, so they are phrased as instructions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorCode {
    #[error(transparent)]
    Math(#[from] MathError),

    #[error("Please select a valid token pair.")]
    InvalidTokenPair,

    #[error("No pool found for the selected tokens.")]
    PoolNotFound,

    #[error("Please provide a valid price range.")]
    MissingPriceRange,

    #[error("Grid size must be greater than 0.")]
    InvalidGridSize,

    #[error("Price lower must be less than price upper.")]
    InvalidPriceOrder,

    #[error("Price range is too small for the grid size.")]
    PriceRangeTooSmall,

    #[error("Grid quantity and grid step must be greater than 0.")]
    InvalidGridParameter,

    #[error("Slippage must be a non-negative percentage.")]
    InvalidSlippage,

    #[error("Slippage cannot exceed 500 basis points (max 5%)")]
    SlippageTooHigh,

    #[error("Select a Position, Buy, Neutral or Sell")]
    InvalidGridType(u8),

    #[error("Select a Distribution Type")]
    InvalidDistributionType(u8),

    #[error("Position not found.")]
    PositionNotFound(U256),

    #[error("Unsupported fee tier {0}")]
    UnsupportedFeeTier(u32),

    #[error("No deployment contracts configured for chain {0}")]
    UnknownChain(u64),

    #[error("Invalid console configuration: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for ErrorCode {
    fn from(error: serde_json::Error) -> Self {
        ErrorCode::InvalidConfig(error.to_string())
    }
}

pub type Result<T, E = ErrorCode> = std::result::Result<T, E>;
