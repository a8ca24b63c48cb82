use thiserror::Error;

/// Errors raised by the conversion functions.
///
/// All of them are caller errors or out-of-range inputs; nothing here is
/// transient, so none of them is worth retrying.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    #[error("Arithmetic overflow detected")]
    Overflow = 9000,

    #[error("Division by zero attempted")]
    DivisionByZero = 9001,

    #[error("Tick value outside valid range [-887272, 887272]")]
    TickOutOfBounds = 9002,

    #[error("Invalid tick range: tick_upper must be greater than tick_lower")]
    InvalidTickRange = 9003,

    #[error("Tick spacing must be a positive integer")]
    InvalidTickSpacing = 9004,

    #[error("Sqrt price outside [MIN_SQRT_RATIO, MAX_SQRT_RATIO)")]
    InvalidSqrtPrice = 9005,

    #[error("Invalid sqrt price range: lower > upper")]
    InvalidPriceRange = 9006,

    #[error("Price must be a finite positive number")]
    InvalidPrice = 9007,

    #[error("Computed price is not a finite positive number")]
    NonFinitePrice = 9008,

    #[error("Token amounts cannot be negative")]
    NegativeAmount = 9009,

    #[error("Token amount is not a valid decimal number")]
    InvalidAmount = 9010,

    #[error("Token amount does not fit in 256 bits")]
    AmountOverflow = 9011,

    #[error("Token decimals exceed the supported maximum of 77")]
    InvalidDecimals = 9012,
}

impl MathError {
    /// Numeric code, stable across releases.
    pub fn code(self) -> u32 {
        self as u32
    }
}

pub type Result<T, E = MathError> = std::result::Result<T, E>;
