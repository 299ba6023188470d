//! Error Types
//!
//! Error handling for the estimation and forecasting core.
//!
//! All core functions fail fast: invalid inputs and non-representable
//! results are reported to the immediate caller, never clamped or
//! substituted. Whether to skip the evaluation, halt, or fall back is the
//! host's decision.

use thiserror::Error;

/// Errors that can occur during GBM estimation and forecasting
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GbmError {
    /// Price window shorter than the two observations needed for one return
    #[error("price window too short: {0} observations (minimum 2)")]
    WindowTooShort(usize),

    /// Price that cannot be log-transformed (zero, negative, NaN or infinite)
    #[error("price at index {index} must be a positive finite number, got {price}")]
    InvalidPrice { index: usize, price: f64 },

    /// Quantile probability outside the open interval (0, 1)
    #[error("quantile probability must lie strictly between 0 and 1, got {0}")]
    ProbabilityOutOfRange(f64),

    /// Negative forecast horizon
    #[error("forecast horizon must be non-negative, got {0}")]
    NegativeHorizon(f64),

    /// Zero or negative holding period for a quantile
    #[error("holding period must be strictly positive, got {0}")]
    NonPositiveHorizon(f64),

    /// Exponential term left the representable f64 range
    #[error("{context} overflowed the f64 range (drift {drift}, volatility {volatility}, horizon {horizon})")]
    NumericOverflow {
        context: &'static str,
        drift: f64,
        volatility: f64,
        horizon: f64,
    },
}

impl GbmError {
    /// Check if the error was caused by invalid caller input
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            GbmError::WindowTooShort(_)
                | GbmError::InvalidPrice { .. }
                | GbmError::ProbabilityOutOfRange(_)
                | GbmError::NegativeHorizon(_)
                | GbmError::NonPositiveHorizon(_)
        )
    }

    /// Check if the error was caused by a result outside the f64 range
    pub fn is_overflow(&self) -> bool {
        matches!(self, GbmError::NumericOverflow { .. })
    }
}
