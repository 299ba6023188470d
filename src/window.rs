//! Price Window Validation and Log-Return Extraction
//!
//! A price window is an ordered slice of strictly positive prices, oldest
//! first. The window is owned by the caller and read-only here; the derived
//! log-return series is freshly allocated on every call.

use crate::error::GbmError;

/// Minimum window length: one return needs two observations
pub const MIN_WINDOW_LEN: usize = 2;

/// Validate a price window: length and strictly positive finite prices
pub fn validate_window(window: &[f64]) -> Result<(), GbmError> {
    if window.len() < MIN_WINDOW_LEN {
        return Err(GbmError::WindowTooShort(window.len()));
    }
    for (index, &price) in window.iter().enumerate() {
        if !price.is_finite() || price <= 0.0 {
            return Err(GbmError::InvalidPrice { index, price });
        }
    }
    Ok(())
}

/// Extract the log-return series from a price window
///
/// Element `i` of the result is `ln(window[i+1]) - ln(window[i])`; the
/// output has one element fewer than the input.
pub fn log_returns(window: &[f64]) -> Result<Vec<f64>, GbmError> {
    validate_window(window)?;
    Ok(window
        .windows(2)
        .map(|pair| pair[1].ln() - pair[0].ln())
        .collect())
}
