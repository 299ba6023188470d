//! GBM Parameter Estimation
//!
//! Closed-form estimation of Geometric Brownian Motion parameters from a
//! window of prices. The GBM process follows: dS = μSdt + σSdW
//!
//! Estimation from log returns X_i = ln(S_{i+1}) - ln(S_i):
//! - m = mean(X), the estimate of E[ln(S_{t+1}/S_t)] = μ - σ²/2
//! - σ = population standard deviation of X (denominator = number of returns)
//! - μ = m + σ²/2, recovering the drift of the SDE via the Itô correction
//!
//! Reference: "Estimation of Geometric Brownian Motion Parameters for Oil
//! Price Analysis", C. Jakob et al.

use serde::{Deserialize, Serialize};

use crate::error::GbmError;
use crate::window::log_returns;

/// GBM parameters estimated from one price window
///
/// Immutable value object scoped to a single evaluation; identical windows
/// always produce identical parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GbmParameters {
    /// Mean log return (m)
    pub mean_log_return: f64,
    /// Population standard deviation of log returns (σ)
    pub volatility: f64,
    /// Itô-corrected drift: μ = m + σ²/2
    pub drift: f64,
    /// Window length the estimate was computed from
    pub n: usize,
}

/// Estimate GBM parameters from a price window
///
/// Requires at least two strictly positive prices, oldest first. A constant
/// window yields m = σ = μ = 0 exactly.
pub fn estimate(window: &[f64]) -> Result<GbmParameters, GbmError> {
    let returns = log_returns(window)?;
    let count = returns.len() as f64;

    let mean = returns.iter().sum::<f64>() / count;
    // Population variance: divide by the count of returns, not count - 1
    let variance = returns
        .iter()
        .map(|r| (r - mean).powi(2))
        .sum::<f64>()
        / count;

    Ok(GbmParameters {
        mean_log_return: mean,
        volatility: variance.sqrt(),
        drift: mean + variance / 2.0,
        n: window.len(),
    })
}
