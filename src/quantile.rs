//! Quantile Solver
//!
//! p-quantile of the price ratio S_t/S0 under the fitted GBM. Under the
//! model, ln(S_t/S0) ~ N((μ - σ²/2)t, σ²t), so
//!
//! q(p, t) = exp((μ - σ²/2)·t + σ·√t·Φ⁻¹(p))
//!
//! where Φ⁻¹ is the standard normal inverse CDF. The caller multiplies
//! q(p, t) by the anchor price to obtain an absolute threshold, e.g. a
//! stop-loss level at a fixed forward holding horizon.

use statrs::function::erf::erf_inv;
use std::f64::consts::SQRT_2;

use crate::error::GbmError;
use crate::estimator::GbmParameters;

/// Standard normal inverse CDF (probit function)
///
/// Φ⁻¹(p) = √2·erf⁻¹(2p - 1) for p in (0, 1).
pub fn probit(p: f64) -> f64 {
    SQRT_2 * erf_inv(2.0 * p - 1.0)
}

/// p-quantile of S_t/S0 at horizon t under the fitted GBM
///
/// Requires p strictly inside (0, 1) and t > 0; neither is clamped. The
/// quantile is strictly increasing in p when σ > 0 and constant (equal to
/// exp(μ·t)) when σ = 0.
pub fn quantile(params: &GbmParameters, p: f64, t: f64) -> Result<f64, GbmError> {
    if !(p > 0.0 && p < 1.0) {
        return Err(GbmError::ProbabilityOutOfRange(p));
    }
    if !(t > 0.0) {
        return Err(GbmError::NonPositiveHorizon(t));
    }

    let location = (params.drift - params.volatility * params.volatility / 2.0) * t;
    let scale = params.volatility * t.sqrt();
    let value = (location + scale * probit(p)).exp();

    if value.is_finite() {
        Ok(value)
    } else {
        Err(GbmError::NumericOverflow {
            context: "quantile",
            drift: params.drift,
            volatility: params.volatility,
            horizon: t,
        })
    }
}
