//! Forecast Distribution Moments
//!
//! Closed-form first two moments of the GBM marginal distribution at
//! horizon t, given an anchor price S0 and estimated parameters:
//!
//! - E[S_t]   = S0·exp(μt)
//! - Var[S_t] = S0²·exp(2μt)·(exp(σ²t) - 1)
//!
//! S_t/S0 is lognormal, so both moments exist in closed form for any t ≥ 0.
//! The horizon is expressed in the same time unit as one log-return step and
//! is meant for short projections (single-digit numbers of bars); for large
//! μt or σ²t the exponentials leave the f64 range and the functions fail
//! with an overflow error rather than returning infinity.
//!
//! Reference: Ross, Sheldon M. (2014). "Variations on Brownian Motion".
//! Introduction to Probability Models (11th ed.).

use serde::{Deserialize, Serialize};

use crate::error::GbmError;
use crate::estimator::GbmParameters;

/// Mean and variance of the forecast price at one horizon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastMoments {
    /// Expected price E[S_t]
    pub mean: f64,
    /// Price variance Var[S_t]
    pub variance: f64,
}

/// Expected price at horizon t: S0·exp(μt)
///
/// Returns exactly `s0` at t = 0.
pub fn mean(params: &GbmParameters, s0: f64, t: f64) -> Result<f64, GbmError> {
    check_horizon(t)?;
    let value = s0 * (params.drift * t).exp();
    ensure_finite(value, "forecast mean", params, t)
}

/// Price variance at horizon t: S0²·exp(2μt)·(exp(σ²t) - 1)
///
/// Returns exactly 0 at t = 0 and is non-negative for all σ ≥ 0, t ≥ 0.
pub fn variance(params: &GbmParameters, s0: f64, t: f64) -> Result<f64, GbmError> {
    check_horizon(t)?;
    let sigma_sq = params.volatility * params.volatility;
    let value = s0 * s0 * (2.0 * params.drift * t).exp() * ((sigma_sq * t).exp() - 1.0);
    ensure_finite(value, "forecast variance", params, t)
}

/// Both forecast moments at horizon t
pub fn moments(params: &GbmParameters, s0: f64, t: f64) -> Result<ForecastMoments, GbmError> {
    Ok(ForecastMoments {
        mean: mean(params, s0, t)?,
        variance: variance(params, s0, t)?,
    })
}

fn check_horizon(t: f64) -> Result<(), GbmError> {
    // `>= 0.0` is false for NaN, so a NaN horizon is rejected here too
    if t >= 0.0 {
        Ok(())
    } else {
        Err(GbmError::NegativeHorizon(t))
    }
}

fn ensure_finite(
    value: f64,
    context: &'static str,
    params: &GbmParameters,
    t: f64,
) -> Result<f64, GbmError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GbmError::NumericOverflow {
            context,
            drift: params.drift,
            volatility: params.volatility,
            horizon: t,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn test_params(drift: f64, volatility: f64) -> GbmParameters {
        GbmParameters {
            mean_log_return: drift - volatility * volatility / 2.0,
            volatility,
            drift,
            n: 257,
        }
    }

    #[test]
    fn test_zero_horizon_identity() {
        let params = test_params(0.1, 0.2);

        // exp(0) is exactly 1, so both identities hold bit-for-bit
        assert_eq!(mean(&params, 123.45, 0.0).unwrap(), 123.45);
        assert_eq!(variance(&params, 123.45, 0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_known_moments() {
        // S0 = 50, μ = 0.1, σ = 0.2, t = 2:
        // mean = 50·e^0.2, variance = 2500·e^0.4·(e^0.08 - 1)
        let params = test_params(0.1, 0.2);

        assert_relative_eq!(
            mean(&params, 50.0, 2.0).unwrap(),
            61.07013790800849,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            variance(&params, 50.0, 2.0).unwrap(),
            310.624261379058,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_zero_volatility_has_zero_variance() {
        let params = test_params(0.05, 0.0);

        assert_relative_eq!(
            mean(&params, 100.0, 5.0).unwrap(),
            100.0 * (0.25f64).exp(),
            epsilon = 1e-12
        );
        assert_eq!(variance(&params, 100.0, 5.0).unwrap(), 0.0);
    }

    #[test]
    fn test_variance_non_negative() {
        let params = test_params(-0.3, 0.4);
        for t in [0.0, 0.5, 1.0, 5.0, 20.0] {
            assert!(variance(&params, 75.0, t).unwrap() >= 0.0);
        }
    }

    #[test]
    fn test_negative_horizon_rejected() {
        let params = test_params(0.1, 0.2);
        assert_eq!(
            mean(&params, 100.0, -1.0),
            Err(GbmError::NegativeHorizon(-1.0))
        );
        assert_eq!(
            variance(&params, 100.0, -0.5),
            Err(GbmError::NegativeHorizon(-0.5))
        );
    }

    #[test]
    fn test_overflow_reported_not_returned() {
        // μt = 10⁶ drives exp far past the f64 range
        let params = test_params(1000.0, 1.0);

        let err = mean(&params, 100.0, 1000.0).unwrap_err();
        assert!(err.is_overflow());

        let err = variance(&params, 100.0, 1000.0).unwrap_err();
        assert!(err.is_overflow());
    }

    #[test]
    fn test_moments_bundles_both() {
        let params = test_params(0.1, 0.2);
        let both = moments(&params, 50.0, 2.0).unwrap();

        assert_eq!(both.mean, mean(&params, 50.0, 2.0).unwrap());
        assert_eq!(both.variance, variance(&params, 50.0, 2.0).unwrap());
    }
}
