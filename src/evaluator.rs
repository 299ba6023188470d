//! Evaluation Orchestrator
//!
//! One evaluation takes a price window, a holding horizon and a quantile
//! probability, runs the estimator once and derives the forecast moments and
//! the quantile threshold from the result. Every call is an independent pure
//! function: nothing is cached or carried across evaluations, so identical
//! inputs yield bit-identical outputs and distinct evaluations may run in
//! parallel without coordination.

use serde::{Deserialize, Serialize};

use crate::error::GbmError;
use crate::estimator::{self, GbmParameters};
use crate::forecast::{self, ForecastMoments};
use crate::quantile;

/// Which window element anchors the forecast as S0
///
/// `Oldest` projects from the start of the estimation window even though
/// the horizon is measured in bars ahead of the newest one; `MostRecent`
/// projects from the current price. The choice is a caller decision, not a
/// hard-coded constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    /// Oldest price in the window
    #[default]
    Oldest,
    /// Most recent price in the window
    MostRecent,
}

/// Output record of a single evaluation
///
/// Carries the four published scalars (m, σ, μ and the stop-loss threshold)
/// together with the anchor used and the forecast moments at the horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Estimated GBM parameters (m, σ, μ, n)
    pub params: GbmParameters,
    /// Anchor price S0 drawn from the window
    pub anchor_price: f64,
    /// Forecast mean and variance of the price at the horizon
    pub forecast: ForecastMoments,
    /// p-quantile of the ratio S_t/S0
    pub quantile: f64,
    /// Absolute threshold: anchor_price · quantile
    pub stop_loss: f64,
}

/// Run one full evaluation of a price window
///
/// Invokes the estimator, then the forecaster and quantile solver with the
/// anchor price selected by `anchor`. Failures from the sub-components
/// propagate unchanged; no additional validation or recovery happens here.
pub fn evaluate(
    window: &[f64],
    holding_period: f64,
    probability: f64,
    anchor: Anchor,
) -> Result<Evaluation, GbmError> {
    let params = estimator::estimate(window)?;

    // `estimate` guarantees a non-empty window
    let anchor_price = match anchor {
        Anchor::Oldest => window[0],
        Anchor::MostRecent => window[window.len() - 1],
    };

    let forecast = forecast::moments(&params, anchor_price, holding_period)?;
    let ratio = quantile::quantile(&params, probability, holding_period)?;

    tracing::trace!(
        n = params.n,
        volatility = params.volatility,
        drift = params.drift,
        quantile = ratio,
        "gbm evaluation"
    );

    Ok(Evaluation {
        params,
        anchor_price,
        forecast,
        quantile: ratio,
        stop_loss: anchor_price * ratio,
    })
}
