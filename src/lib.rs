//! gbm-forecast - Rolling GBM Estimation and Quantile Forecasting
//!
//! Estimates the parameters of a Geometric Brownian Motion price model
//! (dS = μSdt + σSdW) from a sliding window of prices, then derives the
//! forecast distribution of the price at a forward horizon and a
//! quantile-based threshold such as a stop-loss level.
//!
//! # Modules
//!
//! - `window`: Price window validation and log-return extraction
//! - `estimator`: Closed-form drift/volatility estimation (m, σ, μ)
//! - `forecast`: Lognormal forecast moments E[S_t], Var[S_t]
//! - `quantile`: p-quantile of S_t/S0 via the inverse normal CDF
//! - `evaluator`: One-shot orchestration of a full evaluation
//! - `indicator`: Rolling per-bar adapter with a minimum period
//! - `config`: Options, defaults, validation and TOML loading
//! - `error`: Fail-fast error taxonomy
//!
//! The core is pure and stateless: each evaluation is a function of the
//! supplied window, horizon and probability alone, so evaluations can run
//! in parallel across instruments or time steps with no coordination.

pub mod config;
pub mod error;
pub mod estimator;
pub mod evaluator;
pub mod forecast;
pub mod indicator;
pub mod quantile;
pub mod window;

pub use config::{load_config, ConfigError, IndicatorConfig};
pub use error::GbmError;
pub use estimator::{estimate, GbmParameters};
pub use evaluator::{evaluate, Anchor, Evaluation};
pub use forecast::ForecastMoments;
pub use indicator::GbmIndicator;
pub use quantile::{probit, quantile};
pub use window::log_returns;
