//! Rolling GBM Indicator
//!
//! Host-side adapter that turns a stream of per-bar prices into one
//! evaluation per bar. It owns only the sliding price window; every ready
//! bar triggers a full recompute of the materialized window through the
//! pure core, and no estimator state survives between evaluations.
//!
//! `update` returns `Ok(None)` until `size` observations have been seen
//! (the minimum period), then one output record per call, in call order.

use std::collections::VecDeque;

use crate::config::{ConfigError, IndicatorConfig};
use crate::error::GbmError;
use crate::evaluator::{self, Evaluation};

/// Rolling per-bar evaluator over a sliding price window
#[derive(Debug, Clone)]
pub struct GbmIndicator {
    config: IndicatorConfig,
    window: VecDeque<f64>,
}

impl GbmIndicator {
    /// Create a new indicator from a validated configuration
    pub fn new(config: IndicatorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let capacity = config.size + 1;
        Ok(Self {
            config,
            window: VecDeque::with_capacity(capacity),
        })
    }

    /// Push a new price and evaluate the current window if it is full
    ///
    /// An invalid price fails immediately and leaves the window untouched;
    /// the indicator performs no recovery on behalf of the host.
    pub fn update(&mut self, price: f64) -> Result<Option<Evaluation>, GbmError> {
        if !price.is_finite() || price <= 0.0 {
            return Err(GbmError::InvalidPrice {
                index: self.window.len(),
                price,
            });
        }

        let was_ready = self.is_ready();

        self.window.push_back(price);
        while self.window.len() > self.config.size {
            self.window.pop_front();
        }

        if !self.is_ready() {
            return Ok(None);
        }
        if !was_ready {
            tracing::debug!(size = self.config.size, "price window filled");
        }

        let window: Vec<f64> = self.window.iter().copied().collect();
        let evaluation = evaluator::evaluate(
            &window,
            self.config.holding_period,
            self.config.quantile_probability,
            self.config.anchor,
        )?;

        Ok(Some(evaluation))
    }

    /// Check if the window holds the configured number of prices
    pub fn is_ready(&self) -> bool {
        self.window.len() >= self.config.size
    }

    /// Get the number of prices currently in the window
    pub fn sample_count(&self) -> usize {
        self.window.len()
    }

    /// Get the active configuration
    pub fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    /// Clear the window
    pub fn reset(&mut self) {
        self.window.clear();
    }
}
