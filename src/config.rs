//! Indicator Configuration
//!
//! Recognized options with their defaults, validation, and TOML loading
//! for an `[indicator]` section:
//!
//! ```toml
//! [indicator]
//! size = 257
//! quantile_probability = 0.1
//! holding_period = 5.0
//! anchor = "oldest"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::evaluator::Anchor;

/// Configuration for the rolling GBM indicator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    /// Window length N (number of prices per evaluation)
    pub size: usize,
    /// Probability p of the published quantile threshold
    pub quantile_probability: f64,
    /// Forward holding horizon t, in bars
    pub holding_period: f64,
    /// Which window element anchors the forecast
    pub anchor: Anchor,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            size: 257, // 2^8 + 1
            quantile_probability: 0.1,
            holding_period: 5.0,
            anchor: Anchor::Oldest,
        }
    }
}

impl IndicatorConfig {
    /// Create a new config with a custom window size
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Create a new config with a custom quantile probability
    pub fn with_quantile_probability(mut self, p: f64) -> Self {
        self.quantile_probability = p;
        self
    }

    /// Create a new config with a custom holding period
    pub fn with_holding_period(mut self, t: f64) -> Self {
        self.holding_period = t;
        self
    }

    /// Create a new config with a custom anchor policy
    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size < 2 {
            return Err(ConfigError::InvalidSize(self.size));
        }
        if !(self.quantile_probability > 0.0 && self.quantile_probability < 1.0) {
            return Err(ConfigError::InvalidProbability(self.quantile_probability));
        }
        if !(self.holding_period > 0.0) {
            return Err(ConfigError::InvalidHoldingPeriod(self.holding_period));
        }
        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("size must be at least 2, got {0}")]
    InvalidSize(usize),
    #[error("quantile_probability must lie strictly between 0 and 1, got {0}")]
    InvalidProbability(f64),
    #[error("holding_period must be strictly positive, got {0}")]
    InvalidHoldingPeriod(f64),
}

/// File layout: the indicator options live under `[indicator]`
#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    indicator: IndicatorConfig,
}

/// Load and validate an indicator configuration from a TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<IndicatorConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let file: ConfigFile = toml::from_str(&content)?;
    file.indicator.validate()?;
    Ok(file.indicator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = IndicatorConfig::default();
        assert_eq!(config.size, 257);
        assert_eq!(config.quantile_probability, 0.1);
        assert_eq!(config.holding_period, 5.0);
        assert_eq!(config.anchor, Anchor::Oldest);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = IndicatorConfig::default()
            .with_size(64)
            .with_quantile_probability(0.05)
            .with_holding_period(3.0)
            .with_anchor(Anchor::MostRecent);

        assert_eq!(config.size, 64);
        assert_eq!(config.quantile_probability, 0.05);
        assert_eq!(config.holding_period, 3.0);
        assert_eq!(config.anchor, Anchor::MostRecent);
    }

    #[test]
    fn test_invalid_size() {
        let config = IndicatorConfig::default().with_size(1);
        assert!(matches!(config.validate(), Err(ConfigError::InvalidSize(1))));
    }

    #[test]
    fn test_invalid_probability() {
        for p in [0.0, 1.0, -0.2, 1.7, f64::NAN] {
            let config = IndicatorConfig::default().with_quantile_probability(p);
            assert!(matches!(
                config.validate(),
                Err(ConfigError::InvalidProbability(_))
            ));
        }
    }

    #[test]
    fn test_invalid_holding_period() {
        for t in [0.0, -5.0, f64::NAN] {
            let config = IndicatorConfig::default().with_holding_period(t);
            assert!(matches!(
                config.validate(),
                Err(ConfigError::InvalidHoldingPeriod(_))
            ));
        }
    }

    #[test]
    fn test_load_valid_config() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            br#"
[indicator]
size = 128
quantile_probability = 0.05
holding_period = 3.0
anchor = "most_recent"
"#,
        )
        .unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.size, 128);
        assert_eq!(config.quantile_probability, 0.05);
        assert_eq!(config.holding_period, 3.0);
        assert_eq!(config.anchor, Anchor::MostRecent);
    }

    #[test]
    fn test_load_partial_config_uses_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            br#"
[indicator]
size = 65
"#,
        )
        .unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.size, 65);
        assert_eq!(config.quantile_probability, 0.1);
        assert_eq!(config.holding_period, 5.0);
        assert_eq!(config.anchor, Anchor::Oldest);
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_config("/nonexistent/path/indicator.toml");
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }

    #[test]
    fn test_load_rejects_unknown_anchor() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            br#"
[indicator]
anchor = "newest"
"#,
        )
        .unwrap();

        assert!(matches!(
            load_config(file.path()),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            br#"
[indicator]
quantile_probability = 1.0
"#,
        )
        .unwrap();

        assert!(matches!(
            load_config(file.path()),
            Err(ConfigError::InvalidProbability(_))
        ));
    }
}
