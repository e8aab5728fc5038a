//! Analysis configuration
//!
//! Thresholds are read from YAML. Every key is optional:
//!
//! ```yaml
//! min_degradation_laps: 3
//! pit_window_count: 5
//! finishing_order:
//!   mode: classified
//!   drivers: [VER, NOR, LEC]
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::analysis::{DEFAULT_PIT_WINDOWS, FinishingOrder, MIN_DEGRADATION_LAPS};
use crate::{Result, StrategyError};

/// Tunables for a [`StrategyEngine`](crate::StrategyEngine).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Timed laps a stint needs before its degradation is reported
    pub min_degradation_laps: usize,
    /// Number of busiest pit laps to report
    pub pit_window_count: usize,
    /// How drivers are put in finishing order for strategy ranking
    pub finishing_order: FinishingOrder,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_degradation_laps: MIN_DEGRADATION_LAPS,
            pit_window_count: DEFAULT_PIT_WINDOWS,
            finishing_order: FinishingOrder::LapsCompleted,
        }
    }
}

impl AnalysisConfig {
    /// Parse and validate a YAML configuration document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = serde_yaml_ng::from_str(yaml).map_err(|e| StrategyError::Config {
            details: format!("AnalysisConfig deserialization: {}", e),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a YAML configuration file.
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let yaml = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| StrategyError::file_error(path.to_path_buf(), e))?;

        debug!(path = %path.display(), bytes = yaml.len(), "Loaded analysis configuration");
        Self::from_yaml_str(&yaml)
    }

    /// Check thresholds are usable.
    pub fn validate(&self) -> Result<()> {
        if self.min_degradation_laps < 2 {
            return Err(StrategyError::config(format!(
                "min_degradation_laps must be at least 2, got {}",
                self.min_degradation_laps
            )));
        }
        if self.pit_window_count == 0 {
            return Err(StrategyError::config("pit_window_count must be at least 1"));
        }
        if let FinishingOrder::Classified(drivers) = &self.finishing_order {
            if drivers.iter().any(|code| code.trim().is_empty()) {
                return Err(StrategyError::config("classification contains an empty driver code"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let config = AnalysisConfig::from_yaml_str("").unwrap();
        assert_eq!(config, AnalysisConfig::default());
        assert_eq!(config.min_degradation_laps, 3);
        assert_eq!(config.pit_window_count, 5);
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let config = AnalysisConfig::from_yaml_str("pit_window_count: 3\n").unwrap();
        assert_eq!(config.pit_window_count, 3);
        assert_eq!(config.min_degradation_laps, 3);
        assert_eq!(config.finishing_order, FinishingOrder::LapsCompleted);
    }

    #[test]
    fn classified_order_parses() {
        let yaml = "finishing_order:\n  mode: classified\n  drivers: [VER, NOR]\n";
        let config = AnalysisConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.finishing_order, FinishingOrder::Classified(vec!["VER".into(), "NOR".into()]));
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        assert!(matches!(
            AnalysisConfig::from_yaml_str("min_degradation_laps: 1\n"),
            Err(StrategyError::Config { .. })
        ));
        assert!(AnalysisConfig::from_yaml_str("pit_window_count: 0\n").is_err());
        assert!(AnalysisConfig::from_yaml_str("pit_window_count: [1, 2]\n").is_err());
    }

    #[tokio::test]
    async fn missing_file_is_a_file_error() {
        let result = AnalysisConfig::load("/nonexistent/stintlab.yaml").await;
        assert!(matches!(result, Err(StrategyError::File { .. })));
    }
}
