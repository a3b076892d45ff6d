//! Tabu Search configuration.

use crate::error::{FlowShopError, Result};

/// Configuration parameters for Tabu Search.
///
/// # Examples
///
/// ```
/// use u_flowshop::tabu::TabuConfig;
///
/// let config = TabuConfig::default()
///     .with_max_iterations(1000)
///     .with_tabu_size(7)
///     .with_seed(42);
/// assert_eq!(config.max_iterations, 1000);
/// assert_eq!(config.tabu_size, 7);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuConfig {
    /// Maximum number of iterations.
    pub max_iterations: usize,
    /// How many recently visited schedules the tabu memory holds.
    pub tabu_size: usize,
    /// Random seed for the initial schedule (None for random).
    pub seed: Option<u64>,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            tabu_size: 20,
            seed: None,
        }
    }
}

impl TabuConfig {
    /// Sets the maximum number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the tabu memory capacity.
    pub fn with_tabu_size(mut self, size: usize) -> Self {
        self.tabu_size = size;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.max_iterations == 0 {
            return Err(FlowShopError::InvalidConfig(
                "max_iterations must be at least 1".into(),
            ));
        }
        if self.tabu_size == 0 {
            return Err(FlowShopError::InvalidConfig(
                "tabu_size must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabu_config_defaults() {
        let config = TabuConfig::default();
        assert_eq!(config.max_iterations, 100);
        assert_eq!(config.tabu_size, 20);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_tabu_config_builder() {
        let config = TabuConfig::default()
            .with_max_iterations(1000)
            .with_tabu_size(10)
            .with_seed(123);

        assert_eq!(config.max_iterations, 1000);
        assert_eq!(config.tabu_size, 10);
        assert_eq!(config.seed, Some(123));
    }

    #[test]
    fn test_validate_rejects_zero() {
        assert!(TabuConfig::default()
            .with_max_iterations(0)
            .validate()
            .is_err());
        assert!(TabuConfig::default().with_tabu_size(0).validate().is_err());
    }
}
