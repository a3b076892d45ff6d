//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use crate::error::{FlowShopError, Result};

/// Configuration for the generational evolutionary search.
///
/// # Defaults
///
/// ```
/// use u_flowshop::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 30);
/// assert_eq!(config.max_generations, 30);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_flowshop::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(60)
///     .with_tournament_size(5)
///     .with_crossover_rate(0.8)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals in the population.
    pub population_size: usize,

    /// Number of generations to run.
    pub max_generations: usize,

    /// Probability of applying PMX to a consecutive pair of the mating
    /// pool (0.0–1.0). Pairs not crossed are carried over unchanged.
    pub crossover_rate: f64,

    /// Probability of mutating an individual (0.0–1.0).
    pub mutation_rate: f64,

    /// Per-position swap probability inside a mutation (0.0–1.0).
    pub gene_mutation_rate: f64,

    /// Number of individuals sampled per tournament.
    pub tournament_size: usize,

    /// Number of best distinct schedules kept across the run.
    pub hall_of_fame_size: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 30,
            max_generations: 30,
            crossover_rate: 0.7,
            mutation_rate: 0.2,
            gene_mutation_rate: 0.2,
            tournament_size: 3,
            hall_of_fame_size: 1,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the per-position swap probability used by mutation.
    pub fn with_gene_mutation_rate(mut self, rate: f64) -> Self {
        self.gene_mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the hall-of-fame capacity.
    pub fn with_hall_of_fame_size(mut self, n: usize) -> Self {
        self.hall_of_fame_size = n;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns [`FlowShopError::InvalidConfig`] describing the first invalid
    /// parameter.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(FlowShopError::InvalidConfig(
                "population_size must be at least 1".into(),
            ));
        }
        if self.max_generations == 0 {
            return Err(FlowShopError::InvalidConfig(
                "max_generations must be at least 1".into(),
            ));
        }
        if self.tournament_size == 0 {
            return Err(FlowShopError::InvalidConfig(
                "tournament_size must be at least 1".into(),
            ));
        }
        if self.hall_of_fame_size == 0 {
            return Err(FlowShopError::InvalidConfig(
                "hall_of_fame_size must be at least 1".into(),
            ));
        }
        for (name, rate) in [
            ("crossover_rate", self.crossover_rate),
            ("mutation_rate", self.mutation_rate),
            ("gene_mutation_rate", self.gene_mutation_rate),
        ] {
            if !(0.0..=1.0).contains(&rate) {
                return Err(FlowShopError::InvalidConfig(format!(
                    "{name} must be within [0, 1], got {rate}"
                )));
            }
        }
        Ok(())
    }
}
