//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the generational process:
//! initialization → evaluation → selection → crossover → mutation → repeat.
//!
//! Each generation replaces the whole population with its offspring; the
//! best schedules ever seen survive only in the hall of fame.

use rand::Rng;
use tracing::{debug, info};

use super::config::GaConfig;
use super::operators::pmx_crossover;
use super::selection::select_tournament;
use super::types::{GenerationStats, HallOfFame, Individual};
use crate::error::{FlowShopError, Result};
use crate::problem::{ProblemInstance, Schedule};
use crate::random::{random_permutation, rng_from_seed};

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult {
    /// The best schedule found during the entire run.
    pub best: Schedule,

    /// Makespan of `best`.
    pub best_cost: f64,

    /// Total number of generations executed.
    pub generations: usize,

    /// Total number of makespan evaluations.
    pub evaluations: usize,

    /// Hall-of-fame members at the end of the run, best first.
    pub hall_of_fame: Vec<Individual>,

    /// One record for the initial population, then one per generation.
    pub history: Vec<GenerationStats>,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use u_flowshop::ga::{GaConfig, GaRunner};
/// use u_flowshop::problem::ProblemInstance;
///
/// let instance = ProblemInstance::from_rows(vec![
///     vec![4.0, 5.0, 6.0],
///     vec![7.0, 8.0, 9.0],
///     vec![3.0, 2.0, 4.0],
///     vec![6.0, 4.0, 3.0],
///     vec![5.0, 7.0, 6.0],
/// ])
/// .unwrap();
/// let result = GaRunner::run(&instance, &GaConfig::default().with_seed(42)).unwrap();
/// assert_eq!(result.history.len(), 31);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with an RNG seeded from `config.seed`.
    ///
    /// # Errors
    /// `InvalidConfig` if the configuration is invalid.
    pub fn run(instance: &ProblemInstance, config: &GaConfig) -> Result<GaResult> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(instance, config, &mut rng)
    }

    /// Runs the GA drawing every random decision from `rng`.
    ///
    /// `config.seed` is ignored.
    pub fn run_with_rng<R: Rng>(
        instance: &ProblemInstance,
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<GaResult> {
        config.validate()?;

        let jobs = instance.job_count();

        // 1. Initialize and evaluate population
        let mut population: Vec<Individual> = (0..config.population_size)
            .map(|_| Individual::new(random_permutation(jobs, rng)))
            .collect();
        let mut evaluations = evaluate_population(instance, &mut population)?;

        // 2. Track elites
        let mut hall = HallOfFame::new(config.hall_of_fame_size);
        hall.update(&population);

        let mut history = Vec::with_capacity(config.max_generations + 1);
        history.push(GenerationStats::collect(
            0,
            evaluations,
            &population,
            elite_cost(&hall),
        ));

        // 3. Generational loop
        for generation in 1..=config.max_generations {
            let mut offspring = select_tournament(
                &population,
                config.population_size,
                config.tournament_size,
                rng,
            );
            vary(&mut offspring, config, rng);

            let evaluated = evaluate_population(instance, &mut offspring)?;
            evaluations += evaluated;
            population = offspring;

            hall.update(&population);

            let stats = GenerationStats::collect(
                generation,
                evaluated,
                &population,
                elite_cost(&hall),
            );
            debug!(
                generation,
                evaluations = evaluated,
                min = stats.min,
                avg = stats.avg,
                elite = stats.elite,
                "ga generation"
            );
            history.push(stats);
        }

        let members = hall.into_members();
        let best = members.first().cloned().ok_or_else(|| {
            FlowShopError::InvalidConfig("population_size must be at least 1".into())
        })?;
        let best_cost = best.fitness();

        info!(
            generations = config.max_generations,
            evaluations, best_cost, "ga complete"
        );

        Ok(GaResult {
            best: best.into_schedule(),
            best_cost,
            generations: config.max_generations,
            evaluations,
            hall_of_fame: members,
            history,
        })
    }
}

/// Applies crossover to consecutive pairs, then mutation to every member.
///
/// An odd last member is never crossed. Individuals whose schedule content
/// changes lose their cached cost.
fn vary<R: Rng>(offspring: &mut [Individual], config: &GaConfig, rng: &mut R) {
    for pair in offspring.chunks_exact_mut(2) {
        if rng.random_range(0.0..1.0) < config.crossover_rate {
            let (c1, c2) = pmx_crossover(pair[0].schedule(), pair[1].schedule(), rng);
            pair[0].replace_schedule(c1);
            pair[1].replace_schedule(c2);
        }
    }

    for ind in offspring.iter_mut() {
        if rng.random_range(0.0..1.0) < config.mutation_rate {
            ind.mutate(config.gene_mutation_rate, rng);
        }
    }
}

/// Evaluates individuals without a current cost; returns how many were
/// evaluated.
fn evaluate_population(instance: &ProblemInstance, population: &mut [Individual]) -> Result<usize> {
    let mut count = 0;
    for ind in population.iter_mut() {
        if ind.evaluate(instance)? {
            count += 1;
        }
    }
    Ok(count)
}

fn elite_cost(hall: &HallOfFame) -> f64 {
    hall.best().map_or(f64::INFINITY, Individual::fitness)
}

// ============================================================================
// Tests
// ============================================================================
