//! Tabu Search execution engine.
//!
//! # Algorithm
//!
//! 1. Start from a random (or caller-supplied) schedule
//! 2. At each iteration:
//!    a. Generate the full pairwise-swap neighborhood
//!    b. Drop neighbors held in the tabu memory (no aspiration)
//!    c. Stop if nothing is left
//!    d. Move to the cheapest remaining neighbor, even if it is worse
//!    e. Update the global best on strict improvement
//!    f. Push the new schedule into the tabu memory
//! 3. Terminate after max iterations or an exhausted neighborhood
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! Taillard, E. (1990). "Some efficient heuristic methods for the flow shop
//! sequencing problem", *EJOR* 47(1), 65-74.

use rand::Rng;
use tracing::{debug, info};

use super::config::TabuConfig;
use super::memory::TabuMemory;
use super::neighborhood::SwapNeighborhood;
use crate::error::Result;
use crate::problem::{evaluate, validate_schedule, ProblemInstance, Schedule};
use crate::random::{random_permutation, rng_from_seed};

/// Result of a Tabu Search run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuResult {
    /// Best schedule found.
    pub best: Schedule,
    /// Makespan of the best schedule.
    pub best_cost: f64,
    /// Total iterations executed.
    pub iterations: usize,
    /// Iteration (1-based) at which the best schedule was found; 0 means
    /// the initial schedule was never improved.
    pub best_iteration: usize,
    /// Whether the run stopped because every neighbor was tabu.
    pub stagnated: bool,
    /// Best cost after each iteration.
    pub cost_history: Vec<f64>,
}

/// Tabu Search runner.
pub struct TabuRunner;

impl TabuRunner {
    /// Runs Tabu Search from a random schedule drawn with `config.seed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_flowshop::problem::ProblemInstance;
    /// use u_flowshop::tabu::{TabuConfig, TabuRunner};
    ///
    /// let instance = ProblemInstance::from_rows(vec![
    ///     vec![4.0, 5.0, 6.0],
    ///     vec![7.0, 8.0, 9.0],
    ///     vec![3.0, 2.0, 4.0],
    /// ])
    /// .unwrap();
    /// let result = TabuRunner::run(&instance, &TabuConfig::default().with_seed(42)).unwrap();
    /// assert_eq!(result.best.len(), 3);
    /// ```
    pub fn run(instance: &ProblemInstance, config: &TabuConfig) -> Result<TabuResult> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(instance, config, &mut rng)
    }

    /// Runs Tabu Search from a random schedule drawn from `rng`.
    ///
    /// `config.seed` is ignored.
    pub fn run_with_rng<R: Rng>(
        instance: &ProblemInstance,
        config: &TabuConfig,
        rng: &mut R,
    ) -> Result<TabuResult> {
        let initial = random_permutation(instance.job_count(), rng);
        Self::run_from(instance, initial, config)
    }

    /// Runs Tabu Search from `initial`.
    ///
    /// Once started the search is deterministic: it draws no random numbers.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` if the configuration is invalid, `InvalidSchedule`
    /// if `initial` is not a permutation of the instance's jobs.
    pub fn run_from(
        instance: &ProblemInstance,
        initial: Schedule,
        config: &TabuConfig,
    ) -> Result<TabuResult> {
        config.validate()?;
        validate_schedule(&initial, instance.job_count())?;

        let mut best_cost = evaluate(instance, &initial)?;
        let mut best = initial.clone();
        let mut current = initial;
        let mut best_iteration = 0;
        let mut stagnated = false;

        let mut memory = TabuMemory::new(config.tabu_size);
        let mut cost_history = Vec::with_capacity(config.max_iterations);

        for iteration in 1..=config.max_iterations {
            let mut chosen: Option<(Schedule, f64)> = None;

            for (_, neighbor) in SwapNeighborhood::new(&current) {
                if memory.contains(&neighbor) {
                    continue;
                }
                let cost = evaluate(instance, &neighbor)?;
                // Strict `<` keeps the first neighbor among equal costs.
                if chosen.as_ref().is_none_or(|&(_, c)| cost < c) {
                    chosen = Some((neighbor, cost));
                }
            }

            let Some((neighbor, cost)) = chosen else {
                debug!(iteration, "all neighbors are tabu, stopping");
                stagnated = true;
                break;
            };

            if cost < best_cost {
                best = neighbor.clone();
                best_cost = cost;
                best_iteration = iteration;
            }

            memory.push(neighbor.clone());
            current = neighbor;
            cost_history.push(best_cost);

            debug!(iteration, current_cost = cost, best_cost, "tabu iteration");
        }

        info!(
            iterations = cost_history.len(),
            best_cost,
            best_iteration,
            stagnated,
            "tabu search complete"
        );

        Ok(TabuResult {
            best,
            best_cost,
            iterations: cost_history.len(),
            best_iteration,
            stagnated,
            cost_history,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FlowShopError;
    use crate::problem::is_permutation;
    use crate::random::create_rng;

    fn five_by_three() -> ProblemInstance {
        ProblemInstance::from_rows(vec![
            vec![4.0, 5.0, 6.0],
            vec![7.0, 8.0, 9.0],
            vec![3.0, 2.0, 4.0],
            vec![6.0, 4.0, 3.0],
            vec![5.0, 7.0, 6.0],
        ])
        .unwrap()
    }

    fn random_instance(jobs: usize, machines: usize, seed: u64) -> ProblemInstance {
        let mut rng = create_rng(seed);
        let rows = (0..jobs)
            .map(|_| {
                (0..machines)
                    .map(|_| rng.random_range(1..100u32) as f64)
                    .collect()
            })
            .collect();
        ProblemInstance::from_rows(rows).unwrap()
    }

    #[test]
    fn test_tabu_from_identity_trajectory() {
        let instance = five_by_three();
        let result =
            TabuRunner::run_from(&instance, vec![0, 1, 2, 3, 4], &TabuConfig::default()).unwrap();

        assert_eq!(result.best, vec![2, 0, 4, 1, 3]);
        assert_eq!(result.best_cost, 39.0);
        assert_eq!(result.best_iteration, 4);
        assert_eq!(result.iterations, 100);
        assert!(!result.stagnated);
        assert_eq!(&result.cost_history[..4], &[40.0, 40.0, 40.0, 39.0]);
    }

    #[test]
    fn test_tabu_accepts_worse_moves() {
        // From [2, 3, 0, 4, 1] (cost 42) the best non-tabu neighbor does not
        // improve, yet the search keeps moving and later reaches 39.
        let instance = five_by_three();
        let result =
            TabuRunner::run_from(&instance, vec![2, 3, 0, 4, 1], &TabuConfig::default()).unwrap();

        assert_eq!(&result.cost_history[..3], &[42.0, 42.0, 42.0]);
        assert_eq!(result.best_cost, 39.0);
        assert_eq!(result.best_iteration, 5);
    }

    #[test]
    fn test_tabu_best_cost_matches_evaluation() {
        let instance = random_instance(8, 4, 7);
        let config = TabuConfig::default().with_max_iterations(50).with_seed(42);
        let result = TabuRunner::run(&instance, &config).unwrap();

        assert!(is_permutation(&result.best, 8));
        assert_eq!(evaluate(&instance, &result.best).unwrap(), result.best_cost);
    }

    #[test]
    fn test_tabu_cost_history_non_increasing() {
        let instance = random_instance(10, 5, 3);
        let config = TabuConfig::default().with_max_iterations(100).with_seed(42);
        let result = TabuRunner::run(&instance, &config).unwrap();

        assert_eq!(result.cost_history.len(), result.iterations);
        for window in result.cost_history.windows(2) {
            assert!(
                window[1] <= window[0],
                "best cost history should be non-increasing: {} > {}",
                window[1],
                window[0]
            );
        }
        assert_eq!(result.cost_history.last().copied(), Some(result.best_cost));
    }

    #[test]
    fn test_tabu_best_never_worse_than_initial() {
        let instance = random_instance(9, 3, 11);
        let mut rng = create_rng(5);
        let initial = random_permutation(9, &mut rng);
        let initial_cost = evaluate(&instance, &initial).unwrap();

        let result = TabuRunner::run_from(&instance, initial, &TabuConfig::default()).unwrap();
        assert!(result.best_cost <= initial_cost);
    }

    #[test]
    fn test_tabu_same_seed_same_result() {
        let instance = random_instance(8, 3, 1);
        let config = TabuConfig::default().with_max_iterations(30).with_seed(99);

        let a = TabuRunner::run(&instance, &config).unwrap();
        let b = TabuRunner::run(&instance, &config).unwrap();

        assert_eq!(a.best, b.best);
        assert_eq!(a.best_cost, b.best_cost);
        assert_eq!(a.cost_history, b.cost_history);
    }

    #[test]
    fn test_tabu_injected_rng_matches_seed() {
        let instance = random_instance(6, 3, 2);
        let config = TabuConfig::default().with_max_iterations(20).with_seed(8);

        let seeded = TabuRunner::run(&instance, &config).unwrap();
        let mut rng = create_rng(8);
        let injected = TabuRunner::run_with_rng(&instance, &config, &mut rng).unwrap();

        assert_eq!(seeded.best, injected.best);
        assert_eq!(seeded.cost_history, injected.cost_history);
    }

    #[test]
    fn test_tabu_single_job_stagnates_immediately() {
        let instance = ProblemInstance::from_rows(vec![vec![3.0, 4.0]]).unwrap();
        let result = TabuRunner::run(&instance, &TabuConfig::default().with_seed(1)).unwrap();

        assert!(result.stagnated);
        assert_eq!(result.iterations, 0);
        assert!(result.cost_history.is_empty());
        assert_eq!(result.best, vec![0]);
        assert_eq!(result.best_cost, 7.0);
    }

    #[test]
    fn test_tabu_two_jobs_stagnates_once_memory_covers_neighborhood() {
        // Two jobs have a single neighbor: after the first move the only
        // neighbor is the start schedule, which is not tabu, so the search
        // alternates until both schedules are held in memory.
        let instance = ProblemInstance::from_rows(vec![vec![1.0, 5.0], vec![4.0, 1.0]]).unwrap();
        let result =
            TabuRunner::run_from(&instance, vec![0, 1], &TabuConfig::default()).unwrap();

        assert!(result.stagnated);
        assert_eq!(result.iterations, 2);
        assert_eq!(result.best, vec![0, 1]);
        assert_eq!(result.best_cost, 7.0);
    }

    #[test]
    fn test_tabu_rejects_invalid_initial_schedule() {
        let instance = five_by_three();
        let err = TabuRunner::run_from(&instance, vec![0, 1, 1, 3, 4], &TabuConfig::default())
            .unwrap_err();
        assert!(matches!(err, FlowShopError::InvalidSchedule(_)));
    }

    #[test]
    fn test_tabu_rejects_invalid_config() {
        let instance = five_by_three();
        let err = TabuRunner::run(&instance, &TabuConfig::default().with_tabu_size(0)).unwrap_err();
        assert!(matches!(err, FlowShopError::InvalidConfig(_)));
    }
}
