//! Tournament selection.
//!
//! All selection assumes **minimization** (lower cost = better).
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use rand::Rng;

use super::types::Individual;

/// Tournament selection: sample `k` individuals uniformly with replacement
/// and return the index of the cheapest.
///
/// Higher `k` means stronger selection pressure; `k = 1` is a uniform pick.
/// Among equal costs the first one sampled wins. Unevaluated individuals
/// count as infinitely expensive.
///
/// # Complexity
/// O(k) per selection
///
/// # Panics
/// Panics if `population` is empty.
pub fn tournament<R: Rng>(population: &[Individual], k: usize, rng: &mut R) -> usize {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );

    let k = k.max(1);
    let n = population.len();

    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        if population[idx].fitness() < population[best_idx].fitness() {
            best_idx = idx;
        }
    }
    best_idx
}

/// Fills a mating pool of `count` clones, each chosen by a `k`-tournament.
pub fn select_tournament<R: Rng>(
    population: &[Individual],
    count: usize,
    k: usize,
    rng: &mut R,
) -> Vec<Individual> {
    (0..count)
        .map(|_| population[tournament(population, k, rng)].clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::ProblemInstance;
    use crate::random::create_rng;

    /// Single-machine instance where job j costs `times[j]`; with one job
    /// per individual the makespan is simply that time.
    fn make_population(times: &[f64]) -> Vec<Individual> {
        times
            .iter()
            .map(|&t| {
                let inst = ProblemInstance::from_rows(vec![vec![t]]).unwrap();
                Individual::evaluated(&inst, vec![0]).unwrap()
            })
            .collect()
    }

    #[test]
    fn test_tournament_favors_best() {
        let pop = make_population(&[10.0, 5.0, 1.0, 8.0]);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        let n = 10000;
        for _ in 0..n {
            counts[tournament(&pop, 4, &mut rng)] += 1;
        }
        // P(best sampled at least once in 4 draws) = 1 - (3/4)^4 ~ 0.68
        let best_count = counts[2];
        assert!(
            best_count > 6000,
            "expected best to be selected >60% of the time, got {best_count}/{n}"
        );
    }

    #[test]
    fn test_tournament_size_1_is_random() {
        let pop = make_population(&[10.0, 5.0, 1.0, 8.0]);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        for _ in 0..10000 {
            counts[tournament(&pop, 1, &mut rng)] += 1;
        }
        for &c in &counts {
            assert!(c > 1500, "expected uniform, got counts: {counts:?}");
        }
    }

    #[test]
    fn test_selection_pressure_lowers_expected_cost() {
        let costs = [30.0, 12.0, 45.0, 7.0, 22.0, 51.0, 18.0, 9.0, 40.0, 27.0];
        let pop = make_population(&costs);
        let mut rng = create_rng(3);

        let samples = 5000;
        let mean_of = |k: usize, rng: &mut rand::rngs::StdRng| {
            (0..samples)
                .map(|_| pop[tournament(&pop, k, rng)].fitness())
                .sum::<f64>()
                / samples as f64
        };
        let uniform = mean_of(1, &mut rng);
        let tournament3 = mean_of(3, &mut rng);

        let population_mean = costs.iter().sum::<f64>() / costs.len() as f64;
        assert!((uniform - population_mean).abs() < 2.0);
        assert!(
            tournament3 < uniform,
            "tournament mean {tournament3} should be below uniform mean {uniform}"
        );
    }

    #[test]
    fn test_unevaluated_loses() {
        let mut pop = make_population(&[50.0]);
        pop.push(Individual::new(vec![0]));
        let mut rng = create_rng(42);
        for _ in 0..100 {
            // k large enough that index 0 is almost always sampled.
            let idx = tournament(&pop, 40, &mut rng);
            assert_eq!(idx, 0);
        }
    }

    #[test]
    fn test_select_tournament_pool_size() {
        let pop = make_population(&[3.0, 1.0, 2.0]);
        let mut rng = create_rng(42);
        let pool = select_tournament(&pop, 7, 3, &mut rng);
        assert_eq!(pool.len(), 7);
        assert!(pool.iter().all(Individual::is_evaluated));
    }

    #[test]
    fn test_single_individual() {
        let pop = make_population(&[5.0]);
        let mut rng = create_rng(42);
        assert_eq!(tournament(&pop, 3, &mut rng), 0);
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let pop: Vec<Individual> = vec![];
        let mut rng = create_rng(42);
        tournament(&pop, 3, &mut rng);
    }
}
