//! Core value types of the evolutionary search.
//!
//! - [`Individual`]: a schedule with its cached makespan
//! - [`HallOfFame`]: the best individuals seen across a run
//! - [`GenerationStats`]: one record of the per-generation history

use rand::Rng;

use super::operators::shuffle_indexes_mutation;
use crate::error::Result;
use crate::problem::{evaluate, ProblemInstance, Schedule};

/// A candidate schedule in the population.
///
/// The makespan is cached after evaluation. Any change to the schedule's
/// content drops the cache, so only changed individuals are re-evaluated.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Individual {
    schedule: Schedule,
    cost: Option<f64>,
}

impl Individual {
    /// Creates an unevaluated individual.
    pub fn new(schedule: Schedule) -> Self {
        Self {
            schedule,
            cost: None,
        }
    }

    /// Creates an individual and evaluates it on `instance`.
    pub fn evaluated(instance: &ProblemInstance, schedule: Schedule) -> Result<Self> {
        let cost = evaluate(instance, &schedule)?;
        Ok(Self {
            schedule,
            cost: Some(cost),
        })
    }

    /// The job sequence.
    pub fn schedule(&self) -> &[usize] {
        &self.schedule
    }

    /// Consumes the individual, returning its job sequence.
    pub fn into_schedule(self) -> Schedule {
        self.schedule
    }

    /// Cached makespan, if evaluated since the last change.
    pub fn cost(&self) -> Option<f64> {
        self.cost
    }

    /// Cached makespan, or `f64::INFINITY` when not evaluated.
    ///
    /// Lower is better.
    pub fn fitness(&self) -> f64 {
        self.cost.unwrap_or(f64::INFINITY)
    }

    /// Whether the cached makespan is current.
    pub fn is_evaluated(&self) -> bool {
        self.cost.is_some()
    }

    /// Evaluates the individual unless its cached cost is current.
    ///
    /// Returns `true` if an evaluation was performed.
    pub fn evaluate(&mut self, instance: &ProblemInstance) -> Result<bool> {
        if self.cost.is_some() {
            return Ok(false);
        }
        self.cost = Some(evaluate(instance, &self.schedule)?);
        Ok(true)
    }

    /// Replaces the schedule, invalidating the cached cost if the content
    /// differs.
    ///
    /// Returns `true` if the schedule changed.
    pub fn replace_schedule(&mut self, schedule: Schedule) -> bool {
        if schedule == self.schedule {
            return false;
        }
        self.schedule = schedule;
        self.cost = None;
        true
    }

    /// Applies shuffle-indexes mutation with per-position rate `indpb`.
    ///
    /// Returns `true` if the schedule changed.
    pub fn mutate<R: Rng>(&mut self, indpb: f64, rng: &mut R) -> bool {
        let mut schedule = self.schedule.clone();
        if shuffle_indexes_mutation(&mut schedule, indpb, rng) {
            self.replace_schedule(schedule)
        } else {
            false
        }
    }
}

/// The best distinct individuals seen so far, sorted by ascending cost.
///
/// An individual enters only if the hall has room or it is strictly
/// better than the worst member; among equal costs the earlier member
/// ranks first. Capacity 1 keeps exactly one elite.
#[derive(Debug, Clone)]
pub struct HallOfFame {
    capacity: usize,
    members: Vec<Individual>,
}

impl HallOfFame {
    /// Creates an empty hall holding at most `capacity` individuals.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            members: Vec::with_capacity(capacity),
        }
    }

    /// Offers every evaluated individual of `population`.
    ///
    /// Returns `true` if the best member changed.
    pub fn update(&mut self, population: &[Individual]) -> bool {
        let before = self.best().map(Individual::fitness);

        for ind in population.iter().filter(|ind| ind.is_evaluated()) {
            let full = self.members.len() >= self.capacity;
            if full
                && self
                    .members
                    .last()
                    .is_none_or(|worst| ind.fitness() >= worst.fitness())
            {
                continue;
            }
            if self.members.iter().any(|m| m.schedule == ind.schedule) {
                continue;
            }
            let pos = self
                .members
                .partition_point(|m| m.fitness() <= ind.fitness());
            self.members.insert(pos, ind.clone());
            self.members.truncate(self.capacity);
        }

        self.best().map(Individual::fitness) != before
    }

    /// The best individual, if any has been offered.
    pub fn best(&self) -> Option<&Individual> {
        self.members.first()
    }

    /// All members, best first.
    pub fn members(&self) -> &[Individual] {
        &self.members
    }

    /// Consumes the hall, returning its members best first.
    pub fn into_members(self) -> Vec<Individual> {
        self.members
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if the hall holds no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Statistics of one generation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// Generation number; 0 is the initial population.
    pub generation: usize,
    /// Makespan computations performed in this generation.
    pub evaluations: usize,
    /// Lowest makespan in the population.
    pub min: f64,
    /// Mean makespan of the population.
    pub avg: f64,
    /// Highest makespan in the population.
    pub max: f64,
    /// Elite (hall-of-fame best) makespan after this generation.
    pub elite: f64,
}

impl GenerationStats {
    /// Summarizes an evaluated population.
    pub fn collect(
        generation: usize,
        evaluations: usize,
        population: &[Individual],
        elite: f64,
    ) -> Self {
        let (min, max, sum) = population.iter().map(Individual::fitness).fold(
            (f64::INFINITY, f64::NEG_INFINITY, 0.0),
            |(lo, hi, sum), f| (lo.min(f), hi.max(f), sum + f),
        );
        let avg = if population.is_empty() {
            f64::NAN
        } else {
            sum / population.len() as f64
        };
        Self {
            generation,
            evaluations,
            min,
            avg,
            max,
            elite,
        }
    }
}
