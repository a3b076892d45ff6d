//! Generational evolutionary search over job permutations.
//!
//! Each generation builds a mating pool by tournament selection, applies
//! partially mapped crossover (PMX) to consecutive pairs and
//! shuffle-indexes mutation to individuals, re-evaluates only the
//! individuals whose schedule changed, and records population statistics.
//! The best schedules seen are kept in a [`HallOfFame`].
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, rates, tournament size)
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Best schedule, hall of fame and per-generation statistics
//! - [`Individual`]: A schedule with its cached makespan
//!
//! # Submodules
//!
//! - [`operators`]: PMX crossover and shuffle-indexes mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Reeves (1995), "A genetic algorithm for flowshop sequencing",
//!   *Computers & Operations Research* 22(1), 5-13

mod config;
pub mod operators;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use runner::{GaResult, GaRunner};
pub use selection::{select_tournament, tournament};
pub use types::{GenerationStats, HallOfFame, Individual};
