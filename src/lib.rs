//! Permutation flow-shop scheduling.
//!
//! Given N jobs that each pass through M machines in the same machine
//! order, find the job sequence with the smallest makespan (completion
//! time of the last job on the last machine).
//!
//! - **Problem** ([`problem`]): validated instances, permutation schedules
//!   and the makespan recurrence every solver uses as its objective.
//! - **Tabu Search** ([`tabu`]): swap-neighborhood trajectory search with a
//!   bounded memory of recently visited schedules.
//! - **Genetic Algorithm** ([`ga`]): generational search with tournament
//!   selection, PMX crossover, shuffle-indexes mutation and a hall of fame.
//!
//! All randomness is drawn from a caller-supplied or seeded RNG
//! ([`random`]), so a fixed seed reproduces a run exactly.
//!
//! # Example
//!
//! ```
//! use u_flowshop::ga::{GaConfig, GaRunner};
//! use u_flowshop::problem::{evaluate, ProblemInstance};
//! use u_flowshop::tabu::{TabuConfig, TabuRunner};
//!
//! let instance = ProblemInstance::from_rows(vec![
//!     vec![4.0, 5.0, 6.0],
//!     vec![7.0, 8.0, 9.0],
//!     vec![3.0, 2.0, 4.0],
//!     vec![6.0, 4.0, 3.0],
//!     vec![5.0, 7.0, 6.0],
//! ])?;
//! assert_eq!(evaluate(&instance, &[0, 1, 2, 3, 4])?, 41.0);
//!
//! let tabu = TabuRunner::run(&instance, &TabuConfig::default().with_seed(1))?;
//! let ga = GaRunner::run(&instance, &GaConfig::default().with_seed(1))?;
//! // 39 is optimal for this instance.
//! assert!(tabu.best_cost >= 39.0 && ga.best_cost >= 39.0);
//! # Ok::<(), u_flowshop::FlowShopError>(())
//! ```

pub mod error;
pub mod ga;
pub mod problem;
pub mod random;
pub mod tabu;

pub use error::{FlowShopError, Result};
