//! Tabu Search (TS) over job permutations.
//!
//! A single-solution trajectory metaheuristic: each iteration moves to the
//! cheapest pairwise-swap neighbor that is not held in the tabu memory of
//! recently visited schedules, even when that neighbor is worse than the
//! current schedule. The memory prevents cycling and lets the search climb
//! out of local optima.
//!
//! A tabu schedule is excluded even if it would beat the global best (no
//! aspiration criterion).
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

mod config;
mod memory;
mod neighborhood;
mod runner;

pub use config::TabuConfig;
pub use memory::TabuMemory;
pub use neighborhood::{swap_neighbors, SwapNeighborhood};
pub use runner::{TabuResult, TabuRunner};
