//! Flow-shop problem data and its objective.
//!
//! - [`ProblemInstance`]: validated job × machine processing times
//! - [`Schedule`]: a job permutation, with [`is_permutation`] /
//!   [`validate_schedule`] checks
//! - [`evaluate`]: the makespan of a schedule, the cost oracle shared by
//!   every solver
//! - [`end_times`]: the full completion-time matrix behind a makespan

mod instance;
mod makespan;
mod schedule;

pub use instance::ProblemInstance;
pub use makespan::{end_times, evaluate, EndTimeMatrix};
pub use schedule::{is_permutation, validate_schedule, Schedule};
