//! Error types for flow-shop construction, evaluation and solving.

use thiserror::Error;

/// Errors raised by instance construction, schedule evaluation and solver
/// configuration.
///
/// Tabu-search stagnation is not an error; it is reported through
/// [`TabuResult::stagnated`](crate::tabu::TabuResult::stagnated).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FlowShopError {
    /// The job/machine dimensions or the processing-time matrix are invalid.
    #[error("invalid instance: {0}")]
    InvalidInstance(String),

    /// A schedule is not a permutation of the instance's jobs.
    #[error("invalid schedule: {0}")]
    InvalidSchedule(String),

    /// A solver configuration parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for flow-shop operations.
pub type Result<T> = std::result::Result<T, FlowShopError>;
