//! Makespan evaluation.
//!
//! # Recurrence
//!
//! For schedule position `i` with `job = schedule[i]` and machine `m`:
//!
//! ```text
//! end[job][0] = prev(0) + p[job][0]
//! end[job][m] = max(end[job][m - 1], prev(m)) + p[job][m]     (m > 0)
//! ```
//!
//! where `prev(m)` is `end[schedule[i - 1]][m]`, or 0 at the first
//! position. The first term enforces the machine order within a job, the
//! second the job order on a machine. The makespan is
//! `end[schedule[N - 1]][M - 1]`.
//!
//! # Complexity
//! O(N·M) time.
//!
//! # Reference
//! Johnson (1954), "Optimal two- and three-stage production schedules with
//! setup times included"

use super::instance::ProblemInstance;
use super::schedule::validate_schedule;
use crate::error::Result;

/// Completion time of every job on every machine for one schedule.
///
/// Indexed by job, then machine. Built fresh for each call; it holds no
/// reference to the instance or schedule it came from.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EndTimeMatrix {
    machine_count: usize,
    end: Vec<f64>,
}

impl EndTimeMatrix {
    fn zeros(job_count: usize, machine_count: usize) -> Self {
        Self {
            machine_count,
            end: vec![0.0; job_count * machine_count],
        }
    }

    /// Completion time of `job` on `machine`.
    pub fn get(&self, job: usize, machine: usize) -> f64 {
        self.end[job * self.machine_count + machine]
    }

    fn set(&mut self, job: usize, machine: usize, value: f64) {
        self.end[job * self.machine_count + machine] = value;
    }

    /// Completion times of `job` on each machine, in machine order.
    pub fn job(&self, job: usize) -> &[f64] {
        let start = job * self.machine_count;
        &self.end[start..start + self.machine_count]
    }
}

/// Computes the makespan of `schedule` on `instance`.
///
/// # Errors
///
/// [`FlowShopError::InvalidSchedule`](crate::error::FlowShopError::InvalidSchedule)
/// if `schedule` is not a permutation of the instance's jobs.
///
/// # Examples
///
/// ```
/// use u_flowshop::problem::{evaluate, ProblemInstance};
///
/// let instance = ProblemInstance::from_rows(vec![
///     vec![4.0, 5.0, 6.0],
///     vec![7.0, 8.0, 9.0],
///     vec![3.0, 2.0, 4.0],
///     vec![6.0, 4.0, 3.0],
///     vec![5.0, 7.0, 6.0],
/// ])
/// .unwrap();
/// assert_eq!(evaluate(&instance, &[2, 3, 0, 4, 1]).unwrap(), 42.0);
/// ```
pub fn evaluate(instance: &ProblemInstance, schedule: &[usize]) -> Result<f64> {
    let end = end_times(instance, schedule)?;
    let last = schedule[schedule.len() - 1];
    Ok(end.get(last, instance.machine_count() - 1))
}

/// Computes the completion time of every job on every machine.
///
/// # Errors
///
/// Same as [`evaluate`].
pub fn end_times(instance: &ProblemInstance, schedule: &[usize]) -> Result<EndTimeMatrix> {
    validate_schedule(schedule, instance.job_count())?;

    let machines = instance.machine_count();
    let mut end = EndTimeMatrix::zeros(instance.job_count(), machines);

    let mut prev: Option<usize> = None;
    for &job in schedule {
        for m in 0..machines {
            let prior_job_end = prev.map_or(0.0, |p| end.get(p, m));
            let ready = if m == 0 {
                prior_job_end
            } else {
                end.get(job, m - 1).max(prior_job_end)
            };
            end.set(job, m, ready + instance.processing_time(job, m));
        }
        prev = Some(job);
    }

    Ok(end)
}
