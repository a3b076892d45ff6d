//! Permutation schedules.

use crate::error::{FlowShopError, Result};

/// A job sequence: each job index of `0..N` appears exactly once.
pub type Schedule = Vec<usize>;

/// Returns `true` if `perm` is a permutation of `0..n`.
pub fn is_permutation(perm: &[usize], n: usize) -> bool {
    if perm.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &job in perm {
        if job >= n || seen[job] {
            return false;
        }
        seen[job] = true;
    }
    true
}

/// Checks that `schedule` is a permutation of `0..job_count`.
///
/// # Errors
///
/// [`FlowShopError::InvalidSchedule`] naming the first problem found.
pub fn validate_schedule(schedule: &[usize], job_count: usize) -> Result<()> {
    if schedule.len() != job_count {
        return Err(FlowShopError::InvalidSchedule(format!(
            "expected {job_count} jobs, got {}",
            schedule.len()
        )));
    }
    let mut seen = vec![false; job_count];
    for (pos, &job) in schedule.iter().enumerate() {
        if job >= job_count {
            return Err(FlowShopError::InvalidSchedule(format!(
                "job {job} at position {pos} is out of range 0..{job_count}"
            )));
        }
        if seen[job] {
            return Err(FlowShopError::InvalidSchedule(format!(
                "job {job} appears more than once"
            )));
        }
        seen[job] = true;
    }
    Ok(())
}
