//! Flow-shop problem instance.

use crate::error::{FlowShopError, Result};

/// Immutable job/machine/processing-time data of a permutation flow shop.
///
/// Every job visits machines `0..machine_count` in order; the job order is
/// the same on every machine. Construction validates dimensions and times,
/// after which the instance is never mutated and is shared by reference.
///
/// # Examples
///
/// ```
/// use u_flowshop::problem::ProblemInstance;
///
/// let instance = ProblemInstance::from_rows(vec![
///     vec![4.0, 5.0, 6.0],
///     vec![7.0, 8.0, 9.0],
/// ])
/// .unwrap();
/// assert_eq!(instance.job_count(), 2);
/// assert_eq!(instance.machine_count(), 3);
/// assert_eq!(instance.processing_time(1, 2), 9.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawInstance"))]
pub struct ProblemInstance {
    job_count: usize,
    machine_count: usize,
    processing_times: Vec<Vec<f64>>,
}

impl ProblemInstance {
    /// Creates an instance from explicit dimensions and a `job × machine`
    /// processing-time matrix.
    ///
    /// # Errors
    ///
    /// [`FlowShopError::InvalidInstance`] if either dimension is zero, the
    /// matrix shape differs from `job_count × machine_count`, or any time
    /// is negative or not finite.
    pub fn new(
        job_count: usize,
        machine_count: usize,
        processing_times: Vec<Vec<f64>>,
    ) -> Result<Self> {
        if job_count == 0 {
            return Err(FlowShopError::InvalidInstance(
                "job_count must be at least 1".into(),
            ));
        }
        if machine_count == 0 {
            return Err(FlowShopError::InvalidInstance(
                "machine_count must be at least 1".into(),
            ));
        }
        if processing_times.len() != job_count {
            return Err(FlowShopError::InvalidInstance(format!(
                "expected {job_count} rows of processing times, got {}",
                processing_times.len()
            )));
        }
        for (job, row) in processing_times.iter().enumerate() {
            if row.len() != machine_count {
                return Err(FlowShopError::InvalidInstance(format!(
                    "job {job} has {} processing times, expected {machine_count}",
                    row.len()
                )));
            }
            if let Some(machine) = row.iter().position(|t| !t.is_finite() || *t < 0.0) {
                return Err(FlowShopError::InvalidInstance(format!(
                    "processing time of job {job} on machine {machine} must be finite and non-negative, got {}",
                    row[machine]
                )));
            }
        }

        Ok(Self {
            job_count,
            machine_count,
            processing_times,
        })
    }

    /// Creates an instance from a non-empty rectangular matrix, inferring
    /// the dimensions from its shape.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let machine_count = rows.first().map_or(0, Vec::len);
        Self::new(rows.len(), machine_count, rows)
    }

    /// Number of jobs N.
    pub fn job_count(&self) -> usize {
        self.job_count
    }

    /// Number of machines M.
    pub fn machine_count(&self) -> usize {
        self.machine_count
    }

    /// Processing time of `job` on `machine`.
    ///
    /// # Panics
    /// Panics if either index is out of range.
    pub fn processing_time(&self, job: usize, machine: usize) -> f64 {
        self.processing_times[job][machine]
    }

    /// The full processing-time matrix, one row per job.
    pub fn processing_times(&self) -> &[Vec<f64>] {
        &self.processing_times
    }

    /// Total processing time of `job` over all machines.
    pub fn total_processing_time(&self, job: usize) -> f64 {
        self.processing_times[job].iter().sum()
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawInstance {
    job_count: usize,
    machine_count: usize,
    processing_times: Vec<Vec<f64>>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawInstance> for ProblemInstance {
    type Error = FlowShopError;

    fn try_from(raw: RawInstance) -> Result<Self> {
        Self::new(raw.job_count, raw.machine_count, raw.processing_times)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix() -> Vec<Vec<f64>> {
        vec![
            vec![4.0, 5.0, 6.0],
            vec![7.0, 8.0, 9.0],
            vec![3.0, 2.0, 4.0],
        ]
    }

    #[test]
    fn test_new_valid() {
        let inst = ProblemInstance::new(3, 3, matrix()).unwrap();
        assert_eq!(inst.job_count(), 3);
        assert_eq!(inst.machine_count(), 3);
        assert_eq!(inst.processing_time(2, 1), 2.0);
        assert_eq!(inst.total_processing_time(1), 24.0);
    }

    #[test]
    fn test_zero_jobs() {
        let err = ProblemInstance::new(0, 3, vec![]).unwrap_err();
        assert!(matches!(err, FlowShopError::InvalidInstance(_)));
    }

    #[test]
    fn test_zero_machines() {
        let err = ProblemInstance::new(2, 0, vec![vec![], vec![]]).unwrap_err();
        assert!(matches!(err, FlowShopError::InvalidInstance(_)));
    }

    #[test]
    fn test_row_count_mismatch() {
        let err = ProblemInstance::new(4, 3, matrix()).unwrap_err();
        assert!(matches!(err, FlowShopError::InvalidInstance(_)));
    }

    #[test]
    fn test_ragged_matrix() {
        let mut m = matrix();
        m[1].pop();
        let err = ProblemInstance::new(3, 3, m).unwrap_err();
        assert!(matches!(err, FlowShopError::InvalidInstance(_)));
    }

    #[test]
    fn test_negative_time() {
        let mut m = matrix();
        m[2][0] = -1.0;
        let err = ProblemInstance::new(3, 3, m).unwrap_err();
        match err {
            FlowShopError::InvalidInstance(msg) => assert!(msg.contains("job 2 on machine 0")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_non_finite_time() {
        let mut m = matrix();
        m[0][2] = f64::NAN;
        assert!(ProblemInstance::new(3, 3, m).is_err());
    }

    #[test]
    fn test_zero_times_allowed() {
        let inst = ProblemInstance::new(2, 2, vec![vec![0.0, 0.0], vec![0.0, 1.0]]);
        assert!(inst.is_ok());
    }

    #[test]
    fn test_from_rows() {
        let inst = ProblemInstance::from_rows(matrix()).unwrap();
        assert_eq!(inst.job_count(), 3);
        assert_eq!(inst.machine_count(), 3);
        assert!(ProblemInstance::from_rows(vec![]).is_err());
    }
}
