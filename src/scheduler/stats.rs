//! Simulation quality metrics.
//!
//! Folds a completed dispatch sequence into aggregate statistics.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total elapsed time | Completion time of the last process |
//! | Throughput | processes / total elapsed time |
//! | Avg waiting time | mean(start - arrival) |
//! | Avg turnaround time | mean(completion - arrival) |
//! | Avg response time | mean(response) |

use serde::{Deserialize, Serialize};

use crate::error::SchedError;
use crate::models::{CompletedProcess, Time};

/// Aggregate statistics for one policy run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationStats {
    /// Number of completed processes.
    pub process_count: usize,
    /// Final simulated time.
    pub total_elapsed_time: Time,
    /// Completed processes per time unit.
    pub throughput: f64,
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Mean response time.
    pub avg_response_time: f64,
}

impl SimulationStats {
    /// Computes statistics from completed processes.
    ///
    /// # Errors
    /// - [`SchedError::EmptyInput`] if `completed` is empty.
    /// - [`SchedError::ZeroElapsedTime`] if the run ended at time zero.
    pub fn calculate(completed: &[CompletedProcess]) -> Result<Self, SchedError> {
        if completed.is_empty() {
            return Err(SchedError::EmptyInput);
        }

        let total_elapsed_time = completed
            .iter()
            .map(|c| c.timing.completion_time)
            .max()
            .unwrap_or(0);
        if total_elapsed_time <= 0 {
            return Err(SchedError::ZeroElapsedTime);
        }

        // Per-process values fit in `Time`; their sums over a large run may not.
        let mut total_waiting: i128 = 0;
        let mut total_turnaround: i128 = 0;
        let mut total_response: i128 = 0;
        for c in completed {
            total_waiting += i128::from(c.timing.waiting_time);
            total_turnaround += i128::from(c.timing.turnaround_time);
            total_response += i128::from(c.timing.response_time);
        }

        let n = completed.len() as f64;
        Ok(Self {
            process_count: completed.len(),
            total_elapsed_time,
            throughput: n / total_elapsed_time as f64,
            avg_waiting_time: total_waiting as f64 / n,
            avg_turnaround_time: total_turnaround as f64 / n,
            avg_response_time: total_response as f64 / n,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessRecord;

    fn dispatch(id: u32, arrival: i64, burst: i64, at: i64) -> CompletedProcess {
        ProcessRecord::new(id, arrival, burst, 0).unwrap().dispatch(at)
    }

    #[test]
    fn test_stats_basic() {
        // FIFO on (0,5) (1,3) (2,8): waits 0, 4, 6; turnarounds 5, 7, 14
        let done = vec![dispatch(1, 0, 5, 0), dispatch(2, 1, 3, 5), dispatch(3, 2, 8, 8)];
        let stats = SimulationStats::calculate(&done).unwrap();

        assert_eq!(stats.process_count, 3);
        assert_eq!(stats.total_elapsed_time, 16);
        assert!((stats.throughput - 3.0 / 16.0).abs() < 1e-10);
        assert!((stats.avg_waiting_time - 10.0 / 3.0).abs() < 1e-10);
        assert!((stats.avg_turnaround_time - 26.0 / 3.0).abs() < 1e-10);
        assert!((stats.avg_response_time - stats.avg_waiting_time).abs() < 1e-10);
    }

    #[test]
    fn test_stats_single() {
        let stats = SimulationStats::calculate(&[dispatch(1, 4, 2, 0)]).unwrap();
        assert_eq!(stats.total_elapsed_time, 6);
        assert!((stats.throughput - 1.0 / 6.0).abs() < 1e-10);
        assert!((stats.avg_waiting_time - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_stats_empty() {
        assert_eq!(SimulationStats::calculate(&[]), Err(SchedError::EmptyInput));
    }

    #[test]
    fn test_stats_large_times() {
        use crate::models::MAX_TIME;

        // Three maximal bursts all arriving at MAX_TIME
        let mut done = Vec::new();
        let mut now = 0;
        for id in 1..=3 {
            let c = ProcessRecord::new(id, MAX_TIME, MAX_TIME, 0).unwrap().dispatch(now);
            now = c.timing.completion_time;
            done.push(c);
        }
        let stats = SimulationStats::calculate(&done).unwrap();
        assert_eq!(stats.total_elapsed_time, 4 * MAX_TIME);
        // Waits 0, MAX, 2*MAX → mean MAX
        assert!((stats.avg_waiting_time - MAX_TIME as f64).abs() < 1e-3);
        assert!(stats.throughput > 0.0);
    }

    #[test]
    fn test_stats_values_finite() {
        let done = vec![dispatch(1, 0, 1, 0)];
        let stats = SimulationStats::calculate(&done).unwrap();
        assert!(stats.throughput.is_finite());
        assert!(stats.avg_turnaround_time.is_finite());
    }
}
