//! Per-process timing metrics.
//!
//! | Field | Definition |
//! |-------|-----------|
//! | start | CPU assigned (never before arrival) |
//! | completion | start + burst |
//! | turnaround | completion - arrival |
//! | waiting | turnaround - burst |
//! | response | waiting (single contiguous slice) |

use serde::{Deserialize, Serialize};

use super::{ProcessRecord, Time};

/// Timing fields of a dispatched process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProcessTiming {
    pub start_time: Time,
    pub completion_time: Time,
    pub waiting_time: Time,
    pub turnaround_time: Time,
    pub response_time: Time,
}

impl ProcessTiming {
    /// Derives all five fields for `process` dispatched at `current_time`.
    ///
    /// If the CPU frees up before the process arrives, the start is
    /// pushed to the arrival time.
    pub fn derive(process: &ProcessRecord, current_time: Time) -> Self {
        let start_time = current_time.max(process.arrival_time());
        let completion_time = start_time + process.burst_time();
        let turnaround_time = completion_time - process.arrival_time();
        let waiting_time = turnaround_time - process.burst_time();

        Self {
            start_time,
            completion_time,
            waiting_time,
            turnaround_time,
            response_time: waiting_time,
        }
    }

    /// Whether the timing identities hold for `process`.
    ///
    /// Checked on every run by `SimulationRunner` in debug builds.
    pub fn is_consistent_with(&self, process: &ProcessRecord) -> bool {
        self.start_time >= process.arrival_time()
            && self.completion_time == self.start_time + process.burst_time()
            && self.turnaround_time == self.completion_time - process.arrival_time()
            && self.waiting_time == self.turnaround_time - process.burst_time()
            && self.response_time == self.waiting_time
    }
}
