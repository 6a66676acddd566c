//! Error types.
//!
//! [`SchedError`] covers the scheduling core: invalid process records and
//! input sets that have no defined statistics. [`InputError`] covers the
//! workload file boundary and wraps core errors with the offending line.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::{ProcessId, Time};

/// Errors raised by the scheduling core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedError {
    /// No processes to schedule; aggregates would divide by zero.
    #[error("no processes to schedule")]
    EmptyInput,

    /// A process record failed construction-time validation.
    #[error("invalid process record {id}: {reason}")]
    InvalidRecord {
        /// Id of the rejected record.
        id: ProcessId,
        /// What was wrong with it.
        reason: InvalidReason,
    },

    /// Two records share an id.
    #[error("duplicate process id {0}")]
    DuplicateId(ProcessId),

    /// The run finished at time zero, so throughput is undefined.
    #[error("simulation elapsed zero time units")]
    ZeroElapsedTime,
}

/// Why a process record was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    /// Ids are 1-based.
    #[error("id must be positive")]
    ZeroId,
    /// Arrival time must be `>= 0`.
    #[error("negative arrival time {0}")]
    NegativeArrival(Time),
    /// Burst time must be `> 0`.
    #[error("non-positive burst time {0}")]
    NonPositiveBurst(Time),
    /// Arrival time must be `<= MAX_TIME`.
    #[error("arrival time {0} exceeds {max}", max = crate::models::MAX_TIME)]
    ArrivalTooLarge(Time),
    /// Burst time must be `<= MAX_TIME`.
    #[error("burst time {0} exceeds {max}", max = crate::models::MAX_TIME)]
    BurstTooLarge(Time),
}

/// Errors raised while reading a workload file.
#[derive(Error, Debug)]
pub enum InputError {
    /// The file could not be read.
    #[error("error opening file {path}: {source}")]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file has no header line.
    #[error("workload input is empty (missing header line)")]
    MissingHeader,

    /// A line did not hold exactly three integers.
    #[error("line {line}: {message}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// Human-readable description.
        message: String,
    },

    /// A line parsed but described an invalid process.
    #[error("line {line}: {source}")]
    Record {
        /// 1-based line number.
        line: usize,
        /// Validation failure.
        #[source]
        source: SchedError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_record_message() {
        let err = SchedError::InvalidRecord {
            id: 3,
            reason: InvalidReason::NonPositiveBurst(0),
        };
        assert_eq!(
            err.to_string(),
            "invalid process record 3: non-positive burst time 0"
        );
    }

    #[test]
    fn test_record_error_keeps_source() {
        let err = InputError::Record {
            line: 4,
            source: SchedError::InvalidRecord {
                id: 3,
                reason: InvalidReason::NegativeArrival(-2),
            },
        };
        assert_eq!(
            err.to_string(),
            "line 4: invalid process record 3: negative arrival time -2"
        );
        assert!(std::error::Error::source(&err).is_some());
    }
}
