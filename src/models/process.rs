//! Process model.
//!
//! A process is a unit of CPU work with a known burst time. Input
//! attributes are validated once, at construction, and never change.

use serde::{Deserialize, Serialize};

use super::{ProcessTiming, Time, MAX_TIME};
use crate::error::{InvalidReason, SchedError};

/// Process identifier (1-based, assigned by input position).
pub type ProcessId = u32;

/// A process waiting to be scheduled.
///
/// Holds only the immutable input attributes. Dispatching consumes the
/// record and yields a [`CompletedProcess`], so timing fields can only be
/// set once.
///
/// # Priority Convention
/// **Lower value = higher priority.** Priority 1 dispatches before 3.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessRecord {
    id: ProcessId,
    arrival_time: Time,
    burst_time: Time,
    priority: i32,
}

impl ProcessRecord {
    /// Creates a validated process record.
    ///
    /// # Errors
    /// [`SchedError::InvalidRecord`] if `id == 0`, `arrival_time` is outside
    /// `0..=MAX_TIME` or `burst_time` is outside `1..=MAX_TIME`.
    pub fn new(
        id: ProcessId,
        arrival_time: Time,
        burst_time: Time,
        priority: i32,
    ) -> Result<Self, SchedError> {
        let reason = if id == 0 {
            Some(InvalidReason::ZeroId)
        } else if arrival_time < 0 {
            Some(InvalidReason::NegativeArrival(arrival_time))
        } else if arrival_time > MAX_TIME {
            Some(InvalidReason::ArrivalTooLarge(arrival_time))
        } else if burst_time <= 0 {
            Some(InvalidReason::NonPositiveBurst(burst_time))
        } else if burst_time > MAX_TIME {
            Some(InvalidReason::BurstTooLarge(burst_time))
        } else {
            None
        };

        match reason {
            Some(reason) => Err(SchedError::InvalidRecord { id, reason }),
            None => Ok(Self {
                id,
                arrival_time,
                burst_time,
                priority,
            }),
        }
    }

    /// Builds records from `(arrival, burst, priority)` tuples, assigning
    /// ids 1, 2, 3... in order.
    pub fn from_tuples<I>(tuples: I) -> Result<Vec<Self>, SchedError>
    where
        I: IntoIterator<Item = (Time, Time, i32)>,
    {
        tuples
            .into_iter()
            .enumerate()
            .map(|(i, (arrival, burst, priority))| {
                Self::new(i as ProcessId + 1, arrival, burst, priority)
            })
            .collect()
    }

    #[inline]
    pub fn id(&self) -> ProcessId {
        self.id
    }

    #[inline]
    pub fn arrival_time(&self) -> Time {
        self.arrival_time
    }

    #[inline]
    pub fn burst_time(&self) -> Time {
        self.burst_time
    }

    #[inline]
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Assigns the CPU at `current_time` and runs to completion.
    pub fn dispatch(self, current_time: Time) -> CompletedProcess {
        let timing = ProcessTiming::derive(&self, current_time);
        CompletedProcess {
            process: self,
            timing,
        }
    }
}

/// A process that has run to completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedProcess {
    /// Input attributes.
    #[serde(flatten)]
    pub process: ProcessRecord,
    /// Timing fields derived at dispatch.
    #[serde(flatten)]
    pub timing: ProcessTiming,
}

impl CompletedProcess {
    #[inline]
    pub fn id(&self) -> ProcessId {
        self.process.id
    }
}

// Deserialization goes through `new` so a deserialized record is as
// trustworthy as a constructed one.
impl<'de> Deserialize<'de> for ProcessRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            id: ProcessId,
            arrival_time: Time,
            burst_time: Time,
            priority: i32,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::new(raw.id, raw.arrival_time, raw.burst_time, raw.priority)
            .map_err(serde::de::Error::custom)
    }
}
