//! Process domain models.
//!
//! Provides the input record consumed by every scheduler and the
//! completed record each scheduler produces.
//!
//! # Lifecycle
//!
//! | Stage | Type | Timing |
//! |-------|------|--------|
//! | Parsed / constructed | `ProcessRecord` | none |
//! | Dispatched | `CompletedProcess` | `ProcessTiming`, final |

mod process;
mod timing;

pub use process::{CompletedProcess, ProcessId, ProcessRecord};
pub use timing::ProcessTiming;

/// Simulated time in abstract units (ticks).
pub type Time = i64;

/// Largest accepted arrival or burst time (`i32::MAX`).
///
/// Keeps every completion time and every metric sum well inside `Time`.
pub const MAX_TIME: Time = i32::MAX as Time;
