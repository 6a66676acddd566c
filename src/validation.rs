//! Input validation for simulation runs.
//!
//! Field-level checks (arrival, burst, id) happen when a
//! [`ProcessRecord`] is built. This module checks the set as a whole:
//! - Empty input
//! - Duplicate ids

use std::collections::HashSet;

use crate::error::SchedError;
use crate::models::ProcessRecord;

/// Validates a process set before scheduling.
///
/// Checks:
/// 1. At least one process
/// 2. No duplicate process ids
///
/// # Returns
/// `Ok(())` if all checks pass, otherwise the first problem found.
pub fn validate_processes(processes: &[ProcessRecord]) -> Result<(), SchedError> {
    if processes.is_empty() {
        return Err(SchedError::EmptyInput);
    }

    let mut seen = HashSet::with_capacity(processes.len());
    for p in processes {
        if !seen.insert(p.id()) {
            return Err(SchedError::DuplicateId(p.id()));
        }
    }

    Ok(())
}
