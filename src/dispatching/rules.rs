//! Built-in dispatching rules.
//!
//! - **FIFO**: arrival time
//! - **SJF**: burst time
//! - **PRIORITY**: numeric priority (lower value first)
//!
//! # Key Convention
//! All rules return lower keys for processes that should run first.

use super::{DispatchingRule, RuleKey};
use crate::models::ProcessRecord;

/// First In First Out.
///
/// Orders processes by arrival time.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fifo;

impl DispatchingRule for Fifo {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn key(&self, process: &ProcessRecord) -> RuleKey {
        process.arrival_time()
    }

    fn description(&self) -> &'static str {
        "First In First Out"
    }
}

/// Shortest Job First.
///
/// Orders processes by burst time. Minimizes mean waiting time among
/// non-preemptive policies when all jobs are available together.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on single machine.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjf;

impl DispatchingRule for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn key(&self, process: &ProcessRecord) -> RuleKey {
        process.burst_time()
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// Static priority.
///
/// Lower numeric priority runs first.
#[derive(Debug, Clone, Copy, Default)]
pub struct Priority;

impl DispatchingRule for Priority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn key(&self, process: &ProcessRecord) -> RuleKey {
        RuleKey::from(process.priority())
    }

    fn description(&self) -> &'static str {
        "Process Priority"
    }
}
