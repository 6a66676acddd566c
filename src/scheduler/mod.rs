//! CPU schedulers, simulation runner, and aggregate statistics.
//!
//! # Policies
//!
//! | Policy | Ready order | Idle CPU |
//! |--------|-------------|----------|
//! | FIFO | arrival | jump to next arrival |
//! | SJF | burst time | jump to next arrival |
//! | Priority | numeric priority | unit steps |
//!
//! All three are non-preemptive: a dispatched process runs to completion.
//! Ties fall back to earliest arrival, then input order.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

mod fifo;
mod nonpreemptive;
mod runner;
mod stats;

pub use fifo::FifoScheduler;
pub use nonpreemptive::{IdleAdvance, NonPreemptiveScheduler, PriorityScheduler, SjfScheduler};
pub use runner::{SimulationResult, SimulationRunner};
pub use stats::SimulationStats;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::{CompletedProcess, ProcessRecord};

/// A single-CPU scheduling policy.
///
/// Implementations own their working structures for one call and
/// return every input process exactly once, in dispatch order.
pub trait Scheduler: Send + Sync + fmt::Debug {
    /// Which policy this scheduler implements.
    fn policy(&self) -> Policy;

    /// Runs `processes` to completion.
    fn schedule(&self, processes: Vec<ProcessRecord>) -> Vec<CompletedProcess>;
}

/// Supported scheduling policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// First-In-First-Out.
    Fifo,
    /// Shortest-Job-First, non-preemptive.
    Sjf,
    /// Priority, non-preemptive (lower value first).
    Priority,
}

impl Policy {
    /// All policies, in report order.
    pub const ALL: [Policy; 3] = [Policy::Fifo, Policy::Sjf, Policy::Priority];

    /// Report label.
    pub fn label(&self) -> &'static str {
        match self {
            Policy::Fifo => "FIFO",
            Policy::Sjf => "SJF",
            Policy::Priority => "Priority",
        }
    }

    /// A fresh scheduler for this policy.
    pub fn scheduler(&self) -> Box<dyn Scheduler> {
        match self {
            Policy::Fifo => Box::new(FifoScheduler::new()),
            Policy::Sjf => Box::new(SjfScheduler::sjf()),
            Policy::Priority => Box::new(PriorityScheduler::priority()),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Unknown policy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown scheduling policy '{0}' (expected fifo, sjf or priority)")]
pub struct ParsePolicyError(pub String);

impl FromStr for Policy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" | "fcfs" => Ok(Policy::Fifo),
            "sjf" => Ok(Policy::Sjf),
            "priority" | "prio" => Ok(Policy::Priority),
            other => Err(ParsePolicyError(other.to_string())),
        }
    }
}
