//! Dispatching rules and the queues they order.
//!
//! A rule maps a process to an ordering key; the ready queue pops the
//! lowest key first. Ties are always broken by earliest arrival, then by
//! input position, so every policy is deterministic.
//!
//! # Usage
//!
//! ```
//! use u_cpusched::dispatching::{rules, ReadyQueue};
//! use u_cpusched::models::ProcessRecord;
//!
//! let mut ready = ReadyQueue::new(rules::Sjf);
//! ready.push(0, ProcessRecord::new(1, 0, 8, 0).unwrap());
//! ready.push(1, ProcessRecord::new(2, 0, 3, 0).unwrap());
//! assert_eq!(ready.pop().unwrap().id(), 2);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

mod queue;
pub mod rules;

pub use queue::{ArrivalQueue, ReadyQueue};

use crate::models::ProcessRecord;
use std::fmt::Debug;

/// Key returned by a dispatching rule.
///
/// Lower keys = dispatched first.
pub type RuleKey = i64;

/// A dispatching rule that orders ready processes.
///
/// # Key Convention
/// **Lower key = dispatched first.** The rule is a pure function of the
/// process; it holds no state shared between runs.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF").
    fn name(&self) -> &'static str;

    /// Ordering key for a process.
    fn key(&self, process: &ProcessRecord) -> RuleKey;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

impl<R: DispatchingRule + ?Sized> DispatchingRule for &R {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn key(&self, process: &ProcessRecord) -> RuleKey {
        (**self).key(process)
    }

    fn description(&self) -> &'static str {
        (**self).description()
    }
}
