//! Arrival and ready queues.
//!
//! Schedulers keep two structures: processes that have not arrived yet
//! ([`ArrivalQueue`], ordered by arrival time) and processes that are
//! eligible to run ([`ReadyQueue`], ordered by a dispatching rule).

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, VecDeque};

use super::{DispatchingRule, RuleKey};
use crate::models::{ProcessRecord, Time};

/// Heap entry. Ordered by `(key, arrival, seq)`; the record itself never
/// takes part in the comparison.
#[derive(Debug)]
struct ReadyEntry {
    key: RuleKey,
    arrival: Time,
    seq: usize,
    process: ProcessRecord,
}

impl ReadyEntry {
    fn rank(&self) -> (RuleKey, Time, usize) {
        (self.key, self.arrival, self.seq)
    }
}

impl PartialEq for ReadyEntry {
    fn eq(&self, other: &Self) -> bool {
        self.rank() == other.rank()
    }
}

impl Eq for ReadyEntry {}

impl PartialOrd for ReadyEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ReadyEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

/// Ready structure ordered by a dispatching rule.
///
/// Pops the process with the lowest rule key. Equal keys fall back to
/// earliest arrival time, then to the lowest input position `seq`.
#[derive(Debug)]
pub struct ReadyQueue<R> {
    rule: R,
    heap: BinaryHeap<Reverse<ReadyEntry>>,
}

impl<R: DispatchingRule> ReadyQueue<R> {
    /// Creates an empty queue ordered by `rule`.
    pub fn new(rule: R) -> Self {
        Self {
            rule,
            heap: BinaryHeap::new(),
        }
    }

    /// Adds a process. `seq` is its position in the input set.
    pub fn push(&mut self, seq: usize, process: ProcessRecord) {
        let key = self.rule.key(&process);
        self.heap.push(Reverse(ReadyEntry {
            key,
            arrival: process.arrival_time(),
            seq,
            process,
        }));
    }

    /// Removes the next process to dispatch.
    pub fn pop(&mut self) -> Option<ProcessRecord> {
        self.heap.pop().map(|Reverse(entry)| entry.process)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

/// Processes that have not yet arrived, in arrival order.
///
/// Sorting is stable: equal arrival times keep input order.
#[derive(Debug, Clone, Default)]
pub struct ArrivalQueue {
    pending: VecDeque<(usize, ProcessRecord)>,
}

impl ArrivalQueue {
    /// Builds the queue from processes in input order.
    pub fn new(processes: Vec<ProcessRecord>) -> Self {
        let mut pending: Vec<(usize, ProcessRecord)> = processes.into_iter().enumerate().collect();
        pending.sort_by_key(|(_, p)| p.arrival_time());
        Self {
            pending: pending.into(),
        }
    }

    /// Arrival time of the next process to arrive.
    pub fn next_arrival(&self) -> Option<Time> {
        self.pending.front().map(|(_, p)| p.arrival_time())
    }

    /// Moves every process with `arrival_time <= now` into `ready`.
    ///
    /// Returns the number admitted.
    pub fn admit_until<R: DispatchingRule>(&mut self, now: Time, ready: &mut ReadyQueue<R>) -> usize {
        let mut admitted = 0;
        while self.next_arrival().is_some_and(|t| t <= now) {
            if let Some((seq, process)) = self.pending.pop_front() {
                ready.push(seq, process);
                admitted += 1;
            }
        }
        admitted
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
