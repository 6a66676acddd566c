//! First-In-First-Out scheduler.
//!
//! # Algorithm
//!
//! 1. Queue every process under the [`Fifo`](rules::Fifo) rule, so ties on
//!    arrival time keep input order.
//! 2. Pop in turn: if the CPU is idle before the process arrives, jump to
//!    its arrival; dispatch; advance the clock to its completion.
//!
//! # Complexity
//! O(n log n).

use tracing::debug;

use super::{Policy, Scheduler};
use crate::dispatching::{rules, DispatchingRule, ReadyQueue};
use crate::models::{CompletedProcess, ProcessRecord, Time};

/// Dispatches in strict arrival order.
///
/// # Example
///
/// ```
/// use u_cpusched::models::ProcessRecord;
/// use u_cpusched::scheduler::{FifoScheduler, Scheduler};
///
/// let processes = ProcessRecord::from_tuples([(0, 5, 2), (1, 3, 1)]).unwrap();
/// let done = FifoScheduler::new().schedule(processes);
/// assert_eq!(done[1].timing.start_time, 5);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FifoScheduler;

impl FifoScheduler {
    pub fn new() -> Self {
        Self
    }
}

impl Scheduler for FifoScheduler {
    fn policy(&self) -> Policy {
        Policy::Fifo
    }

    fn schedule(&self, processes: Vec<ProcessRecord>) -> Vec<CompletedProcess> {
        let mut queue = ReadyQueue::new(rules::Fifo);
        for (seq, process) in processes.into_iter().enumerate() {
            queue.push(seq, process);
        }
        let mut completed = Vec::with_capacity(queue.len());
        let mut current_time: Time = 0;

        while let Some(process) = queue.pop() {
            if current_time < process.arrival_time() {
                current_time = process.arrival_time();
            }

            let done = process.dispatch(current_time);
            debug!(
                policy = rules::Fifo.name(),
                pid = done.id(),
                start = done.timing.start_time,
                completion = done.timing.completion_time,
                "dispatched"
            );
            current_time = done.timing.completion_time;
            completed.push(done);
        }

        completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(done: &[CompletedProcess]) -> Vec<u32> {
        done.iter().map(|c| c.id()).collect()
    }

    #[test]
    fn test_fifo_scenario() {
        let ps = ProcessRecord::from_tuples([(0, 5, 2), (1, 3, 1), (2, 8, 3)]).unwrap();
        let done = FifoScheduler::new().schedule(ps);

        assert_eq!(ids(&done), vec![1, 2, 3]);
        let starts: Vec<_> = done.iter().map(|c| c.timing.start_time).collect();
        let ends: Vec<_> = done.iter().map(|c| c.timing.completion_time).collect();
        assert_eq!(starts, vec![0, 5, 8]);
        assert_eq!(ends, vec![5, 8, 16]);
        assert_eq!(done[1].timing.waiting_time, 4);
        assert_eq!(done[2].timing.waiting_time, 6);
    }

    #[test]
    fn test_fifo_idle_gap() {
        let ps = ProcessRecord::from_tuples([(0, 2, 0), (10, 3, 0)]).unwrap();
        let done = FifoScheduler::new().schedule(ps);
        assert_eq!(done[1].timing.start_time, 10);
        assert_eq!(done[1].timing.completion_time, 13);
        assert_eq!(done[1].timing.waiting_time, 0);
    }

    #[test]
    fn test_fifo_sorts_unsorted_input() {
        let ps = ProcessRecord::from_tuples([(6, 1, 0), (0, 4, 0), (2, 1, 0)]).unwrap();
        let done = FifoScheduler::new().schedule(ps);
        assert_eq!(ids(&done), vec![2, 3, 1]);
    }

    #[test]
    fn test_fifo_equal_arrival_keeps_input_order() {
        // SJF would reorder these; FIFO must not
        let ps = ProcessRecord::from_tuples([(0, 9, 3), (0, 1, 1), (0, 5, 2)]).unwrap();
        let done = FifoScheduler::new().schedule(ps);
        assert_eq!(ids(&done), vec![1, 2, 3]);
    }

    #[test]
    fn test_fifo_late_first_arrival() {
        let ps = ProcessRecord::from_tuples([(4, 2, 0)]).unwrap();
        let done = FifoScheduler::new().schedule(ps);
        assert_eq!(done[0].timing.start_time, 4);
        assert_eq!(done[0].timing.completion_time, 6);
    }

    #[test]
    fn test_fifo_empty() {
        assert!(FifoScheduler::new().schedule(Vec::new()).is_empty());
    }
}
