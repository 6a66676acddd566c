//! Simulation runner.
//!
//! Holds an immutable source process set and runs schedulers against
//! fresh copies of it, so no policy run can observe another's state.

use std::thread;

use serde::{Deserialize, Serialize};
use tracing::{info, info_span, warn};

use super::{Policy, Scheduler, SimulationStats};
use crate::error::SchedError;
use crate::models::{CompletedProcess, ProcessRecord};
use crate::validation::validate_processes;

/// Output of one policy run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Policy that produced this result.
    pub policy: Policy,
    /// Completed processes in dispatch order.
    pub completed: Vec<CompletedProcess>,
    /// Aggregates over `completed`.
    pub stats: SimulationStats,
}

impl SimulationResult {
    /// Process ids in dispatch order.
    pub fn dispatch_order(&self) -> Vec<crate::models::ProcessId> {
        self.completed.iter().map(|c| c.id()).collect()
    }
}

/// Drives schedulers over one input set.
///
/// # Example
///
/// ```
/// use u_cpusched::models::ProcessRecord;
/// use u_cpusched::scheduler::{Policy, SimulationRunner};
///
/// let processes = ProcessRecord::from_tuples([(0, 5, 2), (1, 3, 1), (2, 8, 3)]).unwrap();
/// let runner = SimulationRunner::new(processes);
/// let result = runner.run_policy(Policy::Sjf).unwrap();
/// assert_eq!(result.stats.total_elapsed_time, 16);
/// ```
#[derive(Debug, Clone)]
pub struct SimulationRunner {
    processes: Vec<ProcessRecord>,
}

impl SimulationRunner {
    /// Creates a runner over `processes` (input order).
    pub fn new(processes: Vec<ProcessRecord>) -> Self {
        Self { processes }
    }

    /// The source process set.
    pub fn processes(&self) -> &[ProcessRecord] {
        &self.processes
    }

    /// Runs `scheduler` on a fresh copy of the input.
    ///
    /// # Errors
    /// - [`SchedError::EmptyInput`] if there are no processes.
    /// - [`SchedError::DuplicateId`] if two records share an id.
    pub fn run(&self, scheduler: &dyn Scheduler) -> Result<SimulationResult, SchedError> {
        let policy = scheduler.policy();
        let _span = info_span!("simulate", %policy).entered();

        if let Err(e) = validate_processes(&self.processes) {
            warn!(error = %e, "rejected input");
            return Err(e);
        }

        let completed = scheduler.schedule(self.processes.clone());
        debug_assert_eq!(completed.len(), self.processes.len());
        debug_assert!(completed
            .iter()
            .all(|c| c.timing.is_consistent_with(&c.process)));

        let stats = SimulationStats::calculate(&completed)?;
        info!(
            processes = stats.process_count,
            elapsed = stats.total_elapsed_time,
            throughput = stats.throughput,
            avg_waiting = stats.avg_waiting_time,
            "simulation complete"
        );

        Ok(SimulationResult {
            policy,
            completed,
            stats,
        })
    }

    /// Runs the built-in scheduler for `policy`.
    pub fn run_policy(&self, policy: Policy) -> Result<SimulationResult, SchedError> {
        self.run(policy.scheduler().as_ref())
    }

    /// Runs each policy in turn.
    pub fn run_all(&self, policies: &[Policy]) -> Result<Vec<SimulationResult>, SchedError> {
        policies.iter().map(|&p| self.run_policy(p)).collect()
    }

    /// Runs each policy on its own thread. Results are in `policies` order
    /// and equal those of [`run_all`](Self::run_all).
    pub fn run_all_parallel(
        &self,
        policies: &[Policy],
    ) -> Result<Vec<SimulationResult>, SchedError> {
        thread::scope(|scope| {
            let handles: Vec<_> = policies
                .iter()
                .map(|&p| scope.spawn(move || self.run_policy(p)))
                .collect();

            handles
                .into_iter()
                .map(|h| match h.join() {
                    Ok(result) => result,
                    Err(panic) => std::panic::resume_unwind(panic),
                })
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::{FifoScheduler, SjfScheduler};

    fn scenario() -> Vec<ProcessRecord> {
        ProcessRecord::from_tuples([(0, 5, 2), (1, 3, 1), (2, 8, 3)]).unwrap()
    }

    #[test]
    fn test_run_scenario_all_policies() {
        let runner = SimulationRunner::new(scenario());
        let results = runner.run_all(&Policy::ALL).unwrap();

        assert_eq!(results.len(), 3);
        for result in &results {
            assert_eq!(result.dispatch_order(), vec![1, 2, 3]);
            assert_eq!(result.stats.total_elapsed_time, 16);
            assert_eq!(format!("{:.2}", result.stats.throughput), "0.19");
        }
        assert_eq!(results[0].policy, Policy::Fifo);
        assert_eq!(results[2].policy, Policy::Priority);
    }

    #[test]
    fn test_run_empty_input() {
        let runner = SimulationRunner::new(Vec::new());
        for policy in Policy::ALL {
            assert_eq!(runner.run_policy(policy), Err(SchedError::EmptyInput));
        }
    }

    #[test]
    fn test_run_duplicate_ids() {
        let ps = vec![
            ProcessRecord::new(1, 0, 1, 0).unwrap(),
            ProcessRecord::new(1, 2, 1, 0).unwrap(),
        ];
        let runner = SimulationRunner::new(ps);
        assert_eq!(
            runner.run(&FifoScheduler::new()),
            Err(SchedError::DuplicateId(1))
        );
    }

    #[test]
    fn test_runs_do_not_share_state() {
        let runner = SimulationRunner::new(scenario());
        let first = runner.run(&SjfScheduler::sjf()).unwrap();
        let _fifo = runner.run(&FifoScheduler::new()).unwrap();
        let second = runner.run(&SjfScheduler::sjf()).unwrap();
        assert_eq!(first, second);
        assert_eq!(runner.processes(), scenario().as_slice());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let ps = ProcessRecord::from_tuples([
            (0, 7, 3),
            (2, 4, 1),
            (3, 1, 4),
            (5, 4, 2),
            (30, 2, 0),
        ])
        .unwrap();
        let runner = SimulationRunner::new(ps);
        let seq = runner.run_all(&Policy::ALL).unwrap();
        let par = runner.run_all_parallel(&Policy::ALL).unwrap();
        assert_eq!(seq, par);
    }

    #[test]
    fn test_policies_differ() {
        // P1 long, P2 short but low priority, P3 medium and urgent
        let ps = ProcessRecord::from_tuples([(0, 8, 2), (1, 1, 9), (2, 4, 0)]).unwrap();
        let runner = SimulationRunner::new(ps);
        assert_eq!(runner.run_policy(Policy::Fifo).unwrap().dispatch_order(), vec![1, 2, 3]);
        assert_eq!(runner.run_policy(Policy::Sjf).unwrap().dispatch_order(), vec![1, 2, 3]);
        assert_eq!(
            runner.run_policy(Policy::Priority).unwrap().dispatch_order(),
            vec![1, 3, 2]
        );
    }
}
