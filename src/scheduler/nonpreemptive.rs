//! Non-preemptive ready-queue schedulers (SJF and Priority).
//!
//! # Algorithm
//!
//! 1. Admit every not-yet-arrived process with `arrival <= now` into the
//!    ready queue.
//! 2. If the ready queue is non-empty, pop the best process by rule,
//!    dispatch it and advance `now` to its completion.
//! 3. Otherwise the CPU is idle: advance `now` (see [`IdleAdvance`]) and
//!    repeat.
//!
//! Decisions are only taken when the CPU becomes free. A shorter or
//! more urgent process arriving mid-burst waits for the next decision.
//!
//! # Complexity
//! O(n log n) dispatch; `IdleAdvance::UnitStep` adds O(max arrival) idle
//! iterations, at most `MAX_TIME`.

use tracing::{debug, trace};

use super::{Policy, Scheduler};
use crate::dispatching::{rules, ArrivalQueue, DispatchingRule, ReadyQueue};
use crate::models::{CompletedProcess, ProcessRecord, Time};

/// How simulated time moves while the CPU is idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdleAdvance {
    /// Jump straight to the next arrival.
    #[default]
    JumpToNextArrival,
    /// Advance one time unit and re-check admission.
    ///
    /// Idle stretches are bounded by the largest arrival time, which
    /// `ProcessRecord::new` caps at [`MAX_TIME`](crate::models::MAX_TIME).
    UnitStep,
}

/// Greedy non-preemptive scheduler driven by a dispatching rule.
#[derive(Debug, Clone)]
pub struct NonPreemptiveScheduler<R> {
    policy: Policy,
    rule: R,
    idle: IdleAdvance,
}

/// Shortest-Job-First (non-preemptive).
pub type SjfScheduler = NonPreemptiveScheduler<rules::Sjf>;

/// Priority (non-preemptive, lower value first).
pub type PriorityScheduler = NonPreemptiveScheduler<rules::Priority>;

impl NonPreemptiveScheduler<rules::Sjf> {
    /// SJF, idling by jumping to the next arrival.
    pub fn sjf() -> Self {
        Self {
            policy: Policy::Sjf,
            rule: rules::Sjf,
            idle: IdleAdvance::JumpToNextArrival,
        }
    }
}

impl NonPreemptiveScheduler<rules::Priority> {
    /// Priority, idling in unit steps.
    pub fn priority() -> Self {
        Self {
            policy: Policy::Priority,
            rule: rules::Priority,
            idle: IdleAdvance::UnitStep,
        }
    }
}

impl<R: DispatchingRule> NonPreemptiveScheduler<R> {
    /// Sets the idle-time advance mode.
    pub fn with_idle_advance(mut self, idle: IdleAdvance) -> Self {
        self.idle = idle;
        self
    }

    /// Idle-time advance mode.
    pub fn idle_advance(&self) -> IdleAdvance {
        self.idle
    }

    /// Ordering rule.
    pub fn rule(&self) -> &R {
        &self.rule
    }
}

impl<R: DispatchingRule + Clone> Scheduler for NonPreemptiveScheduler<R> {
    fn policy(&self) -> Policy {
        self.policy
    }

    fn schedule(&self, processes: Vec<ProcessRecord>) -> Vec<CompletedProcess> {
        let mut pending = ArrivalQueue::new(processes);
        let mut ready = ReadyQueue::new(self.rule.clone());
        let mut completed = Vec::with_capacity(pending.len());
        let mut current_time: Time = 0;

        while !pending.is_empty() || !ready.is_empty() {
            pending.admit_until(current_time, &mut ready);

            if let Some(process) = ready.pop() {
                let done = process.dispatch(current_time);
                debug!(
                    policy = self.rule.name(),
                    pid = done.id(),
                    start = done.timing.start_time,
                    completion = done.timing.completion_time,
                    waiting = ready.len(),
                    "dispatched"
                );
                current_time = done.timing.completion_time;
                completed.push(done);
                continue;
            }

            // Ready is empty, so `pending` is not and its head arrives later.
            match self.idle {
                IdleAdvance::UnitStep => current_time += 1,
                IdleAdvance::JumpToNextArrival => {
                    if let Some(next) = pending.next_arrival() {
                        current_time = current_time.max(next);
                    }
                }
            }
            trace!(policy = self.rule.name(), now = current_time, "cpu idle");
        }

        completed
    }
}
