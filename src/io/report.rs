//! Report rendering.
//!
//! Fractional statistics use a fixed two-decimal format.

use std::fmt::Write as _;

use crate::scheduler::SimulationResult;

/// Renders the statistics block for one policy run.
///
/// ```text
/// SJF Scheduling Statistics:
/// Number of processes: 3
/// Total elapsed time: 16 units
/// Throughput: 0.19 processes/unit time
/// Average waiting time: 3.33 units
/// Average turnaround time: 8.67 units
/// Average response time: 3.33 units
/// ```
///
/// The block ends with a blank line.
pub fn render_report(result: &SimulationResult) -> String {
    let s = &result.stats;
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "{} Scheduling Statistics:", result.policy.label());
    let _ = writeln!(out, "Number of processes: {}", s.process_count);
    let _ = writeln!(out, "Total elapsed time: {} units", s.total_elapsed_time);
    let _ = writeln!(out, "Throughput: {:.2} processes/unit time", s.throughput);
    let _ = writeln!(out, "Average waiting time: {:.2} units", s.avg_waiting_time);
    let _ = writeln!(out, "Average turnaround time: {:.2} units", s.avg_turnaround_time);
    let _ = writeln!(out, "Average response time: {:.2} units", s.avg_response_time);
    out.push('\n');
    out
}

/// Renders a per-process table in dispatch order.
pub fn render_process_table(result: &SimulationResult) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>4} {:>8} {:>6} {:>9} {:>6} {:>11} {:>8} {:>11} {:>9}",
        "PID", "Arrival", "Burst", "Priority", "Start", "Completion", "Waiting", "Turnaround", "Response"
    );
    for c in &result.completed {
        let p = &c.process;
        let t = &c.timing;
        let _ = writeln!(
            out,
            "{:>4} {:>8} {:>6} {:>9} {:>6} {:>11} {:>8} {:>11} {:>9}",
            p.id(),
            p.arrival_time(),
            p.burst_time(),
            p.priority(),
            t.start_time,
            t.completion_time,
            t.waiting_time,
            t.turnaround_time,
            t.response_time
        );
    }
    out.push('\n');
    out
}

/// Renders results as pretty-printed JSON.
pub fn render_json(results: &[SimulationResult]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(results)
}
