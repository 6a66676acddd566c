//! Workload files and report rendering.
//!
//! The scheduling core never touches files or text. This module turns a
//! workload file into [`ProcessRecord`](crate::models::ProcessRecord)s and
//! turns [`SimulationResult`](crate::scheduler::SimulationResult)s into
//! human-readable or JSON reports.
//!
//! # Workload Format
//!
//! ```text
//! Arrival Burst Priority
//! 0 5 2
//! 1 3 1
//! 2 8 3
//! ```
//!
//! The first line is a header and is ignored. Ids are assigned 1, 2, 3...
//! in file order.

mod input;
mod report;

pub use input::{load_workload, parse_workload, render_workload, WORKLOAD_HEADER};
pub use report::{render_json, render_process_table, render_report};
