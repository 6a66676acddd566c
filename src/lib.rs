//! CPU scheduling simulator.
//!
//! Computes per-process timing metrics (start, completion, waiting,
//! turnaround, response) and aggregate statistics (throughput, averages)
//! for a synthetic workload under three single-CPU, non-preemptive
//! policies: FIFO, SJF and Priority.
//!
//! # Modules
//!
//! - **`models`**: `ProcessRecord`, `ProcessTiming`, `CompletedProcess`
//! - **`dispatching`**: ordering rules and the arrival / ready queues
//! - **`scheduler`**: `FifoScheduler`, `SjfScheduler`, `PriorityScheduler`,
//!   `SimulationRunner`, `SimulationStats`
//! - **`validation`**: whole-input checks (empty set, duplicate ids)
//! - **`io`**: workload file parsing and report rendering
//! - **`workload`**: seeded synthetic workloads
//!
//! # Example
//!
//! ```
//! use u_cpusched::models::ProcessRecord;
//! use u_cpusched::scheduler::{Policy, SimulationRunner};
//!
//! let processes = ProcessRecord::from_tuples([(0, 5, 2), (1, 3, 1), (2, 8, 3)]).unwrap();
//! let runner = SimulationRunner::new(processes);
//!
//! for result in runner.run_all(&Policy::ALL).unwrap() {
//!     assert_eq!(result.stats.total_elapsed_time, 16);
//! }
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod config;
pub mod dispatching;
pub mod error;
pub mod io;
pub mod logging;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::{InputError, InvalidReason, SchedError};
