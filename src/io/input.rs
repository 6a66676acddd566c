//! Workload file parsing.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::InputError;
use crate::models::{ProcessId, ProcessRecord, Time};

/// Header written by [`render_workload`].
pub const WORKLOAD_HEADER: &str = "Arrival Burst Priority";

/// Reads and parses a workload file.
///
/// # Errors
/// [`InputError::Io`] if the file cannot be read, otherwise whatever
/// [`parse_workload`] reports.
pub fn load_workload(path: impl AsRef<Path>) -> Result<Vec<ProcessRecord>, InputError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let processes = parse_workload(&text)?;
    debug!(path = %path.display(), count = processes.len(), "loaded workload");
    Ok(processes)
}

/// Parses workload text.
///
/// The first line is skipped. Every other non-blank line must hold
/// exactly three integers: arrival, burst, priority.
///
/// # Errors
/// - [`InputError::MissingHeader`] for empty text.
/// - [`InputError::Parse`] for a malformed line.
/// - [`InputError::Record`] for an out-of-range value.
pub fn parse_workload(text: &str) -> Result<Vec<ProcessRecord>, InputError> {
    let mut lines = text.lines().enumerate();
    if lines.next().is_none() {
        return Err(InputError::MissingHeader);
    }

    let mut processes = Vec::new();
    for (idx, raw) in lines {
        let line = idx + 1;
        if raw.trim().is_empty() {
            continue;
        }

        let fields = raw
            .split_whitespace()
            .map(|tok| {
                tok.parse::<Time>().map_err(|_| InputError::Parse {
                    line,
                    message: format!("expected an integer, found '{tok}'"),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let &[arrival, burst, priority] = fields.as_slice() else {
            return Err(InputError::Parse {
                line,
                message: format!("expected 3 fields (arrival burst priority), found {}", fields.len()),
            });
        };
        let priority = i32::try_from(priority).map_err(|_| InputError::Parse {
            line,
            message: format!("priority {priority} out of range"),
        })?;

        let id = processes.len() as ProcessId + 1;
        let process = ProcessRecord::new(id, arrival, burst, priority)
            .map_err(|source| InputError::Record { line, source })?;
        processes.push(process);
    }

    Ok(processes)
}

/// Renders processes in the format [`parse_workload`] reads.
pub fn render_workload(processes: &[ProcessRecord]) -> String {
    let mut out = String::from(WORKLOAD_HEADER);
    out.push('\n');
    for p in processes {
        out.push_str(&format!(
            "{} {} {}\n",
            p.arrival_time(),
            p.burst_time(),
            p.priority()
        ));
    }
    out
}
