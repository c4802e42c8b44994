//! Per-process metrics calculator.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Completion | Time the last unit of work finished |
//! | Turnaround | completion - arrival |
//! | Waiting | turnaround - burst |

use crate::models::{Process, ProcessMetrics};

/// Derives the final metrics of `process` from its completion time.
///
/// Pure: reads only the static arrival and burst times.
pub fn compute_metrics(process: &Process, completion_time: i64) -> ProcessMetrics {
    let turnaround_time = completion_time - process.arrival_time;
    ProcessMetrics {
        completion_time,
        waiting_time: turnaround_time - process.burst_time,
        turnaround_time,
    }
}
