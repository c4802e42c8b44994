//! Process model.
//!
//! A process is one schedulable unit on the simulated CPU. It carries its
//! static definition (id, arrival, burst) and the mutable runtime state a
//! policy updates while simulating it.
//!
//! # Time Representation
//! All times are integer time units on a discrete axis starting at t=0.

use serde::{Deserialize, Serialize};

/// Final per-process metrics, written once when the process completes.
///
/// # Invariants
/// - `turnaround_time = completion_time - arrival_time`
/// - `waiting_time = turnaround_time - burst_time`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    /// Time at which the last unit of work finished.
    pub completion_time: i64,
    /// Time spent ready but not running.
    pub waiting_time: i64,
    /// Time from arrival to completion.
    pub turnaround_time: i64,
}

/// A schedulable process.
///
/// Built from `(id, arrival_time, burst_time)`. `remaining_time` starts at
/// `burst_time` and is only decremented by preemptive or quantized policies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ProcessDefinition")]
pub struct Process {
    /// Caller-assigned unique identifier (positive).
    pub id: u32,
    /// Time unit at which the process becomes schedulable.
    pub arrival_time: i64,
    /// Total CPU time required.
    pub burst_time: i64,
    /// CPU time still owed. `0 <= remaining_time <= burst_time`.
    pub remaining_time: i64,
    metrics: Option<ProcessMetrics>,
}

/// Serialized input form of a process: the static definition only.
#[derive(Debug, Clone, Copy, Deserialize)]
struct ProcessDefinition {
    id: u32,
    arrival_time: i64,
    burst_time: i64,
}

impl From<ProcessDefinition> for Process {
    fn from(def: ProcessDefinition) -> Self {
        Process::new(def.id, def.arrival_time, def.burst_time)
    }
}

impl Process {
    /// Creates a process with `remaining_time = burst_time`.
    ///
    /// No checks happen here; run [`crate::validation::validate_processes`]
    /// (or go through [`crate::scheduler::simulate`]) to reject bad input.
    pub fn new(id: u32, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            remaining_time: burst_time,
            metrics: None,
        }
    }

    /// Returns a pristine copy: same definition, full remaining time, no metrics.
    pub fn fresh(&self) -> Self {
        Self::new(self.id, self.arrival_time, self.burst_time)
    }

    /// Whether the process has been completed by a policy.
    pub fn is_complete(&self) -> bool {
        self.metrics.is_some()
    }

    /// Whether the process has arrived by `time`.
    #[inline]
    pub fn has_arrived(&self, time: i64) -> bool {
        self.arrival_time <= time
    }

    /// Final metrics, `None` until the process completes.
    pub fn metrics(&self) -> Option<&ProcessMetrics> {
        self.metrics.as_ref()
    }

    /// Completion time, if complete.
    pub fn completion_time(&self) -> Option<i64> {
        self.metrics.map(|m| m.completion_time)
    }

    /// Waiting time, if complete.
    pub fn waiting_time(&self) -> Option<i64> {
        self.metrics.map(|m| m.waiting_time)
    }

    /// Turnaround time, if complete.
    pub fn turnaround_time(&self) -> Option<i64> {
        self.metrics.map(|m| m.turnaround_time)
    }

    /// Runs the process for `units` time units (clamped to what is left).
    ///
    /// Returns the number of units actually consumed.
    pub(crate) fn run_for(&mut self, units: i64) -> i64 {
        let used = units.clamp(0, self.remaining_time);
        self.remaining_time -= used;
        used
    }

    /// Marks the process complete at `completion_time`.
    ///
    /// Metrics are immutable once set; a second call is ignored.
    pub(crate) fn complete_at(&mut self, completion_time: i64) {
        if self.metrics.is_none() {
            self.remaining_time = 0;
            self.metrics = Some(crate::scheduler::compute_metrics(self, completion_time));
        }
    }
}
