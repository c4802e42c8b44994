//! Timeline (execution log) model.
//!
//! A timeline is the append-only record of which process held the single
//! simulated CPU, and when. It is produced by one policy run and is
//! read-only afterwards.

use serde::{Deserialize, Serialize};

/// One contiguous stretch of CPU time given to a process.
///
/// Covers `[start, end)`; `end > start` always holds for stored intervals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionInterval {
    /// Process that ran.
    pub process_id: u32,
    /// Start time (inclusive).
    pub start: i64,
    /// End time (exclusive).
    pub end: i64,
}

/// Ordered sequence of execution intervals for one run.
///
/// Intervals are kept in the order the engine executed them, which is
/// non-decreasing by `start`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Timeline {
    intervals: Vec<ExecutionInterval>,
}

impl ExecutionInterval {
    /// Creates a new interval.
    pub fn new(process_id: u32, start: i64, end: i64) -> Self {
        Self {
            process_id,
            start,
            end,
        }
    }

    /// Length of the interval.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `[start, end)` for `process_id` as a separate interval.
    ///
    /// Empty or inverted ranges are dropped.
    pub fn push(&mut self, process_id: u32, start: i64, end: i64) {
        if end <= start {
            return;
        }
        debug_assert!(self.intervals.last().map_or(true, |last| last.end <= start));
        self.intervals.push(ExecutionInterval::new(process_id, start, end));
    }

    /// Appends `[start, end)`, coalescing with the last interval when the
    /// same process continues without a gap.
    pub fn extend(&mut self, process_id: u32, start: i64, end: i64) {
        if end <= start {
            return;
        }
        match self.intervals.last_mut() {
            Some(last) if last.process_id == process_id && last.end == start => last.end = end,
            _ => self.push(process_id, start, end),
        }
    }

    /// All intervals in execution order.
    pub fn intervals(&self) -> &[ExecutionInterval] {
        &self.intervals
    }

    /// Iterates over intervals in execution order.
    pub fn iter(&self) -> std::slice::Iter<'_, ExecutionInterval> {
        self.intervals.iter()
    }

    /// Number of intervals.
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Whether nothing ran.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Intervals belonging to one process.
    pub fn intervals_for(&self, process_id: u32) -> Vec<&ExecutionInterval> {
        self.intervals
            .iter()
            .filter(|i| i.process_id == process_id)
            .collect()
    }

    /// Total CPU time given to one process.
    pub fn busy_time_for(&self, process_id: u32) -> i64 {
        self.intervals
            .iter()
            .filter(|i| i.process_id == process_id)
            .map(ExecutionInterval::duration)
            .sum()
    }

    /// End of the last interval of a process.
    pub fn completion_time_of(&self, process_id: u32) -> Option<i64> {
        self.intervals
            .iter()
            .filter(|i| i.process_id == process_id)
            .map(|i| i.end)
            .max()
    }

    /// Latest end time across all intervals (0 when empty).
    pub fn makespan(&self) -> i64 {
        self.intervals.last().map(|i| i.end).unwrap_or(0)
    }

    /// Total CPU time used by all processes.
    pub fn busy_time(&self) -> i64 {
        self.intervals.iter().map(ExecutionInterval::duration).sum()
    }

    /// Time in `[0, makespan)` during which the CPU sat idle.
    pub fn idle_time(&self) -> i64 {
        self.makespan() - self.busy_time()
    }

    /// Number of times the CPU switched from one process to another.
    pub fn context_switches(&self) -> usize {
        self.intervals
            .windows(2)
            .filter(|w| w[0].process_id != w[1].process_id)
            .count()
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a ExecutionInterval;
    type IntoIter = std::slice::Iter<'a, ExecutionInterval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}
