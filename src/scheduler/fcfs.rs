//! First-Come, First-Served.
//!
//! # Algorithm
//! 1. Order processes by arrival time (ties keep input order).
//! 2. Run each to completion in that order, jumping the clock forward to
//!    the arrival when the CPU would otherwise sit idle.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the run.

use tracing::trace;

use super::{arrival_order, Policy, SchedulingPolicy};
use crate::models::{Process, Timeline};

/// Non-preemptive first-come, first-served.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl SchedulingPolicy for Fcfs {
    fn policy(&self) -> Policy {
        Policy::Fcfs
    }

    fn run(&self, processes: &mut [Process]) -> Timeline {
        let mut timeline = Timeline::new();
        let mut time = 0;

        for i in arrival_order(processes) {
            let p = &mut processes[i];
            time = time.max(p.arrival_time);

            let start = time;
            time += p.run_for(p.burst_time);
            trace!(pid = p.id, start, end = time, "dispatch");

            timeline.push(p.id, start, time);
            p.complete_at(time);
        }

        timeline
    }
}
