//! Shortest Job First (non-preemptive).
//!
//! # Algorithm
//! 1. Among processes that have arrived and not yet run, pick the one with
//!    the smallest burst time (ties: earliest arrival, then lowest id).
//! 2. Run it to completion.
//! 3. If nothing has arrived, jump the clock to the next arrival.
//!
//! # Complexity
//! O(n^2) selection scans.
//!
//! # Reference
//! Smith (1956), SPT is optimal for mean flow time on a single machine.

use tracing::trace;

use super::{next_arrival, Policy, SchedulingPolicy};
use crate::models::{Process, Timeline};

/// Non-preemptive shortest job first.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestJobFirst;

impl SchedulingPolicy for ShortestJobFirst {
    fn policy(&self) -> Policy {
        Policy::Sjf
    }

    fn run(&self, processes: &mut [Process]) -> Timeline {
        let mut timeline = Timeline::new();
        let mut pending: Vec<usize> = (0..processes.len()).collect();
        let mut time = 0;

        while !pending.is_empty() {
            let pick = pending
                .iter()
                .enumerate()
                .filter(|&(_, &i)| processes[i].has_arrived(time))
                .min_by_key(|&(_, &i)| {
                    let p = &processes[i];
                    (p.burst_time, p.arrival_time, p.id)
                })
                .map(|(pos, _)| pos);

            let Some(pos) = pick else {
                match next_arrival(pending.iter().map(|&i| &processes[i])) {
                    Some(arrival) => time = arrival,
                    None => break,
                }
                continue;
            };

            let p = &mut processes[pending.swap_remove(pos)];
            let start = time;
            time += p.run_for(p.burst_time);
            trace!(pid = p.id, start, end = time, "dispatch");

            timeline.push(p.id, start, time);
            p.complete_at(time);
        }

        timeline
    }
}
