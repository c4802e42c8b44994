//! Shortest Remaining Time First (preemptive SJF).
//!
//! # Algorithm
//! Every time unit:
//! 1. Among arrived processes with work left, pick the smallest remaining
//!    time (ties: earliest arrival, then lowest id).
//! 2. Run it for exactly one unit; consecutive units of the same process
//!    are coalesced into one interval.
//! 3. If nothing is ready, jump the clock to the next arrival.
//!
//! The choice is re-evaluated on every tick rather than only on arrivals,
//! so the tie-break order is applied literally.
//!
//! # Complexity
//! O(n * B) where B = sum of burst times.

use tracing::trace;

use super::{next_arrival, Policy, SchedulingPolicy};
use crate::models::{Process, Timeline};

/// Preemptive shortest remaining time first.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestRemainingTimeFirst;

impl SchedulingPolicy for ShortestRemainingTimeFirst {
    fn policy(&self) -> Policy {
        Policy::Srtf
    }

    fn run(&self, processes: &mut [Process]) -> Timeline {
        let mut timeline = Timeline::new();
        let mut unfinished = processes.len();
        let mut time = 0;

        while unfinished > 0 {
            let pick = processes
                .iter()
                .enumerate()
                .filter(|(_, p)| p.remaining_time > 0 && p.has_arrived(time))
                .min_by_key(|(_, p)| (p.remaining_time, p.arrival_time, p.id))
                .map(|(i, _)| i);

            let Some(i) = pick else {
                match next_arrival(processes.iter().filter(|p| p.remaining_time > 0)) {
                    Some(arrival) => time = arrival,
                    None => break,
                }
                continue;
            };

            let p = &mut processes[i];
            let start = time;
            time += p.run_for(1);
            trace!(pid = p.id, tick = start, remaining = p.remaining_time, "tick");
            timeline.extend(p.id, start, time);

            if p.remaining_time == 0 {
                p.complete_at(time);
                unfinished -= 1;
            }
        }

        timeline
    }
}
