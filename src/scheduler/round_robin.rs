//! Round-Robin with a fixed time quantum.
//!
//! # Algorithm
//! 1. Seed a FIFO ready queue with every process in arrival order
//!    (ties keep input order).
//! 2. Dequeue the head; if it has not arrived yet, jump the clock to its
//!    arrival.
//! 3. Run it for `min(remaining, quantum)` units as one interval.
//! 4. Re-enqueue at the tail if work remains, otherwise complete it.
//!
//! The queue is never re-sorted after seeding; processes arriving during a
//! slice do not jump ahead of it.

use std::collections::VecDeque;

use tracing::trace;

use super::{arrival_order, Policy, SchedulingPolicy};
use crate::models::{Process, Timeline};
use crate::validation::{validate_round_robin, ValidationResult};

/// Round-Robin scheduling.
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    quantum: i64,
}

impl RoundRobin {
    /// Creates a Round-Robin policy. The quantum is checked at run time.
    pub fn new(quantum: i64) -> Self {
        Self { quantum }
    }

    /// The time quantum.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }
}

impl SchedulingPolicy for RoundRobin {
    fn policy(&self) -> Policy {
        Policy::RoundRobin {
            quantum: self.quantum,
        }
    }

    fn validate(&self, processes: &[Process]) -> ValidationResult {
        validate_round_robin(processes, self.quantum)
    }

    fn run(&self, processes: &mut [Process]) -> Timeline {
        let mut timeline = Timeline::new();
        let mut ready: VecDeque<usize> = arrival_order(processes).into();
        let mut time = 0;

        while let Some(i) = ready.pop_front() {
            let p = &mut processes[i];
            time = time.max(p.arrival_time);

            let start = time;
            time += p.run_for(self.quantum);
            trace!(pid = p.id, start, end = time, remaining = p.remaining_time, "slice");
            timeline.push(p.id, start, time);

            if p.remaining_time > 0 {
                ready.push_back(i);
            } else {
                p.complete_at(time);
            }
        }

        timeline
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExecutionInterval;
    use crate::scheduler::simulate_with;
    use crate::validation::ValidationErrorKind;

    fn sample() -> Vec<Process> {
        vec![
            Process::new(1, 0, 5),
            Process::new(2, 1, 3),
            Process::new(3, 2, 8),
        ]
    }

    #[test]
    fn test_rr_quantum_two() {
        let run = simulate_with(&RoundRobin::new(2), &sample()).unwrap();

        let expected: Vec<ExecutionInterval> = [
            (1, 0, 2),
            (2, 2, 4),
            (3, 4, 6),
            (1, 6, 8),
            (2, 8, 9),
            (3, 9, 11),
            (1, 11, 12),
            (3, 12, 14),
            (3, 14, 16),
        ]
        .iter()
        .map(|&(id, s, e)| ExecutionInterval::new(id, s, e))
        .collect();
        assert_eq!(run.timeline.intervals(), expected.as_slice());
        assert_eq!(run.timeline.busy_time(), 16);

        assert_eq!(run.process(1).unwrap().completion_time(), Some(12));
        assert_eq!(run.process(2).unwrap().completion_time(), Some(9));
        assert_eq!(run.process(3).unwrap().completion_time(), Some(16));
        assert_eq!(run.process(1).unwrap().waiting_time(), Some(7));
    }

    #[test]
    fn test_rr_slices_never_exceed_quantum() {
        let run = simulate_with(&RoundRobin::new(3), &sample()).unwrap();
        assert!(run.timeline.iter().all(|i| i.duration() <= 3));
        // P2 has exactly 3 units → a single full slice
        assert_eq!(run.timeline.intervals_for(2).len(), 1);
    }

    #[test]
    fn test_rr_large_quantum_is_fcfs() {
        let run = simulate_with(&RoundRobin::new(100), &sample()).unwrap();
        let fcfs = simulate_with(&crate::scheduler::Fcfs, &sample()).unwrap();
        assert_eq!(run.timeline, fcfs.timeline);
    }

    #[test]
    fn test_rr_jumps_to_head_arrival() {
        let processes = vec![Process::new(1, 4, 3)];
        let run = simulate_with(&RoundRobin::new(2), &processes).unwrap();
        assert_eq!(
            run.timeline.intervals(),
            &[
                ExecutionInterval::new(1, 4, 6),
                ExecutionInterval::new(1, 6, 7),
            ]
        );
    }

    #[test]
    fn test_rr_rejects_non_positive_quantum() {
        let errors = simulate_with(&RoundRobin::new(-1), &sample()).unwrap_err();
        assert!(errors.contains_kind(&ValidationErrorKind::InvalidQuantum));
    }
}
