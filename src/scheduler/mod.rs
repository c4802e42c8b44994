//! CPU scheduling policies and run evaluation.
//!
//! Simulates a single CPU on a discrete time axis. Each policy takes an
//! independent copy of the process set and produces a [`Timeline`] plus
//! final per-process metrics.
//!
//! # Policies
//!
//! | Policy | Preemptive | Selection |
//! |--------|-----------|-----------|
//! | [`Fcfs`] | no | earliest arrival |
//! | [`ShortestJobFirst`] | no | smallest burst among arrived |
//! | [`ShortestRemainingTimeFirst`] | yes, every tick | smallest remaining among arrived |
//! | [`RoundRobin`] | at quantum expiry | FIFO ready queue |
//!
//! # Clock
//!
//! Time starts at 0 and only moves forward. When nothing is ready the clock
//! jumps to the next arrival; idle time is never recorded as an interval.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod compare;
mod fcfs;
mod kpi;
mod metrics;
mod request;
mod round_robin;
mod run;
mod sjf;
mod srtf;

pub use compare::{compare_policies, validate_policies};
pub use fcfs::Fcfs;
pub use kpi::RunKpi;
pub use metrics::compute_metrics;
pub use request::{Policy, PolicyKind, SimulationRequest, DEFAULT_QUANTUM};
pub use round_robin::RoundRobin;
pub use run::ScheduleRun;
pub use sjf::ShortestJobFirst;
pub use srtf::ShortestRemainingTimeFirst;

use std::fmt::Debug;

use tracing::debug;

use crate::models::{Process, Timeline};
use crate::validation::{validate_processes, ValidationErrors, ValidationResult};

/// A CPU scheduling policy.
///
/// Implementations are pure simulations: they only touch the process slice
/// they are handed and never perform I/O.
pub trait SchedulingPolicy: Send + Sync + Debug {
    /// Identity of this policy (used for reporting).
    fn policy(&self) -> Policy;

    /// Checks input before the run starts.
    fn validate(&self, processes: &[Process]) -> ValidationResult {
        validate_processes(processes)
    }

    /// Simulates the policy over validated, pristine processes.
    ///
    /// Must complete every process and return the full timeline.
    fn run(&self, processes: &mut [Process]) -> Timeline;
}

/// Runs one policy on a fresh copy of `processes`.
///
/// The caller's processes are never modified. Invalid input rejects the
/// whole run; no partial timeline is produced.
///
/// # Example
///
/// ```
/// use u_cpusched::models::Process;
/// use u_cpusched::scheduler::{simulate, Policy};
///
/// let processes = vec![
///     Process::new(1, 0, 5),
///     Process::new(2, 1, 3),
///     Process::new(3, 2, 8),
/// ];
/// let run = simulate(Policy::Fcfs, &processes).unwrap();
/// assert_eq!(run.timeline.makespan(), 16);
/// assert_eq!(run.process(2).unwrap().waiting_time(), Some(4));
/// ```
pub fn simulate(policy: Policy, processes: &[Process]) -> Result<ScheduleRun, ValidationErrors> {
    match policy {
        Policy::Fcfs => simulate_with(&Fcfs, processes),
        Policy::Sjf => simulate_with(&ShortestJobFirst, processes),
        Policy::Srtf => simulate_with(&ShortestRemainingTimeFirst, processes),
        Policy::RoundRobin { quantum } => simulate_with(&RoundRobin::new(quantum), processes),
    }
}

/// Runs any [`SchedulingPolicy`] on a fresh copy of `processes`.
pub fn simulate_with<P>(policy: &P, processes: &[Process]) -> Result<ScheduleRun, ValidationErrors>
where
    P: SchedulingPolicy + ?Sized,
{
    policy.validate(processes)?;

    let mut working: Vec<Process> = processes.iter().map(Process::fresh).collect();
    let _span = tracing::debug_span!("simulate", policy = policy.policy().name()).entered();
    debug!(processes = working.len(), "starting run");

    let timeline = policy.run(&mut working);

    debug!(
        intervals = timeline.len(),
        makespan = timeline.makespan(),
        "run finished"
    );
    Ok(ScheduleRun::new(policy.policy(), timeline, working))
}

/// Earliest arrival among the given processes.
fn next_arrival<'a>(candidates: impl Iterator<Item = &'a Process>) -> Option<i64> {
    candidates.map(|p| p.arrival_time).min()
}

/// Process indices sorted by arrival; ties keep input order.
fn arrival_order(processes: &[Process]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..processes.len()).collect();
    order.sort_by_key(|&i| processes[i].arrival_time);
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    fn sample() -> Vec<Process> {
        vec![
            Process::new(1, 0, 5),
            Process::new(2, 1, 3),
            Process::new(3, 2, 8),
        ]
    }

    fn all_policies() -> Vec<Policy> {
        vec![
            Policy::Fcfs,
            Policy::Sjf,
            Policy::Srtf,
            Policy::RoundRobin { quantum: 2 },
        ]
    }

    #[test]
    fn test_caller_processes_untouched() {
        let processes = sample();
        for policy in all_policies() {
            simulate(policy, &processes).unwrap();
        }
        assert_eq!(processes, sample());
    }

    #[test]
    fn test_empty_input_all_policies() {
        for policy in all_policies() {
            let run = simulate(policy, &[]).unwrap();
            assert!(run.timeline.is_empty());
            assert!(run.processes.is_empty());
        }
    }

    #[test]
    fn test_invalid_burst_rejected_by_all() {
        let processes = vec![Process::new(1, 0, 0)];
        for policy in all_policies() {
            let errors = simulate(policy, &processes).unwrap_err();
            assert!(errors.contains_kind(&ValidationErrorKind::InvalidProcessDefinition));
        }
    }

    #[test]
    fn test_invalid_quantum_rejected() {
        let errors = simulate(Policy::RoundRobin { quantum: 0 }, &sample()).unwrap_err();
        assert!(errors.contains_kind(&ValidationErrorKind::InvalidQuantum));
    }

    #[test]
    fn test_time_overflow_rejected_before_run() {
        let processes = vec![Process::new(1, i64::MAX - 1, 5)];
        for policy in all_policies() {
            let errors = simulate(policy, &processes).unwrap_err();
            assert!(errors.contains_kind(&ValidationErrorKind::InvalidProcessDefinition));
        }
    }

    #[test]
    fn test_run_ending_at_time_limit() {
        let processes = vec![Process::new(1, i64::MAX - 5, 5)];
        for policy in all_policies() {
            let run = simulate(policy, &processes).unwrap();
            assert_eq!(run.processes[0].completion_time(), Some(i64::MAX));
            assert_eq!(run.processes[0].waiting_time(), Some(0));
        }
    }

    #[test]
    fn test_invariants_hold_for_all_policies() {
        for policy in all_policies() {
            let run = simulate(policy, &sample()).unwrap();
            assert!(run.is_complete());
            for p in &run.processes {
                let m = p.metrics().unwrap();
                assert_eq!(m.turnaround_time, m.completion_time - p.arrival_time);
                assert_eq!(m.waiting_time, m.turnaround_time - p.burst_time);
                assert_eq!(run.timeline.busy_time_for(p.id), p.burst_time);
                assert_eq!(p.remaining_time, 0);
            }
        }
    }

    #[test]
    fn test_arrival_order_is_stable() {
        let processes = vec![
            Process::new(7, 3, 1),
            Process::new(2, 0, 1),
            Process::new(5, 3, 1),
        ];
        assert_eq!(arrival_order(&processes), vec![1, 0, 2]);
    }
}
