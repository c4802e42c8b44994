//! Side-by-side comparison of several policies on one process set.

use std::thread;

use tracing::debug;

use super::{simulate, Policy, ScheduleRun};
use crate::models::Process;
use crate::validation::{validate_with_quanta, ValidationErrors, ValidationResult};

/// Validates `processes` together with the quantum of every Round-Robin
/// entry in `policies`. All problems are reported in one pass.
pub fn validate_policies(processes: &[Process], policies: &[Policy]) -> ValidationResult {
    validate_with_quanta(
        processes,
        policies.iter().filter_map(|policy| match policy {
            Policy::RoundRobin { quantum } => Some(*quantum),
            _ => None,
        }),
    )
}

/// Runs each policy on its own copy of `processes`.
///
/// All inputs are validated before any policy starts, so an invalid quantum
/// for Round-Robin rejects the whole comparison. Policies touch disjoint
/// data and run on one scoped thread each. Results keep the order of
/// `policies`.
pub fn compare_policies(
    processes: &[Process],
    policies: &[Policy],
) -> Result<Vec<ScheduleRun>, ValidationErrors> {
    validate_policies(processes, policies)?;

    debug!(policies = policies.len(), processes = processes.len(), "comparing");

    thread::scope(|s| {
        let handles: Vec<_> = policies
            .iter()
            .map(|&policy| s.spawn(move || simulate(policy, processes)))
            .collect();

        handles
            .into_iter()
            .map(|h| match h.join() {
                Ok(result) => result,
                Err(panic) => std::panic::resume_unwind(panic),
            })
            .collect()
    })
}
