//! Random process-set generation.
//!
//! Produces valid workloads for demos and property tests. Reproducible
//! when driven by a seeded RNG.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::Process;

/// Generator parameters.
///
/// Generated processes have ids `1..=count`, arrivals in `0..=max_arrival`
/// and bursts in `1..=max_burst`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadGenerator {
    /// Number of processes.
    pub count: u32,
    /// Latest possible arrival time.
    pub max_arrival: i64,
    /// Longest possible burst.
    pub max_burst: i64,
}

impl Default for WorkloadGenerator {
    fn default() -> Self {
        Self {
            count: 5,
            max_arrival: 10,
            max_burst: 10,
        }
    }
}

impl WorkloadGenerator {
    /// Creates a generator for `count` processes with default ranges.
    pub fn new(count: u32) -> Self {
        Self {
            count,
            ..Default::default()
        }
    }

    /// Sets the latest arrival time (negative values clamp to 0).
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival.max(0);
        self
    }

    /// Sets the longest burst (values below 1 clamp to 1).
    pub fn with_max_burst(mut self, max_burst: i64) -> Self {
        self.max_burst = max_burst.max(1);
        self
    }

    /// Generates a process set.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<Process> {
        let max_arrival = self.max_arrival.max(0);
        let max_burst = self.max_burst.max(1);

        (1..=self.count)
            .map(|id| {
                Process::new(
                    id,
                    rng.random_range(0..=max_arrival),
                    rng.random_range(1..=max_burst),
                )
            })
            .collect()
    }
}
