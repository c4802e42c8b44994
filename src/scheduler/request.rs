//! Policy selection and simulation requests.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{compare_policies, validate_policies, ScheduleRun};
use crate::models::Process;
use crate::validation::{ValidationErrors, ValidationResult};

/// Quantum used when a request does not specify one.
pub const DEFAULT_QUANTUM: i64 = 2;

/// A fully parameterized scheduling policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum Policy {
    /// First-Come, First-Served.
    Fcfs,
    /// Shortest Job First, non-preemptive.
    Sjf,
    /// Shortest Remaining Time First (preemptive SJF).
    Srtf,
    /// Round-Robin with the given quantum.
    RoundRobin {
        /// Maximum contiguous slice per turn.
        quantum: i64,
    },
}

/// Policy family, without parameters. Used in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    /// First-Come, First-Served.
    Fcfs,
    /// Shortest Job First, non-preemptive.
    Sjf,
    /// Shortest Remaining Time First.
    Srtf,
    /// Round-Robin.
    RoundRobin,
}

impl Policy {
    /// Short name (e.g., "FCFS", "RR").
    pub fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// Chart heading.
    pub fn description(&self) -> &'static str {
        self.kind().description()
    }

    /// Policy family.
    pub fn kind(&self) -> PolicyKind {
        match self {
            Policy::Fcfs => PolicyKind::Fcfs,
            Policy::Sjf => PolicyKind::Sjf,
            Policy::Srtf => PolicyKind::Srtf,
            Policy::RoundRobin { .. } => PolicyKind::RoundRobin,
        }
    }

    /// Whether the policy can interrupt a running process.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Policy::Srtf | Policy::RoundRobin { .. })
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Policy::RoundRobin { quantum } => {
                write!(f, "{} (quantum = {quantum})", self.description())
            }
            _ => f.write_str(self.description()),
        }
    }
}

impl PolicyKind {
    /// All four families in presentation order.
    pub const ALL: [PolicyKind; 4] = [
        PolicyKind::Fcfs,
        PolicyKind::Sjf,
        PolicyKind::Srtf,
        PolicyKind::RoundRobin,
    ];

    /// Short name.
    pub fn name(&self) -> &'static str {
        match self {
            PolicyKind::Fcfs => "FCFS",
            PolicyKind::Sjf => "SJF",
            PolicyKind::Srtf => "SRTF",
            PolicyKind::RoundRobin => "RR",
        }
    }

    /// Chart heading.
    pub fn description(&self) -> &'static str {
        match self {
            PolicyKind::Fcfs => "First-Come, First-Served (FCFS)",
            PolicyKind::Sjf => "Shortest Job First (SJF) Non-Preemptive",
            PolicyKind::Srtf => "Shortest Job First (SJF) Preemptive (SRTF)",
            PolicyKind::RoundRobin => "Round Robin (RR)",
        }
    }

    /// Binds parameters; `quantum` only matters for Round-Robin.
    pub fn with_quantum(self, quantum: i64) -> Policy {
        match self {
            PolicyKind::Fcfs => Policy::Fcfs,
            PolicyKind::Sjf => Policy::Sjf,
            PolicyKind::Srtf => Policy::Srtf,
            PolicyKind::RoundRobin => Policy::RoundRobin { quantum },
        }
    }
}

fn default_quantum() -> i64 {
    DEFAULT_QUANTUM
}

fn default_policies() -> Vec<PolicyKind> {
    PolicyKind::ALL.to_vec()
}

/// Input container for a simulation.
///
/// Deserializes from JSON such as:
///
/// ```json
/// {
///   "processes": [
///     { "id": 1, "arrival_time": 0, "burst_time": 5 },
///     { "id": 2, "arrival_time": 1, "burst_time": 3 }
///   ],
///   "quantum": 2,
///   "policies": ["fcfs", "round_robin"]
/// }
/// ```
///
/// `quantum` defaults to [`DEFAULT_QUANTUM`]; `policies` defaults to all four.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Processes to schedule.
    pub processes: Vec<Process>,
    /// Round-Robin time quantum.
    #[serde(default = "default_quantum")]
    pub quantum: i64,
    /// Policies to run, in order.
    #[serde(default = "default_policies")]
    pub policies: Vec<PolicyKind>,
}

impl SimulationRequest {
    /// Creates a request running all four policies with the default quantum.
    pub fn new(processes: Vec<Process>) -> Self {
        Self {
            processes,
            quantum: DEFAULT_QUANTUM,
            policies: default_policies(),
        }
    }

    /// Sets the Round-Robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = quantum;
        self
    }

    /// Restricts the policies to run.
    pub fn with_policies(mut self, policies: Vec<PolicyKind>) -> Self {
        self.policies = policies;
        self
    }

    /// Adds a process.
    pub fn with_process(mut self, process: Process) -> Self {
        self.processes.push(process);
        self
    }

    /// Parameterized policies in run order.
    pub fn resolved_policies(&self) -> Vec<Policy> {
        self.policies
            .iter()
            .map(|k| k.with_quantum(self.quantum))
            .collect()
    }

    /// Validates the processes, and the quantum if Round-Robin is requested.
    pub fn validate(&self) -> ValidationResult {
        validate_policies(&self.processes, &self.resolved_policies())
    }

    /// Runs every requested policy on independent copies of the processes.
    ///
    /// Rejects the request with the same errors as [`Self::validate`].
    pub fn run(&self) -> Result<Vec<ScheduleRun>, ValidationErrors> {
        compare_policies(&self.processes, &self.resolved_policies())
    }
}
