//! Input validation for scheduling simulations.
//!
//! Checks a process set (and, for Round-Robin, the quantum) before any
//! policy runs. Detects:
//! - Non-positive process IDs
//! - Duplicate process IDs
//! - Negative arrival times
//! - Non-positive burst times
//! - Workloads whose end time would overflow `i64`
//! - Non-positive quanta
//!
//! A failed check rejects the whole run. Every problem found is reported at
//! once so the caller can correct the input in one pass.

use std::collections::HashSet;
use std::fmt;

use crate::models::Process;

/// Validation result.
pub type ValidationResult = Result<(), ValidationErrors>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A process has a zero id, a duplicate id, a negative arrival, or a
    /// non-positive burst.
    InvalidProcessDefinition,
    /// The Round-Robin quantum is not positive.
    InvalidQuantum,
}

/// All errors found in one validation pass. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ValidationError {}

impl ValidationErrors {
    /// The individual errors.
    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    /// Whether any error has the given kind.
    pub fn contains_kind(&self, kind: &ValidationErrorKind) -> bool {
        self.0.iter().any(|e| &e.kind == kind)
    }

    fn from_vec(errors: Vec<ValidationError>) -> ValidationResult {
        if errors.is_empty() {
            Ok(())
        } else {
            Err(Self(errors))
        }
    }
}

impl std::ops::Deref for ValidationErrors {
    type Target = [ValidationError];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid simulation input ({} error(s))", self.0.len())?;
        for e in &self.0 {
            write!(f, "; {e}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Validates a process set.
///
/// Checks:
/// 1. Every id is positive
/// 2. No duplicate ids
/// 3. Every arrival time is non-negative
/// 4. Every burst time is positive
/// 5. The latest arrival plus the total burst time fits in an `i64`
///
/// An empty set is valid.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    ValidationErrors::from_vec(process_errors(processes))
}

/// Validates a Round-Robin time quantum.
pub fn validate_quantum(quantum: i64) -> ValidationResult {
    ValidationErrors::from_vec(quantum_errors(quantum))
}

/// Validates a Round-Robin input: the process set and the quantum together.
pub fn validate_round_robin(processes: &[Process], quantum: i64) -> ValidationResult {
    validate_with_quanta(processes, [quantum])
}

/// Validates a process set together with any number of quanta, reporting
/// process and quantum errors in one pass.
pub fn validate_with_quanta(
    processes: &[Process],
    quanta: impl IntoIterator<Item = i64>,
) -> ValidationResult {
    let mut errors = process_errors(processes);
    for quantum in quanta {
        errors.extend(quantum_errors(quantum));
    }
    ValidationErrors::from_vec(errors)
}

fn process_errors(processes: &[Process]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for p in processes {
        if p.id == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidProcessDefinition,
                "Process ID must be positive, got 0",
            ));
        }

        if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidProcessDefinition,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidProcessDefinition,
                format!(
                    "Process {} has negative arrival time {}",
                    p.id, p.arrival_time
                ),
            ));
        }

        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidProcessDefinition,
                format!(
                    "Process {} has non-positive burst time {}",
                    p.id, p.burst_time
                ),
            ));
        }
    }

    if horizon(processes).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidProcessDefinition,
            "Latest arrival plus total burst time overflows the time axis",
        ));
    }

    errors
}

/// Upper bound on any clock value a policy can reach: the latest arrival plus
/// every burst. `None` when that sum does not fit in an `i64`.
fn horizon(processes: &[Process]) -> Option<i64> {
    let latest = processes
        .iter()
        .map(|p| p.arrival_time.max(0))
        .max()
        .unwrap_or(0);
    processes
        .iter()
        .try_fold(latest, |acc, p| acc.checked_add(p.burst_time.max(0)))
}

fn quantum_errors(quantum: i64) -> Vec<ValidationError> {
    if quantum > 0 {
        Vec::new()
    } else {
        vec![ValidationError::new(
            ValidationErrorKind::InvalidQuantum,
            format!("Time quantum must be positive, got {quantum}"),
        )]
    }
}
