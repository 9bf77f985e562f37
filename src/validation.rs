//! Input validation for simulation workloads.
//!
//! Checks structural integrity of the process set before any policy
//! runs. Detects:
//! - Non-positive bursts
//! - Negative arrival times
//! - Zero or duplicate process ids
//!
//! An empty workload passes validation; the engine turns it into an
//! empty result rather than an error.

use crate::models::Process;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

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
    /// A process has a zero or negative burst.
    NonPositiveBurst,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process id is zero (ids must be positive).
    ZeroId,
    /// Two processes share the same id.
    DuplicateId,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a workload before simulation.
///
/// Checks:
/// 1. Every burst is positive
/// 2. No arrival time is negative
/// 3. No process id is zero
/// 4. No two processes share an id
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_workload(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen_ids = HashSet::new();

    for p in processes {
        if p.burst <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process {} has non-positive burst {}", p.id, p.burst),
            ));
        }
        if p.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process {} has negative arrival {}", p.id, p.arrival),
            ));
        }
        if p.id == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroId,
                "Process id must be positive, got 0",
            ));
        } else if !seen_ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process id: {}", p.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_processes() -> Vec<Process> {
        vec![
            Process::new(1, 0, 5),
            Process::new(2, 1, 3).with_priority(2),
            Process::new(3, 4, 2),
        ]
    }

    #[test]
    fn test_valid_workload() {
        assert!(validate_workload(&sample_processes()).is_ok());
    }

    #[test]
    fn test_empty_workload_is_valid() {
        assert!(validate_workload(&[]).is_ok());
    }

    #[test]
    fn test_non_positive_burst() {
        let errors = validate_workload(&[Process::new(1, 0, 0)]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NonPositiveBurst));

        let errors = validate_workload(&[Process::new(1, 0, -3)]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NonPositiveBurst));
    }

    #[test]
    fn test_negative_arrival() {
        let errors = validate_workload(&[Process::new(1, -1, 5)]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NegativeArrival));
    }

    #[test]
    fn test_zero_id() {
        let errors = validate_workload(&[Process::new(0, 0, 5)]).unwrap_err();
        assert!(errors.iter().any(|e| e.kind == ValidationErrorKind::ZeroId));
    }

    #[test]
    fn test_duplicate_id() {
        let errors =
            validate_workload(&[Process::new(1, 0, 5), Process::new(1, 2, 3)]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains('1')));
    }

    #[test]
    fn test_multiple_errors() {
        // Zero burst and a duplicate id in one workload
        let processes = vec![
            Process::new(1, 0, 0),
            Process::new(2, 1, 4),
            Process::new(2, 2, 3),
        ];

        let errors = validate_workload(&processes).unwrap_err();
        assert!(errors.len() >= 2);
    }
}
