//! Input validation for simulation runs.
//!
//! Checks the structural integrity of a process snapshot before any
//! scheduling happens. Detects:
//! - Empty process lists
//! - Empty or duplicate process IDs
//! - Non-positive burst times
//! - Negative arrival times
//! - Total burst time beyond the representable clock range
//! - Non-positive Round-Robin quanta
//!
//! All problems are collected so a caller can report them together.

use crate::models::ProcessDescriptor;
use std::collections::HashSet;
use std::fmt;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No processes were supplied.
    EmptyProcessList,
    /// A process ID is empty (or whitespace only).
    EmptyId,
    /// Two processes share the same ID.
    DuplicateId,
    /// A burst time is zero or negative.
    NonPositiveBurst,
    /// An arrival time is negative.
    NegativeArrival,
    /// The sum of all burst times overflows the simulation clock.
    BurstOverflow,
    /// The Round-Robin quantum is zero or negative.
    NonPositiveQuantum,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a process snapshot.
///
/// Checks:
/// 1. At least one process
/// 2. Every ID is non-empty
/// 3. No duplicate IDs
/// 4. Every burst time is positive
/// 5. No arrival time is negative
/// 6. The total burst time fits in an `i64` clock
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[ProcessDescriptor]) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyProcessList,
            "At least one process is required",
        ));
    }

    let mut ids = HashSet::new();
    let mut total_burst: Option<i64> = Some(0);
    for (index, p) in processes.iter().enumerate() {
        if p.id.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                format!("Process at position {index} has an empty ID"),
            ));
        } else if !ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process '{}' has invalid burst time {}", p.id, p.burst_time),
            ));
        } else {
            total_burst = total_burst.and_then(|t| t.checked_add(p.burst_time));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!(
                    "Process '{}' has negative arrival time {}",
                    p.id, p.arrival_time
                ),
            ));
        }
    }

    if total_burst.is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::BurstOverflow,
            format!("Total burst time exceeds {} ticks", i64::MAX),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a Round-Robin time quantum.
pub fn validate_quantum(quantum: i64) -> Result<(), ValidationError> {
    if quantum <= 0 {
        return Err(ValidationError::new(
            ValidationErrorKind::NonPositiveQuantum,
            format!("Time quantum must be a positive integer, got {quantum}"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_processes() -> Vec<ProcessDescriptor> {
        vec![
            ProcessDescriptor::new("A", 5),
            ProcessDescriptor::new("B", 3).with_arrival_time(1),
            ProcessDescriptor::new("C", 8).with_arrival_time(2),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_processes(&sample_processes()).is_ok());
    }

    #[test]
    fn test_empty_list() {
        let errors = validate_processes(&[]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyProcessList);
    }

    #[test]
    fn test_empty_id() {
        let processes = vec![ProcessDescriptor::new("   ", 5)];
        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors.iter().any(|e| e.kind == ValidationErrorKind::EmptyId));
    }

    #[test]
    fn test_duplicate_id() {
        let processes = vec![ProcessDescriptor::new("A", 5), ProcessDescriptor::new("A", 2)];
        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("A")));
    }

    #[test]
    fn test_non_positive_burst() {
        let processes = vec![ProcessDescriptor::new("A", 0), ProcessDescriptor::new("B", -3)];
        let errors = validate_processes(&processes).unwrap_err();
        let count = errors
            .iter()
            .filter(|e| e.kind == ValidationErrorKind::NonPositiveBurst)
            .count();
        assert_eq!(count, 2);
    }

    #[test]
    fn test_negative_arrival() {
        let processes = vec![ProcessDescriptor::new("A", 4).with_arrival_time(-1)];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::NegativeArrival);
    }

    #[test]
    fn test_total_burst_overflow() {
        let processes = vec![ProcessDescriptor::new("A", i64::MAX), ProcessDescriptor::new("B", 1)];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::BurstOverflow);
    }

    #[test]
    fn test_total_burst_at_limit() {
        let processes = vec![
            ProcessDescriptor::new("A", i64::MAX - 1),
            ProcessDescriptor::new("B", 1),
        ];
        assert!(validate_processes(&processes).is_ok());
    }

    #[test]
    fn test_multiple_errors() {
        let processes = vec![ProcessDescriptor::new("", 0), ProcessDescriptor::new("B", -1)];
        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors.len() >= 3);
    }

    #[test]
    fn test_quantum() {
        assert!(validate_quantum(1).is_ok());
        assert_eq!(
            validate_quantum(0).unwrap_err().kind,
            ValidationErrorKind::NonPositiveQuantum
        );
        assert!(validate_quantum(-4).is_err());
    }
}
