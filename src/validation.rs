//! Input validation for shift-planning requests.
//!
//! The scheduler itself never errors — it absorbs bad input as "fewer
//! shifts than ideal". Callers that prefer strictness can run these
//! checks up front. Detects:
//! - Inverted request windows (`end <= start`)
//! - Duplicate worker names
//! - Negative or non-finite hourly rates
//! - Inverted worker availability intervals

use std::collections::HashSet;

use chrono::NaiveDateTime;

use crate::models::Worker;

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
    /// The request window ends at or before it starts.
    InvertedWindow,
    /// Two workers share the same name.
    DuplicateName,
    /// A worker's hourly rate is negative, NaN, or infinite.
    InvalidRate,
    /// A worker's availability ends before it starts.
    InvertedAvailability,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a scheduling request.
///
/// Checks:
/// 1. The request window satisfies `end > start`
/// 2. No duplicate worker names
/// 3. All hourly rates are finite and non-negative
/// 4. All availability intervals satisfy `start < end`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_request(
    start: NaiveDateTime,
    end: NaiveDateTime,
    staff: &[Worker],
) -> ValidationResult {
    let mut errors = Vec::new();

    if end <= start {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvertedWindow,
            format!("Request window ends at or before it starts: {start} .. {end}"),
        ));
    }

    let mut names = HashSet::new();
    for worker in staff {
        if !names.insert(worker.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate worker name: {}", worker.name),
            ));
        }

        if !worker.hourly_rate.is_finite() || worker.hourly_rate < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidRate,
                format!(
                    "Worker '{}' has invalid hourly rate: {}",
                    worker.name, worker.hourly_rate
                ),
            ));
        }

        if worker.available_end <= worker.available_start {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvertedAvailability,
                format!(
                    "Worker '{}' availability ends at or before it starts: {} .. {}",
                    worker.name, worker.available_start, worker.available_end
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
