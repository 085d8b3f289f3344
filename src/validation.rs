//! Input validation for course catalogs.
//!
//! Checks structural integrity of courses, sections, and meetings
//! before generation. Detects:
//! - Duplicate course and section IDs
//! - Malformed section IDs (course id cannot be derived)
//! - Sections filed under the wrong course
//! - Empty or inverted meeting times
//!
//! Generation relies on the derived course id for every uniqueness
//! decision, so a catalog that fails these checks is rejected as a whole
//! instead of having offending records skipped.

use crate::models::{course_id_of, Course};
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
    /// Two entities share the same ID.
    DuplicateId,
    /// A section ID lacks the `<dept>-<number>-<tag>` structure.
    MalformedSectionId,
    /// A section's derived course ID differs from its owning course.
    CourseMismatch,
    /// A meeting has non-finite times or `start >= end`.
    InvalidMeetingTime,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a course catalog.
///
/// Checks:
/// 1. No duplicate course IDs
/// 2. No duplicate section IDs (across all courses)
/// 3. Every section ID has at least three dash-delimited tokens
/// 4. Every section's derived course ID equals its course's ID
/// 5. Every meeting has finite times with `start < end`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_catalog(courses: &[Course]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut course_ids = HashSet::new();
    let mut section_ids = HashSet::new();

    for course in courses {
        if !course_ids.insert(course.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate course ID: {}", course.id),
            ));
        }

        for section in &course.sections {
            if !section_ids.insert(section.id.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateId,
                    format!("Duplicate section ID: {}", section.id),
                ));
            }

            if section.id.split('-').count() < 3 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::MalformedSectionId,
                    format!(
                        "Section ID '{}' is not of the form <dept>-<number>-<tag>",
                        section.id
                    ),
                ));
            } else if course_id_of(&section.id) != course.id {
                errors.push(ValidationError::new(
                    ValidationErrorKind::CourseMismatch,
                    format!(
                        "Section '{}' belongs to course '{}' but is listed under '{}'",
                        section.id,
                        course_id_of(&section.id),
                        course.id
                    ),
                ));
            }

            for meeting in &section.meetings {
                let finite = meeting.start.is_finite() && meeting.end.is_finite();
                if !finite || meeting.start >= meeting.end {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::InvalidMeetingTime,
                        format!(
                            "Section '{}' has an invalid meeting on {}: [{}, {})",
                            section.id,
                            meeting.day.code(),
                            meeting.start,
                            meeting.end
                        ),
                    ));
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
