//! Field rules for project submissions.
//!
//! # Responsibility
//! - Declare which constraints each project field carries.
//! - Map raw field values to `Validatable` specs for the validator.
//!
//! # Invariants
//! - Fields are checked in form order: title, description, people.
//! - The first failing field short-circuits the remaining checks.

use crate::validation::{check, ConstraintViolation, Validatable};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Minimum description length in chars.
pub const DESCRIPTION_MIN_LENGTH: usize = 5;
/// Minimum assigned headcount.
pub const PEOPLE_MIN: f64 = 1.0;
/// Maximum assigned headcount.
pub const PEOPLE_MAX: f64 = 5.0;

/// Form field of a project submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectField {
    Title,
    Description,
    People,
}

impl ProjectField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::People => "people",
        }
    }
}

/// One field that failed its rules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldViolation {
    pub field: ProjectField,
    pub violation: ConstraintViolation,
}

impl Display for FieldViolation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field.as_str(), self.violation)
    }
}

impl Error for FieldViolation {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.violation)
    }
}

/// Title must be present.
pub fn title_spec(title: &str) -> Validatable {
    Validatable::text(title).required()
}

/// Description must be present and at least `DESCRIPTION_MIN_LENGTH` chars.
pub fn description_spec(description: &str) -> Validatable {
    Validatable::text(description)
        .required()
        .min_length(DESCRIPTION_MIN_LENGTH)
}

/// Headcount must be present and within `PEOPLE_MIN..=PEOPLE_MAX`.
pub fn people_spec(people: f64) -> Validatable {
    Validatable::number(people)
        .required()
        .min(PEOPLE_MIN)
        .max(PEOPLE_MAX)
}

/// Checks all project fields and reports the first failing one.
pub fn check_project(title: &str, description: &str, people: f64) -> Result<(), FieldViolation> {
    let specs = [
        (ProjectField::Title, title_spec(title)),
        (ProjectField::Description, description_spec(description)),
        (ProjectField::People, people_spec(people)),
    ];
    for (field, spec) in &specs {
        check(spec).map_err(|violation| FieldViolation {
            field: *field,
            violation,
        })?;
    }
    Ok(())
}
