//! Project submission form.
//!
//! # Responsibility
//! - Hold raw field text the way an input form does.
//! - Validate every field before asking the store to mutate.
//!
//! # Invariants
//! - A rejected submission never reaches the store.
//! - Inputs are cleared only after a successful submission.
//! - Users see one generic rejection message; the failing field is logged.

use crate::model::project::ProjectId;
use crate::rules::{check_project, FieldViolation, ProjectField};
use crate::store::project_store::ProjectStore;
use log::{debug, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Message shown to users for any rejected submission.
pub const REJECTION_MESSAGE: &str = "Invalid Input, Please try again";

/// Raw form field text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawProjectInput {
    pub title: String,
    pub description: String,
    pub people: String,
}

impl RawProjectInput {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        people: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            people: people.into(),
        }
    }
}

/// Why a submission was turned away at the boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputRejected {
    /// A field failed its declared constraints.
    Invalid(FieldViolation),
    /// Headcount passed its bounds but is not a whole number.
    FractionalPeople(f64),
}

impl InputRejected {
    /// Field that caused the rejection.
    pub fn field(&self) -> ProjectField {
        match self {
            Self::Invalid(err) => err.field,
            Self::FractionalPeople(_) => ProjectField::People,
        }
    }
}

impl Display for InputRejected {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(REJECTION_MESSAGE)
    }
}

impl Error for InputRejected {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Invalid(err) => Some(err),
            Self::FractionalPeople(_) => None,
        }
    }
}

/// Form bound to one store.
#[derive(Debug)]
pub struct ProjectInput {
    store: ProjectStore,
    inputs: RawProjectInput,
}

impl ProjectInput {
    pub fn new(store: ProjectStore) -> Self {
        Self {
            store,
            inputs: RawProjectInput::default(),
        }
    }

    pub fn set_title(&mut self, value: impl Into<String>) {
        self.inputs.title = value.into();
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.inputs.description = value.into();
    }

    pub fn set_people(&mut self, value: impl Into<String>) {
        self.inputs.people = value.into();
    }

    /// Replaces all field values at once.
    pub fn fill(&mut self, inputs: RawProjectInput) {
        self.inputs = inputs;
    }

    pub fn inputs(&self) -> &RawProjectInput {
        &self.inputs
    }

    /// Validates current inputs and records a project on success.
    ///
    /// # Errors
    /// - Returns `InputRejected` when any field fails; the store and the
    ///   current inputs are left unchanged.
    pub fn submit(&mut self) -> Result<ProjectId, InputRejected> {
        let people = match self.gather() {
            Ok(people) => people,
            Err(err) => {
                match &err {
                    InputRejected::Invalid(violation) => warn!(
                        "event=submit_rejected module=form status=error field={} constraint={}",
                        violation.field.as_str(),
                        violation.violation.constraint()
                    ),
                    InputRejected::FractionalPeople(_) => warn!(
                        "event=submit_rejected module=form status=error field=people constraint=whole_number"
                    ),
                }
                return Err(err);
            }
        };

        let project_id = self.store.add_project(
            self.inputs.title.clone(),
            self.inputs.description.clone(),
            people,
        );
        debug!("event=submit_accepted module=form status=ok project_id={project_id}");
        self.clear();
        Ok(project_id)
    }

    fn gather(&self) -> Result<u32, InputRejected> {
        let people = parse_people(&self.inputs.people);
        check_project(&self.inputs.title, &self.inputs.description, people)
            .map_err(InputRejected::Invalid)?;
        if people.fract() != 0.0 {
            return Err(InputRejected::FractionalPeople(people));
        }
        // Bounds already checked, so the cast is exact.
        Ok(people as u32)
    }

    fn clear(&mut self) {
        self.inputs = RawProjectInput::default();
    }
}

/// Reads headcount text as a number.
///
/// Blank text reads as `0`. Unsigned `0x`/`0o`/`0b` literals are read in
/// their radix, as numeric form fields do. Anything unparsable reads as NaN
/// so it fails every numeric bound.
pub fn parse_people(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    if let Some(value) = parse_radix_literal(trimmed) {
        return value;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_radix_literal(value: &str) -> Option<f64> {
    let prefix = value.get(..2)?.to_ascii_lowercase();
    let radix = match prefix.as_str() {
        "0x" => 16,
        "0o" => 8,
        "0b" => 2,
        _ => return None,
    };
    let digits = &value[2..];
    // `from_str_radix` accepts a leading sign; prefixed literals do not.
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return Some(f64::NAN);
    }
    Some(
        u64::from_str_radix(digits, radix)
            .map(|parsed| parsed as f64)
            .unwrap_or(f64::NAN),
    )
}
