//! Field constraint validation.
//!
//! # Responsibility
//! - Evaluate one candidate value against its declared constraints.
//! - Stay pure: no state, no I/O, no logging.
//!
//! # Invariants
//! - Present constraints combine with logical AND.
//! - Absent constraints never fail.
//! - Length bounds apply only to text, numeric bounds only to numbers.
//! - All bounds are inclusive.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Candidate value read from one input field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

impl FieldValue {
    /// Text form used by the `required` check.
    ///
    /// Numbers use their `Display` form, so `0` becomes `"0"`.
    fn as_text(&self) -> String {
        match self {
            Self::Text(value) => value.clone(),
            Self::Number(value) => value.to_string(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

/// Value plus the constraints it must satisfy.
#[derive(Debug, Clone, PartialEq)]
pub struct Validatable {
    pub value: FieldValue,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Validatable {
    /// Creates an unconstrained spec for `value`.
    pub fn new(value: impl Into<FieldValue>) -> Self {
        Self {
            value: value.into(),
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self::new(FieldValue::Text(value.into()))
    }

    pub fn number(value: f64) -> Self {
        Self::new(FieldValue::Number(value))
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, bound: usize) -> Self {
        self.min_length = Some(bound);
        self
    }

    pub fn max_length(mut self, bound: usize) -> Self {
        self.max_length = Some(bound);
        self
    }

    pub fn min(mut self, bound: f64) -> Self {
        self.min = Some(bound);
        self
    }

    pub fn max(mut self, bound: f64) -> Self {
        self.max = Some(bound);
        self
    }
}

/// First constraint a value failed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConstraintViolation {
    Required,
    MinLength { bound: usize, actual: usize },
    MaxLength { bound: usize, actual: usize },
    Min { bound: f64 },
    Max { bound: f64 },
}

impl ConstraintViolation {
    /// Stable constraint name for diagnostics.
    pub fn constraint(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::MinLength { .. } => "min_length",
            Self::MaxLength { .. } => "max_length",
            Self::Min { .. } => "min",
            Self::Max { .. } => "max",
        }
    }
}

impl Display for ConstraintViolation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Required => write!(f, "value is required"),
            Self::MinLength { bound, actual } => {
                write!(f, "length {actual} is below minimum {bound}")
            }
            Self::MaxLength { bound, actual } => {
                write!(f, "length {actual} is above maximum {bound}")
            }
            Self::Min { bound } => write!(f, "value is below minimum {bound}"),
            Self::Max { bound } => write!(f, "value is above maximum {bound}"),
        }
    }
}

impl Error for ConstraintViolation {}

/// Returns whether `spec.value` satisfies every present constraint.
pub fn validate(spec: &Validatable) -> bool {
    check(spec).is_ok()
}

/// Checks constraints in declaration order and reports the first failure.
///
/// Length is counted in chars, without trimming. A NaN number fails any
/// numeric bound.
pub fn check(spec: &Validatable) -> Result<(), ConstraintViolation> {
    if spec.required && spec.value.as_text().trim().is_empty() {
        return Err(ConstraintViolation::Required);
    }

    if let FieldValue::Text(text) = &spec.value {
        let length = text.chars().count();
        if let Some(bound) = spec.min_length {
            if length < bound {
                return Err(ConstraintViolation::MinLength {
                    bound,
                    actual: length,
                });
            }
        }
        if let Some(bound) = spec.max_length {
            if length > bound {
                return Err(ConstraintViolation::MaxLength {
                    bound,
                    actual: length,
                });
            }
        }
    }

    if let FieldValue::Number(value) = spec.value {
        if let Some(bound) = spec.min {
            if value < bound || value.is_nan() {
                return Err(ConstraintViolation::Min { bound });
            }
        }
        if let Some(bound) = spec.max {
            if value > bound || value.is_nan() {
                return Err(ConstraintViolation::Max { bound });
            }
        }
    }

    Ok(())
}
