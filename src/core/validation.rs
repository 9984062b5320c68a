//! Field-level validation shared by every curriculum record
//!
//! Records are built from an unvalidated *fields* value. The helpers here
//! check one field at a time and return a [`ValidationError`] naming the
//! offending field. Nested records prefix that name with their own position
//! (`weeks[1].days[0].day_number`) as the error travels upward.

use miette::Diagnostic;
use std::fmt;
use thiserror::Error;

/// Inclusive bounds of a numeric field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: i64,
    /// `None` for fields that only have a lower bound
    pub max: Option<i64>,
}

impl Bounds {
    pub fn contains(&self, value: i64) -> bool {
        value >= self.min && self.max.map_or(true, |max| value <= max)
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) => write!(f, "{}..={}", self.min, max),
            None => write!(f, ">= {}", self.min),
        }
    }
}

/// A constraint violation on a single field
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ValidationError {
    /// Numeric value outside its closed interval
    #[error("{field}: value {value} is out of range (expected {bounds})")]
    #[diagnostic(code(curriculum::validation::range))]
    Range {
        field: String,
        value: i64,
        bounds: Bounds,
    },

    /// Required value is missing, or a required string is empty
    #[error("{field}: required value is missing or empty")]
    #[diagnostic(code(curriculum::validation::required))]
    RequiredField { field: String },

    /// List does not have exactly the required number of entries
    #[error("{field}: expected exactly {expected} entries, found {actual}")]
    #[diagnostic(code(curriculum::validation::cardinality))]
    Cardinality {
        field: String,
        expected: usize,
        actual: usize,
    },

    /// Value is not a member of the field's closed set
    #[error("{field}: '{value}' is not a valid choice (expected one of: {allowed})")]
    #[diagnostic(code(curriculum::validation::invalid_choice))]
    InvalidChoice {
        field: String,
        value: String,
        allowed: String,
    },
}

impl ValidationError {
    /// Path of the field that failed, relative to the record being built
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Range { field, .. }
            | ValidationError::RequiredField { field }
            | ValidationError::Cardinality { field, .. }
            | ValidationError::InvalidChoice { field, .. } => field,
        }
    }

    fn field_mut(&mut self) -> &mut String {
        match self {
            ValidationError::Range { field, .. }
            | ValidationError::RequiredField { field }
            | ValidationError::Cardinality { field, .. }
            | ValidationError::InvalidChoice { field, .. } => field,
        }
    }

    /// Prefix the field path with the name of the enclosing field
    pub fn within(mut self, parent: &str) -> Self {
        let field = self.field_mut();
        *field = if field.is_empty() {
            parent.to_string()
        } else {
            format!("{}.{}", parent, field)
        };
        self
    }

    /// Prefix the field path with a list field and the element's index
    ///
    /// Errors raised on a list element itself (an empty field path) become
    /// `parent[index]`.
    pub fn within_item(mut self, parent: &str, index: usize) -> Self {
        let field = self.field_mut();
        *field = if field.is_empty() {
            format!("{}[{}]", parent, index)
        } else {
            format!("{}[{}].{}", parent, index, field)
        };
        self
    }
}

/// A closed set of string values, mapped onto enum variants
pub trait Choice: Sized + Copy + 'static {
    /// Every variant, in the order they are listed in error messages
    const VARIANTS: &'static [Self];

    /// The wire name of this variant
    fn as_str(&self) -> &'static str;

    /// Comma-separated list of accepted wire names
    fn allowed() -> String {
        Self::VARIANTS
            .iter()
            .map(|v| v.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Check a numeric field against inclusive bounds and narrow it to `T`
pub fn in_range<T: TryFrom<i64>>(
    field: &str,
    value: i64,
    min: i64,
    max: Option<i64>,
) -> Result<T, ValidationError> {
    let bounds = Bounds { min, max };
    let out_of_range = || ValidationError::Range {
        field: field.to_string(),
        value,
        bounds,
    };

    if !bounds.contains(value) {
        return Err(out_of_range());
    }
    T::try_from(value).map_err(|_| out_of_range())
}

/// Unwrap a required value
pub fn required<T>(field: &str, value: Option<T>) -> Result<T, ValidationError> {
    value.ok_or_else(|| ValidationError::RequiredField {
        field: field.to_string(),
    })
}

/// Reject empty strings
pub fn non_empty(field: &str, value: String) -> Result<String, ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::RequiredField {
            field: field.to_string(),
        });
    }
    Ok(value)
}

/// Unwrap a required string and reject it when empty
///
/// YAML `~` and `null` arrive as `None`, so they fail the same way as a
/// missing key.
pub fn required_text(field: &str, value: Option<String>) -> Result<String, ValidationError> {
    non_empty(field, required(field, value)?)
}

/// Require a list to hold exactly `expected` entries
pub fn exact_count<T>(field: &str, items: Vec<T>, expected: usize) -> Result<Vec<T>, ValidationError> {
    if items.len() != expected {
        return Err(ValidationError::Cardinality {
            field: field.to_string(),
            expected,
            actual: items.len(),
        });
    }
    Ok(items)
}

/// Map a wire name onto a [`Choice`] variant
pub fn choice<C: Choice>(field: &str, value: &str) -> Result<C, ValidationError> {
    C::VARIANTS
        .iter()
        .copied()
        .find(|v| v.as_str() == value)
        .ok_or_else(|| ValidationError::InvalidChoice {
            field: field.to_string(),
            value: value.to_string(),
            allowed: C::allowed(),
        })
}

/// Validate every element of a list, tagging failures with the element index
pub fn each<F, T>(
    field: &str,
    items: Vec<F>,
    convert: impl Fn(F) -> Result<T, ValidationError>,
) -> Result<Vec<T>, ValidationError> {
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| convert(item).map_err(|e| e.within_item(field, i)))
        .collect()
}
