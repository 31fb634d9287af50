//! Validation failure types
//!
//! A failed parse reports every violated field at once, as data. Callers
//! match on the result; there is no exception-style control flow.

use std::fmt;

use serde::Serialize;

/// A single violated field with the reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Validation failure enumerating every violated field.
#[derive(Debug, Clone, Default)]
pub struct ValidationError {
    errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a failure for a single field.
    pub fn single(field: &'static str, message: &'static str) -> Self {
        Self {
            errors: vec![FieldError { field, message }],
        }
    }

    /// Record a violated field.
    pub fn push(&mut self, field: &'static str, message: &'static str) {
        self.errors.push(FieldError { field, message });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Consume into the field-error list for the response `details`.
    pub fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for err in &self.errors {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", err.field, err.message)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}
