//! Error types for field parsing.

use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

/// A single field failed to parse.
///
/// The display form names the field first, so a log line or an error chain
/// reads `parse population => invalid integer "x1": ...`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("parse {field} => {source}")]
pub struct FieldError {
    field: &'static str,
    source: ValueError,
}

impl FieldError {
    /// Creates a new field error.
    #[must_use]
    pub const fn new(field: &'static str, source: ValueError) -> Self {
        Self { field, source }
    }

    /// Returns the name of the field that failed to parse.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        self.field
    }

    /// Returns the underlying value error.
    #[must_use]
    pub const fn value_error(&self) -> &ValueError {
        &self.source
    }
}

/// Why a non-empty value was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// Not a valid integer for the target width and sign.
    #[error("invalid integer {value:?}: {source}")]
    Integer {
        /// The rejected text.
        value: String,
        /// The parser's reason.
        source: ParseIntError,
    },

    /// Not a valid floating point number.
    #[error("invalid float {value:?}: {source}")]
    Float {
        /// The rejected text.
        value: String,
        /// The parser's reason.
        source: ParseFloatError,
    },

    /// Does not match the expected date or timestamp layout.
    #[error("{value:?} does not match layout {layout:?}: {source}")]
    Time {
        /// The rejected text.
        value: String,
        /// The `strftime` layout that was expected.
        layout: &'static str,
        /// The parser's reason.
        source: chrono::ParseError,
    },
}
