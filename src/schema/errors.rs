//! Validation error types for the request schemas.
//!
//! A single validation attempt never fails fast: every offending field is
//! collected into one [`ValidationReport`] so the caller can surface the
//! complete list to the end user in one pass.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Result type for schema validation.
pub type SchemaResult<T> = Result<T, ValidationReport>;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationError {
    /// Value present but not convertible to the declared type
    #[error("field '{field}': expected {expected}, got {actual}")]
    TypeMismatch {
        /// Offending field name
        field: &'static str,
        /// Declared type name
        expected: &'static str,
        /// Description of the received value
        actual: String,
    },

    /// Required field absent or null
    #[error("field '{field}': required field is missing")]
    MissingRequired {
        /// Offending field name
        field: &'static str,
    },

    /// Date-typed field not in a recognized calendar-date format
    #[error("field '{field}': '{value}' is not a valid calendar date (expected YYYY-MM-DD)")]
    DateParse {
        /// Offending field name
        field: &'static str,
        /// The raw value that failed to parse
        value: String,
    },
}

impl ValidationError {
    /// Returns the name of the field this error is about.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::TypeMismatch { field, .. } => field,
            ValidationError::MissingRequired { field } => field,
            ValidationError::DateParse { field, .. } => field,
        }
    }
}

/// Every failure from one validation attempt, in schema declaration order.
///
/// Serializes to a structured body the service layer can return as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Name of the schema the input was validated against
    pub schema: &'static str,
    /// Field errors, ordered by schema declaration order
    pub errors: Vec<ValidationError>,
}

impl ValidationReport {
    /// Creates an empty report for the given schema.
    pub fn new(schema: &'static str) -> Self {
        Self {
            schema,
            errors: Vec::new(),
        }
    }

    /// Records a field error.
    pub fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Returns true if no field failed.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the names of all offending fields, in report order.
    pub fn fields(&self) -> Vec<&'static str> {
        self.errors.iter().map(ValidationError::field).collect()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation of '{}' failed: ", self.schema)?;
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationReport {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = ValidationError::TypeMismatch {
            field: "amount",
            expected: "float",
            actual: "bool true".into(),
        };
        assert_eq!(error.to_string(), "field 'amount': expected float, got bool true");

        let error = ValidationError::MissingRequired { field: "vendor" };
        assert_eq!(error.to_string(), "field 'vendor': required field is missing");
    }

    #[test]
    fn test_date_parse_display_names_value() {
        let error = ValidationError::DateParse {
            field: "date",
            value: "2023-02-29".into(),
        };
        let display = error.to_string();
        assert!(display.contains("date"));
        assert!(display.contains("2023-02-29"));
        assert!(display.contains("YYYY-MM-DD"));
    }

    #[test]
    fn test_report_lists_every_error() {
        let mut report = ValidationReport::new("expense");
        report.push(ValidationError::MissingRequired { field: "vendor" });
        report.push(ValidationError::MissingRequired { field: "amount" });

        assert_eq!(report.fields(), vec!["vendor", "amount"]);
        let display = report.to_string();
        assert!(display.contains("'expense'"));
        assert!(display.contains("vendor"));
        assert!(display.contains("amount"));
    }

    #[test]
    fn test_report_serializes_structured() {
        let mut report = ValidationReport::new("expense");
        report.push(ValidationError::TypeMismatch {
            field: "amount",
            expected: "float",
            actual: "string \"abc\"".into(),
        });

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["schema"], "expense");
        assert_eq!(value["errors"][0]["kind"], "type_mismatch");
        assert_eq!(value["errors"][0]["field"], "amount");
        assert_eq!(value["errors"][0]["expected"], "float");
    }
}
