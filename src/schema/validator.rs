//! Validation of raw request bodies against the built-in schemas.
//!
//! Validation semantics:
//! - The root value must be a JSON object
//! - Fields resolve in schema declaration order
//! - An absent or null field is an error only when the field is required;
//!   otherwise it resolves to "no value provided"
//! - Present values are coerced per the rules in [`super::value`]
//! - Keys the schema does not declare are ignored
//! - Every offending field is reported in one pass, never fail-fast
//!
//! Validation is a pure function of its input: no I/O, no shared state,
//! deterministic.

use serde_json::{Map, Value};

use super::errors::{SchemaResult, ValidationError, ValidationReport};
use super::records::{CredentialUpdate, ExpenseRecord, Patch, Record};
use super::types::{fields, FieldDef, Schema, SchemaKind};
use super::value::{coerce, describe, FieldValue};

/// Validates a raw request body against the selected schema.
///
/// Returns the typed record on success, or a [`ValidationReport`] listing
/// every offending field.
pub fn validate(raw: &Value, kind: SchemaKind) -> SchemaResult<Record> {
    match kind {
        SchemaKind::CredentialUpdate => {
            CredentialUpdate::from_value(raw).map(Record::CredentialUpdate)
        }
        SchemaKind::Expense => ExpenseRecord::from_value(raw).map(Record::Expense),
    }
}

impl CredentialUpdate {
    /// Validates a raw request body as a credential update.
    pub fn from_value(raw: &Value) -> SchemaResult<Self> {
        let schema = SchemaKind::CredentialUpdate.schema();
        let obj = require_object(schema, raw)?;
        let mut report = ValidationReport::new(schema.name);

        let username = resolve_field(obj, &fields::USERNAME, &mut report)
            .and_then(FieldValue::into_text);
        let password = resolve_field(obj, &fields::PASSWORD, &mut report)
            .and_then(FieldValue::into_int);
        let email = resolve_field(obj, &fields::EMAIL, &mut report)
            .and_then(FieldValue::into_text);

        if report.is_empty() {
            Ok(Self {
                username: Patch::from(username),
                password: Patch::from(password),
                email: Patch::from(email),
            })
        } else {
            Err(report)
        }
    }
}

impl ExpenseRecord {
    /// Validates a raw request body as an expense record.
    pub fn from_value(raw: &Value) -> SchemaResult<Self> {
        let schema = SchemaKind::Expense.schema();
        let obj = require_object(schema, raw)?;
        let mut report = ValidationReport::new(schema.name);

        let date = resolve_field(obj, &fields::DATE, &mut report).and_then(FieldValue::into_date);
        let category =
            resolve_field(obj, &fields::CATEGORY, &mut report).and_then(FieldValue::into_text);
        let vendor =
            resolve_field(obj, &fields::VENDOR, &mut report).and_then(FieldValue::into_text);
        let amount =
            resolve_field(obj, &fields::AMOUNT, &mut report).and_then(FieldValue::into_float);

        match (date, category, vendor, amount) {
            (Some(date), Some(category), Some(vendor), Some(amount)) if report.is_empty() => {
                Ok(Self {
                    date,
                    category,
                    vendor,
                    amount,
                })
            }
            _ => Err(report),
        }
    }
}

/// Requires the root value to be a JSON object.
fn require_object<'a>(schema: &Schema, raw: &'a Value) -> SchemaResult<&'a Map<String, Value>> {
    raw.as_object().ok_or_else(|| {
        let mut report = ValidationReport::new(schema.name);
        report.push(ValidationError::TypeMismatch {
            field: "$root",
            expected: "object",
            actual: describe(raw),
        });
        report
    })
}

/// Resolves one field of the raw mapping against its definition.
///
/// Absent and null are equivalent: an error for required fields, "no value
/// provided" for optional ones. Coercion failures are recorded in the report.
fn resolve_field(
    obj: &Map<String, Value>,
    def: &FieldDef,
    report: &mut ValidationReport,
) -> Option<FieldValue> {
    match obj.get(def.name) {
        None | Some(Value::Null) => {
            if def.required {
                report.push(ValidationError::MissingRequired { field: def.name });
            }
            None
        }
        Some(value) => match coerce(def, value) {
            Ok(resolved) => Some(resolved),
            Err(error) => {
                report.push(error);
                None
            }
        },
    }
}
