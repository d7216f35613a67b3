//! Typed field values and coercion from raw decoded input.
//!
//! Coercion rules are deliberately explicit and narrow: a conversion is only
//! performed when it is safe and unambiguous.
//!
//! - text: string as-is; numbers rendered to their decimal string
//! - int: integer in i64 range; float with an exact integral value; string
//!   parsing as an integer
//! - float: any number; string parsing as a finite float
//! - date: string in ISO-8601 `YYYY-MM-DD` form, checked as a real calendar
//!   date

use chrono::NaiveDate;
use serde_json::Value;

use super::errors::ValidationError;
use super::types::{FieldDef, FieldType};

/// A raw value resolved to its declared type.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// UTF-8 string
    Text(String),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point
    Float(f64),
    /// Calendar date
    Date(NaiveDate),
}

impl FieldValue {
    /// Consumes the value if it is text.
    pub fn into_text(self) -> Option<String> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Consumes the value if it is an integer.
    pub fn into_int(self) -> Option<i64> {
        match self {
            FieldValue::Int(i) => Some(i),
            _ => None,
        }
    }

    /// Consumes the value if it is a float.
    pub fn into_float(self) -> Option<f64> {
        match self {
            FieldValue::Float(f) => Some(f),
            _ => None,
        }
    }

    /// Consumes the value if it is a date.
    pub fn into_date(self) -> Option<NaiveDate> {
        match self {
            FieldValue::Date(d) => Some(d),
            _ => None,
        }
    }
}

/// Coerces a raw non-null value to the field's declared type.
///
/// The returned [`FieldValue`] variant always matches `def.field_type`.
pub fn coerce(def: &FieldDef, raw: &Value) -> Result<FieldValue, ValidationError> {
    match def.field_type {
        FieldType::Text => coerce_text(def, raw),
        FieldType::Int => coerce_int(def, raw),
        FieldType::Float => coerce_float(def, raw),
        FieldType::Date => coerce_date(def, raw),
    }
}

fn coerce_text(def: &FieldDef, raw: &Value) -> Result<FieldValue, ValidationError> {
    match raw {
        Value::String(s) => Ok(FieldValue::Text(s.clone())),
        Value::Number(n) => Ok(FieldValue::Text(n.to_string())),
        _ => Err(mismatch(def, raw)),
    }
}

fn coerce_int(def: &FieldDef, raw: &Value) -> Result<FieldValue, ValidationError> {
    match raw {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Ok(FieldValue::Int(i));
            }
            // u64 beyond i64 range is out of range, not integral-float territory
            if n.is_u64() {
                return Err(mismatch(def, raw));
            }
            match n.as_f64() {
                // Exact integral floats only; the round-trip check rejects
                // values outside i64 range
                Some(f) if f.fract() == 0.0 && (f as i64) as f64 == f => {
                    Ok(FieldValue::Int(f as i64))
                }
                _ => Err(mismatch(def, raw)),
            }
        }
        Value::String(s) => match s.trim().parse::<i64>() {
            Ok(i) => Ok(FieldValue::Int(i)),
            Err(_) => Err(mismatch(def, raw)),
        },
        _ => Err(mismatch(def, raw)),
    }
}

fn coerce_float(def: &FieldDef, raw: &Value) -> Result<FieldValue, ValidationError> {
    match raw {
        Value::Number(n) => match n.as_f64() {
            Some(f) => Ok(FieldValue::Float(f)),
            None => Err(mismatch(def, raw)),
        },
        Value::String(s) => match s.trim().parse::<f64>() {
            Ok(f) if f.is_finite() => Ok(FieldValue::Float(f)),
            _ => Err(mismatch(def, raw)),
        },
        _ => Err(mismatch(def, raw)),
    }
}

fn coerce_date(def: &FieldDef, raw: &Value) -> Result<FieldValue, ValidationError> {
    match raw {
        Value::String(s) => match NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            Ok(date) => Ok(FieldValue::Date(date)),
            Err(_) => Err(ValidationError::DateParse {
                field: def.name,
                value: s.clone(),
            }),
        },
        _ => Err(mismatch(def, raw)),
    }
}

fn mismatch(def: &FieldDef, raw: &Value) -> ValidationError {
    ValidationError::TypeMismatch {
        field: def.name,
        expected: def.field_type.type_name(),
        actual: describe(raw),
    }
}

/// Describes a raw value for error messages.
pub(crate) fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".into(),
        Value::Bool(b) => format!("bool {}", b),
        Value::Number(n) => format!("number {}", n),
        Value::String(s) => format!("string \"{}\"", s),
        Value::Array(_) => "array".into(),
        Value::Object(_) => "object".into(),
    }
}
