//! Schema type definitions for the request records.
//!
//! Supported field types:
//! - text: UTF-8 string
//! - int: 64-bit signed integer
//! - float: 64-bit floating point
//! - date: calendar date (year/month/day, no time component)
//!
//! Schemas are static, declaration-ordered data. There are exactly two of
//! them, one per request record shape; nothing is loaded from disk.

use serde::{Deserialize, Serialize};

/// Field types the request schemas are built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// UTF-8 string
    Text,
    /// 64-bit signed integer
    Int,
    /// 64-bit floating point
    Float,
    /// Calendar date, ISO-8601 `YYYY-MM-DD`
    Date,
}

impl FieldType {
    /// Returns the type name used in error messages and introspection output.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Int => "int",
            FieldType::Float => "float",
            FieldType::Date => "date",
        }
    }
}

/// A single named field definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldDef {
    /// Field name as it appears in the raw mapping
    pub name: &'static str,
    /// Field data type
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Whether the field must be present and non-null
    pub required: bool,
}

impl FieldDef {
    /// Create a required field definition.
    pub const fn required(name: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            field_type,
            required: true,
        }
    }

    /// Create an optional field definition.
    pub const fn optional(name: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            field_type,
            required: false,
        }
    }
}

/// A named, ordered set of field definitions.
///
/// Field order is declaration order, so validation reports and introspection
/// output are deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Schema {
    /// Schema name, used in error reports
    pub name: &'static str,
    /// Field definitions in declaration order
    pub fields: &'static [FieldDef],
}

impl Schema {
    /// Looks up a field definition by name.
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|def| def.name == name)
    }

    /// Returns the names of all required fields, in declaration order.
    pub fn required_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields
            .iter()
            .filter(|def| def.required)
            .map(|def| def.name)
    }
}

pub(crate) mod fields {
    use super::{FieldDef, FieldType};

    pub(crate) const USERNAME: FieldDef = FieldDef::optional("username", FieldType::Text);
    pub(crate) const PASSWORD: FieldDef = FieldDef::optional("password", FieldType::Int);
    pub(crate) const EMAIL: FieldDef = FieldDef::optional("email", FieldType::Text);

    pub(crate) const DATE: FieldDef = FieldDef::required("date", FieldType::Date);
    pub(crate) const CATEGORY: FieldDef = FieldDef::required("category", FieldType::Text);
    pub(crate) const VENDOR: FieldDef = FieldDef::required("vendor", FieldType::Text);
    pub(crate) const AMOUNT: FieldDef = FieldDef::required("amount", FieldType::Float);
}

/// Schema for a credential-update request. Every field is optional; an absent
/// field means "no change requested".
pub static CREDENTIAL_UPDATE: Schema = Schema {
    name: "credential_update",
    fields: &[fields::USERNAME, fields::PASSWORD, fields::EMAIL],
};

/// Schema for an expense record. All fields are required.
pub static EXPENSE: Schema = Schema {
    name: "expense",
    fields: &[fields::DATE, fields::CATEGORY, fields::VENDOR, fields::AMOUNT],
};

/// Selects one of the built-in request schemas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaKind {
    /// User credential update request
    CredentialUpdate,
    /// Expense record
    Expense,
}

impl SchemaKind {
    /// Returns the schema definition for this kind.
    pub fn schema(&self) -> &'static Schema {
        match self {
            SchemaKind::CredentialUpdate => &CREDENTIAL_UPDATE,
            SchemaKind::Expense => &EXPENSE,
        }
    }

    /// Returns the schema name.
    pub fn name(&self) -> &'static str {
        self.schema().name
    }
}
