//! Typed, immutable record instances produced by validation.
//!
//! Optional update fields use [`Patch`] rather than `Option` so that "no
//! change requested" is an explicit, type-checked state instead of a
//! null-as-sentinel convention.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::types::SchemaKind;

/// An optional update field: either a provided value or explicitly absent.
///
/// `Absent` means "no change requested". Serializes as the inner value when
/// provided; absent fields are skipped on the wire, and an explicit JSON
/// `null` deserializes back to `Absent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Patch<T> {
    /// A value was supplied
    Provided(T),
    /// No value was supplied
    Absent,
}

impl<T> Patch<T> {
    /// Returns true if a value was supplied.
    pub fn is_provided(&self) -> bool {
        matches!(self, Patch::Provided(_))
    }

    /// Returns true if no value was supplied.
    pub fn is_absent(&self) -> bool {
        matches!(self, Patch::Absent)
    }

    /// Borrows the provided value, if any.
    pub fn as_option(&self) -> Option<&T> {
        match self {
            Patch::Provided(value) => Some(value),
            Patch::Absent => None,
        }
    }

    /// Consumes the patch, yielding the provided value, if any.
    pub fn into_option(self) -> Option<T> {
        match self {
            Patch::Provided(value) => Some(value),
            Patch::Absent => None,
        }
    }
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Absent
    }
}

impl<T> From<Option<T>> for Patch<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Patch::Provided(value),
            None => Patch::Absent,
        }
    }
}

impl<T: Serialize> Serialize for Patch<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Patch::Provided(value) => value.serialize(serializer),
            Patch::Absent => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Patch::from)
    }
}

/// A validated credential-update request.
///
/// Each absent field means "no change requested"; an all-absent update is
/// structurally valid. Whether it is semantically meaningful is the calling
/// layer's concern.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CredentialUpdate {
    /// New username, if a change was requested
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub username: Patch<String>,
    /// New password, if a change was requested. Typed as an integer to match
    /// the upstream schema; see DESIGN.md.
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub password: Patch<i64>,
    /// New email, if a change was requested
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub email: Patch<String>,
}

impl CredentialUpdate {
    /// Returns true if no field requests a change.
    pub fn is_empty(&self) -> bool {
        self.username.is_absent() && self.password.is_absent() && self.email.is_absent()
    }
}

/// A validated expense record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Calendar date of the expense
    pub date: NaiveDate,
    /// Expense classification
    pub category: String,
    /// Payee or merchant name
    pub vendor: String,
    /// Monetary amount
    pub amount: f64,
}

/// A validated instance of either request schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Record {
    /// Credential-update request
    CredentialUpdate(CredentialUpdate),
    /// Expense record
    Expense(ExpenseRecord),
}

impl Record {
    /// Returns the schema kind this record was validated against.
    pub fn kind(&self) -> SchemaKind {
        match self {
            Record::CredentialUpdate(_) => SchemaKind::CredentialUpdate,
            Record::Expense(_) => SchemaKind::Expense,
        }
    }

    /// Consumes the record if it is a credential update.
    pub fn into_credential_update(self) -> Option<CredentialUpdate> {
        match self {
            Record::CredentialUpdate(update) => Some(update),
            Record::Expense(_) => None,
        }
    }

    /// Consumes the record if it is an expense.
    pub fn into_expense(self) -> Option<ExpenseRecord> {
        match self {
            Record::Expense(expense) => Some(expense),
            Record::CredentialUpdate(_) => None,
        }
    }
}
