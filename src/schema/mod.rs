//! Request schema subsystem for ledgerly-core.
//!
//! Defines the two request record shapes the backend accepts and validates
//! raw request bodies against them.
//!
//! # Design Principles
//!
//! - Validation is pure and deterministic
//! - Every offending field is reported in one pass, never fail-fast
//! - Coercion is explicit and narrow; nothing else is converted implicitly
//! - Optional fields resolve to an explicit provided/absent state
//! - Instances are immutable once constructed

mod errors;
mod records;
mod types;
mod validator;
mod value;

pub use errors::{SchemaResult, ValidationError, ValidationReport};
pub use records::{CredentialUpdate, ExpenseRecord, Patch, Record};
pub use types::{FieldDef, FieldType, Schema, SchemaKind, CREDENTIAL_UPDATE, EXPENSE};
pub use validator::validate;
pub use value::FieldValue;
