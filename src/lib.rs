//! ledgerly-core - typed request and record schemas for the ledgerly backend
//!
//! This crate owns the shape of the data crossing the service boundary: the
//! declarative schema descriptions, the validation layer that turns untrusted
//! request bodies into typed records, and the records themselves.

pub mod schema;
