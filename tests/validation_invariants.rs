//! Validation Invariant Tests
//!
//! Crate-level tests for the request schema layer:
//! - Validation is deterministic and side-effect-free
//! - Every offending field is reported in one pass
//! - Optional fields resolve to an explicit provided/absent state
//! - Valid instances round-trip through their raw mapping form

use chrono::NaiveDate;
use ledgerly_core::schema::{
    validate, CredentialUpdate, ExpenseRecord, Patch, SchemaKind, ValidationError,
};
use serde_json::json;

// =============================================================================
// Helper Functions
// =============================================================================

fn valid_expense_body() -> serde_json::Value {
    json!({
        "date": "2024-01-15",
        "category": "food",
        "vendor": "Cafe",
        "amount": "12.50"
    })
}

// =============================================================================
// Determinism Tests
// =============================================================================

/// Same input validates the same way every time.
#[test]
fn test_validation_is_deterministic() {
    let raw = valid_expense_body();

    let first = ExpenseRecord::from_value(&raw).unwrap();
    for _ in 0..100 {
        assert_eq!(ExpenseRecord::from_value(&raw).unwrap(), first);
    }
}

/// Invalid input fails consistently, with a stable error list.
#[test]
fn test_invalid_input_fails_consistently() {
    let raw = json!({ "category": "food" });

    let first = ExpenseRecord::from_value(&raw).unwrap_err();
    for _ in 0..100 {
        assert_eq!(ExpenseRecord::from_value(&raw).unwrap_err(), first);
    }
}

/// Error ordering follows schema declaration order.
#[test]
fn test_error_order_is_declaration_order() {
    let report = ExpenseRecord::from_value(&json!({})).unwrap_err();
    assert_eq!(report.fields(), vec!["date", "category", "vendor", "amount"]);
}

// =============================================================================
// Expense Record Tests
// =============================================================================

/// The canonical valid body produces an instance equal to the input, modulo
/// coercion of the string amount.
#[test]
fn test_expense_scenario_coerces_amount_and_date() {
    let expense = ExpenseRecord::from_value(&valid_expense_body()).unwrap();

    assert_eq!(expense.date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    assert_eq!(expense.category, "food");
    assert_eq!(expense.vendor, "Cafe");
    assert_eq!(expense.amount, 12.5);
}

/// A body with only a category reports exactly the missing fields.
#[test]
fn test_expense_scenario_missing_fields() {
    let report = ExpenseRecord::from_value(&json!({ "category": "food" })).unwrap_err();

    assert_eq!(report.fields(), vec!["date", "vendor", "amount"]);
    for error in &report.errors {
        assert!(matches!(error, ValidationError::MissingRequired { .. }));
    }
}

/// Leap day parses; the same day in a non-leap year does not.
#[test]
fn test_leap_day_boundary() {
    let mut raw = valid_expense_body();
    raw["date"] = json!("2024-02-29");
    assert!(ExpenseRecord::from_value(&raw).is_ok());

    raw["date"] = json!("2023-02-29");
    let report = ExpenseRecord::from_value(&raw).unwrap_err();
    assert!(matches!(
        report.errors[0],
        ValidationError::DateParse { field: "date", .. }
    ));
}

// =============================================================================
// Credential Update Tests
// =============================================================================

/// Any subset of fields, including none, validates; the rest resolve to
/// "no value provided".
#[test]
fn test_credential_update_scenario_subset() {
    let update = CredentialUpdate::from_value(&json!({ "username": "alice" })).unwrap();

    assert_eq!(update.username, Patch::Provided("alice".into()));
    assert!(update.password.is_absent());
    assert!(update.email.is_absent());

    let empty = CredentialUpdate::from_value(&json!({})).unwrap();
    assert!(empty.is_empty());
}

/// Full update with all three fields provided.
#[test]
fn test_credential_update_full() {
    let raw = json!({
        "username": "alice",
        "password": 123456,
        "email": "alice@example.com"
    });

    let update = CredentialUpdate::from_value(&raw).unwrap();
    assert_eq!(update.username, Patch::Provided("alice".into()));
    assert_eq!(update.password, Patch::Provided(123456));
    assert_eq!(update.email, Patch::Provided("alice@example.com".into()));
}

// =============================================================================
// Round-Trip Tests
// =============================================================================

/// validate . serialize . validate is identity on valid expense records.
#[test]
fn test_expense_round_trip() {
    let expense = ExpenseRecord::from_value(&valid_expense_body()).unwrap();

    let raw = serde_json::to_value(&expense).unwrap();
    let again = ExpenseRecord::from_value(&raw).unwrap();

    assert_eq!(expense, again);
}

/// Round-tripping preserves the absent fields of a credential update.
#[test]
fn test_credential_update_round_trip() {
    let update = CredentialUpdate::from_value(&json!({ "email": "a@b.c" })).unwrap();

    let raw = serde_json::to_value(&update).unwrap();
    assert_eq!(raw, json!({ "email": "a@b.c" }));

    let again = CredentialUpdate::from_value(&raw).unwrap();
    assert_eq!(update, again);
}

// =============================================================================
// Generic Entry Point Tests
// =============================================================================

/// The kind-selected entry point produces the same instances as the typed
/// ones.
#[test]
fn test_generic_validate_matches_typed_entry_points() {
    let raw = valid_expense_body();

    let record = validate(&raw, SchemaKind::Expense).unwrap();
    assert_eq!(record.kind(), SchemaKind::Expense);
    assert_eq!(
        record.into_expense().unwrap(),
        ExpenseRecord::from_value(&raw).unwrap()
    );
}

/// A report serializes to a structured body with one entry per failing field.
#[test]
fn test_report_serializes_for_the_caller() {
    let report = validate(&json!({ "category": "food" }), SchemaKind::Expense).unwrap_err();

    let body = serde_json::to_value(&report).unwrap();
    assert_eq!(body["schema"], "expense");
    assert_eq!(body["errors"].as_array().unwrap().len(), 3);
    assert_eq!(body["errors"][0]["kind"], "missing_required");
    assert_eq!(body["errors"][0]["field"], "date");
}
