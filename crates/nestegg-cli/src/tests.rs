//! CLI command tests
//!
//! This module contains all tests for the CLI commands.

use nestegg_core::db::Database;
use nestegg_core::models::EntryCategory;

use crate::commands;

fn setup_test_db() -> Database {
    Database::in_memory().unwrap()
}

// ========== Add / Entries Command Tests ==========

#[test]
fn test_cmd_add_income() {
    let db = setup_test_db();
    let result = commands::cmd_add(
        &db, "local", "Salary", 50000.0, "income", None, "monthly", true, None, None,
    );
    assert!(result.is_ok());

    let entries = db.list_entries("local").unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].kind.category(), EntryCategory::Income);
    assert!(entries[0].is_primary);
}

#[test]
fn test_cmd_add_investment_with_detail() {
    let db = setup_test_db();
    let result = commands::cmd_add(
        &db,
        "local",
        "Gold SIP",
        5000.0,
        "investment",
        Some("gold"),
        "monthly",
        false,
        None,
        None,
    );
    assert!(result.is_ok());

    let entries = db.list_entries("local").unwrap();
    assert_eq!(entries[0].kind.category(), EntryCategory::Investment);
    assert_eq!(entries[0].kind.detail_str(), Some("gold"));
}

#[test]
fn test_cmd_add_loan_with_metadata() {
    let db = setup_test_db();
    let result = commands::cmd_add(
        &db,
        "local",
        "Home Loan EMI",
        25000.0,
        "loan",
        Some("home"),
        "monthly",
        false,
        Some(3_000_000.0),
        Some(8.5),
    );
    assert!(result.is_ok());

    let entries = db.list_entries("local").unwrap();
    assert_eq!(entries[0].kind.category(), EntryCategory::Loan);
    assert_eq!(entries[0].principal, Some(3_000_000.0));
}

#[test]
fn test_cmd_add_rejects_unknown_kind() {
    let db = setup_test_db();
    let result = commands::cmd_add(
        &db, "local", "Weird", 100.0, "dividend", None, "monthly", false, None, None,
    );
    assert!(result.is_err());
}

#[test]
fn test_cmd_entries_list_empty_and_populated() {
    let db = setup_test_db();
    assert!(commands::cmd_entries_list(&db, "local").is_ok());

    commands::cmd_add(
        &db, "local", "Food", 10000.0, "expense", None, "monthly", false, None, None,
    )
    .unwrap();
    assert!(commands::cmd_entries_list(&db, "local").is_ok());
}

#[test]
fn test_cmd_entries_update_and_delete() {
    let db = setup_test_db();
    commands::cmd_add(
        &db, "local", "Food", 10000.0, "expense", None, "monthly", false, None, None,
    )
    .unwrap();
    let id = db.list_entries("local").unwrap()[0].id;

    commands::cmd_entries_update(&db, "local", id, None, Some(12000.0), None).unwrap();
    assert_eq!(db.list_entries("local").unwrap()[0].amount, 12000.0);

    commands::cmd_entries_delete(&db, "local", id).unwrap();
    assert!(db.list_entries("local").unwrap().is_empty());
}

#[test]
fn test_cmd_entries_delete_missing_id_fails() {
    let db = setup_test_db();
    assert!(commands::cmd_entries_delete(&db, "local", 999).is_err());
}

// ========== Dashboard Command Tests ==========

#[test]
fn test_cmd_dashboard_empty() {
    let db = setup_test_db();
    assert!(commands::cmd_dashboard(&db, "local", false, 3).is_ok());
}

#[test]
fn test_cmd_dashboard_with_data_persists_potential() {
    let db = setup_test_db();
    commands::cmd_add(
        &db, "local", "Salary", 50000.0, "income", None, "monthly", true, None, None,
    )
    .unwrap();
    commands::cmd_add(
        &db, "local", "Food", 10000.0, "expense", None, "monthly", false, None, None,
    )
    .unwrap();

    commands::cmd_dashboard(&db, "local", false, 3).unwrap();
    let first = db.get_potential_savings("local").unwrap().unwrap();

    commands::cmd_dashboard(&db, "local", false, 3).unwrap();
    let second = db.get_potential_savings("local").unwrap().unwrap();
    assert_eq!(first.percent, second.percent);
    assert_eq!(first.version, second.version);
}

#[test]
fn test_cmd_dashboard_refresh_bumps_version() {
    let db = setup_test_db();
    commands::cmd_add(
        &db, "local", "Salary", 50000.0, "income", None, "monthly", true, None, None,
    )
    .unwrap();
    commands::cmd_add(
        &db, "local", "Food", 10000.0, "expense", None, "monthly", false, None, None,
    )
    .unwrap();

    commands::cmd_dashboard(&db, "local", false, 3).unwrap();
    commands::cmd_dashboard(&db, "local", true, 3).unwrap();

    let record = db.get_potential_savings("local").unwrap().unwrap();
    assert_eq!(record.version, 2);
}

// ========== Import / Export Command Tests ==========

#[test]
fn test_cmd_import_and_export() {
    use std::io::Write;

    let db = setup_test_db();
    let dir = tempfile::tempdir().unwrap();

    let csv_path = dir.path().join("legacy.csv");
    let mut file = std::fs::File::create(&csv_path).unwrap();
    writeln!(file, "raw_name,amount").unwrap();
    writeln!(file, "Salary,50000").unwrap();
    writeln!(file, "Expense: Food,10000").unwrap();
    drop(file);

    commands::cmd_import(&db, "local", &csv_path).unwrap();
    assert_eq!(db.list_entries("local").unwrap().len(), 2);

    let out_path = dir.path().join("entries.csv");
    commands::cmd_export(&db, "local", Some(&out_path), "csv").unwrap();
    let exported = std::fs::read_to_string(&out_path).unwrap();
    assert!(exported.contains("Salary"));
    assert!(exported.contains("Food"));
}

#[test]
fn test_cmd_export_rejects_unknown_format() {
    let db = setup_test_db();
    let result = commands::cmd_export(&db, "local", None, "xml");
    assert!(result.is_err());
}

// ========== Reset Command Tests ==========

#[test]
fn test_cmd_reset_requires_confirmation() {
    let db = setup_test_db();
    commands::cmd_add(
        &db, "local", "Food", 100.0, "expense", None, "monthly", false, None, None,
    )
    .unwrap();

    commands::cmd_reset(&db, false).unwrap();
    assert_eq!(db.list_entries("local").unwrap().len(), 1);

    commands::cmd_reset(&db, true).unwrap();
    assert!(db.list_entries("local").unwrap().is_empty());
}
