//! Entry store tests

use super::*;
use crate::models::*;

#[cfg(test)]
mod tests {
    use super::*;

    fn new_entry(name: &str, kind: EntryKind, amount: f64) -> NewFinancialEntry {
        NewFinancialEntry {
            name: name.to_string(),
            kind,
            amount,
            frequency: Frequency::Monthly,
            is_primary: false,
            principal: None,
            interest_rate: None,
        }
    }

    #[test]
    fn test_fresh_db_lists_no_entries() {
        let db = Database::in_memory().unwrap();
        let entries = db.list_entries("local").unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_entries_schema_exists() {
        let db = Database::in_memory().unwrap();
        let conn = db.conn().unwrap();

        let result: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('entries') WHERE name IN ('id', 'user_id', 'name', 'kind', 'detail', 'amount', 'frequency', 'is_primary', 'principal', 'interest_rate', 'created_at', 'updated_at')",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(result, 12, "entries table should have 12 expected columns");

        let result: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('potential_savings') WHERE name IN ('user_id', 'percent', 'version', 'generated_at')",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(
            result, 4,
            "potential_savings table should have 4 expected columns"
        );
    }

    #[test]
    fn test_entry_crud() {
        let db = Database::in_memory().unwrap();

        let created = db
            .create_entry("local", &new_entry("Salary", EntryKind::Income, 50000.0))
            .unwrap();
        assert!(created.id > 0);
        assert_eq!(created.name, "Salary");
        assert_eq!(created.kind, EntryKind::Income);

        let fetched = db.get_entry("local", created.id).unwrap();
        assert_eq!(fetched.amount, 50000.0);

        let updated = db
            .update_entry(
                "local",
                created.id,
                &EntryPatch {
                    amount: Some(55000.0),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.amount, 55000.0);
        assert_eq!(updated.name, "Salary");

        db.delete_entry("local", created.id).unwrap();
        assert!(matches!(
            db.get_entry("local", created.id),
            Err(crate::error::Error::NotFound(_))
        ));
    }

    #[test]
    fn test_kind_round_trips_through_storage() {
        let db = Database::in_memory().unwrap();

        let cases = [
            EntryKind::Income,
            EntryKind::Expense,
            EntryKind::Investment(InvestmentKind::Gold),
            EntryKind::Investment(InvestmentKind::MutualFund),
            EntryKind::Loan(LoanKind::Home),
        ];
        for kind in cases {
            let created = db
                .create_entry("local", &new_entry("Test", kind, 100.0))
                .unwrap();
            let fetched = db.get_entry("local", created.id).unwrap();
            assert_eq!(fetched.kind, kind);
        }
    }

    #[test]
    fn test_loan_metadata_persists() {
        let db = Database::in_memory().unwrap();

        let mut new = new_entry("Home Loan EMI", EntryKind::Loan(LoanKind::Home), 25000.0);
        new.principal = Some(3_000_000.0);
        new.interest_rate = Some(8.5);

        let created = db.create_entry("local", &new).unwrap();
        assert_eq!(created.principal, Some(3_000_000.0));
        assert_eq!(created.interest_rate, Some(8.5));
    }

    #[test]
    fn test_empty_name_falls_back_to_income_label() {
        let db = Database::in_memory().unwrap();
        let created = db
            .create_entry("local", &new_entry("   ", EntryKind::Income, 1000.0))
            .unwrap();
        assert_eq!(created.name, "Income");
    }

    #[test]
    fn test_negative_amount_rejected_at_creation() {
        let db = Database::in_memory().unwrap();
        let result = db.create_entry("local", &new_entry("Bad", EntryKind::Expense, -5.0));
        assert!(matches!(result, Err(crate::error::Error::InvalidData(_))));
    }

    #[test]
    fn test_entries_scoped_per_user() {
        let db = Database::in_memory().unwrap();

        db.create_entry("alice", &new_entry("Salary", EntryKind::Income, 1000.0))
            .unwrap();
        db.create_entry("bob", &new_entry("Salary", EntryKind::Income, 2000.0))
            .unwrap();

        assert_eq!(db.list_entries("alice").unwrap().len(), 1);
        assert_eq!(db.list_entries("bob").unwrap().len(), 1);
        assert_eq!(db.list_entries("carol").unwrap().len(), 0);

        // Cross-user access by id is a NotFound, not a leak
        let bob_entry = &db.list_entries("bob").unwrap()[0];
        assert!(db.get_entry("alice", bob_entry.id).is_err());
    }

    #[test]
    fn test_potential_savings_write_and_read_back() {
        let db = Database::in_memory().unwrap();

        assert!(db.get_potential_savings("local").unwrap().is_none());

        let stored = db.set_potential_savings("local", 76.4, 1).unwrap();
        assert_eq!(stored.percent, 76.4);
        assert_eq!(stored.version, 1);

        let read = db.get_potential_savings("local").unwrap().unwrap();
        assert_eq!(read.percent, 76.4);
    }

    #[test]
    fn test_potential_savings_last_write_wins() {
        let db = Database::in_memory().unwrap();

        db.set_potential_savings("local", 70.0, 1).unwrap();
        db.set_potential_savings("local", 80.0, 2).unwrap();

        let read = db.get_potential_savings("local").unwrap().unwrap();
        assert_eq!(read.percent, 80.0);
        assert_eq!(read.version, 2);
    }

    #[test]
    fn test_clear_potential_savings() {
        let db = Database::in_memory().unwrap();

        db.set_potential_savings("local", 70.0, 1).unwrap();
        db.clear_potential_savings("local").unwrap();
        assert!(db.get_potential_savings("local").unwrap().is_none());
    }

    #[test]
    fn test_reset_clears_user_data() {
        let db = Database::in_memory().unwrap();

        db.create_entry("local", &new_entry("Salary", EntryKind::Income, 1000.0))
            .unwrap();
        db.set_potential_savings("local", 70.0, 1).unwrap();

        db.reset().unwrap();

        assert!(db.list_entries("local").unwrap().is_empty());
        assert!(db.get_potential_savings("local").unwrap().is_none());
    }

    #[test]
    fn test_count_entries_by_kind() {
        let db = Database::in_memory().unwrap();

        db.create_entry("local", &new_entry("Salary", EntryKind::Income, 1000.0))
            .unwrap();
        db.create_entry("local", &new_entry("Food", EntryKind::Expense, 200.0))
            .unwrap();
        db.create_entry("local", &new_entry("Rent", EntryKind::Expense, 500.0))
            .unwrap();

        let counts = db.count_entries_by_kind("local").unwrap();
        assert!(counts.contains(&("expense".to_string(), 2)));
        assert!(counts.contains(&("income".to_string(), 1)));
    }
}
