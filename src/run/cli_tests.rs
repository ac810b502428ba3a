#![allow(clippy::unwrap_used)]

use super::*;
use crate::db::SqliteKeyValueStore;
use crate::models::Category;

fn new_store() -> ExpenseStore {
    ExpenseStore::open(Box::new(SqliteKeyValueStore::open_in_memory().unwrap()))
}

fn june() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

#[test]
fn test_summary_empty_ledger() {
    let store = new_store();
    let report = summary_report(&store, june());
    assert!(report.contains("June 2024"));
    assert!(report.contains("Total Spent:       $0.00"));
    assert!(report.contains("Expenses:          0"));
    assert!(!report.contains("Category"));
}

#[test]
fn test_summary_shows_clamped_remaining_and_overage() {
    let mut store = new_store();
    let _ = store
        .add_expense("50", Category::Food, "2024-06-01", "Groceries")
        .unwrap();
    let _ = store.set_budget(Category::Food, "40").unwrap();

    let report = summary_report(&store, june());
    assert!(report.contains("Remaining Budget:  $0.00  (over by $10.00)"));
    let food_line = report.lines().find(|l| l.contains("Food")).unwrap();
    assert!(food_line.contains("over budget"));
    assert!(food_line.contains("$40.00"));
}

#[test]
fn test_list_report_filters_and_orders() {
    let mut store = new_store();
    let _ = store
        .add_expense("5", Category::Food, "2024-06-01", "Older")
        .unwrap();
    let _ = store
        .add_expense("7", Category::Food, "2024-06-09", "Newer")
        .unwrap();
    let _ = store
        .add_expense("9", Category::Bills, "2024-06-05", "Power")
        .unwrap();

    let report = list_report(&store, ExpenseFilter::Category(Category::Food));
    let newer = report.find("Newer").unwrap();
    let older = report.find("Older").unwrap();
    assert!(newer < older);
    assert!(!report.contains("Power"));

    let empty = list_report(&store, ExpenseFilter::Category(Category::Shopping));
    assert_eq!(empty.trim(), "No expenses found");
}
