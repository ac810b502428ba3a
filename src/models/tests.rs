#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::error::ValidationError;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn make_expense(amount: Decimal, category: Category, on: &str) -> Expense {
    Expense {
        id: 1,
        amount,
        category,
        date: date(on),
        description: "Test".into(),
    }
}

// ── Category ──────────────────────────────────────────────────

#[test]
fn test_category_parse() {
    assert_eq!(Category::parse("food"), Some(Category::Food));
    assert_eq!(Category::parse("FOOD"), Some(Category::Food));
    assert_eq!(Category::parse(" Transport "), Some(Category::Transport));
    assert_eq!(Category::parse("entertainment"), Some(Category::Entertainment));
    assert_eq!(Category::parse("bills"), Some(Category::Bills));
    assert_eq!(Category::parse("Shopping"), Some(Category::Shopping));
    assert_eq!(Category::parse("groceries"), None);
    assert_eq!(Category::parse(""), None);
}

#[test]
fn test_category_from_str_error() {
    let err = "rent".parse::<Category>().unwrap_err();
    assert_eq!(err, ValidationError::UnknownCategory("rent".into()));
}

#[test]
fn test_category_all_in_chart_order() {
    let all = Category::all();
    assert_eq!(all.len(), Category::COUNT);
    for (i, c) in all.iter().enumerate() {
        assert_eq!(c.index(), i);
    }
    assert_eq!(all[0], Category::Food);
    assert_eq!(all[4], Category::Shopping);
}

#[test]
fn test_category_roundtrip() {
    for c in Category::all() {
        let back = Category::parse(c.as_str());
        assert_eq!(Some(*c), back, "Roundtrip failed for {c}");
        assert_eq!(Category::parse(c.label()), Some(*c));
    }
}

#[test]
fn test_category_display() {
    assert_eq!(format!("{}", Category::Food), "Food");
    assert_eq!(format!("{}", Category::Entertainment), "Entertainment");
}

#[test]
fn test_category_serializes_lowercase() {
    let json = serde_json::to_string(&Category::Bills).unwrap();
    assert_eq!(json, "\"bills\"");
    let back: Category = serde_json::from_str("\"shopping\"").unwrap();
    assert_eq!(back, Category::Shopping);
    assert!(serde_json::from_str::<Category>("\"Rent\"").is_err());
}

// ── Expense ───────────────────────────────────────────────────

#[test]
fn test_expense_in_month() {
    let e = make_expense(dec!(10), Category::Food, "2024-06-01");
    assert!(e.is_in_month_of(date("2024-06-30")));
    assert!(!e.is_in_month_of(date("2024-07-01")));
    // Same month, different year
    assert!(!e.is_in_month_of(date("2023-06-15")));
}

#[test]
fn test_expense_json_shape() {
    let e = make_expense(dec!(12.50), Category::Transport, "2024-01-05");
    let v = serde_json::to_value(&e).unwrap();
    assert_eq!(v["id"].as_i64(), Some(1));
    assert_eq!(v["amount"].as_f64(), Some(12.5));
    assert_eq!(v["category"].as_str(), Some("transport"));
    assert_eq!(v["date"].as_str(), Some("2024-01-05"));
    assert_eq!(v["description"].as_str(), Some("Test"));
}

#[test]
fn test_expense_parses_integer_amount() {
    let raw = r#"{"id":1717200000000,"amount":50,"category":"food","date":"2024-06-01","description":"Lunch"}"#;
    let e: Expense = serde_json::from_str(raw).unwrap();
    assert_eq!(e.amount, dec!(50));
    assert_eq!(e.category, Category::Food);
    assert_eq!(e.date, date("2024-06-01"));
}

#[test]
fn test_expense_rejects_bad_date() {
    let raw = r#"{"id":1,"amount":5,"category":"food","date":"2024-02-30","description":"x"}"#;
    assert!(serde_json::from_str::<Expense>(raw).is_err());
}

// ── BudgetTable ───────────────────────────────────────────────

#[test]
fn test_budget_table_defaults_to_zero() {
    let table = BudgetTable::default();
    for (_, limit) in table.iter() {
        assert_eq!(limit, Decimal::ZERO);
    }
    assert_eq!(table.total(), Decimal::ZERO);
}

#[test]
fn test_budget_table_set_overwrites() {
    let mut table = BudgetTable::default();
    table.set(Category::Food, dec!(40));
    table.set(Category::Food, dec!(45.5));
    table.set(Category::Bills, dec!(100));
    assert_eq!(table.get(Category::Food), dec!(45.5));
    assert_eq!(table.get(Category::Bills), dec!(100));
    assert_eq!(table.get(Category::Shopping), Decimal::ZERO);
    assert_eq!(table.total(), dec!(145.5));
}

#[test]
fn test_budget_table_never_negative() {
    let mut table = BudgetTable::default();
    table.set(Category::Transport, dec!(-20));
    assert_eq!(table.get(Category::Transport), Decimal::ZERO);
}

#[test]
fn test_budget_table_json_has_five_keys() {
    let mut table = BudgetTable::default();
    table.set(Category::Entertainment, dec!(60));
    let v = serde_json::to_value(&table).unwrap();
    let obj = v.as_object().unwrap();
    assert_eq!(obj.len(), 5);
    for c in Category::all() {
        assert!(obj.contains_key(c.as_str()), "missing key {}", c.as_str());
    }
    assert_eq!(obj["entertainment"].as_f64(), Some(60.0));
}

#[test]
fn test_budget_table_missing_keys_load_as_zero() {
    let table: BudgetTable = serde_json::from_str(r#"{"food": 25}"#).unwrap();
    assert_eq!(table.get(Category::Food), dec!(25));
    assert_eq!(table.get(Category::Bills), Decimal::ZERO);
}

#[test]
fn test_budget_table_sanitized() {
    let table: BudgetTable =
        serde_json::from_str(r#"{"food": -5, "bills": 30}"#).unwrap();
    let table = table.sanitized();
    assert_eq!(table.get(Category::Food), Decimal::ZERO);
    assert_eq!(table.get(Category::Bills), dec!(30));
}
