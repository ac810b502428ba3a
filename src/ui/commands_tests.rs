#![allow(clippy::unwrap_used)]

use super::*;
use crate::db::SqliteKeyValueStore;
use rust_decimal_macros::dec;

fn june() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

fn setup() -> (App, ExpenseStore) {
    let store = ExpenseStore::open(Box::new(SqliteKeyValueStore::open_in_memory().unwrap()));
    let mut app = App::with_today(june());
    app.refresh_all(&store);
    (app, store)
}

// ── parse_add_args ────────────────────────────────────────────

#[test]
fn test_parse_add_args_full() {
    let parsed = parse_add_args("12.50 food 2024-06-01 Lunch with Sam", june()).unwrap();
    assert_eq!(
        parsed,
        AddArgs {
            amount: "12.50".into(),
            category: Category::Food,
            date: "2024-06-01".into(),
            description: "Lunch with Sam".into(),
        }
    );
}

#[test]
fn test_parse_add_args_defaults_date_to_today() {
    let parsed = parse_add_args("40 Transport Train pass", june()).unwrap();
    assert_eq!(parsed.category, Category::Transport);
    assert_eq!(parsed.date, "2024-06-15");
    assert_eq!(parsed.description, "Train pass");
}

#[test]
fn test_parse_add_args_no_description() {
    let parsed = parse_add_args("9 bills", june()).unwrap();
    assert_eq!(parsed.date, "2024-06-15");
    assert_eq!(parsed.description, "");
}

#[test]
fn test_parse_add_args_numeric_description_keeps_today() {
    let parsed = parse_add_args("5 food 2 coffees", june()).unwrap();
    assert_eq!(parsed.date, "2024-06-15");
    assert_eq!(parsed.description, "2 coffees");

    let parsed = parse_add_args("5 food 20240601", june()).unwrap();
    assert_eq!(parsed.date, "2024-06-15");
    assert_eq!(parsed.description, "20240601");
}

#[test]
fn test_parse_add_args_malformed_date_still_rejected() {
    let (mut app, mut store) = setup();
    let parsed = parse_add_args("5 food 2024-02-30 Snack", june()).unwrap();
    assert_eq!(parsed.date, "2024-02-30");

    handle_command("add 5 food 2024-02-30 Snack", &mut app, &mut store).unwrap();
    assert!(store.is_empty());
    assert!(app.status_message.contains("Invalid date '2024-02-30'"));
}

#[test]
fn test_add_with_numeric_description() {
    let (mut app, mut store) = setup();
    handle_command("add 5 food 2 coffees", &mut app, &mut store).unwrap();
    let e = &app.expenses[0];
    assert_eq!(e.description, "2 coffees");
    assert_eq!(e.date, june());
}

#[test]
fn test_parse_add_args_unknown_category() {
    let err = parse_add_args("9 groceries", june()).unwrap_err();
    assert_eq!(err, ValidationError::UnknownCategory("groceries".into()));
}

// ── dispatch ──────────────────────────────────────────────────

#[test]
fn test_unknown_command_suggests_closest() {
    let (mut app, mut store) = setup();
    handle_command("budgte food 10", &mut app, &mut store).unwrap();
    assert!(app.status_message.contains("Did you mean :budget"));
}

#[test]
fn test_quit_and_navigation() {
    let (mut app, mut store) = setup();
    handle_command("b", &mut app, &mut store).unwrap();
    assert_eq!(app.screen, Screen::Budgets);
    handle_command("expenses", &mut app, &mut store).unwrap();
    assert_eq!(app.screen, Screen::Expenses);
    handle_command("q", &mut app, &mut store).unwrap();
    assert!(!app.running);
}

// ── :add ──────────────────────────────────────────────────────

#[test]
fn test_add_records_expense_and_refreshes() {
    let (mut app, mut store) = setup();
    handle_command("add 12.50 food 2024-06-01 Lunch", &mut app, &mut store).unwrap();

    assert_eq!(store.len(), 1);
    assert_eq!(app.expenses.len(), 1);
    assert_eq!(app.summary.total_spent, dec!(12.50));
    assert_eq!(app.status_message, "Added $12.50 Food on 2024-06-01");
}

#[test]
fn test_add_invalid_amount_leaves_store_untouched() {
    let (mut app, mut store) = setup();
    handle_command("add -5 food", &mut app, &mut store).unwrap();
    assert!(store.is_empty());
    assert!(app.status_message.contains("greater than zero"));
}

#[test]
fn test_add_without_category_shows_usage() {
    let (mut app, mut store) = setup();
    handle_command("add 5", &mut app, &mut store).unwrap();
    assert!(store.is_empty());
    assert!(app.status_message.starts_with("Usage: :add"));
}

#[test]
fn test_add_over_budget_shows_alert() {
    let (mut app, mut store) = setup();
    handle_command("budget food 40", &mut app, &mut store).unwrap();
    handle_command("add 50 food 2024-06-02 Groceries", &mut app, &mut store).unwrap();
    assert_eq!(
        app.status_message,
        "You've exceeded your food budget this month!"
    );
    assert_eq!(app.over_budget, vec![Category::Food]);
}

#[test]
fn test_add_last_month_does_not_alert() {
    let (mut app, mut store) = setup();
    handle_command("budget food 40", &mut app, &mut store).unwrap();
    handle_command("add 50 food 2024-05-30", &mut app, &mut store).unwrap();
    assert!(app.status_message.starts_with("Added"));
}

// ── :budget ───────────────────────────────────────────────────

#[test]
fn test_budget_sets_limit() {
    let (mut app, mut store) = setup();
    handle_command("budget Shopping 150", &mut app, &mut store).unwrap();
    assert_eq!(store.budgets().get(Category::Shopping), dec!(150));
    assert_eq!(app.status_message, "Budget for shopping set to $150.00");
    let line = app
        .budget_lines
        .iter()
        .find(|l| l.category == Category::Shopping)
        .unwrap();
    assert_eq!(line.limit, dec!(150));
}

#[test]
fn test_budget_rejects_zero_and_keeps_previous() {
    let (mut app, mut store) = setup();
    handle_command("budget bills 80", &mut app, &mut store).unwrap();
    handle_command("budget bills 0", &mut app, &mut store).unwrap();
    assert_eq!(store.budgets().get(Category::Bills), dec!(80));
    assert!(app.status_message.contains("greater than zero"));
}

#[test]
fn test_budget_without_amount_shows_current() {
    let (mut app, mut store) = setup();
    handle_command("budget bills 80", &mut app, &mut store).unwrap();
    handle_command("budget bills", &mut app, &mut store).unwrap();
    assert_eq!(app.status_message, "Bills budget is $80.00");
}

// ── :filter / :delete ─────────────────────────────────────────

#[test]
fn test_filter_switches_to_expenses() {
    let (mut app, mut store) = setup();
    handle_command("add 5 food 2024-06-01", &mut app, &mut store).unwrap();
    handle_command("add 7 bills 2024-06-02", &mut app, &mut store).unwrap();

    handle_command("filter bills", &mut app, &mut store).unwrap();
    assert_eq!(app.screen, Screen::Expenses);
    assert_eq!(app.filter, ExpenseFilter::Category(Category::Bills));
    assert_eq!(app.expenses.len(), 1);

    handle_command("filter", &mut app, &mut store).unwrap();
    assert_eq!(app.filter, ExpenseFilter::All);
    assert_eq!(app.expenses.len(), 2);
}

#[test]
fn test_filter_unknown_keeps_current() {
    let (mut app, mut store) = setup();
    handle_command("filter rent", &mut app, &mut store).unwrap();
    assert_eq!(app.filter, ExpenseFilter::All);
    assert!(app.status_message.contains("Unknown filter"));
}

#[test]
fn test_delete_asks_for_confirmation_then_removes() {
    let (mut app, mut store) = setup();
    handle_command("add 5 food 2024-06-01 Snack", &mut app, &mut store).unwrap();
    handle_command("expenses", &mut app, &mut store).unwrap();

    handle_command("delete", &mut app, &mut store).unwrap();
    assert_eq!(app.input_mode, InputMode::Confirm);
    assert_eq!(app.confirm_message, "Delete 'Snack'?");
    assert_eq!(store.len(), 1);

    let action = app.pending_action.take().unwrap();
    execute_pending(action, &mut app, &mut store);
    assert!(store.is_empty());
    assert!(app.expenses.is_empty());
    assert_eq!(app.status_message, "Deleted: Snack");
}

#[test]
fn test_delete_by_unknown_id() {
    let (mut app, mut store) = setup();
    handle_command("delete 42", &mut app, &mut store).unwrap();
    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.status_message, "No expense to delete");
}
