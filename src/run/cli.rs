use anyhow::Result;
use chrono::NaiveDate;
use std::fmt::Write as _;

use crate::store::{self, ExpenseFilter, ExpenseStore};
use crate::ui::util::{format_amount, truncate};

pub(crate) fn as_cli(args: &[String], store: &mut ExpenseStore) -> Result<()> {
    match args[1].as_str() {
        "summary" | "s" => cli_summary(&args[2..], store),
        "list" | "ls" => cli_list(&args[2..], store),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("expensetui {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("ExpenseTUI — local-only expense tracker");
    println!();
    println!("Usage: expensetui [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch interactive TUI");
    println!("  summary [YYYY-MM-DD]          Print spending summary (month of the date, default today)");
    println!("  list [all|<category>]         List expenses, most recent first");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
    println!();
    println!("Data directory can be overridden with {}", crate::config::DATA_DIR_ENV);
}

fn cli_summary(args: &[String], store: &ExpenseStore) -> Result<()> {
    let reference = match args.first() {
        Some(raw) => store::parse_date(raw)?,
        None => chrono::Local::now().date_naive(),
    };
    print!("{}", summary_report(store, reference));
    Ok(())
}

fn cli_list(args: &[String], store: &ExpenseStore) -> Result<()> {
    let filter: ExpenseFilter = match args.first() {
        Some(raw) => raw.parse()?,
        None => ExpenseFilter::All,
    };
    print!("{}", list_report(store, filter));
    Ok(())
}

pub(crate) fn summary_report(store: &ExpenseStore, reference: NaiveDate) -> String {
    let summary = store.summary(reference);
    let lines = store.budget_status(reference);
    let mut out = String::new();

    let _ = writeln!(out, "ExpenseTUI — {}", reference.format("%B %Y"));
    let _ = writeln!(out, "{}", "─".repeat(52));
    let _ = writeln!(out, "  Total Spent:       {}", format_amount(summary.total_spent));
    let _ = writeln!(
        out,
        "  Spent This Month:  {}",
        format_amount(summary.spent_this_month())
    );
    let remaining = summary.remaining;
    if remaining.is_over_budget() {
        let _ = writeln!(
            out,
            "  Remaining Budget:  {}  (over by {})",
            format_amount(remaining.display()),
            format_amount(remaining.raw().abs())
        );
    } else {
        let _ = writeln!(
            out,
            "  Remaining Budget:  {}",
            format_amount(remaining.display())
        );
    }
    let _ = writeln!(out, "  Expenses:          {}", store.len());

    if store.is_empty() {
        return out;
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "  {:<16} {:>14} {:>14} {:>14}",
        "Category", "All Time", "This Month", "Budget"
    );
    for line in &lines {
        let budget = if line.is_set() {
            format_amount(line.limit)
        } else {
            "—".to_string()
        };
        let marker = if line.over_budget { "  over budget" } else { "" };
        let _ = writeln!(
            out,
            "  {:<16} {:>14} {:>14} {:>14}{marker}",
            line.category.label(),
            format_amount(summary.category_totals.get(line.category)),
            format_amount(line.spent),
            budget,
        );
    }
    out
}

pub(crate) fn list_report(store: &ExpenseStore, filter: ExpenseFilter) -> String {
    let expenses = store.list_expenses(filter);
    let mut out = String::new();
    if expenses.is_empty() {
        let _ = writeln!(out, "No expenses found");
        return out;
    }
    let _ = writeln!(
        out,
        "{:<12} {:<15} {:<32} {:>12}",
        "Date", "Category", "Description", "Amount"
    );
    let _ = writeln!(out, "{}", "─".repeat(74));
    for e in expenses {
        let _ = writeln!(
            out,
            "{:<12} {:<15} {:<32} {:>12}",
            e.date.format("%Y-%m-%d").to_string(),
            e.category.label(),
            truncate(&e.description, 32),
            format_amount(e.amount),
        );
    }
    out
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
