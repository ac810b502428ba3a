use std::collections::HashMap;
use std::sync::LazyLock;

use chrono::NaiveDate;

use super::app::{App, InputMode, PendingAction, Screen};
use super::util::format_amount;
use crate::error::ValidationError;
use crate::models::Category;
use crate::store::{ExpenseFilter, ExpenseStore};

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App, &mut ExpenseStore) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit ExpenseTUI", cmd_quit, r);
    register_command!("quit", "Quit ExpenseTUI", cmd_quit, r);
    register_command!("d", "Go to Dashboard", cmd_dashboard, r);
    register_command!("dashboard", "Go to Dashboard", cmd_dashboard, r);
    register_command!("e", "Go to Expenses", cmd_expenses, r);
    register_command!("expenses", "Go to Expenses", cmd_expenses, r);
    register_command!("b", "Go to Budgets", cmd_budgets, r);
    register_command!("budgets", "Go to Budgets", cmd_budgets, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);
    register_command!(
        "add",
        "Add expense (e.g. :add 12.50 food 2024-06-01 Lunch)",
        cmd_add,
        r
    );
    register_command!(
        "a",
        "Add expense (e.g. :a 40 transport Train pass)",
        cmd_add,
        r
    );
    register_command!(
        "budget",
        "Set monthly budget (e.g. :budget food 300)",
        cmd_budget,
        r
    );
    register_command!(
        "filter",
        "Filter expenses by category (e.g. :filter bills, :filter all)",
        cmd_filter,
        r
    );
    register_command!("f", "Filter expenses by category", cmd_filter, r);
    register_command!(
        "delete",
        "Delete selected expense (or :delete <id>)",
        cmd_delete,
        r
    );

    r
});

pub(crate) fn handle_command(
    input: &str,
    app: &mut App,
    store: &mut ExpenseStore,
) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app, store)?;
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| levenshtein(input, k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Arguments of `:add <amount> <category> [YYYY-MM-DD] [description...]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AddArgs {
    pub(crate) amount: String,
    pub(crate) category: Category,
    pub(crate) date: String,
    pub(crate) description: String,
}

/// The third token is the date when it is shaped like `YYYY-...`; otherwise the
/// date defaults to `today` and the remaining tokens form the description.
/// A date-shaped token that is not a real date still reaches validation.
pub(crate) fn parse_add_args(args: &str, today: NaiveDate) -> Result<AddArgs, ValidationError> {
    let mut tokens = args.split_whitespace().peekable();
    let amount = tokens.next().ok_or(ValidationError::MissingAmount)?;
    let category: Category = tokens
        .next()
        .ok_or_else(|| ValidationError::UnknownCategory(String::new()))?
        .parse()?;

    let date = match tokens.next_if(|tok| looks_like_date(tok)) {
        Some(tok) => tok.to_string(),
        None => today.format("%Y-%m-%d").to_string(),
    };

    Ok(AddArgs {
        amount: amount.to_string(),
        category,
        date,
        description: tokens.collect::<Vec<_>>().join(" "),
    })
}

fn looks_like_date(token: &str) -> bool {
    let bytes = token.as_bytes();
    bytes.len() >= 5 && bytes[..4].iter().all(u8::is_ascii_digit) && bytes[4] == b'-'
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App, _store: &mut ExpenseStore) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_dashboard(_args: &str, app: &mut App, store: &mut ExpenseStore) -> anyhow::Result<()> {
    app.screen = Screen::Dashboard;
    app.refresh_dashboard(store);
    Ok(())
}

fn cmd_expenses(_args: &str, app: &mut App, store: &mut ExpenseStore) -> anyhow::Result<()> {
    app.screen = Screen::Expenses;
    app.refresh_expenses(store);
    Ok(())
}

fn cmd_budgets(_args: &str, app: &mut App, store: &mut ExpenseStore) -> anyhow::Result<()> {
    app.screen = Screen::Budgets;
    app.refresh_budgets(store);
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App, _store: &mut ExpenseStore) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

fn cmd_add(args: &str, app: &mut App, store: &mut ExpenseStore) -> anyhow::Result<()> {
    if args.split_whitespace().count() < 2 {
        app.set_status(
            "Usage: :add <amount> <category> [YYYY-MM-DD] [description]. Example: :add 12.50 food Lunch",
        );
        return Ok(());
    }

    let parsed = match parse_add_args(args, app.today) {
        Ok(p) => p,
        Err(e) => {
            app.set_status(e.to_string());
            return Ok(());
        }
    };

    match store.add_expense(
        &parsed.amount,
        parsed.category,
        &parsed.date,
        &parsed.description,
    ) {
        Ok(committed) => {
            let category = parsed.category;
            let msg = if store.is_over_budget(category, app.today) {
                format!("You've exceeded your {} budget this month!", category.as_str())
            } else {
                let expense = &committed.value;
                format!(
                    "Added {} {} on {}",
                    format_amount(expense.amount),
                    category.label(),
                    expense.date.format("%Y-%m-%d")
                )
            };
            app.set_status_after_save(msg, committed.persist_error.as_ref());
            app.refresh_all(store);
        }
        Err(e) => app.set_status(e.to_string()),
    }

    Ok(())
}

fn cmd_budget(args: &str, app: &mut App, store: &mut ExpenseStore) -> anyhow::Result<()> {
    let mut parts = args.split_whitespace();
    let (Some(category_name), amount) = (parts.next(), parts.next()) else {
        app.set_status("Usage: :budget <category> <amount>. Example: :budget food 300");
        return Ok(());
    };

    let category: Category = match category_name.parse() {
        Ok(c) => c,
        Err(e) => {
            app.set_status(format!("{e}"));
            return Ok(());
        }
    };

    let Some(amount) = amount else {
        let current = store.budgets().get(category);
        app.set_status(format!(
            "{} budget is {}",
            category.label(),
            format_amount(current)
        ));
        return Ok(());
    };

    match store.set_budget(category, amount) {
        Ok(committed) => {
            let msg = format!(
                "Budget for {} set to {}",
                category.as_str(),
                format_amount(committed.value)
            );
            app.set_status_after_save(msg, committed.persist_error.as_ref());
            app.refresh_dashboard(store);
            app.refresh_budgets(store);
        }
        Err(e) => app.set_status(e.to_string()),
    }

    Ok(())
}

fn cmd_filter(args: &str, app: &mut App, store: &mut ExpenseStore) -> anyhow::Result<()> {
    let filter: ExpenseFilter = match args.parse() {
        Ok(f) => f,
        Err(e) => {
            app.set_status(format!("{e}"));
            return Ok(());
        }
    };
    apply_filter(app, store, filter);
    Ok(())
}

/// Switch to the Expenses screen showing only `filter`, cursor at the top.
pub(crate) fn apply_filter(app: &mut App, store: &ExpenseStore, filter: ExpenseFilter) {
    app.filter = filter;
    app.screen = Screen::Expenses;
    app.expense_index = 0;
    app.expense_scroll = 0;
    app.refresh_expenses(store);
    app.set_status(format!("Filter: {filter}"));
}

fn cmd_delete(args: &str, app: &mut App, store: &mut ExpenseStore) -> anyhow::Result<()> {
    let target = if args.is_empty() {
        if app.screen != Screen::Expenses {
            app.set_status("Navigate to Expenses and select one first");
            return Ok(());
        }
        app.selected_expense().map(|e| (e.id, e.description.clone()))
    } else {
        match args.parse::<i64>() {
            Ok(id) => store.get(id).map(|e| (e.id, e.description.clone())),
            Err(_) => {
                app.set_status(format!("Invalid expense id: {args}"));
                return Ok(());
            }
        }
    };

    match target {
        Some((id, description)) => {
            app.confirm_message = format!("Delete '{description}'?");
            app.pending_action = Some(PendingAction::DeleteExpense { id, description });
            app.input_mode = InputMode::Confirm;
        }
        None => app.set_status("No expense to delete"),
    }

    Ok(())
}

/// Run a confirmed action against the store.
pub(crate) fn execute_pending(action: PendingAction, app: &mut App, store: &mut ExpenseStore) {
    match action {
        PendingAction::DeleteExpense { id, description } => {
            let committed = store.delete_expense(id);
            let persist_error = committed.persist_error.as_ref();
            if committed.value {
                app.set_status_after_save(format!("Deleted: {description}"), persist_error);
            } else {
                app.set_status("Expense no longer exists");
            }
            app.refresh_all(store);
        }
    }
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
