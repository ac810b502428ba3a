use chrono::{Local, NaiveDate};

use crate::error::PersistenceError;
use crate::models::{Category, Expense};
use crate::store::{BudgetLine, ExpenseFilter, ExpenseStore, Summary};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Dashboard,
    Expenses,
    Budgets,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[Self::Dashboard, Self::Expenses, Self::Budgets]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dashboard => write!(f, "Dashboard"),
            Self::Expenses => write!(f, "Expenses"),
            Self::Budgets => write!(f, "Budgets"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Confirm,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Confirm => write!(f, "CONFIRM"),
        }
    }
}

/// Pending action that requires user confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PendingAction {
    DeleteExpense { id: i64, description: String },
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,
    /// Reference date for every monthly figure on screen.
    pub(crate) today: NaiveDate,
    /// A pinned date never follows the wall clock.
    date_pinned: bool,

    // Dashboard
    pub(crate) summary: Summary,
    pub(crate) expense_count: usize,
    pub(crate) over_budget: Vec<Category>,

    // Expenses
    pub(crate) expenses: Vec<Expense>,
    pub(crate) expense_index: usize,
    pub(crate) expense_scroll: usize,
    pub(crate) filter: ExpenseFilter,

    // Budgets
    pub(crate) budget_lines: Vec<BudgetLine>,
    pub(crate) budget_index: usize,

    // Confirmation
    pub(crate) pending_action: Option<PendingAction>,
    pub(crate) confirm_message: String,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new() -> Self {
        Self {
            date_pinned: false,
            ..Self::with_today(Local::now().date_naive())
        }
    }

    pub(crate) fn with_today(today: NaiveDate) -> Self {
        Self {
            running: true,
            screen: Screen::Dashboard,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            status_message: String::new(),
            show_help: false,
            today,
            date_pinned: true,

            summary: Summary::empty(),
            expense_count: 0,
            over_budget: Vec::new(),

            expenses: Vec::new(),
            expense_index: 0,
            expense_scroll: 0,
            filter: ExpenseFilter::All,

            budget_lines: Vec::new(),
            budget_index: 0,

            pending_action: None,
            confirm_message: String::new(),

            visible_rows: 20,
        }
    }

    /// Follow the local date across midnight. Returns true when it moved.
    pub(crate) fn sync_today(&mut self) -> bool {
        if self.date_pinned {
            return false;
        }
        self.advance_today(Local::now().date_naive())
    }

    fn advance_today(&mut self, now: NaiveDate) -> bool {
        if now == self.today {
            return false;
        }
        self.today = now;
        true
    }

    pub(crate) fn refresh_dashboard(&mut self, store: &ExpenseStore) {
        self.sync_today();
        self.summary = store.summary(self.today);
        self.expense_count = store.len();
        self.over_budget = store.over_budget_categories(self.today);
    }

    pub(crate) fn refresh_expenses(&mut self, store: &ExpenseStore) {
        self.expenses = store
            .list_expenses(self.filter)
            .into_iter()
            .cloned()
            .collect();
        self.expense_count = store.len();
        if self.expense_index >= self.expenses.len() {
            self.expense_index = self.expenses.len().saturating_sub(1);
        }
        if self.expense_scroll > self.expense_index {
            self.expense_scroll = self.expense_index;
        }
    }

    pub(crate) fn refresh_budgets(&mut self, store: &ExpenseStore) {
        self.sync_today();
        self.budget_lines = store.budget_status(self.today);
    }

    pub(crate) fn refresh_all(&mut self, store: &ExpenseStore) {
        self.refresh_dashboard(store);
        self.refresh_expenses(store);
        self.refresh_budgets(store);
    }

    /// Rows available to the expense table (borders and header excluded).
    pub(crate) fn expense_page(&self) -> usize {
        self.visible_rows.saturating_sub(3).max(1)
    }

    pub(crate) fn selected_expense(&self) -> Option<&Expense> {
        self.expenses.get(self.expense_index)
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }

    /// Show `msg`, with a warning appended when the change didn't reach storage.
    pub(crate) fn set_status_after_save(
        &mut self,
        msg: impl Into<String>,
        persist_error: Option<&PersistenceError>,
    ) {
        let msg = msg.into();
        match persist_error {
            Some(e) => self.set_status(format!("{msg} (warning: not saved: {e})")),
            None => self.set_status(msg),
        }
    }
}
