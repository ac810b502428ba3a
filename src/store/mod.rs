mod validate;
mod views;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::db::{self, KeyValueStore};
use crate::error::{PersistenceError, ValidationError};
use crate::models::{BudgetTable, Category, Expense};

use validate::{normalize_description, parse_amount};

pub(crate) use validate::parse_date;
pub(crate) use views::{BudgetLine, CategoryTotals, ExpenseFilter, RemainingBudget, Summary};

/// Result of a mutation. The in-memory change always stands; `persist_error`
/// reports whether mirroring it into storage failed.
#[must_use]
#[derive(Debug)]
pub(crate) struct Committed<T> {
    pub(crate) value: T,
    pub(crate) persist_error: Option<PersistenceError>,
}

impl<T> Committed<T> {
    fn unchanged(value: T) -> Self {
        Self {
            value,
            persist_error: None,
        }
    }

    #[cfg(test)]
    pub(crate) fn into_value(self) -> T {
        self.value
    }
}

/// The expense ledger and budget table, mirrored to a key-value store after
/// every mutation.
pub(crate) struct ExpenseStore {
    expenses: Vec<Expense>,
    budgets: BudgetTable,
    storage: Box<dyn KeyValueStore>,
    last_id: i64,
}

impl ExpenseStore {
    /// Load prior state from `storage`, or start empty with all-zero budgets.
    pub(crate) fn open(storage: Box<dyn KeyValueStore>) -> Self {
        let (expenses, budgets) = db::load(storage.as_ref());
        let last_id = expenses.iter().map(|e| e.id).max().unwrap_or(0);
        info!(
            expenses = expenses.len(),
            budget_total = %budgets.total(),
            "loaded ledger"
        );
        Self {
            expenses,
            budgets,
            storage,
            last_id,
        }
    }

    // ── Mutations ─────────────────────────────────────────────

    pub(crate) fn add_expense(
        &mut self,
        amount: &str,
        category: Category,
        date: &str,
        description: &str,
    ) -> Result<Committed<Expense>, ValidationError> {
        let amount = parse_amount(amount)?;
        let date = parse_date(date)?;
        let expense = Expense {
            id: self.next_id(),
            amount,
            category,
            date,
            description: normalize_description(description),
        };
        debug!(id = expense.id, %amount, category = category.as_str(), %date, "add expense");
        self.expenses.push(expense.clone());
        Ok(self.commit(expense))
    }

    /// Remove by id. An unknown id is a no-op that returns `false` and writes nothing.
    pub(crate) fn delete_expense(&mut self, id: i64) -> Committed<bool> {
        match self.expenses.iter().position(|e| e.id == id) {
            Some(pos) => {
                self.expenses.remove(pos);
                debug!(id, "delete expense");
                self.commit(true)
            }
            None => Committed::unchanged(false),
        }
    }

    pub(crate) fn set_budget(
        &mut self,
        category: Category,
        amount: &str,
    ) -> Result<Committed<Decimal>, ValidationError> {
        let limit = parse_amount(amount)?;
        self.budgets.set(category, limit);
        debug!(category = category.as_str(), %limit, "set budget");
        Ok(self.commit(limit))
    }

    fn commit<T>(&mut self, value: T) -> Committed<T> {
        let persist_error = db::save(self.storage.as_mut(), &self.expenses, &self.budgets).err();
        if let Some(e) = &persist_error {
            warn!(error = %e, "failed to persist ledger; keeping in-memory state");
        }
        Committed {
            value,
            persist_error,
        }
    }

    /// Millisecond timestamp, bumped past the last issued id when the clock
    /// has not advanced.
    fn next_id(&mut self) -> i64 {
        let now = chrono::Utc::now().timestamp_millis();
        let id = now.max(self.last_id + 1);
        self.last_id = id;
        id
    }

    // ── Derived views ─────────────────────────────────────────

    pub(crate) fn total_spent(&self) -> Decimal {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    pub(crate) fn monthly_totals(&self, reference: NaiveDate) -> CategoryTotals {
        CategoryTotals::from_expenses(self.expenses.iter().filter(|e| e.is_in_month_of(reference)))
    }

    /// All-time totals, for charting.
    pub(crate) fn category_totals(&self) -> CategoryTotals {
        CategoryTotals::from_expenses(&self.expenses)
    }

    pub(crate) fn remaining_budget(&self, reference: NaiveDate) -> RemainingBudget {
        RemainingBudget::new(self.budgets.total() - self.monthly_totals(reference).sum())
    }

    /// A zero budget never counts as exceeded.
    pub(crate) fn is_over_budget(&self, category: Category, reference: NaiveDate) -> bool {
        let limit = self.budgets.get(category);
        limit > Decimal::ZERO && self.monthly_totals(reference).get(category) > limit
    }

    pub(crate) fn over_budget_categories(&self, reference: NaiveDate) -> Vec<Category> {
        self.budget_status(reference)
            .into_iter()
            .filter(|line| line.over_budget)
            .map(|line| line.category)
            .collect()
    }

    pub(crate) fn budget_status(&self, reference: NaiveDate) -> Vec<BudgetLine> {
        let monthly = self.monthly_totals(reference);
        self.budgets
            .iter()
            .map(|(category, limit)| {
                let spent = monthly.get(category);
                BudgetLine {
                    category,
                    limit,
                    spent,
                    over_budget: limit > Decimal::ZERO && spent > limit,
                }
            })
            .collect()
    }

    pub(crate) fn summary(&self, reference: NaiveDate) -> Summary {
        Summary {
            total_spent: self.total_spent(),
            remaining: self.remaining_budget(reference),
            monthly_totals: self.monthly_totals(reference),
            category_totals: self.category_totals(),
        }
    }

    /// Most recent first. Expenses on the same date keep insertion order.
    pub(crate) fn list_expenses(&self, filter: ExpenseFilter) -> Vec<&Expense> {
        let mut list: Vec<&Expense> = self.expenses.iter().filter(|e| filter.matches(e)).collect();
        list.sort_by(|a, b| b.date.cmp(&a.date));
        list
    }

    // ── Accessors ─────────────────────────────────────────────

    pub(crate) fn get(&self, id: i64) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    pub(crate) fn budgets(&self) -> &BudgetTable {
        &self.budgets
    }

    pub(crate) fn len(&self) -> usize {
        self.expenses.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}
