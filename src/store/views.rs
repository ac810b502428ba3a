use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::models::{Category, Expense};

/// One total per category, iterated in chart order.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct CategoryTotals([Decimal; Category::COUNT]);

impl CategoryTotals {
    pub(crate) fn from_expenses<'a>(expenses: impl IntoIterator<Item = &'a Expense>) -> Self {
        let mut totals = Self::default();
        for e in expenses {
            totals.0[e.category.index()] += e.amount;
        }
        totals
    }

    pub(crate) fn get(&self, category: Category) -> Decimal {
        self.0[category.index()]
    }

    pub(crate) fn sum(&self) -> Decimal {
        self.0.iter().copied().sum()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (Category, Decimal)> + '_ {
        Category::all().iter().map(|c| (*c, self.get(*c)))
    }

    pub(crate) fn is_zero(&self) -> bool {
        self.0.iter().all(|v| v.is_zero())
    }
}

/// Budget left this month. Keeps the signed value; the display value is clamped at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RemainingBudget {
    raw: Decimal,
}

impl RemainingBudget {
    pub(crate) fn new(raw: Decimal) -> Self {
        Self { raw }
    }

    /// Unclamped `budgets - spent`. Negative means over budget.
    pub(crate) fn raw(&self) -> Decimal {
        self.raw
    }

    pub(crate) fn display(&self) -> Decimal {
        self.raw.max(Decimal::ZERO)
    }

    pub(crate) fn is_over_budget(&self) -> bool {
        self.raw < Decimal::ZERO
    }
}

/// Everything the dashboard draws, computed in one pass for a reference date.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Summary {
    pub(crate) total_spent: Decimal,
    pub(crate) monthly_totals: CategoryTotals,
    pub(crate) category_totals: CategoryTotals,
    pub(crate) remaining: RemainingBudget,
}

impl Summary {
    pub(crate) fn empty() -> Self {
        Self {
            total_spent: Decimal::ZERO,
            monthly_totals: CategoryTotals::default(),
            category_totals: CategoryTotals::default(),
            remaining: RemainingBudget::new(Decimal::ZERO),
        }
    }

    pub(crate) fn spent_this_month(&self) -> Decimal {
        self.monthly_totals.sum()
    }
}

/// A category's limit against its spend for the reference month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BudgetLine {
    pub(crate) category: Category,
    pub(crate) limit: Decimal,
    pub(crate) spent: Decimal,
    pub(crate) over_budget: bool,
}

impl BudgetLine {
    pub(crate) fn is_set(&self) -> bool {
        self.limit > Decimal::ZERO
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum ExpenseFilter {
    #[default]
    All,
    Category(Category),
}

impl ExpenseFilter {
    pub(crate) fn matches(&self, expense: &Expense) -> bool {
        match self {
            Self::All => true,
            Self::Category(c) => expense.category == *c,
        }
    }

    /// Next filter in button order: all, then each category, then back to all.
    pub(crate) fn next(self) -> Self {
        match self {
            Self::All => Self::Category(Category::all()[0]),
            Self::Category(c) => Category::all()
                .get(c.index() + 1)
                .map_or(Self::All, |next| Self::Category(*next)),
        }
    }

    pub(crate) fn prev(self) -> Self {
        let all = Category::all();
        match self {
            Self::All => Self::Category(all[all.len() - 1]),
            Self::Category(c) if c.index() == 0 => Self::All,
            Self::Category(c) => Self::Category(all[c.index() - 1]),
        }
    }
}

impl FromStr for ExpenseFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        Category::parse(trimmed)
            .map(Self::Category)
            .ok_or_else(|| ValidationError::UnknownFilter(trimmed.to_string()))
    }
}

impl std::fmt::Display for ExpenseFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "All"),
            Self::Category(c) => write!(f, "{c}"),
        }
    }
}
