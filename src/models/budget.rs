use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Category, MAX_AMOUNT};

/// Monthly spending limit per category. Zero means "no budget set".
///
/// Stored as a JSON object with exactly the five category keys. Keys missing
/// from a stored value load as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct BudgetTable {
    #[serde(with = "rust_decimal::serde::float")]
    food: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    transport: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    entertainment: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    bills: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    shopping: Decimal,
}

impl BudgetTable {
    pub(crate) fn get(&self, category: Category) -> Decimal {
        match category {
            Category::Food => self.food,
            Category::Transport => self.transport,
            Category::Entertainment => self.entertainment,
            Category::Bills => self.bills,
            Category::Shopping => self.shopping,
        }
    }

    /// Overwrite one limit. Negative values are stored as zero.
    pub(crate) fn set(&mut self, category: Category, limit: Decimal) {
        let limit = limit.max(Decimal::ZERO);
        let slot = match category {
            Category::Food => &mut self.food,
            Category::Transport => &mut self.transport,
            Category::Entertainment => &mut self.entertainment,
            Category::Bills => &mut self.bills,
            Category::Shopping => &mut self.shopping,
        };
        *slot = limit;
    }

    pub(crate) fn total(&self) -> Decimal {
        Category::all().iter().map(|c| self.get(*c)).sum()
    }

    /// Limits in chart order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (Category, Decimal)> + '_ {
        Category::all().iter().map(|c| (*c, self.get(*c)))
    }

    /// Replace any negative or out-of-range limit read from storage with zero.
    pub(crate) fn sanitized(mut self) -> Self {
        for c in Category::all() {
            let limit = self.get(*c);
            if limit > MAX_AMOUNT {
                self.set(*c, Decimal::ZERO);
            } else {
                self.set(*c, limit);
            }
        }
        self
    }
}
