use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Category;

pub(crate) const DEFAULT_DESCRIPTION: &str = "No description";

/// Largest accepted amount or budget limit (one trillion). With cents
/// precision this stays within the 15 significant digits an `f64` carries
/// through the JSON round-trip.
pub(crate) const MAX_AMOUNT: Decimal = Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0);

/// Decimal places kept for amounts and limits.
pub(crate) const AMOUNT_SCALE: u32 = 2;

/// A single spending event. Created once, never edited in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Expense {
    pub(crate) id: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub(crate) amount: Decimal,
    pub(crate) category: Category,
    /// Serialized as `YYYY-MM-DD`.
    pub(crate) date: NaiveDate,
    pub(crate) description: String,
}

impl Expense {
    /// Within `(0, MAX_AMOUNT]`. Stored records outside that range are discarded on load.
    pub(crate) fn has_valid_amount(&self) -> bool {
        self.amount > Decimal::ZERO && self.amount <= MAX_AMOUNT
    }

    /// True when the expense falls in the same calendar month and year as `reference`.
    pub(crate) fn is_in_month_of(&self, reference: NaiveDate) -> bool {
        self.date.year() == reference.year() && self.date.month() == reference.month()
    }
}
