mod budget;
mod category;
mod expense;

pub(crate) use budget::BudgetTable;
pub(crate) use category::Category;
pub(crate) use expense::{Expense, AMOUNT_SCALE, DEFAULT_DESCRIPTION, MAX_AMOUNT};

#[cfg(test)]
mod tests;
