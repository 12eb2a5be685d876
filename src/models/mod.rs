mod expense;

pub(crate) use expense::format_amount;
pub use expense::{Expense, CURRENCY_SUFFIX};

#[cfg(test)]
mod tests;
