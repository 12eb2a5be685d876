/// Display unit appended to every rendered amount.
pub const CURRENCY_SUFFIX: &str = "RUB";

#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    /// Format: "YYYY-MM-DD"
    pub date: String,
    pub category: String,
    pub amount: f64,
}

impl Expense {
    /// New expense dated today (local clock).
    pub fn new(amount: f64, category: String) -> Self {
        let date = chrono::Local::now().format("%Y-%m-%d").to_string();
        Self::with_date(amount, category, date)
    }

    pub fn with_date(amount: f64, category: String, date: String) -> Self {
        Self {
            date,
            category,
            amount,
        }
    }
}

impl std::fmt::Display for Expense {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} | {} | {} {CURRENCY_SUFFIX}",
            self.date,
            self.category,
            format_amount(self.amount)
        )
    }
}

/// Format an amount with exactly 2 decimal places, no grouping.
/// e.g. `70.5` → `"70.50"`
pub(crate) fn format_amount(val: f64) -> String {
    format!("{val:.2}")
}
