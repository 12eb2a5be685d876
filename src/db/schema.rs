use anyhow::{bail, Context, Result};
use chrono::Datelike;
use regex::Regex;
use std::sync::OnceLock;

pub(crate) const TABLE_PREFIX: &str = "expenses";

/// Identifier pattern every month table name must match before it is
/// interpolated into SQL.
const TABLE_NAME_PATTERN: &str = "^expenses_[0-9]{4}_[0-9]{2}$";

fn table_name_regex() -> Option<&'static Regex> {
    static REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    REGEX
        .get_or_init(|| Regex::new(TABLE_NAME_PATTERN).ok())
        .as_ref()
}

/// Name of the table holding one calendar month of expenses,
/// e.g. `expenses_2024_03`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MonthTable(String);

impl MonthTable {
    pub(crate) fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            bail!("Invalid month for table name: {month}");
        }
        if !(0..=9999).contains(&year) {
            bail!("Invalid year for table name: {year}");
        }
        let name = format!("{TABLE_PREFIX}_{year:04}_{month:02}");
        let re = table_name_regex().context("Failed to compile table name pattern")?;
        if !re.is_match(&name) {
            bail!("Unsafe table name: {name}");
        }
        Ok(Self(name))
    }

    /// Table for the month the local clock reports right now.
    pub(crate) fn current() -> Result<Self> {
        let now = chrono::Local::now();
        Self::new(now.year(), now.month())
    }

    pub(crate) fn name(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MonthTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

pub(crate) fn create_month_table(table: &MonthTable) -> String {
    format!(
        r#"
CREATE TABLE IF NOT EXISTS {table} (
    id       INTEGER PRIMARY KEY AUTOINCREMENT,
    date     TEXT NOT NULL,
    category TEXT NOT NULL,
    amount   REAL NOT NULL
);
"#
    )
}
