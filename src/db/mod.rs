mod schema;

pub(crate) use schema::MonthTable;

use anyhow::{Context, Result};
use rusqlite::{params, Connection};
use std::path::Path;

use crate::models::Expense;

/// Owns the store connection and routes every operation to the month table
/// that was current when it was opened.
pub(crate) struct Tracker {
    conn: Connection,
    table: MonthTable,
}

impl Tracker {
    pub(crate) fn open(path: &Path) -> Result<Self> {
        Self::open_for(path, MonthTable::current()?)
    }

    /// Open the store bound to `table` instead of the current month.
    pub(crate) fn open_for(path: &Path, table: MonthTable) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database: {}", path.display()))?;
        log::debug!("opened {}", path.display());
        Self::init(conn, table)
    }

    #[cfg(test)]
    pub(crate) fn open_in_memory(table: MonthTable) -> Result<Self> {
        Self::init(Connection::open_in_memory()?, table)
    }

    fn init(conn: Connection, table: MonthTable) -> Result<Self> {
        conn.execute_batch(&schema::create_month_table(&table))
            .with_context(|| format!("Failed to create table {table}"))?;
        log::debug!("month table {table} ready");
        Ok(Self { conn, table })
    }

    pub(crate) fn table(&self) -> &MonthTable {
        &self.table
    }

    // ── Expenses ──────────────────────────────────────────────

    pub(crate) fn add_expense(&self, expense: &Expense) -> Result<i64> {
        self.conn.execute(
            &format!(
                "INSERT INTO {} (date, category, amount) VALUES (?1, ?2, ?3)",
                self.table
            ),
            params![expense.date, expense.category, expense.amount],
        )?;
        let id = self.conn.last_insert_rowid();
        log::debug!("inserted expense {id} into {}", self.table);
        Ok(id)
    }

    /// All rows of the bound month, in storage order.
    pub(crate) fn get_expenses(&self) -> Result<Vec<Expense>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT date, category, amount FROM {}",
            self.table
        ))?;
        let rows = stmt.query_map([], |row| {
            Ok(Expense::with_date(row.get(2)?, row.get(1)?, row.get(0)?))
        })?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    /// Sum of the bound month; an empty table totals zero.
    pub(crate) fn month_total(&self) -> Result<f64> {
        Ok(self.conn.query_row(
            &format!("SELECT COALESCE(SUM(amount), 0.0) FROM {}", self.table),
            [],
            |row| row.get(0),
        )?)
    }

    pub(crate) fn close(self) -> Result<()> {
        let table = self.table;
        self.conn
            .close()
            .map_err(|(_, e)| e)
            .context("Failed to close database")?;
        log::debug!("closed store for {table}");
        Ok(())
    }
}
