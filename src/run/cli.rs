use anyhow::{anyhow, bail, Result};
use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::db::Tracker;
use crate::models::{format_amount, Expense, CURRENCY_SUFFIX};

pub(crate) const MENU: &str = "\
--- Expense Tracker ---
1. Add expense
2. Show all expenses
3. Total for current month
4. Exit";

pub(crate) fn as_cli(tracker: Tracker) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_menu(&mut stdin.lock(), &mut stdout.lock(), tracker)
}

/// Tell the user whether the store file is already there. Purely informational.
pub(crate) fn print_discovery(path: &Path, out: &mut impl Write) -> Result<()> {
    writeln!(out, "Checking database...")?;
    if path.exists() {
        writeln!(out, "Database found.")?;
    } else {
        writeln!(out, "Database not found. Creating a new one...")?;
    }
    Ok(())
}

/// Menu loop. Returns after option 4 or end of input; storage errors propagate.
pub(crate) fn run_menu<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    tracker: Tracker,
) -> Result<()> {
    loop {
        writeln!(out)?;
        writeln!(out, "{MENU}")?;
        let Some(choice) = prompt(input, out, "Choose an option: ")? else {
            break;
        };

        match choice.trim() {
            "1" => add_flow(input, out, &tracker)?,
            "2" => show_expenses(out, &tracker)?,
            "3" => show_total(out, &tracker)?,
            "4" => break,
            _ => writeln!(out, "Invalid choice. Please try again.")?,
        }
    }

    tracker.close()?;
    writeln!(out, "Data saved. Goodbye!")?;
    Ok(())
}

fn add_flow<R: BufRead, W: Write>(input: &mut R, out: &mut W, tracker: &Tracker) -> Result<()> {
    let Some(raw_amount) = prompt(input, out, "Amount: ")? else {
        return Ok(());
    };
    let amount = match parse_amount(&raw_amount) {
        Ok(a) => a,
        Err(_) => {
            writeln!(out, "Error: please enter a number.")?;
            return Ok(());
        }
    };
    let Some(category) = prompt(input, out, "Category: ")? else {
        return Ok(());
    };

    tracker.add_expense(&Expense::new(amount, category))?;
    writeln!(out, "Expense added.")?;
    Ok(())
}

pub(crate) fn show_expenses(out: &mut impl Write, tracker: &Tracker) -> Result<()> {
    let expenses = tracker.get_expenses()?;
    if expenses.is_empty() {
        writeln!(out, "No expenses yet.")?;
        return Ok(());
    }
    for expense in &expenses {
        writeln!(out, "{expense}")?;
    }
    Ok(())
}

pub(crate) fn show_total(out: &mut impl Write, tracker: &Tracker) -> Result<()> {
    let total = tracker.month_total()?;
    writeln!(
        out,
        "Total for the month: {} {CURRENCY_SUFFIX}",
        format_amount(total)
    )?;
    Ok(())
}

/// Parse a user-entered amount. Accepts plain decimals, scientific notation
/// and `_` digit separators (`1_000`); rejects values that are not finite.
pub(crate) fn parse_amount(raw: &str) -> Result<f64> {
    let s = raw.trim();
    if s.is_empty() {
        bail!("Empty amount");
    }
    let bytes = s.as_bytes();
    for (i, b) in bytes.iter().enumerate() {
        if *b != b'_' {
            continue;
        }
        let between_digits = i > 0
            && bytes[i - 1].is_ascii_digit()
            && bytes.get(i + 1).is_some_and(u8::is_ascii_digit);
        if !between_digits {
            bail!("Misplaced digit separator: {s}");
        }
    }
    let amount: f64 = s
        .replace('_', "")
        .parse()
        .map_err(|_| anyhow!("Not a number: {s}"))?;
    if !amount.is_finite() {
        bail!("Not a finite amount: {s}");
    }
    Ok(amount)
}

/// Print `label`, read one line. `None` on end of input.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<Option<String>> {
    write!(out, "{label}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\n', '\r']);
    Ok(Some(trimmed.to_string()))
}
