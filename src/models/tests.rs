#![allow(clippy::unwrap_used)]

use super::*;

// ── Expense ───────────────────────────────────────────────────

#[test]
fn test_new_defaults_to_today() {
    let today = chrono::Local::now().format("%Y-%m-%d").to_string();
    let expense = Expense::new(12.0, "food".into());
    // Tolerate a midnight rollover between the two clock reads
    let after = chrono::Local::now().format("%Y-%m-%d").to_string();
    assert!(expense.date == today || expense.date == after);
}

#[test]
fn test_date_shape() {
    let expense = Expense::new(1.0, "x".into());
    let bytes = expense.date.as_bytes();
    assert_eq!(bytes.len(), 10);
    assert_eq!(bytes[4], b'-');
    assert_eq!(bytes[7], b'-');
    assert!(chrono::NaiveDate::parse_from_str(&expense.date, "%Y-%m-%d").is_ok());
}

#[test]
fn test_with_date_keeps_given_date() {
    let expense = Expense::with_date(3.5, "books".into(), "2024-03-09".into());
    assert_eq!(expense.date, "2024-03-09");
    assert_eq!(expense.category, "books");
    assert_eq!(expense.amount, 3.5);
}

#[test]
fn test_display() {
    let expense = Expense::with_date(50.5, "food".into(), "2024-01-15".into());
    assert_eq!(expense.to_string(), "2024-01-15 | food | 50.50 RUB");
}

#[test]
fn test_display_whole_amount() {
    let expense = Expense::with_date(20.0, "transport".into(), "2024-11-02".into());
    assert_eq!(expense.to_string(), "2024-11-02 | transport | 20.00 RUB");
}

#[test]
fn test_no_validation_on_sign_or_empty_category() {
    let expense = Expense::with_date(-7.25, String::new(), "2024-01-01".into());
    assert_eq!(expense.to_string(), "2024-01-01 |  | -7.25 RUB");
}

#[test]
fn test_category_kept_verbatim() {
    let expense = Expense::with_date(1.0, "  Кафе & bar ".into(), "2024-01-01".into());
    assert_eq!(expense.category, "  Кафе & bar ");
}

// ── format_amount ─────────────────────────────────────────────

#[test]
fn test_format_amount() {
    assert_eq!(format_amount(0.0), "0.00");
    assert_eq!(format_amount(70.5), "70.50");
    assert_eq!(format_amount(1234567.89), "1234567.89");
    assert_eq!(format_amount(0.01), "0.01");
}

#[test]
fn test_format_amount_rounds_to_two_places() {
    assert_eq!(format_amount(9.999), "10.00");
    assert_eq!(format_amount(1.234), "1.23");
    // Rounds the exact binary value: 2.675 is stored just below the midpoint
    assert_eq!(format_amount(2.675), "2.67");
}

#[test]
fn test_format_amount_tiny_and_huge() {
    assert_eq!(format_amount(1e-30), "0.00");
    assert_eq!(format_amount(1e20), "100000000000000000000.00");
    assert_eq!(
        format_amount(2f64.powi(96)),
        "79228162514264337593543950336.00"
    );
}
