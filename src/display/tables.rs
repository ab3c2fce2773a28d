//! Tables for transaction and livestock listings

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::format::{format_optional_date, truncate};
use crate::models::TransactionEntry;
use crate::reports::LivestockRow;

#[derive(Tabled)]
struct TransactionLine {
    #[tabled(rename = "Ref")]
    reference: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Description")]
    description: String,
}

#[derive(Tabled)]
struct LivestockLine {
    #[tabled(rename = "Ref")]
    reference: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Breed")]
    breed: String,
    #[tabled(rename = "Head")]
    quantity: i64,
    #[tabled(rename = "Age (mo)")]
    age: String,
    #[tabled(rename = "Weight (kg)")]
    weight: String,
    #[tabled(rename = "Purchased")]
    purchased: String,
    #[tabled(rename = "Price/head")]
    price: String,
    #[tabled(rename = "Value")]
    value: String,
}

fn or_dash<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

/// Transactions as a table, or a placeholder line when there are none
pub fn format_transaction_table(
    entries: &[TransactionEntry],
    symbol: &str,
    date_format: &str,
) -> String {
    if entries.is_empty() {
        return "No transactions yet.".to_string();
    }

    let lines = entries.iter().map(|entry| TransactionLine {
        reference: entry.reference(),
        date: format_optional_date(entry.date, date_format),
        kind: entry.kind.to_string(),
        category: truncate(entry.display_category(), 20),
        amount: entry.display_amount(symbol),
        description: truncate(entry.description.as_deref().unwrap_or(""), 30),
    });

    Table::new(lines).with(Style::rounded()).to_string()
}

/// Livestock as a table, or a placeholder line when there is none
pub fn format_livestock_table(rows: &[LivestockRow], symbol: &str, date_format: &str) -> String {
    if rows.is_empty() {
        return "No livestock recorded.".to_string();
    }

    let lines = rows.iter().map(|row| LivestockLine {
        reference: row.id.to_string(),
        kind: row.kind.clone(),
        breed: truncate(&row.breed, 20),
        quantity: row.quantity,
        age: or_dash(row.age_months),
        weight: or_dash(row.weight_kg),
        purchased: format_optional_date(row.purchase_date, date_format),
        price: row.price_per_head.format_with_symbol(symbol),
        value: row.value.format_with_symbol(symbol),
    });

    Table::new(lines).with(Style::rounded()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, ExpenseId, LivestockId, LivestockRecord, Money};
    use chrono::NaiveDate;

    #[test]
    fn test_transaction_table_contents() {
        let expense = Expense::new(
            ExpenseId::new(4),
            "Feed",
            Money::from_cents(4550),
            NaiveDate::from_ymd_opt(2025, 3, 9).unwrap(),
        );
        let table = format_transaction_table(&[TransactionEntry::from(&expense)], "$", "%Y-%m-%d");
        assert!(table.contains("exp-4"));
        assert!(table.contains("2025-03-09"));
        assert!(table.contains("-$45.50"));
        assert!(table.contains("Category"));
    }

    #[test]
    fn test_empty_tables() {
        assert_eq!(format_transaction_table(&[], "$", "%Y-%m-%d"), "No transactions yet.");
        assert_eq!(format_livestock_table(&[], "$", "%Y-%m-%d"), "No livestock recorded.");
    }

    #[test]
    fn test_livestock_table_contents() {
        let mut record =
            LivestockRecord::new(LivestockId::new(2), "sheep", 12, Money::from_cents(15000));
        record.purchase_date = NaiveDate::from_ymd_opt(2024, 11, 30);
        let table = format_livestock_table(&[LivestockRow::from(&record)], "$", "%d.%m.%Y");
        assert!(table.contains("liv-2"));
        assert!(table.contains("30.11.2024"));
        assert!(table.contains("sheep"));
        assert!(table.contains("$1,800.00"));
    }
}
