//! CSV export
//!
//! Transactions are written in the same merged, newest-first order as the
//! dashboard's recent activity, but without the display limit.

use serde::Serialize;
use std::io::Write;

use crate::display::format::format_date;
use crate::error::FarmResult;
use crate::models::{Expense, LivestockRecord, Revenue};
use crate::reports::aggregate::{livestock_value, merge_transactions};

#[derive(Serialize)]
struct TransactionRecord<'a> {
    #[serde(rename = "Reference")]
    reference: String,
    #[serde(rename = "Type")]
    kind: String,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Category")]
    category: &'a str,
    #[serde(rename = "Amount")]
    amount: String,
    #[serde(rename = "Description")]
    description: &'a str,
}

#[derive(Serialize)]
struct LivestockCsvRecord<'a> {
    #[serde(rename = "Reference")]
    reference: String,
    #[serde(rename = "Type")]
    kind: &'a str,
    #[serde(rename = "Breed")]
    breed: &'a str,
    #[serde(rename = "Quantity")]
    quantity: i64,
    #[serde(rename = "Age (months)")]
    age_months: Option<i64>,
    #[serde(rename = "Weight (kg)")]
    weight_kg: String,
    #[serde(rename = "Purchase Date")]
    purchase_date: String,
    #[serde(rename = "Price per Head")]
    purchase_price: String,
    #[serde(rename = "Total Value")]
    value: String,
    #[serde(rename = "Notes")]
    notes: &'a str,
}

fn opt_string<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn opt_date(date: Option<chrono::NaiveDate>, date_format: &str) -> String {
    date.map(|d| format_date(d, date_format)).unwrap_or_default()
}

/// Write every expense and revenue, signed by direction; returns the row count
pub fn export_transactions_csv<W: Write>(
    expenses: &[Expense],
    revenues: &[Revenue],
    date_format: &str,
    writer: W,
) -> FarmResult<usize> {
    let entries = merge_transactions(expenses, revenues, usize::MAX);
    let mut csv = ::csv::Writer::from_writer(writer);

    for entry in &entries {
        csv.serialize(TransactionRecord {
            reference: entry.reference(),
            kind: entry.kind.to_string(),
            date: opt_date(entry.date, date_format),
            category: entry.display_category(),
            amount: format!("{:.2}", entry.signed_amount().amount()),
            description: entry.description.as_deref().unwrap_or(""),
        })?;
    }

    csv.flush()?;
    Ok(entries.len())
}

/// Write the livestock table; returns the row count
pub fn export_livestock_csv<W: Write>(
    livestock: &[LivestockRecord],
    date_format: &str,
    writer: W,
) -> FarmResult<usize> {
    let mut csv = ::csv::Writer::from_writer(writer);

    for record in livestock {
        csv.serialize(LivestockCsvRecord {
            reference: record.id.to_string(),
            kind: record.kind.as_deref().unwrap_or(""),
            breed: record.breed.as_deref().unwrap_or(""),
            quantity: record.quantity_or_zero(),
            age_months: record.age_months,
            weight_kg: opt_string(record.weight_kg),
            purchase_date: opt_date(record.purchase_date, date_format),
            purchase_price: opt_string(record.purchase_price.map(|p| format!("{:.2}", p.amount()))),
            value: format!("{:.2}", livestock_value(record).amount()),
            notes: record.notes.as_deref().unwrap_or(""),
        })?;
    }

    csv.flush()?;
    Ok(livestock.len())
}
