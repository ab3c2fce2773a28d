//! Farm aggregates
//!
//! Pure functions over the loaded collections. Missing or non-numeric
//! amounts count as zero and undated records never fall inside a month.

use chrono::{Datelike, NaiveDate};
use std::cmp::Reverse;

use crate::models::{Budget, Expense, LivestockRecord, Money, Revenue, TransactionEntry};

/// How many entries the recent activity table shows
pub const RECENT_TRANSACTIONS_LIMIT: usize = 10;

/// Label used when an expense has no category
pub const UNCATEGORIZED: &str = "Other";

pub fn total_expenses(expenses: &[Expense]) -> Money {
    expenses.iter().map(Expense::amount_or_zero).sum()
}

pub fn total_revenues(revenues: &[Revenue]) -> Money {
    revenues.iter().map(Revenue::amount_or_zero).sum()
}

/// Expenses dated in the same calendar month as `reference`
pub fn monthly_expenses(expenses: &[Expense], reference: NaiveDate) -> Money {
    expenses
        .iter()
        .filter(|e| e.date.is_some_and(|d| same_month(d, reference)))
        .map(Expense::amount_or_zero)
        .sum()
}

fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

pub fn net_margin(total_revenues: Money, total_expenses: Money) -> Money {
    total_revenues - total_expenses
}

/// Net margin with an explicit "+" when it is not negative
pub fn format_net_margin(margin: Money, symbol: &str) -> String {
    if margin.is_negative() {
        margin.format_with_symbol(symbol)
    } else {
        format!("+{}", margin.format_with_symbol(symbol))
    }
}

/// Expense spread per head of livestock, zero for an empty herd
pub fn cost_per_head(total_expenses: Money, heads: i64) -> Money {
    if heads <= 0 {
        return Money::zero();
    }
    total_expenses.per(heads).unwrap_or_default()
}

pub fn total_heads(livestock: &[LivestockRecord]) -> i64 {
    livestock
        .iter()
        .map(LivestockRecord::quantity_or_zero)
        .fold(0, i64::saturating_add)
}

/// Budget left after spending; with no budget this is just the overspend
pub fn budget_remaining(budget: Option<&Budget>, total_expenses: Money) -> Money {
    budget.map(Budget::total_or_zero).unwrap_or_default() - total_expenses
}

/// What a record cost: per-head price times head count
pub fn livestock_value(record: &LivestockRecord) -> Money {
    record.price_or_zero().times(record.quantity_or_zero())
}

pub fn total_livestock_value(livestock: &[LivestockRecord]) -> Money {
    livestock.iter().map(livestock_value).sum()
}

/// Spending per category in the order categories first appear
pub fn category_totals(expenses: &[Expense]) -> Vec<(String, Money)> {
    let mut totals: Vec<(String, Money)> = Vec::new();

    for expense in expenses {
        let category = expense
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(UNCATEGORIZED);

        match totals.iter_mut().find(|(name, _)| name.as_str() == category) {
            Some((_, total)) => *total += expense.amount_or_zero(),
            None => totals.push((category.to_string(), expense.amount_or_zero())),
        }
    }

    totals
}

/// Spending per "YYYY-MM", oldest month first
pub fn monthly_totals(expenses: &[Expense]) -> Vec<(String, Money)> {
    let mut totals: Vec<(String, Money)> = Vec::new();

    for expense in expenses {
        let Some(date) = expense.date else {
            continue;
        };
        let key = date.format("%Y-%m").to_string();
        match totals.iter_mut().find(|(month, _)| *month == key) {
            Some((_, total)) => *total += expense.amount_or_zero(),
            None => totals.push((key, expense.amount_or_zero())),
        }
    }

    totals.sort_by(|a, b| a.0.cmp(&b.0));
    totals
}

/// Expenses and revenues newest first, undated last, cut to `limit`
pub fn merge_transactions(
    expenses: &[Expense],
    revenues: &[Revenue],
    limit: usize,
) -> Vec<TransactionEntry> {
    let mut entries: Vec<TransactionEntry> = expenses
        .iter()
        .map(TransactionEntry::from)
        .chain(revenues.iter().map(TransactionEntry::from))
        .collect();

    // Option orders None first, so reversing puts undated entries last
    entries.sort_by_key(|entry| Reverse(entry.date));
    entries.truncate(limit);
    entries
}
