//! Unified transaction view
//!
//! Expenses and revenues live in separate API collections; the recent
//! activity table shows them side by side. A revenue's `source` becomes the
//! shared `category` column.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use super::expense::Expense;
use super::money::Money;
use super::revenue::Revenue;

/// Which collection an entry came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Expense,
    Revenue,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expense => write!(f, "expense"),
            Self::Revenue => write!(f, "revenue"),
        }
    }
}

/// An expense or revenue tagged with its kind
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionEntry {
    pub kind: TransactionKind,
    /// Raw API key of the underlying record
    pub id: i64,
    pub date: Option<NaiveDate>,
    pub category: Option<String>,
    pub amount: Option<Money>,
    pub description: Option<String>,
}

impl TransactionEntry {
    /// Amount as a positive magnitude, missing as zero
    pub fn magnitude(&self) -> Money {
        self.amount.unwrap_or_default().abs()
    }

    /// Amount signed by direction: revenue positive, expense negative
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionKind::Revenue => self.magnitude(),
            TransactionKind::Expense => -self.magnitude(),
        }
    }

    /// Amount with a direction prefix, e.g. "+$120.00" or "-$45.50"
    pub fn display_amount(&self, symbol: &str) -> String {
        let prefix = match self.kind {
            TransactionKind::Revenue => "+",
            TransactionKind::Expense => "-",
        };
        format!("{}{}", prefix, self.magnitude().format_with_symbol(symbol))
    }

    /// Category label, "N/A" when absent
    pub fn display_category(&self) -> &str {
        self.category.as_deref().unwrap_or("N/A")
    }

    /// Reference the CLI accepts for edit/delete, e.g. "exp-12"
    pub fn reference(&self) -> String {
        match self.kind {
            TransactionKind::Expense => format!("exp-{}", self.id),
            TransactionKind::Revenue => format!("rev-{}", self.id),
        }
    }
}

impl From<&Expense> for TransactionEntry {
    fn from(expense: &Expense) -> Self {
        Self {
            kind: TransactionKind::Expense,
            id: expense.id.value(),
            date: expense.date,
            category: expense.category.clone(),
            amount: expense.amount,
            description: expense.description.clone(),
        }
    }
}

impl From<&Revenue> for TransactionEntry {
    fn from(revenue: &Revenue) -> Self {
        Self {
            kind: TransactionKind::Revenue,
            id: revenue.id.value(),
            date: revenue.date,
            category: revenue.source.clone(),
            amount: revenue.amount,
            description: revenue.description.clone(),
        }
    }
}
