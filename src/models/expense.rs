//! Expense model
//!
//! An outflow recorded against a farm category (feed, veterinary, fuel...).
//! Records are decoded leniently: a row with a broken amount still loads and
//! simply contributes nothing to totals.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::ExpenseId;
use super::lenient;
use super::money::Money;

/// An expense as stored by the farm API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,

    #[serde(default, deserialize_with = "lenient::text")]
    pub category: Option<String>,

    #[serde(default, deserialize_with = "lenient::money")]
    pub amount: Option<Money>,

    #[serde(default, deserialize_with = "lenient::date")]
    pub date: Option<NaiveDate>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub description: Option<String>,
}

impl Expense {
    /// Create an expense with the fields the dashboard reads
    pub fn new(id: ExpenseId, category: impl Into<String>, amount: Money, date: NaiveDate) -> Self {
        Self {
            id,
            category: Some(category.into()),
            amount: Some(amount),
            date: Some(date),
            description: None,
        }
    }

    /// Amount for aggregation; missing or non-numeric counts as zero
    pub fn amount_or_zero(&self) -> Money {
        self.amount.unwrap_or_default()
    }
}

/// A validated expense ready for submission
///
/// Only produced by [`crate::forms::ExpenseForm::validate`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewExpense {
    pub(crate) category: String,
    pub(crate) amount: Money,
    pub(crate) date: NaiveDate,
    pub(crate) description: String,
}

impl NewExpense {
    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}
