//! Expense and revenue forms
//!
//! Both share the same shape: a label (category or source), an amount, a
//! date and an optional description.

use super::{optional_text, parse_date, parse_money, required_text, ValidationError};
use crate::models::{NewExpense, NewRevenue};

/// Raw expense input
#[derive(Debug, Clone, Default)]
pub struct ExpenseForm {
    pub category: Option<String>,
    pub amount: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
}

/// Raw revenue input
#[derive(Debug, Clone, Default)]
pub struct RevenueForm {
    pub source: Option<String>,
    pub amount: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
}

impl ExpenseForm {
    /// Check the form and build the submission
    pub fn validate(&self) -> Result<NewExpense, ValidationError> {
        let (category, amount, date) = match (
            required_text(&self.category),
            parse_money(&self.amount),
            parse_date(&self.date),
        ) {
            (Some(category), Some(amount), Some(date)) => (category, amount, date),
            _ => return Err(ValidationError::MissingFields),
        };

        if !amount.is_positive() {
            return Err(ValidationError::NonPositiveAmount);
        }

        Ok(NewExpense {
            category,
            amount,
            date,
            description: optional_text(&self.description),
        })
    }
}

impl RevenueForm {
    /// Check the form and build the submission
    pub fn validate(&self) -> Result<NewRevenue, ValidationError> {
        let (source, amount, date) = match (
            required_text(&self.source),
            parse_money(&self.amount),
            parse_date(&self.date),
        ) {
            (Some(source), Some(amount), Some(date)) => (source, amount, date),
            _ => return Err(ValidationError::MissingFields),
        };

        if !amount.is_positive() {
            return Err(ValidationError::NonPositiveAmount);
        }

        Ok(NewRevenue {
            source,
            amount,
            date,
            description: optional_text(&self.description),
        })
    }
}
