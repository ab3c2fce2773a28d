//! Form input and the validation gate
//!
//! Forms hold fields exactly as a user typed them. `validate()` is the only
//! way to obtain the typed request structs the gateway accepts, so nothing
//! reaches the API without passing these checks. Each failure maps to one
//! user-facing message.

pub mod auth;
pub mod budget;
pub mod entry;
pub mod livestock;

pub use auth::{Credentials, LoginForm, Registration, SignupForm};
pub use budget::BudgetForm;
pub use entry::{ExpenseForm, RevenueForm};
pub use livestock::LivestockForm;

use chrono::NaiveDate;
use std::fmt;

use crate::error::FarmError;
use crate::models::lenient;
use crate::models::Money;

/// Minimum password length accepted at signup
pub const MIN_PASSWORD_LEN: usize = 6;

/// Reasons a form is rejected before submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    MissingFields,
    NonPositiveAmount,
    NonPositiveQuantity,
    NegativePrice,
    InvalidBudget,
    MissingCredentials,
    PasswordTooShort,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFields => write!(f, "Please fill in all required fields"),
            Self::NonPositiveAmount => write!(f, "Amount must be greater than 0"),
            Self::NonPositiveQuantity => write!(f, "Quantity must be greater than 0"),
            Self::NegativePrice => write!(f, "Purchase price cannot be negative"),
            Self::InvalidBudget => write!(f, "Please enter a valid budget amount"),
            Self::MissingCredentials => write!(f, "Please fill in all fields"),
            Self::PasswordTooShort => write!(
                f,
                "Password must be at least {} characters",
                MIN_PASSWORD_LEN
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for FarmError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

/// A present, non-empty text field
fn required_text(field: &Option<String>) -> Option<String> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Optional free text, empty when absent
fn optional_text(field: &Option<String>) -> String {
    field.as_deref().map(str::trim).unwrap_or_default().to_string()
}

fn parse_money(field: &Option<String>) -> Option<Money> {
    field.as_deref().and_then(|s| Money::parse(s).ok())
}

fn parse_date(field: &Option<String>) -> Option<NaiveDate> {
    field.as_deref().and_then(lenient::parse_date)
}

fn parse_integer(field: &Option<String>) -> Option<i64> {
    field.as_deref().and_then(lenient::parse_integer)
}
