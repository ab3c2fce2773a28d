//! Budget model
//!
//! The farm keeps a single active budget; setting a new one replaces it.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::BudgetId;
use super::lenient;
use super::money::Money;

/// How long a budget runs before it resets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    #[default]
    Monthly,
    Yearly,
}

impl fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monthly => write!(f, "monthly"),
            Self::Yearly => write!(f, "yearly"),
        }
    }
}

impl FromStr for BudgetPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monthly" | "month" => Ok(Self::Monthly),
            "yearly" | "year" | "annual" => Ok(Self::Yearly),
            other => Err(format!("Unknown budget period '{}'. Use monthly or yearly", other)),
        }
    }
}

fn lenient_period<'de, D>(deserializer: D) -> Result<BudgetPeriod, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = lenient::text(deserializer)?;
    Ok(raw.and_then(|s| s.parse().ok()).unwrap_or_default())
}

/// The active budget as stored by the farm API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    #[serde(default)]
    pub id: Option<BudgetId>,

    #[serde(default, deserialize_with = "lenient::money")]
    pub total_budget: Option<Money>,

    #[serde(default, deserialize_with = "lenient::money")]
    pub remaining_budget: Option<Money>,

    #[serde(default, deserialize_with = "lenient_period")]
    pub period: BudgetPeriod,

    #[serde(default, deserialize_with = "lenient::date")]
    pub start_date: Option<NaiveDate>,

    #[serde(default, deserialize_with = "lenient::date")]
    pub end_date: Option<NaiveDate>,
}

impl Budget {
    /// Create a budget with a total and a period
    pub fn new(total_budget: Money, period: BudgetPeriod) -> Self {
        Self {
            id: None,
            total_budget: Some(total_budget),
            remaining_budget: Some(total_budget),
            period,
            start_date: None,
            end_date: None,
        }
    }

    /// Total for aggregation; missing counts as zero
    pub fn total_or_zero(&self) -> Money {
        self.total_budget.unwrap_or_default()
    }
}

/// A validated budget ready for submission
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewBudget {
    pub(crate) total_budget: Money,
    pub(crate) period: BudgetPeriod,
}

impl NewBudget {
    pub fn total_budget(&self) -> Money {
        self.total_budget
    }

    pub fn period(&self) -> BudgetPeriod {
        self.period
    }
}
