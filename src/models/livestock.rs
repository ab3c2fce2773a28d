//! Livestock model
//!
//! A herd or flock entry: how many head of which type, and what they cost.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ids::LivestockId;
use super::lenient;
use super::money::Money;

/// A livestock record as stored by the farm API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LivestockRecord {
    pub id: LivestockId,

    /// Animal type (cattle, sheep, goats, pigs, chickens, horses, other)
    #[serde(rename = "type", default, deserialize_with = "lenient::text")]
    pub kind: Option<String>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub breed: Option<String>,

    #[serde(default, deserialize_with = "lenient::integer")]
    pub quantity: Option<i64>,

    #[serde(default, deserialize_with = "lenient::integer")]
    pub age_months: Option<i64>,

    #[serde(default, deserialize_with = "lenient::decimal")]
    pub weight_kg: Option<Decimal>,

    #[serde(default, deserialize_with = "lenient::date")]
    pub purchase_date: Option<NaiveDate>,

    /// Price per head
    #[serde(default, deserialize_with = "lenient::money")]
    pub purchase_price: Option<Money>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub notes: Option<String>,
}

impl LivestockRecord {
    /// Create a record with a type, head count and per-head price
    pub fn new(id: LivestockId, kind: impl Into<String>, quantity: i64, purchase_price: Money) -> Self {
        Self {
            id,
            kind: Some(kind.into()),
            breed: None,
            quantity: Some(quantity),
            age_months: None,
            weight_kg: None,
            purchase_date: None,
            purchase_price: Some(purchase_price),
            notes: None,
        }
    }

    /// Head count for aggregation; missing counts as zero
    pub fn quantity_or_zero(&self) -> i64 {
        self.quantity.unwrap_or(0)
    }

    /// Per-head price for aggregation; missing counts as zero
    pub fn price_or_zero(&self) -> Money {
        self.purchase_price.unwrap_or_default()
    }
}

/// A validated livestock entry ready for submission
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewLivestock {
    #[serde(rename = "type")]
    pub(crate) kind: String,
    pub(crate) breed: String,
    pub(crate) quantity: i64,
    pub(crate) age_months: Option<i64>,
    pub(crate) weight_kg: Option<Decimal>,
    pub(crate) purchase_date: NaiveDate,
    pub(crate) purchase_price: Option<Money>,
    pub(crate) notes: String,
}

impl NewLivestock {
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn purchase_date(&self) -> NaiveDate {
        self.purchase_date
    }

    pub fn purchase_price(&self) -> Option<Money> {
        self.purchase_price
    }
}
