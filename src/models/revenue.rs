//! Revenue model
//!
//! Income from a named source such as livestock sales or crop contracts.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::RevenueId;
use super::lenient;
use super::money::Money;

/// A revenue entry as stored by the farm API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Revenue {
    pub id: RevenueId,

    #[serde(default, deserialize_with = "lenient::text")]
    pub source: Option<String>,

    #[serde(default, deserialize_with = "lenient::money")]
    pub amount: Option<Money>,

    #[serde(default, deserialize_with = "lenient::date")]
    pub date: Option<NaiveDate>,

    #[serde(default, deserialize_with = "lenient::text")]
    pub description: Option<String>,
}

impl Revenue {
    /// Create a revenue entry with the fields the dashboard reads
    pub fn new(id: RevenueId, source: impl Into<String>, amount: Money, date: NaiveDate) -> Self {
        Self {
            id,
            source: Some(source.into()),
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

/// A validated revenue entry ready for submission
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewRevenue {
    pub(crate) source: String,
    pub(crate) amount: Money,
    pub(crate) date: NaiveDate,
    pub(crate) description: String,
}

impl NewRevenue {
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_api_row() {
        let json = r#"{"id": 4, "amount": "1200", "source": "Cattle sale", "date": "2025-05-20"}"#;
        let revenue: Revenue = serde_json::from_str(json).unwrap();
        assert_eq!(revenue.source.as_deref(), Some("Cattle sale"));
        assert_eq!(revenue.amount_or_zero(), Money::from_cents(120000));
    }

    #[test]
    fn test_wire_format_uses_source() {
        let request = NewRevenue {
            source: "Eggs".into(),
            amount: Money::from_cents(3000),
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            description: "Farmers market".into(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["source"], "Eggs");
        assert!(json.get("category").is_none());
    }
}
