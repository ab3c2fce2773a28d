//! Livestock form

use super::{optional_text, parse_date, parse_integer, parse_money, required_text, ValidationError};
use crate::models::money::parse_decimal;
use crate::models::NewLivestock;

/// Raw livestock input
#[derive(Debug, Clone, Default)]
pub struct LivestockForm {
    pub kind: Option<String>,
    pub breed: Option<String>,
    pub quantity: Option<String>,
    pub age_months: Option<String>,
    pub weight_kg: Option<String>,
    pub purchase_date: Option<String>,
    pub purchase_price: Option<String>,
    pub notes: Option<String>,
}

impl LivestockForm {
    /// Check the form and build the submission
    ///
    /// Age, weight and price are optional; values that do not parse (or are
    /// zero, for age and weight) are sent as null.
    pub fn validate(&self) -> Result<NewLivestock, ValidationError> {
        let (kind, quantity, purchase_date) = match (
            required_text(&self.kind),
            parse_integer(&self.quantity),
            parse_date(&self.purchase_date),
        ) {
            (Some(kind), Some(quantity), Some(date)) => (kind, quantity, date),
            _ => return Err(ValidationError::MissingFields),
        };

        if quantity <= 0 {
            return Err(ValidationError::NonPositiveQuantity);
        }

        let purchase_price = parse_money(&self.purchase_price);
        if purchase_price.is_some_and(|p| p.is_negative()) {
            return Err(ValidationError::NegativePrice);
        }

        let age_months = parse_integer(&self.age_months).filter(|age| *age != 0);
        let weight_kg = self
            .weight_kg
            .as_deref()
            .and_then(parse_decimal)
            .filter(|w| !w.is_zero());

        Ok(NewLivestock {
            kind,
            breed: optional_text(&self.breed),
            quantity,
            age_months,
            weight_kg,
            purchase_date,
            purchase_price,
            notes: optional_text(&self.notes),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn form(kind: &str, quantity: &str, date: &str) -> LivestockForm {
        LivestockForm {
            kind: Some(kind.into()),
            quantity: Some(quantity.into()),
            purchase_date: Some(date.into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_minimal_record() {
        let request = form("sheep", "40", "2025-01-15").validate().unwrap();
        assert_eq!(request.kind(), "sheep");
        assert_eq!(request.quantity(), 40);
        assert!(request.purchase_price().is_none());
        assert!(request.age_months.is_none());
    }

    #[test]
    fn test_quantity_must_be_positive() {
        assert_eq!(
            form("sheep", "0", "2025-01-15").validate(),
            Err(ValidationError::NonPositiveQuantity)
        );
        assert_eq!(
            form("sheep", "-3", "2025-01-15").validate(),
            Err(ValidationError::NonPositiveQuantity)
        );
    }

    #[test]
    fn test_missing_type_or_date() {
        assert_eq!(
            form("", "4", "2025-01-15").validate(),
            Err(ValidationError::MissingFields)
        );
        assert_eq!(
            form("pigs", "4", "").validate(),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn test_optional_fields_are_parsed_or_dropped() {
        let mut input = form("cattle", "12", "2025-01-15");
        input.age_months = Some("18".into());
        input.weight_kg = Some("heavy".into());
        input.purchase_price = Some("850".into());
        let request = input.validate().unwrap();
        assert_eq!(request.age_months, Some(18));
        assert!(request.weight_kg.is_none());
        assert_eq!(request.purchase_price(), Some(Money::from_cents(85000)));
    }

    #[test]
    fn test_negative_price_rejected() {
        let mut input = form("cattle", "2", "2025-01-15");
        input.purchase_price = Some("-10".into());
        assert_eq!(input.validate(), Err(ValidationError::NegativePrice));
    }
}
