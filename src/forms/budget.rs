//! Budget form

use super::{parse_money, ValidationError};
use crate::models::{BudgetPeriod, NewBudget};

/// Raw budget input
#[derive(Debug, Clone, Default)]
pub struct BudgetForm {
    pub total_budget: Option<String>,
    pub period: Option<BudgetPeriod>,
}

impl BudgetForm {
    /// Check the form and build the submission
    pub fn validate(&self) -> Result<NewBudget, ValidationError> {
        let total_budget = parse_money(&self.total_budget)
            .filter(|total| total.is_positive())
            .ok_or(ValidationError::InvalidBudget)?;

        Ok(NewBudget {
            total_budget,
            period: self.period.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn form(total: &str) -> BudgetForm {
        BudgetForm {
            total_budget: Some(total.into()),
            period: None,
        }
    }

    #[test]
    fn test_valid_budget_defaults_to_monthly() {
        let request = form("4000").validate().unwrap();
        assert_eq!(request.total_budget(), Money::from_cents(400000));
        assert_eq!(request.period(), BudgetPeriod::Monthly);
    }

    #[test]
    fn test_invalid_budgets() {
        for raw in ["0", "-100", "abc", ""] {
            assert_eq!(form(raw).validate(), Err(ValidationError::InvalidBudget));
        }
        assert_eq!(
            BudgetForm::default().validate(),
            Err(ValidationError::InvalidBudget)
        );
    }
}
