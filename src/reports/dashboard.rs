//! Dashboard report
//!
//! Everything the dashboard shows, computed in one pass from the session
//! state so presenters only have to format.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::aggregate::{
    budget_remaining, category_totals, cost_per_head, livestock_value, merge_transactions,
    monthly_expenses, monthly_totals, net_margin, total_expenses, total_heads,
    total_livestock_value, total_revenues,
};
use crate::models::{Budget, LivestockId, LivestockRecord, Money, TransactionEntry};
use crate::session::SessionState;

/// One row of the livestock table
#[derive(Debug, Clone, PartialEq)]
pub struct LivestockRow {
    pub id: LivestockId,
    pub kind: String,
    pub breed: String,
    pub quantity: i64,
    pub age_months: Option<i64>,
    pub weight_kg: Option<Decimal>,
    pub purchase_date: Option<NaiveDate>,
    pub price_per_head: Money,
    pub value: Money,
}

impl From<&LivestockRecord> for LivestockRow {
    fn from(record: &LivestockRecord) -> Self {
        Self {
            id: record.id,
            kind: record.kind.clone().unwrap_or_else(|| "N/A".to_string()),
            breed: record.breed.clone().unwrap_or_else(|| "N/A".to_string()),
            quantity: record.quantity_or_zero(),
            age_months: record.age_months,
            weight_kg: record.weight_kg,
            purchase_date: record.purchase_date,
            price_per_head: record.price_or_zero(),
            value: livestock_value(record),
        }
    }
}

/// Dashboard figures as of a given day
#[derive(Debug, Clone)]
pub struct DashboardReport {
    pub as_of: NaiveDate,
    pub username: Option<String>,
    pub total_expenses: Money,
    pub total_revenues: Money,
    pub monthly_expenses: Money,
    pub net_margin: Money,
    pub total_heads: i64,
    pub cost_per_head: Money,
    pub livestock_value: Money,
    pub budget: Option<Budget>,
    pub budget_remaining: Money,
    pub recent_transactions: Vec<TransactionEntry>,
    pub category_totals: Vec<(String, Money)>,
    pub monthly_totals: Vec<(String, Money)>,
    pub livestock: Vec<LivestockRow>,
}

impl DashboardReport {
    /// Build the report; `limit` caps the recent transactions list
    pub fn generate(state: &SessionState, today: NaiveDate, limit: usize) -> Self {
        let expenses_total = total_expenses(&state.expenses);
        let revenues_total = total_revenues(&state.revenues);
        let heads = total_heads(&state.livestock);

        Self {
            as_of: today,
            username: state.user().map(|u| u.username.clone()),
            total_expenses: expenses_total,
            total_revenues: revenues_total,
            monthly_expenses: monthly_expenses(&state.expenses, today),
            net_margin: net_margin(revenues_total, expenses_total),
            total_heads: heads,
            cost_per_head: cost_per_head(expenses_total, heads),
            livestock_value: total_livestock_value(&state.livestock),
            budget: state.budget.clone(),
            budget_remaining: budget_remaining(state.budget.as_ref(), expenses_total),
            recent_transactions: merge_transactions(&state.expenses, &state.revenues, limit),
            category_totals: category_totals(&state.expenses),
            monthly_totals: monthly_totals(&state.expenses),
            livestock: state.livestock.iter().map(LivestockRow::from).collect(),
        }
    }

    /// Share of the budget already spent, as a percentage
    pub fn budget_used_percent(&self) -> Option<f64> {
        use rust_decimal::prelude::ToPrimitive;

        let total = self.budget.as_ref()?.total_or_zero();
        if !total.is_positive() {
            return None;
        }
        self.total_expenses
            .amount()
            .checked_div(total.amount())?
            .checked_mul(Decimal::ONE_HUNDRED)?
            .to_f64()
    }
}
