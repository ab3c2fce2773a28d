//! Dashboard and budget text views

use super::format::{format_bar, format_date, format_percentage, separator, truncate};
use super::tables::format_transaction_table;
use crate::models::Money;
use crate::reports::aggregate::format_net_margin;
use crate::reports::DashboardReport;

const WIDTH: usize = 60;
const BAR_WIDTH: usize = 24;

fn stat_line(output: &mut String, label: &str, value: &str) {
    output.push_str(&format!("  {:<22}{:>18}\n", label, value));
}

/// Headline figures, the budget, category and monthly breakdowns, and the
/// recent activity table
pub fn format_dashboard(report: &DashboardReport, symbol: &str, date_format: &str) -> String {
    let mut output = String::new();

    let as_of = format_date(report.as_of, date_format);
    let title = match &report.username {
        Some(name) => format!("Farm dashboard for {} ({})", name, as_of),
        None => format!("Farm dashboard ({})", as_of),
    };
    output.push_str(&title);
    output.push('\n');
    output.push_str(&separator(WIDTH));
    output.push('\n');

    stat_line(&mut output, "Total revenue", &report.total_revenues.format_with_symbol(symbol));
    stat_line(&mut output, "Total expenses", &report.total_expenses.format_with_symbol(symbol));
    stat_line(
        &mut output,
        "Expenses this month",
        &report.monthly_expenses.format_with_symbol(symbol),
    );
    stat_line(&mut output, "Net margin", &format_net_margin(report.net_margin, symbol));
    stat_line(&mut output, "Livestock (head)", &report.total_heads.to_string());
    stat_line(&mut output, "Cost per head", &report.cost_per_head.format_with_symbol(symbol));
    stat_line(&mut output, "Herd value", &report.livestock_value.format_with_symbol(symbol));
    output.push('\n');

    output.push_str(&format_budget(report, symbol));
    output.push('\n');

    output.push_str(&format_breakdown("Spending by category", &report.category_totals, symbol));
    output.push_str(&format_breakdown("Spending by month", &report.monthly_totals, symbol));

    output.push_str("Recent transactions\n");
    output.push_str(&format_transaction_table(
        &report.recent_transactions,
        symbol,
        date_format,
    ));
    output.push('\n');

    output
}

/// The active budget and how much of it is left
pub fn format_budget(report: &DashboardReport, symbol: &str) -> String {
    let mut output = String::new();

    let Some(budget) = &report.budget else {
        output.push_str("No budget set. Use 'farmtrack budget set <amount>'.\n");
        return output;
    };

    output.push_str(&format!("Budget ({})\n", budget.period));
    stat_line(&mut output, "Total budget", &budget.total_or_zero().format_with_symbol(symbol));
    stat_line(&mut output, "Spent", &report.total_expenses.format_with_symbol(symbol));
    stat_line(&mut output, "Remaining", &report.budget_remaining.format_with_symbol(symbol));

    if let Some(pct) = report.budget_used_percent() {
        output.push_str(&format!(
            "  {} {}\n",
            format_bar(report.total_expenses, budget.total_or_zero(), BAR_WIDTH),
            format_percentage(pct)
        ));
    }
    if report.budget_remaining.is_negative() {
        output.push_str("  Over budget!\n");
    }

    output
}

fn format_breakdown(title: &str, totals: &[(String, Money)], symbol: &str) -> String {
    if totals.is_empty() {
        return String::new();
    }

    let max = totals.iter().map(|(_, amount)| *amount).max().unwrap_or_default();
    let mut output = format!("{}\n", title);
    for (label, amount) in totals {
        output.push_str(&format!(
            "  {:<16} {} {:>14}\n",
            truncate(label, 16),
            format_bar(*amount, max, BAR_WIDTH),
            amount.format_with_symbol(symbol)
        ));
    }
    output.push('\n');
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Budget, BudgetPeriod, Expense, ExpenseId};
    use crate::session::SessionState;
    use chrono::NaiveDate;

    fn report(budget: Option<Budget>) -> DashboardReport {
        let today = NaiveDate::from_ymd_opt(2025, 5, 10).unwrap();
        let state = SessionState {
            expenses: vec![Expense::new(ExpenseId::new(1), "Feed", Money::from_cents(60000), today)],
            budget,
            ..SessionState::default()
        };
        DashboardReport::generate(&state, today, 10)
    }

    #[test]
    fn test_dashboard_sections() {
        let text = format_dashboard(&report(None), "$", "%Y-%m-%d");
        assert!(text.starts_with("Farm dashboard (2025-05-10)"));
        assert!(text.contains("-$600.00"));
        assert!(text.contains("Spending by category"));
        assert!(text.contains("No budget set"));
        assert!(text.contains("exp-1"));
    }

    #[test]
    fn test_dashboard_uses_date_format() {
        let text = format_dashboard(&report(None), "$", "%m/%d/%Y");
        assert!(text.starts_with("Farm dashboard (05/10/2025)"));
        assert!(!text.contains("2025-05-10"));
    }

    #[test]
    fn test_over_budget_notice() {
        let budget = Budget::new(Money::from_cents(50000), BudgetPeriod::Monthly);
        let text = format_budget(&report(Some(budget)), "$");
        assert!(text.contains("Budget (monthly)"));
        assert!(text.contains("-$100.00"));
        assert!(text.contains("Over budget!"));
    }
}
