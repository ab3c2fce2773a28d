//! Budget CLI commands

use clap::Subcommand;

use super::context::CliContext;
use crate::display::{Notification, Presenter};
use crate::error::FarmResult;
use crate::forms::BudgetForm;
use crate::models::BudgetPeriod;
use crate::reports::DashboardReport;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set the farm budget, replacing the current one
    Set {
        /// Total budget amount
        #[arg(allow_negative_numbers = true)]
        amount: String,
        /// Budget period (monthly or yearly)
        #[arg(short, long)]
        period: Option<BudgetPeriod>,
    },
    /// Show the budget and what is left of it
    Show,
}

/// Handle a budget command
pub async fn handle_budget_command(ctx: &mut CliContext, cmd: BudgetCommands) -> FarmResult<()> {
    match cmd {
        BudgetCommands::Set { amount, period } => {
            let form = BudgetForm {
                total_budget: Some(amount),
                period: Some(period.unwrap_or(ctx.settings.budget_period)),
            };
            let request = form.validate()?;

            let mut session = ctx.signed_in().await?;
            session.set_budget(&form).await?;
            ctx.notify(Notification::success(format!(
                "Budget set to {} ({})",
                request
                    .total_budget()
                    .format_with_symbol(&ctx.settings.currency_symbol),
                request.period()
            )))?;
        }

        BudgetCommands::Show => {
            let session = ctx.signed_in().await?;
            let report = DashboardReport::generate(
                session.state(),
                ctx.today(),
                ctx.settings.recent_transactions_limit,
            );
            ctx.presenter().show_budget(&report)?;
        }
    }

    Ok(())
}
