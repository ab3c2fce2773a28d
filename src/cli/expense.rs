//! Expense CLI commands

use clap::Subcommand;

use super::context::{parse_reference, CliContext};
use crate::display::{Notification, Presenter};
use crate::error::{FarmError, FarmResult};
use crate::forms::ExpenseForm;
use crate::models::{Expense, ExpenseId};
use crate::reports::aggregate::merge_transactions;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record an expense
    Add {
        /// Amount (e.g., "125.50")
        #[arg(allow_negative_numbers = true)]
        amount: String,
        /// Category (feed, veterinary, fuel, ...)
        #[arg(short, long)]
        category: String,
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        #[arg(short = 'm', long)]
        description: Option<String>,
    },
    /// Change an expense; omitted fields keep their current value
    Edit {
        /// Expense reference (e.g., "exp-12")
        expense: String,
        #[arg(short, long, allow_negative_numbers = true)]
        amount: Option<String>,
        #[arg(short, long)]
        category: Option<String>,
        #[arg(short, long)]
        date: Option<String>,
        #[arg(short = 'm', long)]
        description: Option<String>,
    },
    /// Delete an expense
    Delete {
        /// Expense reference (e.g., "exp-12")
        expense: String,
    },
    /// List expenses, newest first
    List {
        /// Number of expenses to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Form prefilled from a stored expense, with any given fields replacing it
fn edit_form(
    existing: &Expense,
    amount: Option<String>,
    category: Option<String>,
    date: Option<String>,
    description: Option<String>,
) -> ExpenseForm {
    ExpenseForm {
        category: category.or_else(|| existing.category.clone()),
        amount: amount.or_else(|| existing.amount.map(|a| a.amount().to_string())),
        date: date.or_else(|| existing.date.map(|d| d.to_string())),
        description: description.or_else(|| existing.description.clone()),
    }
}

/// Handle an expense command
pub async fn handle_expense_command(ctx: &mut CliContext, cmd: ExpenseCommands) -> FarmResult<()> {
    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            date,
            description,
        } => {
            let form = ExpenseForm {
                category: Some(category),
                amount: Some(amount),
                date: Some(ctx.date_or_today(date)),
                description,
            };
            form.validate()?;

            let mut session = ctx.signed_in().await?;
            session.add_expense(&form).await?;
            ctx.notify(Notification::success("Expense added successfully"))?;
        }

        ExpenseCommands::Edit {
            expense,
            amount,
            category,
            date,
            description,
        } => {
            let id: ExpenseId = parse_reference(&expense, "expense")?;
            let mut session = ctx.signed_in().await?;

            let existing = session
                .state()
                .expenses
                .iter()
                .find(|e| e.id == id)
                .ok_or_else(|| FarmError::Validation(format!("Expense {} not found", id)))?;
            let form = edit_form(existing, amount, category, date, description);

            session.update_expense(id, &form).await?;
            ctx.notify(Notification::success(format!("Expense {} updated", id)))?;
        }

        ExpenseCommands::Delete { expense } => {
            let id: ExpenseId = parse_reference(&expense, "expense")?;
            let mut session = ctx.signed_in().await?;
            session.delete_expense(id).await?;
            ctx.notify(Notification::success(format!("Expense {} deleted", id)))?;
        }

        ExpenseCommands::List { limit } => {
            let session = ctx.signed_in().await?;
            let entries = merge_transactions(
                &session.state().expenses,
                &[],
                limit.unwrap_or(usize::MAX),
            );
            ctx.presenter().show_transactions(&entries)?;
        }
    }

    Ok(())
}
