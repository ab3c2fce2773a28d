//! Revenue CLI commands

use clap::Subcommand;

use super::context::{parse_reference, CliContext};
use crate::display::{Notification, Presenter};
use crate::error::{FarmError, FarmResult};
use crate::forms::RevenueForm;
use crate::models::{Revenue, RevenueId};
use crate::reports::aggregate::merge_transactions;

/// Revenue subcommands
#[derive(Subcommand)]
pub enum RevenueCommands {
    /// Record revenue
    Add {
        /// Amount (e.g., "1200")
        #[arg(allow_negative_numbers = true)]
        amount: String,
        /// Source (livestock sale, crops, dairy, ...)
        #[arg(short, long)]
        source: String,
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        #[arg(short = 'm', long)]
        description: Option<String>,
    },
    /// Change a revenue entry; omitted fields keep their current value
    Edit {
        /// Revenue reference (e.g., "rev-4")
        revenue: String,
        #[arg(short, long, allow_negative_numbers = true)]
        amount: Option<String>,
        #[arg(short, long)]
        source: Option<String>,
        #[arg(short, long)]
        date: Option<String>,
        #[arg(short = 'm', long)]
        description: Option<String>,
    },
    /// Delete a revenue entry
    Delete {
        /// Revenue reference (e.g., "rev-4")
        revenue: String,
    },
    /// List revenue, newest first
    List {
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn edit_form(
    existing: &Revenue,
    amount: Option<String>,
    source: Option<String>,
    date: Option<String>,
    description: Option<String>,
) -> RevenueForm {
    RevenueForm {
        source: source.or_else(|| existing.source.clone()),
        amount: amount.or_else(|| existing.amount.map(|a| a.amount().to_string())),
        date: date.or_else(|| existing.date.map(|d| d.to_string())),
        description: description.or_else(|| existing.description.clone()),
    }
}

/// Handle a revenue command
pub async fn handle_revenue_command(ctx: &mut CliContext, cmd: RevenueCommands) -> FarmResult<()> {
    match cmd {
        RevenueCommands::Add {
            amount,
            source,
            date,
            description,
        } => {
            let form = RevenueForm {
                source: Some(source),
                amount: Some(amount),
                date: Some(ctx.date_or_today(date)),
                description,
            };
            form.validate()?;

            let mut session = ctx.signed_in().await?;
            session.add_revenue(&form).await?;
            ctx.notify(Notification::success("Revenue added successfully"))?;
        }

        RevenueCommands::Edit {
            revenue,
            amount,
            source,
            date,
            description,
        } => {
            let id: RevenueId = parse_reference(&revenue, "revenue")?;
            let mut session = ctx.signed_in().await?;

            let existing = session
                .state()
                .revenues
                .iter()
                .find(|r| r.id == id)
                .ok_or_else(|| FarmError::Validation(format!("Revenue {} not found", id)))?;
            let form = edit_form(existing, amount, source, date, description);

            session.update_revenue(id, &form).await?;
            ctx.notify(Notification::success(format!("Revenue {} updated", id)))?;
        }

        RevenueCommands::Delete { revenue } => {
            let id: RevenueId = parse_reference(&revenue, "revenue")?;
            let mut session = ctx.signed_in().await?;
            session.delete_revenue(id).await?;
            ctx.notify(Notification::success(format!("Revenue {} deleted", id)))?;
        }

        RevenueCommands::List { limit } => {
            let session = ctx.signed_in().await?;
            let entries = merge_transactions(
                &[],
                &session.state().revenues,
                limit.unwrap_or(usize::MAX),
            );
            ctx.presenter().show_transactions(&entries)?;
        }
    }

    Ok(())
}
