//! Livestock CLI commands

use clap::Subcommand;

use super::context::{parse_reference, CliContext};
use crate::display::{Notification, Presenter};
use crate::error::FarmResult;
use crate::forms::LivestockForm;
use crate::models::LivestockId;
use crate::reports::LivestockRow;

/// Livestock subcommands
#[derive(Subcommand)]
pub enum LivestockCommands {
    /// Record livestock
    Add {
        /// Animal type (cattle, sheep, goats, pigs, chickens, horses, other)
        kind: String,
        /// Number of head
        #[arg(allow_negative_numbers = true)]
        quantity: String,
        #[arg(short, long)]
        breed: Option<String>,
        /// Age in months
        #[arg(long)]
        age_months: Option<String>,
        /// Average weight in kg
        #[arg(long)]
        weight_kg: Option<String>,
        /// Purchase date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Purchase price per head
        #[arg(short, long, allow_negative_numbers = true)]
        price: Option<String>,
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// Change a livestock record
    Edit {
        /// Livestock reference (e.g., "liv-3")
        livestock: String,
    },
    /// Delete a livestock record
    Delete {
        /// Livestock reference (e.g., "liv-3")
        livestock: String,
    },
    /// List livestock
    List,
}

/// Handle a livestock command
pub async fn handle_livestock_command(
    ctx: &mut CliContext,
    cmd: LivestockCommands,
) -> FarmResult<()> {
    match cmd {
        LivestockCommands::Add {
            kind,
            quantity,
            breed,
            age_months,
            weight_kg,
            date,
            price,
            notes,
        } => {
            let form = LivestockForm {
                kind: Some(kind),
                breed,
                quantity: Some(quantity),
                age_months,
                weight_kg,
                purchase_date: Some(ctx.date_or_today(date)),
                purchase_price: price,
                notes,
            };
            form.validate()?;

            let mut session = ctx.signed_in().await?;
            session.add_livestock(&form).await?;
            ctx.notify(Notification::success("Livestock added successfully"))?;
        }

        LivestockCommands::Edit { livestock } => {
            let id: LivestockId = parse_reference(&livestock, "livestock")?;
            let result = ctx
                .session()?
                .update_livestock(id, &LivestockForm::default())
                .await;
            notify_unsupported(ctx, result)?;
        }

        LivestockCommands::Delete { livestock } => {
            let id: LivestockId = parse_reference(&livestock, "livestock")?;
            let result = ctx.session()?.delete_livestock(id).await;
            notify_unsupported(ctx, result)?;
        }

        LivestockCommands::List => {
            let session = ctx.signed_in().await?;
            let rows: Vec<LivestockRow> = session
                .state()
                .livestock
                .iter()
                .map(LivestockRow::from)
                .collect();
            ctx.presenter().show_livestock(&rows)?;
        }
    }

    Ok(())
}

/// Report an unsupported operation as a notice instead of a failure
fn notify_unsupported(ctx: &mut CliContext, result: FarmResult<()>) -> FarmResult<()> {
    match result {
        Err(e) if e.is_unsupported() => ctx.notify(Notification::from(&e)),
        other => other,
    }
}
