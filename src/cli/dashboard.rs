//! Dashboard CLI command

use super::context::CliContext;
use crate::display::Presenter;
use crate::error::FarmResult;
use crate::reports::DashboardReport;

/// Show the dashboard as of `date` (today when omitted)
pub async fn handle_dashboard(ctx: &mut CliContext, date: Option<String>) -> FarmResult<()> {
    let as_of = match date {
        Some(raw) => ctx.parse_date(&raw)?,
        None => ctx.today(),
    };

    let session = ctx.signed_in().await?;
    let report = DashboardReport::generate(
        session.state(),
        as_of,
        ctx.settings.recent_transactions_limit,
    );
    ctx.presenter().show_dashboard(&report)
}
