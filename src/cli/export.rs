//! Export CLI commands

use clap::Subcommand;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use super::context::CliContext;
use crate::display::Notification;
use crate::error::{FarmError, FarmResult};
use crate::export::{export_livestock_csv, export_transactions_csv};

/// Export subcommands
#[derive(Subcommand)]
pub enum ExportCommands {
    /// Export every expense and revenue entry to CSV
    Transactions {
        /// Output file (defaults to the export directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Export the livestock table to CSV
    Livestock {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn output_path(ctx: &CliContext, output: Option<PathBuf>, name: &str) -> FarmResult<PathBuf> {
    match output {
        Some(path) => Ok(path),
        None => {
            ctx.paths.ensure_directories()?;
            Ok(ctx
                .paths
                .export_dir()
                .join(format!("{}-{}.csv", name, ctx.today().format("%Y-%m-%d"))))
        }
    }
}

fn create(path: &PathBuf) -> FarmResult<BufWriter<File>> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|e| FarmError::Export(format!("Cannot create {}: {}", path.display(), e)))
}

/// Handle an export command
pub async fn handle_export_command(ctx: &mut CliContext, cmd: ExportCommands) -> FarmResult<()> {
    let session = ctx.signed_in().await?;
    let state = session.state();
    let date_format = ctx.settings.date_format.as_str();

    let (count, what, path) = match cmd {
        ExportCommands::Transactions { output } => {
            let path = output_path(ctx, output, "transactions")?;
            let count = export_transactions_csv(
                &state.expenses,
                &state.revenues,
                date_format,
                create(&path)?,
            )?;
            (count, "transactions", path)
        }
        ExportCommands::Livestock { output } => {
            let path = output_path(ctx, output, "livestock")?;
            let count = export_livestock_csv(&state.livestock, date_format, create(&path)?)?;
            (count, "livestock records", path)
        }
    };

    ctx.notify(Notification::success(format!(
        "Exported {} {} to {}",
        count,
        what,
        path.display()
    )))
}
