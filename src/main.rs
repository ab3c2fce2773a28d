use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use farm_tracker::cli::{
    error_presenter, handle_budget_command, handle_config, handle_dashboard,
    handle_expense_command, handle_export_command, handle_health, handle_livestock_command,
    handle_login, handle_logout, handle_register, handle_revenue_command, handle_whoami,
    BudgetCommands, CliContext, ExpenseCommands, ExportCommands, LivestockCommands,
    RevenueCommands,
};
use farm_tracker::config::{FarmPaths, Settings};
use farm_tracker::display::{Notification, Presenter};
use farm_tracker::error::FarmResult;

/// Environment variable holding the log filter
const LOG_ENV: &str = "FARM_TRACKER_LOG";

#[derive(Parser)]
#[command(
    name = "farmtrack",
    version,
    about = "Track farm expenses, revenue and livestock",
    long_about = "farmtrack is a command-line client for the farm tracker API. \
                  Record expenses, revenue and livestock, set a budget, and see \
                  margins and cost per head on the dashboard."
)]
struct Cli {
    /// Farm API root URL
    #[arg(long, global = true, env = "FARM_TRACKER_API_URL")]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in to the farm API
    Login {
        /// Username or email
        identifier: String,
        /// Password (prompted when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Create an account and sign in
    Register {
        name: String,
        email: String,
        /// Password (prompted when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Sign out and forget the saved session
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Show totals, margin, budget and recent activity
    #[command(alias = "dash")]
    Dashboard {
        /// Show figures as of this date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Expense commands
    #[command(subcommand)]
    Expense(ExpenseCommands),

    /// Revenue commands
    #[command(subcommand)]
    Revenue(RevenueCommands),

    /// Livestock commands
    #[command(subcommand)]
    Livestock(LivestockCommands),

    /// Budget commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Export records to CSV
    #[command(subcommand)]
    Export(ExportCommands),

    /// Show current configuration and paths
    Config,

    /// Check that the farm API is reachable
    Health,
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

/// Resolve paths and settings for this run
fn startup(api_url: Option<&str>) -> Result<CliContext> {
    let paths = FarmPaths::new().context("Could not determine the config directory")?;
    let settings = Settings::load_or_create(&paths).context("Could not load settings")?;
    Ok(CliContext::new(paths, settings, api_url))
}

async fn run(ctx: &mut CliContext, command: Option<Commands>) -> FarmResult<()> {
    match command {
        Some(Commands::Login {
            identifier,
            password,
        }) => handle_login(ctx, identifier, password).await,
        Some(Commands::Register {
            name,
            email,
            password,
        }) => handle_register(ctx, name, email, password).await,
        Some(Commands::Logout) => handle_logout(ctx).await,
        Some(Commands::Whoami) => handle_whoami(ctx).await,
        Some(Commands::Dashboard { date }) => handle_dashboard(ctx, date).await,
        Some(Commands::Expense(cmd)) => handle_expense_command(ctx, cmd).await,
        Some(Commands::Revenue(cmd)) => handle_revenue_command(ctx, cmd).await,
        Some(Commands::Livestock(cmd)) => handle_livestock_command(ctx, cmd).await,
        Some(Commands::Budget(cmd)) => handle_budget_command(ctx, cmd).await,
        Some(Commands::Export(cmd)) => handle_export_command(ctx, cmd).await,
        Some(Commands::Config) => handle_config(ctx),
        Some(Commands::Health) => handle_health(ctx).await,
        None => {
            println!("farmtrack - farm expense, revenue and livestock tracker");
            println!();
            println!("Run 'farmtrack --help' for usage information.");
            println!("Run 'farmtrack login <username>' to get started.");
            Ok(())
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let mut ctx = match startup(cli.api_url.as_deref()) {
        Ok(ctx) => ctx,
        Err(err) => {
            let notice = Notification::error(format!("{:#}", err));
            if error_presenter().notify(&notice).is_err() {
                eprintln!("{}", notice);
            }
            return ExitCode::FAILURE;
        }
    };

    match run(&mut ctx, cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if ctx.report(&err).is_err() {
                eprintln!("{}", Notification::from(&err));
            }
            ExitCode::FAILURE
        }
    }
}
