//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the session and the presenter.

pub mod auth;
pub mod budget;
pub mod context;
pub mod dashboard;
pub mod expense;
pub mod export;
pub mod livestock;
pub mod revenue;
pub mod system;

pub use auth::{handle_login, handle_logout, handle_register, handle_whoami};
pub use budget::{handle_budget_command, BudgetCommands};
pub use context::{error_presenter, CliContext};
pub use dashboard::handle_dashboard;
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportCommands};
pub use livestock::{handle_livestock_command, LivestockCommands};
pub use revenue::{handle_revenue_command, RevenueCommands};
pub use system::{handle_config, handle_health};
