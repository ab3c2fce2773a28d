//! Configuration and server health commands

use super::context::CliContext;
use crate::display::Notification;
use crate::error::FarmResult;
use crate::gateway::{FarmGateway, HttpGateway};

/// Show current configuration and paths
pub fn handle_config(ctx: &mut CliContext) -> FarmResult<()> {
    let stored = ctx.stored_session()?;
    let settings = &ctx.settings;

    println!("farm-tracker Configuration");
    println!("==========================");
    println!("Config directory: {}", ctx.paths.base_dir().display());
    println!("Settings file:    {}", ctx.paths.settings_file().display());
    println!("Export directory: {}", ctx.paths.export_dir().display());
    println!();
    println!("Settings:");
    println!("  API URL:             {}", ctx.api_url());
    println!("  Currency symbol:     {}", settings.currency_symbol);
    println!("  Date format:         {}", settings.date_format);
    println!("  Recent transactions: {}", settings.recent_transactions_limit);
    println!("  Budget period:       {}", settings.budget_period);
    println!();
    match stored.and_then(|s| s.username) {
        Some(username) => println!("Saved login: {}", username),
        None => println!("Saved login: none"),
    }
    Ok(())
}

/// Check that the farm API is up
pub async fn handle_health(ctx: &mut CliContext) -> FarmResult<()> {
    let gateway = HttpGateway::new(ctx.api_url())?;
    let health = gateway.health().await?;

    let mut message = format!("API {} is {}", ctx.api_url(), health.status);
    if let Some(database) = &health.database {
        message.push_str(&format!(", database {}", database));
    }

    let notification = if health.is_healthy() {
        Notification::success(message)
    } else {
        Notification::warning(message)
    };
    ctx.notify(notification)
}
