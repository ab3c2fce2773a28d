//! Reports over the loaded farm records
//!
//! `aggregate` holds the pure figures (totals, margins, per-head cost,
//! breakdowns, merged activity); `dashboard` bundles them for display.

pub mod aggregate;
pub mod dashboard;

pub use aggregate::RECENT_TRANSACTIONS_LIMIT;
pub use dashboard::{DashboardReport, LivestockRow};
