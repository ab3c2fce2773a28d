//! Export of farm records
//!
//! CSV files for spreadsheets: the full transaction history and the
//! livestock table.

pub mod csv;

pub use self::csv::{export_livestock_csv, export_transactions_csv};
