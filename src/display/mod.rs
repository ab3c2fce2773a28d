//! Presentation for terminal output
//!
//! The session and reports produce plain values; a `Presenter` decides how
//! they reach the user. `TerminalPresenter` writes text and tables to any
//! `io::Write`.

pub mod dashboard;
pub mod format;
pub mod notification;
pub mod tables;

pub use dashboard::{format_budget, format_dashboard};
pub use notification::{Notification, NotificationType};
pub use tables::{format_livestock_table, format_transaction_table};

use std::io::Write;

use crate::error::FarmResult;
use crate::models::TransactionEntry;
use crate::reports::{DashboardReport, LivestockRow};

/// Renders session output for the user
pub trait Presenter {
    fn notify(&mut self, notification: &Notification) -> FarmResult<()>;
    fn show_dashboard(&mut self, report: &DashboardReport) -> FarmResult<()>;
    fn show_transactions(&mut self, entries: &[TransactionEntry]) -> FarmResult<()>;
    fn show_livestock(&mut self, rows: &[LivestockRow]) -> FarmResult<()>;
    fn show_budget(&mut self, report: &DashboardReport) -> FarmResult<()>;
}

/// Plain-text presenter
pub struct TerminalPresenter<W: Write> {
    out: W,
    currency_symbol: String,
    date_format: String,
    color: bool,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W, currency_symbol: impl Into<String>) -> Self {
        Self {
            out,
            currency_symbol: currency_symbol.into(),
            date_format: format::ISO_DATE_FORMAT.to_string(),
            color: false,
        }
    }

    /// strftime pattern for dates in tables and headings
    pub fn with_date_format(mut self, date_format: impl Into<String>) -> Self {
        self.date_format = date_format.into();
        self
    }

    /// Color notification prefixes with ANSI codes
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_block(&mut self, text: &str) -> FarmResult<()> {
        self.out.write_all(text.as_bytes())?;
        if !text.ends_with('\n') {
            self.out.write_all(b"\n")?;
        }
        Ok(())
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn notify(&mut self, notification: &Notification) -> FarmResult<()> {
        if self.color {
            writeln!(
                self.out,
                "\x1b[{}m[{}]\x1b[0m {}",
                notification.notification_type.color_code(),
                notification.notification_type.icon(),
                notification.message
            )?;
        } else {
            writeln!(self.out, "{}", notification)?;
        }
        Ok(())
    }

    fn show_dashboard(&mut self, report: &DashboardReport) -> FarmResult<()> {
        let text = format_dashboard(report, &self.currency_symbol, &self.date_format);
        self.write_block(&text)
    }

    fn show_transactions(&mut self, entries: &[TransactionEntry]) -> FarmResult<()> {
        let text = format_transaction_table(entries, &self.currency_symbol, &self.date_format);
        self.write_block(&text)
    }

    fn show_livestock(&mut self, rows: &[LivestockRow]) -> FarmResult<()> {
        let text = format_livestock_table(rows, &self.currency_symbol, &self.date_format);
        self.write_block(&text)
    }

    fn show_budget(&mut self, report: &DashboardReport) -> FarmResult<()> {
        let text = format_budget(report, &self.currency_symbol);
        self.write_block(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(presenter: TerminalPresenter<Vec<u8>>) -> String {
        String::from_utf8(presenter.into_inner()).unwrap()
    }

    #[test]
    fn test_notify_plain() {
        let mut presenter = TerminalPresenter::new(Vec::new(), "$");
        presenter
            .notify(&Notification::error("Amount must be greater than 0"))
            .unwrap();
        assert_eq!(output(presenter), "[x] Amount must be greater than 0\n");
    }

    #[test]
    fn test_notify_colored() {
        let mut presenter = TerminalPresenter::new(Vec::new(), "$").with_color(true);
        presenter.notify(&Notification::success("Saved")).unwrap();
        assert_eq!(output(presenter), "\x1b[32m[+]\x1b[0m Saved\n");
    }

    #[test]
    fn test_show_empty_lists() {
        let mut presenter = TerminalPresenter::new(Vec::new(), "€");
        presenter.show_transactions(&[]).unwrap();
        presenter.show_livestock(&[]).unwrap();
        assert_eq!(
            output(presenter),
            "No transactions yet.\nNo livestock recorded.\n"
        );
    }
}
