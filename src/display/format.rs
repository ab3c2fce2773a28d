//! Small text formatting helpers for terminal output

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::models::Money;

/// Date pattern used when no other is configured
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Format a date with a strftime pattern, falling back to ISO when the
/// pattern is invalid
pub fn format_date(date: NaiveDate, pattern: &str) -> String {
    let items = StrftimeItems::new(pattern);
    if items.clone().any(|item| matches!(item, Item::Error)) {
        return date.format(ISO_DATE_FORMAT).to_string();
    }
    date.format_with_items(items).to_string()
}

/// Optional date, or a dash
pub fn format_optional_date(date: Option<NaiveDate>, pattern: &str) -> String {
    date.map(|d| format_date(d, pattern))
        .unwrap_or_else(|| "-".to_string())
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct > 0.0 && pct < 0.1 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Horizontal bar scaled against `max`
pub fn format_bar(value: Money, max: Money, width: usize) -> String {
    if !max.is_positive() || !value.is_positive() {
        return " ".repeat(width);
    }

    let filled = value
        .amount()
        .checked_div(max.amount())
        .and_then(|ratio| ratio.checked_mul(Decimal::from(width as u64)))
        .and_then(|cells| cells.round().to_usize())
        .unwrap_or(width)
        .min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate to `max_len` characters with an ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}
