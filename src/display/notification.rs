//! User-facing notifications
//!
//! Outcome messages of a command: a confirmation, a notice, or the message
//! of a rejected form or failed API call.

use std::fmt;

use crate::error::FarmError;

/// Type of notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationType {
    /// Prefix shown before the message
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Info => "i",
            Self::Success => "+",
            Self::Warning => "!",
            Self::Error => "x",
        }
    }

    /// ANSI color code for terminals that support it
    pub fn color_code(&self) -> &'static str {
        match self {
            Self::Info => "34",
            Self::Success => "32",
            Self::Warning => "33",
            Self::Error => "31",
        }
    }
}

/// A message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub notification_type: NotificationType,
}

impl Notification {
    pub fn new(message: impl Into<String>, notification_type: NotificationType) -> Self {
        Self {
            message: message.into(),
            notification_type,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Success)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Error)
    }
}

impl From<&FarmError> for Notification {
    /// Unsupported operations are a notice, not a failure
    fn from(err: &FarmError) -> Self {
        if err.is_unsupported() {
            Self::info(err.to_string())
        } else {
            Self::error(err.to_string())
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.notification_type.icon(), self.message)
    }
}
