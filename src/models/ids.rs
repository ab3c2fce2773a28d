//! Strongly-typed ID wrappers for all entity types
//!
//! The farm API hands out integer primary keys. Newtype wrappers keep an
//! expense ID from ever being passed where a revenue ID is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw API key
            pub const fn new(raw: i64) -> Self {
                Self(raw)
            }

            /// Get the raw key as used in API paths
            pub const fn value(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, self.0)
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(s.parse()?))
            }
        }
    };
}

define_id!(UserId, "usr-");
define_id!(ExpenseId, "exp-");
define_id!(RevenueId, "rev-");
define_id!(LivestockId, "liv-");
define_id!(BudgetId, "bud-");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        assert_eq!(ExpenseId::new(42).to_string(), "exp-42");
        assert_eq!(RevenueId::new(7).to_string(), "rev-7");
    }

    #[test]
    fn test_id_parse_with_and_without_prefix() {
        assert_eq!("exp-42".parse::<ExpenseId>().unwrap(), ExpenseId::new(42));
        assert_eq!("42".parse::<ExpenseId>().unwrap(), ExpenseId::new(42));
        assert!("rev-x".parse::<RevenueId>().is_err());
    }

    #[test]
    fn test_id_serialization() {
        let id = LivestockId::new(9);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "9");
        let deserialized: LivestockId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
