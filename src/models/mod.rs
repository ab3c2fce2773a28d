//! Core data models for farm-tracker
//!
//! Records as the farm API returns them (decoded leniently), the validated
//! request types that are submitted back, and the unified transaction view.

pub mod budget;
pub mod expense;
pub mod ids;
pub mod lenient;
pub mod livestock;
pub mod money;
pub mod revenue;
pub mod transaction;
pub mod user;

pub use budget::{Budget, BudgetPeriod, NewBudget};
pub use expense::{Expense, NewExpense};
pub use ids::{BudgetId, ExpenseId, LivestockId, RevenueId, UserId};
pub use livestock::{LivestockRecord, NewLivestock};
pub use money::Money;
pub use revenue::{NewRevenue, Revenue};
pub use transaction::{TransactionEntry, TransactionKind};
pub use user::User;
