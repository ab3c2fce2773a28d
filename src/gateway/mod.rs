//! Remote data gateway
//!
//! The farm API owns persistence and authentication. `FarmGateway` is the
//! seam the session talks through; `HttpGateway` is the production binding
//! and tests substitute a recording mock.
//!
//! Every call resolves to either the payload or `FarmError::Gateway` carrying
//! the server's message. Malformed payloads are gateway errors too. A server
//! that cannot be reached at all yields `FarmError::Unreachable`.

pub mod envelope;
pub mod http;
#[cfg(test)]
pub mod mock;

pub use http::HttpGateway;

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::FarmResult;
use crate::models::{
    Budget, Expense, ExpenseId, LivestockRecord, NewBudget, NewExpense, NewLivestock, NewRevenue,
    Revenue, RevenueId, User,
};

/// Server health as reported by `/health`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub database: Option<String>,
    #[serde(default)]
    pub ml_model: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}

/// Operations offered by the farm API
#[async_trait]
pub trait FarmGateway: Send + Sync {
    async fn login(&self, identifier: &str, password: &str) -> FarmResult<User>;
    async fn register(&self, name: &str, email: &str, password: &str) -> FarmResult<User>;
    async fn logout(&self) -> FarmResult<()>;
    async fn current_user(&self) -> FarmResult<User>;

    async fn expenses(&self) -> FarmResult<Vec<Expense>>;
    async fn revenues(&self) -> FarmResult<Vec<Revenue>>;
    async fn livestock(&self) -> FarmResult<Vec<LivestockRecord>>;
    async fn budget(&self) -> FarmResult<Option<Budget>>;

    async fn create_expense(&self, expense: &NewExpense) -> FarmResult<()>;
    async fn update_expense(&self, id: ExpenseId, expense: &NewExpense) -> FarmResult<()>;
    async fn delete_expense(&self, id: ExpenseId) -> FarmResult<()>;

    async fn create_revenue(&self, revenue: &NewRevenue) -> FarmResult<()>;
    async fn update_revenue(&self, id: RevenueId, revenue: &NewRevenue) -> FarmResult<()>;
    async fn delete_revenue(&self, id: RevenueId) -> FarmResult<()>;

    async fn create_livestock(&self, record: &NewLivestock) -> FarmResult<()>;
    async fn create_budget(&self, budget: &NewBudget) -> FarmResult<()>;

    async fn health(&self) -> FarmResult<HealthStatus>;
}
