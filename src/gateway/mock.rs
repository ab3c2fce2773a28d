//! In-memory gateway for tests
//!
//! Records every call by name and can be told to fail specific operations.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Mutex;

use super::{FarmGateway, HealthStatus};
use crate::error::{FarmError, FarmResult};
use crate::models::{
    Budget, Expense, ExpenseId, LivestockId, LivestockRecord, NewBudget, NewExpense, NewLivestock,
    NewRevenue, Revenue, RevenueId, User, UserId,
};

#[derive(Default)]
struct Store {
    user: Option<User>,
    expenses: Vec<Expense>,
    revenues: Vec<Revenue>,
    livestock: Vec<LivestockRecord>,
    budget: Option<Budget>,
    next_id: i64,
}

#[derive(Default)]
pub struct MockGateway {
    store: Mutex<Store>,
    calls: Mutex<Vec<&'static str>>,
    failing: Mutex<HashSet<&'static str>>,
    offline: Mutex<bool>,
}

pub fn test_user() -> User {
    User {
        id: UserId::new(1),
        username: "meadow".into(),
        email: "meadow@farm.test".into(),
        created_at: None,
    }
}

impl MockGateway {
    pub fn new() -> Self {
        let gateway = Self::default();
        gateway.store.lock().unwrap().next_id = 100;
        gateway
    }

    /// Accept any credentials and return this user
    pub fn with_user(self, user: User) -> Self {
        self.store.lock().unwrap().user = Some(user);
        self
    }

    pub fn with_expenses(self, expenses: Vec<Expense>) -> Self {
        self.store.lock().unwrap().expenses = expenses;
        self
    }

    pub fn with_revenues(self, revenues: Vec<Revenue>) -> Self {
        self.store.lock().unwrap().revenues = revenues;
        self
    }

    pub fn with_livestock(self, livestock: Vec<LivestockRecord>) -> Self {
        self.store.lock().unwrap().livestock = livestock;
        self
    }

    pub fn with_budget(self, budget: Budget) -> Self {
        self.store.lock().unwrap().budget = Some(budget);
        self
    }

    /// Make the named operation fail from now on
    pub fn fail_on(&self, operation: &'static str) {
        self.failing.lock().unwrap().insert(operation);
    }

    /// Fail every operation as if the server were down
    pub fn go_offline(&self) {
        *self.offline.lock().unwrap() = true;
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self, operation: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| **c == operation)
            .count()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    fn record(&self, operation: &'static str) -> FarmResult<()> {
        self.calls.lock().unwrap().push(operation);
        if *self.offline.lock().unwrap() {
            return Err(FarmError::Unreachable("connection refused".into()));
        }
        if self.failing.lock().unwrap().contains(operation) {
            return Err(FarmError::gateway(format!("{} failed", operation)));
        }
        Ok(())
    }

    fn next_id(store: &mut Store) -> i64 {
        store.next_id += 1;
        store.next_id
    }

    fn signed_in(&self) -> FarmResult<User> {
        self.store
            .lock()
            .unwrap()
            .user
            .clone()
            .ok_or_else(|| FarmError::gateway("Invalid credentials"))
    }
}

#[async_trait]
impl FarmGateway for MockGateway {
    async fn login(&self, _identifier: &str, _password: &str) -> FarmResult<User> {
        self.record("login")?;
        self.signed_in()
    }

    async fn register(&self, name: &str, email: &str, _password: &str) -> FarmResult<User> {
        self.record("register")?;
        let mut store = self.store.lock().unwrap();
        let user = User {
            id: UserId::new(Self::next_id(&mut store)),
            username: name.to_string(),
            email: email.to_string(),
            created_at: None,
        };
        store.user = Some(user.clone());
        Ok(user)
    }

    async fn logout(&self) -> FarmResult<()> {
        self.record("logout")
    }

    async fn current_user(&self) -> FarmResult<User> {
        self.record("current_user")?;
        self.signed_in()
    }

    async fn expenses(&self) -> FarmResult<Vec<Expense>> {
        self.record("expenses")?;
        Ok(self.store.lock().unwrap().expenses.clone())
    }

    async fn revenues(&self) -> FarmResult<Vec<Revenue>> {
        self.record("revenues")?;
        Ok(self.store.lock().unwrap().revenues.clone())
    }

    async fn livestock(&self) -> FarmResult<Vec<LivestockRecord>> {
        self.record("livestock")?;
        Ok(self.store.lock().unwrap().livestock.clone())
    }

    async fn budget(&self) -> FarmResult<Option<Budget>> {
        self.record("budget")?;
        Ok(self.store.lock().unwrap().budget.clone())
    }

    async fn create_expense(&self, expense: &NewExpense) -> FarmResult<()> {
        self.record("create_expense")?;
        let mut store = self.store.lock().unwrap();
        let id = ExpenseId::new(Self::next_id(&mut store));
        let mut record = Expense::new(id, expense.category(), expense.amount(), expense.date());
        record.description = Some(expense.description().to_string());
        store.expenses.push(record);
        Ok(())
    }

    async fn update_expense(&self, id: ExpenseId, expense: &NewExpense) -> FarmResult<()> {
        self.record("update_expense")?;
        let mut store = self.store.lock().unwrap();
        let record = store
            .expenses
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| FarmError::gateway("Expense not found"))?;
        *record = Expense::new(id, expense.category(), expense.amount(), expense.date());
        Ok(())
    }

    async fn delete_expense(&self, id: ExpenseId) -> FarmResult<()> {
        self.record("delete_expense")?;
        self.store.lock().unwrap().expenses.retain(|e| e.id != id);
        Ok(())
    }

    async fn create_revenue(&self, revenue: &NewRevenue) -> FarmResult<()> {
        self.record("create_revenue")?;
        let mut store = self.store.lock().unwrap();
        let id = RevenueId::new(Self::next_id(&mut store));
        store
            .revenues
            .push(Revenue::new(id, revenue.source(), revenue.amount(), revenue.date()));
        Ok(())
    }

    async fn update_revenue(&self, id: RevenueId, revenue: &NewRevenue) -> FarmResult<()> {
        self.record("update_revenue")?;
        let mut store = self.store.lock().unwrap();
        let record = store
            .revenues
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| FarmError::gateway("Revenue not found"))?;
        *record = Revenue::new(id, revenue.source(), revenue.amount(), revenue.date());
        Ok(())
    }

    async fn delete_revenue(&self, id: RevenueId) -> FarmResult<()> {
        self.record("delete_revenue")?;
        self.store.lock().unwrap().revenues.retain(|r| r.id != id);
        Ok(())
    }

    async fn create_livestock(&self, record: &NewLivestock) -> FarmResult<()> {
        self.record("create_livestock")?;
        let mut store = self.store.lock().unwrap();
        let id = LivestockId::new(Self::next_id(&mut store));
        let mut stored = LivestockRecord::new(
            id,
            record.kind(),
            record.quantity(),
            record.purchase_price().unwrap_or_default(),
        );
        stored.purchase_date = Some(record.purchase_date());
        store.livestock.push(stored);
        Ok(())
    }

    async fn create_budget(&self, budget: &NewBudget) -> FarmResult<()> {
        self.record("create_budget")?;
        self.store.lock().unwrap().budget = Some(Budget::new(budget.total_budget(), budget.period()));
        Ok(())
    }

    async fn health(&self) -> FarmResult<HealthStatus> {
        self.record("health")?;
        Ok(HealthStatus {
            status: "healthy".into(),
            database: Some("connected".into()),
            ml_model: None,
            timestamp: None,
        })
    }
}
