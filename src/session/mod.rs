//! Session state holder
//!
//! `Session` owns the gateway and the signed-in user's records. It moves
//! between two states:
//!
//! - **Anonymous**: nothing loaded
//! - **Authenticated(user)**: entered on login, registration or a successful
//!   `restore()`, followed by a full reload
//!
//! Every write validates its form first, requires a signed-in user, calls the
//! gateway and then reloads. A failed reload keeps the last good collections.

pub mod state;

pub use state::{Collections, SessionState, SessionStatus};

use tracing::{info, warn};

use crate::error::{FarmError, FarmResult};
use crate::forms::{BudgetForm, ExpenseForm, LivestockForm, LoginForm, RevenueForm, SignupForm};
use crate::gateway::FarmGateway;
use crate::models::{ExpenseId, LivestockId, RevenueId, User};

pub struct Session<G: FarmGateway> {
    gateway: G,
    state: SessionState,
}

impl<G: FarmGateway> Session<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            state: SessionState::default(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn user(&self) -> Option<&User> {
        self.state.user()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    fn require_user(&self) -> FarmResult<()> {
        if self.state.is_authenticated() {
            Ok(())
        } else {
            Err(FarmError::NotAuthenticated)
        }
    }

    /// Pick up an existing server session
    ///
    /// Returns `Ok(false)` and stays anonymous when the server does not
    /// recognise us. An unreachable server and a failed reload after the
    /// user is known are errors.
    pub async fn restore(&mut self) -> FarmResult<bool> {
        match self.gateway.current_user().await {
            Ok(user) => {
                info!(username = %user.username, "restored session");
                self.state.authenticate(user);
                self.reload().await?;
                Ok(true)
            }
            Err(e) if e.is_unreachable() => {
                self.state.clear();
                Err(e)
            }
            Err(e) => {
                warn!(error = %e, "no active session");
                self.state.clear();
                Ok(false)
            }
        }
    }

    /// Sign in and load the user's records
    pub async fn login(&mut self, form: &LoginForm) -> FarmResult<User> {
        let credentials = form.validate()?;
        let user = self
            .gateway
            .login(&credentials.identifier, &credentials.password)
            .await?;
        self.enter(user).await
    }

    /// Create an account, sign in and load (empty) records
    pub async fn register(&mut self, form: &SignupForm) -> FarmResult<User> {
        let registration = form.validate()?;
        let user = self
            .gateway
            .register(
                &registration.name,
                &registration.email,
                &registration.password,
            )
            .await?;
        self.enter(user).await
    }

    async fn enter(&mut self, user: User) -> FarmResult<User> {
        info!(username = %user.username, "signed in");
        self.state.authenticate(user.clone());
        self.reload().await?;
        Ok(user)
    }

    /// Sign out; local state is cleared even if the server call fails
    pub async fn logout(&mut self) {
        if let Err(e) = self.gateway.logout().await {
            warn!(error = %e, "logout request failed, clearing local session anyway");
        }
        self.state.clear();
        info!("signed out");
    }

    /// Fetch all four collections and replace them together
    pub async fn reload(&mut self) -> FarmResult<()> {
        self.require_user()?;

        let (expenses, revenues, livestock, budget) = tokio::try_join!(
            self.gateway.expenses(),
            self.gateway.revenues(),
            self.gateway.livestock(),
            self.gateway.budget(),
        )?;

        self.state.replace(Collections {
            expenses,
            revenues,
            livestock,
            budget,
        });
        Ok(())
    }

    pub async fn add_expense(&mut self, form: &ExpenseForm) -> FarmResult<()> {
        let request = form.validate()?;
        self.require_user()?;
        self.gateway.create_expense(&request).await?;
        info!(category = request.category(), amount = %request.amount(), "expense added");
        self.reload().await
    }

    pub async fn update_expense(&mut self, id: ExpenseId, form: &ExpenseForm) -> FarmResult<()> {
        let request = form.validate()?;
        self.require_user()?;
        self.gateway.update_expense(id, &request).await?;
        info!(%id, "expense updated");
        self.reload().await
    }

    pub async fn delete_expense(&mut self, id: ExpenseId) -> FarmResult<()> {
        self.require_user()?;
        self.gateway.delete_expense(id).await?;
        info!(%id, "expense deleted");
        self.reload().await
    }

    pub async fn add_revenue(&mut self, form: &RevenueForm) -> FarmResult<()> {
        let request = form.validate()?;
        self.require_user()?;
        self.gateway.create_revenue(&request).await?;
        info!(source = request.source(), amount = %request.amount(), "revenue added");
        self.reload().await
    }

    pub async fn update_revenue(&mut self, id: RevenueId, form: &RevenueForm) -> FarmResult<()> {
        let request = form.validate()?;
        self.require_user()?;
        self.gateway.update_revenue(id, &request).await?;
        info!(%id, "revenue updated");
        self.reload().await
    }

    pub async fn delete_revenue(&mut self, id: RevenueId) -> FarmResult<()> {
        self.require_user()?;
        self.gateway.delete_revenue(id).await?;
        info!(%id, "revenue deleted");
        self.reload().await
    }

    pub async fn add_livestock(&mut self, form: &LivestockForm) -> FarmResult<()> {
        let request = form.validate()?;
        self.require_user()?;
        self.gateway.create_livestock(&request).await?;
        info!(kind = request.kind(), quantity = request.quantity(), "livestock added");
        self.reload().await
    }

    /// The farm API has no livestock update endpoint
    pub async fn update_livestock(
        &mut self,
        _id: LivestockId,
        _form: &LivestockForm,
    ) -> FarmResult<()> {
        Err(FarmError::Unsupported("Livestock update"))
    }

    /// The farm API has no livestock delete endpoint
    pub async fn delete_livestock(&mut self, _id: LivestockId) -> FarmResult<()> {
        Err(FarmError::Unsupported("Livestock delete"))
    }

    pub async fn set_budget(&mut self, form: &BudgetForm) -> FarmResult<()> {
        let request = form.validate()?;
        self.require_user()?;
        self.gateway.create_budget(&request).await?;
        info!(total = %request.total_budget(), period = %request.period(), "budget set");
        self.reload().await
    }
}
