//! HTTP binding of the farm API
//!
//! The server tracks the logged-in user with a session cookie. Cookies live
//! in a shared jar so the CLI can persist the header between runs and hand
//! it back through [`HttpGateway::restore_cookies`].

use async_trait::async_trait;
use reqwest::cookie::{CookieStore, Jar};
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

use super::envelope::Envelope;
use super::{FarmGateway, HealthStatus};
use crate::error::{FarmError, FarmResult};
use crate::models::{
    Budget, Expense, ExpenseId, LivestockRecord, NewBudget, NewExpense, NewLivestock, NewRevenue,
    Revenue, RevenueId, User,
};

#[derive(Serialize)]
struct LoginBody<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RegisterBody<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
}

/// reqwest-backed gateway
pub struct HttpGateway {
    client: Client,
    base_url: String,
    origin: Url,
    jar: Arc<Jar>,
}

impl HttpGateway {
    /// Create a gateway for an API root such as `http://localhost:5001/api`
    pub fn new(base_url: &str) -> FarmResult<Self> {
        let base_url = base_url.trim_end_matches('/').to_string();
        let origin = Url::parse(&base_url)
            .map_err(|e| FarmError::Config(format!("Invalid API URL '{}': {}", base_url, e)))?;

        let jar = Arc::new(Jar::default());
        let client = Client::builder()
            .cookie_provider(Arc::clone(&jar))
            .build()
            .map_err(|e| FarmError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url,
            origin,
            jar,
        })
    }

    /// The API root this gateway talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Seed the jar from a saved `Cookie` header value
    pub fn restore_cookies(&self, header: &str) {
        for cookie in header.split(';').map(str::trim).filter(|c| !c.is_empty()) {
            self.jar.add_cookie_str(cookie, &self.origin);
        }
    }

    /// Current `Cookie` header value for the API origin, if any
    pub fn cookie_header(&self) -> Option<String> {
        self.jar
            .cookies(&self.origin)
            .and_then(|value| value.to_str().ok().map(str::to_string))
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        debug!(%method, %url, "farm api request");
        self.client.request(method, url)
    }

    async fn send(&self, request: RequestBuilder) -> FarmResult<Envelope> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!(%status, "farm api response");
        Envelope::parse(&body, status.is_success(), || format!("HTTP {}", status))
    }

    async fn get(&self, path: &str) -> FarmResult<Envelope> {
        self.send(self.request(Method::GET, path)).await
    }

    async fn send_json<T: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &T,
    ) -> FarmResult<Envelope> {
        self.send(self.request(method, path).json(body)).await
    }
}

#[async_trait]
impl FarmGateway for HttpGateway {
    async fn login(&self, identifier: &str, password: &str) -> FarmResult<User> {
        let body = LoginBody {
            username: identifier,
            password,
        };
        self.send_json(Method::POST, "auth/login", &body)
            .await?
            .take("user")
    }

    async fn register(&self, name: &str, email: &str, password: &str) -> FarmResult<User> {
        let body = RegisterBody {
            username: name,
            email,
            password,
        };
        self.send_json(Method::POST, "auth/register", &body)
            .await?
            .take("user")
    }

    async fn logout(&self) -> FarmResult<()> {
        self.send(self.request(Method::POST, "auth/logout")).await?;
        Ok(())
    }

    async fn current_user(&self) -> FarmResult<User> {
        self.get("auth/me").await?.take("user")
    }

    async fn expenses(&self) -> FarmResult<Vec<Expense>> {
        self.get("expenses").await?.take_list("expenses")
    }

    async fn revenues(&self) -> FarmResult<Vec<Revenue>> {
        self.get("revenues").await?.take_list("revenues")
    }

    async fn livestock(&self) -> FarmResult<Vec<LivestockRecord>> {
        self.get("livestock").await?.take_list("livestock")
    }

    async fn budget(&self) -> FarmResult<Option<Budget>> {
        self.get("budget").await?.take_optional("budget")
    }

    async fn create_expense(&self, expense: &NewExpense) -> FarmResult<()> {
        self.send_json(Method::POST, "expenses", expense).await?;
        Ok(())
    }

    async fn update_expense(&self, id: ExpenseId, expense: &NewExpense) -> FarmResult<()> {
        let path = format!("expenses/{}", id.value());
        self.send_json(Method::PUT, &path, expense).await?;
        Ok(())
    }

    async fn delete_expense(&self, id: ExpenseId) -> FarmResult<()> {
        let path = format!("expenses/{}", id.value());
        self.send(self.request(Method::DELETE, &path)).await?;
        Ok(())
    }

    async fn create_revenue(&self, revenue: &NewRevenue) -> FarmResult<()> {
        self.send_json(Method::POST, "revenues", revenue).await?;
        Ok(())
    }

    async fn update_revenue(&self, id: RevenueId, revenue: &NewRevenue) -> FarmResult<()> {
        let path = format!("revenues/{}", id.value());
        self.send_json(Method::PUT, &path, revenue).await?;
        Ok(())
    }

    async fn delete_revenue(&self, id: RevenueId) -> FarmResult<()> {
        let path = format!("revenues/{}", id.value());
        self.send(self.request(Method::DELETE, &path)).await?;
        Ok(())
    }

    async fn create_livestock(&self, record: &NewLivestock) -> FarmResult<()> {
        self.send_json(Method::POST, "livestock", record).await?;
        Ok(())
    }

    async fn create_budget(&self, budget: &NewBudget) -> FarmResult<()> {
        self.send_json(Method::POST, "budget", budget).await?;
        Ok(())
    }

    async fn health(&self) -> FarmResult<HealthStatus> {
        let response = self.request(Method::GET, "health").send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FarmError::gateway(format!("HTTP {}", status)));
        }
        Ok(response.json::<HealthStatus>().await?)
    }
}
