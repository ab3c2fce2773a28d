//! Shared state for CLI command handlers

use chrono::NaiveDate;
use std::io::{IsTerminal, Stderr, Stdout};

use crate::config::{FarmPaths, Settings, StoredSession};
use crate::display::{Notification, Presenter, TerminalPresenter};
use crate::error::{FarmError, FarmResult};
use crate::gateway::HttpGateway;
use crate::models::lenient;
use crate::session::Session;

/// Paths, settings and output for one `farmtrack` invocation
pub struct CliContext {
    pub paths: FarmPaths,
    pub settings: Settings,
    api_url: String,
    presenter: TerminalPresenter<Stdout>,
    errors: TerminalPresenter<Stderr>,
}

impl CliContext {
    pub fn new(paths: FarmPaths, settings: Settings, api_url_override: Option<&str>) -> Self {
        let api_url = settings.api_url(api_url_override).to_string();
        let stdout = std::io::stdout();
        let color = stdout.is_terminal();
        let presenter = TerminalPresenter::new(stdout, settings.currency_symbol.clone())
            .with_date_format(settings.date_format.clone())
            .with_color(color);

        Self {
            paths,
            settings,
            api_url,
            presenter,
            errors: error_presenter(),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn presenter(&mut self) -> &mut TerminalPresenter<Stdout> {
        &mut self.presenter
    }

    pub fn notify(&mut self, notification: Notification) -> FarmResult<()> {
        self.presenter.notify(&notification)
    }

    /// Show a failed command's message on stderr
    pub fn report(&mut self, err: &FarmError) -> FarmResult<()> {
        self.errors.notify(&Notification::from(err))
    }

    /// Saved session for the configured API, if any
    pub fn stored_session(&self) -> FarmResult<Option<StoredSession>> {
        Ok(StoredSession::load(&self.paths)?.filter(|s| s.matches(&self.api_url)))
    }

    /// A session with the saved cookie loaded, not yet checked with the server
    pub fn session(&self) -> FarmResult<Session<HttpGateway>> {
        let gateway = HttpGateway::new(&self.api_url)?;
        if let Some(stored) = self.stored_session()? {
            gateway.restore_cookies(&stored.cookie);
        }
        Ok(Session::new(gateway))
    }

    /// A session the server recognises, with all records loaded
    pub async fn signed_in(&self) -> FarmResult<Session<HttpGateway>> {
        if self.stored_session()?.is_none() {
            return Err(FarmError::NotAuthenticated);
        }

        let mut session = self.session()?;
        if !session.restore().await? {
            return Err(FarmError::NotAuthenticated);
        }
        Ok(session)
    }

    /// Persist the cookie the server handed out
    pub fn remember(&self, session: &Session<HttpGateway>) -> FarmResult<()> {
        let Some(cookie) = session.gateway().cookie_header() else {
            return Ok(());
        };

        StoredSession {
            api_base_url: self.api_url.clone(),
            cookie,
            username: session.user().map(|u| u.username.clone()),
        }
        .save(&self.paths)
    }

    pub fn forget(&self) -> FarmResult<()> {
        StoredSession::clear(&self.paths)
    }

    pub fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }

    /// Date text as typed, defaulting to today
    pub fn date_or_today(&self, date: Option<String>) -> String {
        date.unwrap_or_else(|| self.today().format("%Y-%m-%d").to_string())
    }

    /// Parse a `--date` argument
    pub fn parse_date(&self, raw: &str) -> FarmResult<NaiveDate> {
        lenient::parse_date(raw).ok_or_else(|| {
            FarmError::Validation(format!("Invalid date '{}'. Use YYYY-MM-DD", raw))
        })
    }
}

/// Presenter for failures, used before settings are available too
pub fn error_presenter() -> TerminalPresenter<Stderr> {
    let stderr = std::io::stderr();
    let color = stderr.is_terminal();
    TerminalPresenter::new(stderr, "$").with_color(color)
}

/// Parse an entity reference such as `exp-12` or `12`
pub(crate) fn parse_reference<T>(raw: &str, what: &str) -> FarmResult<T>
where
    T: std::str::FromStr,
{
    raw.trim()
        .parse()
        .map_err(|_| FarmError::Validation(format!("Invalid {} reference '{}'", what, raw)))
}
