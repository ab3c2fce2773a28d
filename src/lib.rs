//! farm-tracker - client for a farm expense, revenue and livestock API
//!
//! The farm API stores records and owns authentication; this crate keeps a
//! signed-in session, validates input before it is sent, and computes the
//! dashboard figures (totals, net margin, cost per head, budget remaining)
//! locally.
//!
//! # Architecture
//!
//! - `models`: records as the API returns them, and validated submissions
//! - `forms`: raw user input and the validation gate
//! - `gateway`: the `FarmGateway` trait and its reqwest binding
//! - `session`: signed-in state and the reload-after-write cycle
//! - `reports`: aggregation and the dashboard report
//! - `display`: the `Presenter` trait and terminal output
//! - `export`: CSV export
//! - `config`: paths, settings and the saved API session
//! - `cli`: command handlers for the `farmtrack` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use farm_tracker::gateway::HttpGateway;
//! use farm_tracker::reports::DashboardReport;
//! use farm_tracker::session::Session;
//!
//! let mut session = Session::new(HttpGateway::new("http://localhost:5001/api")?);
//! session.login(&login_form).await?;
//! let report = DashboardReport::generate(session.state(), today, 10);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod forms;
pub mod gateway;
pub mod models;
pub mod reports;
pub mod session;

pub use error::{FarmError, FarmResult};
