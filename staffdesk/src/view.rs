//! View collaborator
//!
//! The kernel never draws anything. It hands each page's data to a
//! [`View`], reports intent results as short messages, and asks the view to
//! move to another route. The view calls back through
//! [`crate::App::submit_intent`].

use serde::{Deserialize, Serialize};
use shared::models::{AccountSummary, Department, EmployeeRow, Request};
use shared::route::Route;

/// How a result message should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Danger,
    /// Neutral outcome (deletions, logout)
    Secondary,
}

/// Data bound to a page when it is entered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "page", content = "data", rename_all = "snake_case")]
pub enum PageData {
    Home,
    Login,
    Register,
    VerifyEmail {
        pending_email: Option<String>,
    },
    Profile(AccountSummary),
    Accounts(Vec<AccountSummary>),
    Departments(Vec<Department>),
    Employees {
        rows: Vec<EmployeeRow>,
        /// Options for the department picker
        departments: Vec<Department>,
    },
    Requests(Vec<Request>),
}

pub trait View {
    fn render_page(&mut self, route: Route, data: &PageData);

    fn report_result(&mut self, message: &str, severity: Severity);

    /// The kernel moved to `route`; the view updates its location
    fn request_navigation(&mut self, route: Route);
}

/// View that only logs; used by headless embeddings
#[derive(Debug, Default)]
pub struct LogView;

impl View for LogView {
    fn render_page(&mut self, route: Route, data: &PageData) {
        tracing::debug!(route = %route, ?data, "render");
    }

    fn report_result(&mut self, message: &str, severity: Severity) {
        tracing::info!(?severity, "{message}");
    }

    fn request_navigation(&mut self, route: Route) {
        tracing::debug!(route = %route, "navigate");
    }
}
