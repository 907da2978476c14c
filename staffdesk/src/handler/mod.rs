//! Intent Handlers
//!
//! One function per [`Intent`] family. Handlers mutate [`AppState`] and
//! describe what the view should show next as a [`Reply`]; rendering is
//! left to [`crate::App`].

pub mod auth;
pub mod data;
pub mod pages;

use shared::error::AppResult;
use shared::intent::Intent;
use shared::route::Route;

use crate::core::AppState;
use crate::view::Severity;

/// What a successful intent produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Message for the user, if the intent is worth announcing
    pub notice: Option<(String, Severity)>,
    /// Route to move to; `None` re-enters the current route
    pub navigate: Option<Route>,
    /// Affected record
    pub id: Option<String>,
}

impl Reply {
    /// No message (navigation, search)
    pub fn silent() -> Self {
        Self {
            notice: None,
            navigate: None,
            id: None,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            notice: Some((message.into(), Severity::Success)),
            ..Self::silent()
        }
    }

    /// Neutral message (deletions, logout)
    pub fn neutral(message: impl Into<String>) -> Self {
        Self {
            notice: Some((message.into(), Severity::Secondary)),
            ..Self::silent()
        }
    }

    pub fn then(mut self, route: Route) -> Self {
        self.navigate = Some(route);
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn message(&self) -> &str {
        self.notice.as_ref().map(|(m, _)| m.as_str()).unwrap_or("")
    }
}

/// Route an intent to its handler
pub fn dispatch(state: &mut AppState, intent: Intent) -> AppResult<Reply> {
    match intent {
        Intent::Register(input) => auth::register(state, input),
        Intent::VerifyEmail => auth::verify_pending(state),
        Intent::Login(input) => auth::login(state, input),
        Intent::Logout => auth::logout(state),
        Intent::UpdateProfile(input) => auth::update_profile(state, input),

        Intent::Navigate { route } => Ok(Reply::silent().then(route)),
        Intent::SearchChanged { route, text } => {
            state.router.set_search_text(route, text);
            Ok(Reply::silent())
        }

        Intent::Account(action) => data::account(state, action),
        Intent::Department(action) => data::department(state, action),
        Intent::Employee(action) => data::employee(state, action),

        Intent::SubmitRequest(input) => data::submit_request(state, input),
        Intent::ApproveRequest { id } => data::approve_request(state, &id),
        Intent::RejectRequest { id } => data::reject_request(state, &id),
        Intent::DeleteRequest { id } => data::delete_request(state, &id),
    }
}
