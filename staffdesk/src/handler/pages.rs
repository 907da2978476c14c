//! Page payloads
//!
//! The data bound to each route, filtered by that page's search text.

use shared::error::AppResult;
use shared::models::AccountSummary;
use shared::route::Route;

use crate::auth::require_authenticated;
use crate::core::AppState;
use crate::services::{accounts, departments, employees, requests};
use crate::view::PageData;

pub fn page_data(state: &AppState, route: Route) -> AppResult<PageData> {
    let db = state.store.collections();
    let actor = state.actor();
    let search = state.router.search_text(route);

    Ok(match route {
        Route::Home => PageData::Home,
        Route::Login => PageData::Login,
        Route::Register => PageData::Register,
        Route::VerifyEmail => PageData::VerifyEmail {
            pending_email: state.pending_email()?,
        },
        Route::Profile => PageData::Profile(AccountSummary::from(require_authenticated(actor)?)),
        Route::Accounts => PageData::Accounts(
            accounts::list(db, actor, search)?
                .iter()
                .map(AccountSummary::from)
                .collect(),
        ),
        Route::Departments => PageData::Departments(departments::list(db, actor, search)?),
        Route::Employees => PageData::Employees {
            rows: employees::list(db, actor, search)?,
            departments: departments::list(db, actor, "")?,
        },
        Route::Requests => PageData::Requests(requests::list(db, actor, search)?),
    })
}
