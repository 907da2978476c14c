//! Hash router
//!
//! Tracks the active route and the search text typed on each list page.
//! Entering a route always goes through [`guard::check`].

pub mod guard;

use std::collections::HashMap;

use shared::models::Account;
use shared::route::Route;

pub use guard::GuardDecision;

#[derive(Debug, Default)]
pub struct Router {
    current: Route,
    search: HashMap<Route, String>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the guard until a route can be entered
    ///
    /// Redirect targets (login, home) always pass the guard, so this settles
    /// after at most one redirect.
    pub fn resolve(target: Route, actor: Option<&Account>) -> Route {
        let mut route = target;
        loop {
            match guard::check(route, actor) {
                GuardDecision::Enter(r) => return r,
                GuardDecision::Redirect(r) => {
                    tracing::debug!(from = %route, to = %r, "Route guard redirect");
                    route = r;
                }
            }
        }
    }

    /// Resolve `target` and make the result current
    pub fn enter(&mut self, target: Route, actor: Option<&Account>) -> Route {
        let route = Self::resolve(target, actor);
        self.current = route;
        route
    }

    pub fn current(&self) -> Route {
        self.current
    }

    /// Search text currently typed on `route` (empty if none)
    pub fn search_text(&self, route: Route) -> &str {
        self.search.get(&route).map(String::as_str).unwrap_or("")
    }

    pub fn set_search_text(&mut self, route: Route, text: impl Into<String>) {
        self.search.insert(route, text.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_follows_redirect() {
        let mut router = Router::new();
        assert_eq!(router.current(), Route::Home);
        assert_eq!(router.enter(Route::Accounts, None), Route::Login);
        assert_eq!(router.current(), Route::Login);
    }

    #[test]
    fn test_search_text_per_route() {
        let mut router = Router::new();
        assert_eq!(router.search_text(Route::Accounts), "");
        router.set_search_text(Route::Accounts, "adm");
        assert_eq!(router.search_text(Route::Accounts), "adm");
        assert_eq!(router.search_text(Route::Departments), "");
    }
}
