//! Route tokens
//!
//! Each page of the application is addressed by a URL fragment such as
//! `#/login`. Unknown fragments resolve to [`Route::Home`].

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Route {
    #[default]
    Home,
    Login,
    Register,
    VerifyEmail,
    Profile,
    Employees,
    Departments,
    Accounts,
    Requests,
}

impl Route {
    pub const ALL: [Route; 9] = [
        Route::Home,
        Route::Login,
        Route::Register,
        Route::VerifyEmail,
        Route::Profile,
        Route::Employees,
        Route::Departments,
        Route::Accounts,
        Route::Requests,
    ];

    /// Resolve a URL fragment. Empty and unknown fragments map to home.
    pub fn from_fragment(fragment: &str) -> Self {
        match fragment {
            "#/login" => Route::Login,
            "#/register" => Route::Register,
            "#/verify-email" => Route::VerifyEmail,
            "#/profile" => Route::Profile,
            "#/employees" => Route::Employees,
            "#/departments" => Route::Departments,
            "#/accounts" => Route::Accounts,
            "#/requests" => Route::Requests,
            _ => Route::Home,
        }
    }

    pub fn fragment(&self) -> &'static str {
        match self {
            Route::Home => "#/",
            Route::Login => "#/login",
            Route::Register => "#/register",
            Route::VerifyEmail => "#/verify-email",
            Route::Profile => "#/profile",
            Route::Employees => "#/employees",
            Route::Departments => "#/departments",
            Route::Accounts => "#/accounts",
            Route::Requests => "#/requests",
        }
    }

    /// Requires an active session
    pub fn is_protected(&self) -> bool {
        matches!(
            self,
            Route::Profile | Route::Requests | Route::Employees | Route::Departments | Route::Accounts
        )
    }

    /// Requires the admin role
    pub fn is_admin_only(&self) -> bool {
        matches!(self, Route::Employees | Route::Departments | Route::Accounts)
    }
}

impl From<String> for Route {
    fn from(value: String) -> Self {
        Route::from_fragment(&value)
    }
}

impl From<Route> for String {
    fn from(value: Route) -> Self {
        value.fragment().to_string()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.fragment())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_roundtrip() {
        for route in Route::ALL {
            assert_eq!(Route::from_fragment(route.fragment()), route);
        }
    }

    #[test]
    fn test_unknown_fragment_is_home() {
        assert_eq!(Route::from_fragment(""), Route::Home);
        assert_eq!(Route::from_fragment("#/nope"), Route::Home);
        assert_eq!(Route::from_fragment("#/"), Route::Home);
    }

    #[test]
    fn test_access_sets() {
        let protected: Vec<_> = Route::ALL.iter().filter(|r| r.is_protected()).collect();
        assert_eq!(protected.len(), 5);
        assert!(Route::ALL.iter().filter(|r| r.is_admin_only()).all(|r| r.is_protected()));
        assert!(!Route::Requests.is_admin_only());
        assert!(!Route::VerifyEmail.is_protected());
    }
}
