//! Route guard
//!
//! Evaluated before entering a route:
//! 1. protected route without a session → login
//! 2. admin-only route without the admin role → home
//! 3. otherwise enter

use shared::models::Account;
use shared::route::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Enter(Route),
    Redirect(Route),
}

pub fn check(target: Route, actor: Option<&Account>) -> GuardDecision {
    if target.is_protected() && actor.is_none() {
        return GuardDecision::Redirect(Route::Login);
    }
    if target.is_admin_only() && !actor.is_some_and(Account::is_admin) {
        return GuardDecision::Redirect(Route::Home);
    }
    GuardDecision::Enter(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Role;

    fn account(role: Role) -> Account {
        Account {
            id: "a".into(),
            first_name: "F".into(),
            last_name: "L".into(),
            email: "a@x.com".into(),
            password: "secret1".into(),
            role,
            verified: true,
        }
    }

    #[test]
    fn test_anonymous() {
        assert_eq!(check(Route::Home, None), GuardDecision::Enter(Route::Home));
        assert_eq!(check(Route::Register, None), GuardDecision::Enter(Route::Register));
        for route in [
            Route::Profile,
            Route::Requests,
            Route::Employees,
            Route::Departments,
            Route::Accounts,
        ] {
            assert_eq!(check(route, None), GuardDecision::Redirect(Route::Login));
        }
    }

    #[test]
    fn test_user_role() {
        let user = account(Role::User);
        assert_eq!(
            check(Route::Requests, Some(&user)),
            GuardDecision::Enter(Route::Requests)
        );
        assert_eq!(
            check(Route::Profile, Some(&user)),
            GuardDecision::Enter(Route::Profile)
        );
        for route in [Route::Employees, Route::Departments, Route::Accounts] {
            assert_eq!(check(route, Some(&user)), GuardDecision::Redirect(Route::Home));
        }
    }

    #[test]
    fn test_admin_role() {
        let admin = account(Role::Admin);
        for route in Route::ALL {
            assert_eq!(check(route, Some(&admin)), GuardDecision::Enter(route));
        }
    }
}
