//! Permission checks
//!
//! Two tiers only:
//! - signed in: own profile, own requests
//! - admin: accounts, departments, employees, request review

use shared::error::{AppError, AppResult};
use shared::models::Account;

/// The caller must be signed in
pub fn require_authenticated(actor: Option<&Account>) -> AppResult<&Account> {
    actor.ok_or_else(AppError::not_authenticated)
}

/// The caller must be signed in with the admin role
pub fn require_admin(actor: Option<&Account>) -> AppResult<&Account> {
    let actor = require_authenticated(actor)?;
    if !actor.is_admin() {
        tracing::warn!(target: "security", email = %actor.email, "Admin operation refused");
        return Err(AppError::admin_required());
    }
    Ok(actor)
}
