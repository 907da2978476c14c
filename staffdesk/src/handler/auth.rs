//! Authentication Handlers
//!
//! Registration, simulated email verification, login and logout, plus the
//! profile self-edit.

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{LoginInput, ProfileUpdate, RegisterInput};
use shared::route::Route;

use super::Reply;
use crate::core::AppState;
use crate::services::accounts;
use crate::{audit_log, security_log};

/// Create an unverified account and remember it as pending verification
///
/// The account is committed first; a failed pending-slot write after that
/// is logged and does not turn the registration into a failure.
pub fn register(state: &mut AppState, input: RegisterInput) -> AppResult<Reply> {
    let account = state.store.transact(|db| accounts::register(db, input))?;
    if let Err(e) = state.set_pending_email(&account.email) {
        tracing::warn!(email = %account.email, error = %e, "Pending verification not recorded");
    }

    security_log!(INFO, "register", email = %account.email);
    Ok(Reply::success("Account created! Please verify email.")
        .then(Route::VerifyEmail)
        .with_id(account.id))
}

/// Verify the pending registration
pub fn verify_pending(state: &mut AppState) -> AppResult<Reply> {
    let email = state
        .pending_email()?
        .ok_or_else(|| AppError::new(ErrorCode::NothingToVerify))?;
    let account = state.store.transact(|db| accounts::verify(db, &email))?;
    if let Err(e) = state.clear_pending_email() {
        tracing::warn!(email = %account.email, error = %e, "Pending verification slot not cleared");
    }

    security_log!(INFO, "email_verified", email = %account.email);
    Ok(Reply::success("Email verified! You can now login.")
        .then(Route::Login)
        .with_id(account.id))
}

pub fn login(state: &mut AppState, input: LoginInput) -> AppResult<Reply> {
    let account = match accounts::authenticate(state.store.collections(), &input) {
        Ok(account) => account.clone(),
        Err(e) => {
            security_log!(WARN, "login_failed", email = %input.email.trim(), code = e.code.code());
            return Err(e);
        }
    };
    state.session.sign_in(account.clone())?;

    security_log!(INFO, "login", email = %account.email, role = %account.role);
    Ok(Reply::success("Login successful!")
        .then(Route::Profile)
        .with_id(account.id))
}

/// Signing out while signed out is allowed and still lands on home
pub fn logout(state: &mut AppState) -> AppResult<Reply> {
    if let Some(account) = state.session.current() {
        security_log!(INFO, "logout", email = %account.email);
    }
    state.session.sign_out()?;
    Ok(Reply::neutral("Logged out.").then(Route::Home))
}

pub fn update_profile(state: &mut AppState, input: ProfileUpdate) -> AppResult<Reply> {
    let actor = state.session.current();
    let account = state
        .store
        .transact(|db| accounts::update_profile(db, actor, input))?;
    state.refresh_session(&account);

    audit_log!(account.email, "update", format!("account:{}", account.id), "profile");
    Ok(Reply::success("Profile updated!").with_id(account.id))
}
