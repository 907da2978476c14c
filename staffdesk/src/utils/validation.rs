//! Input validation helpers
//!
//! Centralized text length constants and validation functions shared by the
//! domain services. Every helper returns the trimmed value it accepted.

use shared::error::{AppError, AppResult, ErrorCode};

// ── Text length limits ──────────────────────────────────────────────

/// Person names, department names, positions, request types
pub const MAX_NAME_LEN: usize = 200;

/// Department descriptions
pub const MAX_NOTE_LEN: usize = 500;

/// Externally assigned identifiers (employee IDs)
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Passwords
pub const MAX_PASSWORD_LEN: usize = 128;
pub const MIN_PASSWORD_LEN: usize = 6;

// ── Helpers ─────────────────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
///
/// `missing` is the message reported when the value is blank.
pub fn validate_required_text(
    value: &str,
    field: &str,
    max_len: usize,
    missing: &str,
) -> AppResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::required(missing).with_detail("field", field));
    }
    check_len(value, field, max_len)?;
    Ok(value.to_string())
}

/// Validate that an optional string, if present, is within the length limit.
///
/// Blank values collapse to `None`.
pub fn validate_optional_text(
    value: Option<&str>,
    field: &str,
    max_len: usize,
) -> AppResult<Option<String>> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => {
            check_len(v, field, max_len)?;
            Ok(Some(v.to_string()))
        }
        None => Ok(None),
    }
}

/// Password length rule; `too_short` is the message shown to the user.
pub fn validate_password(password: &str, too_short: &str) -> AppResult<()> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::with_message(ErrorCode::PasswordTooShort, too_short));
    }
    check_len(password, "password", MAX_PASSWORD_LEN)
}

/// Trim, lower-case and sanity-check an email address
pub fn validate_email(email: &str) -> AppResult<String> {
    let email = shared::util::normalize_email(email);
    if email.is_empty() {
        return Err(AppError::required("Email is required.").with_detail("field", "email"));
    }
    check_len(&email, "email", MAX_EMAIL_LEN)?;
    let (local, domain) = email.split_once('@').unwrap_or(("", ""));
    if local.is_empty() || domain.is_empty() || email.contains(char::is_whitespace) {
        return Err(AppError::with_message(
            ErrorCode::InvalidFormat,
            format!("Invalid email address: {email}"),
        ));
    }
    Ok(email)
}

fn check_len(value: &str, field: &str, max_len: usize) -> AppResult<()> {
    let len = value.chars().count();
    if len > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({len} chars, max {max_len})"
        )));
    }
    Ok(())
}
