//! Account service
//!
//! Self-service (register, verify, login, profile) and admin CRUD.
//! Emails are normalized before every comparison and before storing.

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{
    Account, AccountCreate, AccountUpdate, LoginInput, ProfileUpdate, RegisterInput, Role,
};
use shared::util::{new_id, normalize_email};

use super::filter::TextFilter;
use crate::auth::{require_admin, require_authenticated};
use crate::db::Collections;
use crate::utils::validation::{MAX_NAME_LEN, validate_email, validate_password, validate_required_text};

const NAME_MISSING: &str = "Please fill in your name.";
const NEW_PASSWORD_TOO_SHORT: &str = "New password must be at least 6 characters.";

fn names(first: &str, last: &str) -> AppResult<(String, String)> {
    Ok((
        validate_required_text(first, "firstName", MAX_NAME_LEN, NAME_MISSING)?,
        validate_required_text(last, "lastName", MAX_NAME_LEN, NAME_MISSING)?,
    ))
}

fn unique_email(db: &Collections, email: &str, except_id: Option<&str>) -> AppResult<String> {
    let email = validate_email(email)?;
    if db.email_taken(&email, except_id) {
        return Err(AppError::new(ErrorCode::EmailExists).with_detail("email", email));
    }
    Ok(email)
}

fn find_mut<'a>(db: &'a mut Collections, id: &str) -> AppResult<&'a mut Account> {
    db.account_mut(id)
        .ok_or_else(|| AppError::new(ErrorCode::AccountNotFound).with_detail("id", id))
}

// ==================== Self-service ====================

/// Create an unverified user account
pub fn register(db: &mut Collections, input: RegisterInput) -> AppResult<Account> {
    let email = unique_email(db, &input.email, None)?;
    validate_password(&input.password, ErrorCode::PasswordTooShort.message())?;
    let (first_name, last_name) = names(&input.first_name, &input.last_name)?;

    let account = Account {
        id: new_id(),
        first_name,
        last_name,
        email,
        password: input.password,
        role: Role::User,
        verified: false,
    };
    db.accounts.push(account.clone());
    Ok(account)
}

/// Mark the account registered under `email` as verified
pub fn verify(db: &mut Collections, email: &str) -> AppResult<Account> {
    let email = normalize_email(email);
    let id = db
        .account_by_email(&email)
        .map(|a| a.id.clone())
        .ok_or_else(|| AppError::new(ErrorCode::NothingToVerify))?;
    let account = find_mut(db, &id)?;
    account.verified = true;
    Ok(account.clone())
}

/// Check credentials: normalized email, exact password, verified account
///
/// Unknown email, wrong password and unverified account all report the same
/// message.
pub fn authenticate<'a>(db: &'a Collections, input: &LoginInput) -> AppResult<&'a Account> {
    let account = db
        .account_by_email(&input.email)
        .filter(|a| a.password == input.password)
        .ok_or_else(|| AppError::new(ErrorCode::InvalidCredentials))?;
    if !account.verified {
        return Err(AppError::new(ErrorCode::EmailNotVerified));
    }
    Ok(account)
}

/// Edit the caller's own first and last name
pub fn update_profile(
    db: &mut Collections,
    actor: Option<&Account>,
    input: ProfileUpdate,
) -> AppResult<Account> {
    let actor_id = require_authenticated(actor)?.id.clone();
    let (first_name, last_name) = names(&input.first_name, &input.last_name)?;
    let account = find_mut(db, &actor_id)?;
    account.first_name = first_name;
    account.last_name = last_name;
    Ok(account.clone())
}

// ==================== Admin CRUD ====================

/// Accounts matching `filter` on full name, email or role
pub fn list(db: &Collections, actor: Option<&Account>, filter: &str) -> AppResult<Vec<Account>> {
    require_admin(actor)?;
    let filter = TextFilter::new(filter);
    Ok(db
        .accounts
        .iter()
        .filter(|a| filter.matches_any(&[a.full_name().as_str(), a.email.as_str(), a.role.as_str()]))
        .cloned()
        .collect())
}

pub fn create(
    db: &mut Collections,
    actor: Option<&Account>,
    input: AccountCreate,
) -> AppResult<Account> {
    require_admin(actor)?;
    let email = unique_email(db, &input.email, None)?;
    validate_password(&input.password, ErrorCode::PasswordTooShort.message())?;
    let (first_name, last_name) = names(&input.first_name, &input.last_name)?;

    let account = Account {
        id: new_id(),
        first_name,
        last_name,
        email,
        password: input.password,
        role: input.role,
        verified: input.verified,
    };
    db.accounts.push(account.clone());
    Ok(account)
}

/// Replace every editable field; an empty password keeps the current one
pub fn update(
    db: &mut Collections,
    actor: Option<&Account>,
    id: &str,
    input: AccountUpdate,
) -> AppResult<Account> {
    require_admin(actor)?;
    if db.account(id).is_none() {
        return Err(AppError::new(ErrorCode::AccountNotFound).with_detail("id", id));
    }
    let email = unique_email(db, &input.email, Some(id))?;
    let (first_name, last_name) = names(&input.first_name, &input.last_name)?;
    let password = input.password.filter(|p| !p.is_empty());
    if let Some(p) = &password {
        validate_password(p, NEW_PASSWORD_TOO_SHORT)?;
    }

    let account = find_mut(db, id)?;
    account.first_name = first_name;
    account.last_name = last_name;
    account.email = email;
    account.role = input.role;
    account.verified = input.verified;
    if let Some(p) = password {
        account.password = p;
    }
    Ok(account.clone())
}

/// Remove an account and every employee record pointing at it
///
/// Requests stay; they are keyed by email, not by account.
pub fn delete(db: &mut Collections, actor: Option<&Account>, id: &str) -> AppResult<Account> {
    let actor = require_admin(actor)?;
    if actor.id == id {
        return Err(AppError::new(ErrorCode::CannotDeleteSelf));
    }
    let index = db
        .accounts
        .iter()
        .position(|a| a.id == id)
        .ok_or_else(|| AppError::new(ErrorCode::AccountNotFound).with_detail("id", id))?;

    let removed = db.accounts.remove(index);
    db.employees.retain(|e| e.user_id != removed.id);
    Ok(removed)
}
