//! Request service
//!
//! Any signed-in user submits requests for themselves. Review (approve,
//! reject, delete) is admin only.

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Account, Request, RequestItem, RequestStatus, RequestSubmit, RequestType};
use shared::util::{new_id, normalize_email, today};

use super::filter::TextFilter;
use crate::auth::{require_admin, require_authenticated};
use crate::db::Collections;
use crate::utils::time::format_date;
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text};

fn validate_items(items: Vec<RequestItem>) -> AppResult<Vec<RequestItem>> {
    if items.is_empty() {
        return Err(AppError::new(ErrorCode::RequestEmpty));
    }
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            let name = item.name.trim();
            if name.is_empty() || item.qty < 1 || name.chars().count() > MAX_NAME_LEN {
                return Err(AppError::new(ErrorCode::RequestItemInvalid).with_detail("index", i));
            }
            Ok(RequestItem {
                name: name.to_string(),
                qty: item.qty,
            })
        })
        .collect()
}

/// Requests visible to `actor` matching `filter`
///
/// Admins see every request; everyone else only their own.
pub fn list(db: &Collections, actor: Option<&Account>, filter: &str) -> AppResult<Vec<Request>> {
    let actor = require_authenticated(actor)?;
    let own_email = normalize_email(&actor.email);
    let filter = TextFilter::new(filter);

    Ok(db
        .requests
        .iter()
        .filter(|r| actor.is_admin() || r.employee_email == own_email)
        .filter(|r| {
            let items = r
                .items
                .iter()
                .map(|it| format!("{} {}", it.name, it.qty))
                .collect::<Vec<_>>()
                .join(" ");
            filter.matches_joined(&[
                r.date.clone(),
                r.employee_email.clone(),
                r.kind.to_string(),
                r.status.to_string(),
                items,
            ])
        })
        .cloned()
        .collect())
}

/// New Pending request owned by the caller, dated today
pub fn submit(
    db: &mut Collections,
    actor: Option<&Account>,
    input: RequestSubmit,
) -> AppResult<Request> {
    let actor = require_authenticated(actor)?;
    let kind = validate_required_text(
        input.kind.as_str(),
        "type",
        MAX_NAME_LEN,
        "Request type is required.",
    )?;
    let items = validate_items(input.items)?;

    let request = Request {
        id: new_id(),
        kind: RequestType::from(kind),
        items,
        status: RequestStatus::Pending,
        date: format_date(today()),
        employee_email: normalize_email(&actor.email),
    };
    db.requests.push(request.clone());
    Ok(request)
}

/// Set the review status of a request
pub fn set_status(
    db: &mut Collections,
    actor: Option<&Account>,
    id: &str,
    status: RequestStatus,
) -> AppResult<Request> {
    require_admin(actor)?;
    let request = db
        .requests
        .iter_mut()
        .find(|r| r.id == id)
        .ok_or_else(|| AppError::new(ErrorCode::RequestNotFound).with_detail("id", id))?;
    request.status = status;
    Ok(request.clone())
}

pub fn approve(db: &mut Collections, actor: Option<&Account>, id: &str) -> AppResult<Request> {
    set_status(db, actor, id, RequestStatus::Approved)
}

pub fn reject(db: &mut Collections, actor: Option<&Account>, id: &str) -> AppResult<Request> {
    set_status(db, actor, id, RequestStatus::Rejected)
}

pub fn delete(db: &mut Collections, actor: Option<&Account>, id: &str) -> AppResult<Request> {
    require_admin(actor)?;
    let index = db
        .requests
        .iter()
        .position(|r| r.id == id)
        .ok_or_else(|| AppError::new(ErrorCode::RequestNotFound).with_detail("id", id))?;
    Ok(db.requests.remove(index))
}
