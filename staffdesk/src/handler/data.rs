//! CRUD Handlers
//!
//! Admin data management and the request workflow. Every successful
//! mutation is saved by [`crate::db::Store::transact`] and audited.

use shared::error::AppResult;
use shared::intent::CrudAction;
use shared::models::{
    AccountCreate, AccountUpdate, DepartmentInput, EmployeeInput, RequestSubmit,
};
use shared::route::Route;

use super::Reply;
use crate::audit_log;
use crate::core::AppState;
use crate::services::{accounts, departments, employees, requests};

fn actor_email(state: &AppState) -> String {
    state
        .actor()
        .map(|a| a.email.clone())
        .unwrap_or_else(|| "anonymous".into())
}

pub fn account(
    state: &mut AppState,
    action: CrudAction<AccountCreate, AccountUpdate>,
) -> AppResult<Reply> {
    let by = actor_email(state);
    let actor = state.session.current();
    match action {
        CrudAction::Create(input) => {
            let acc = state
                .store
                .transact(|db| accounts::create(db, actor, input))?;
            audit_log!(by, "create", format!("account:{}", acc.id), acc.email);
            Ok(Reply::success("Account added!").with_id(acc.id))
        }
        CrudAction::Update { id, data } => {
            let acc = state
                .store
                .transact(|db| accounts::update(db, actor, &id, data))?;
            // own role or email may have changed
            state.refresh_session(&acc);
            audit_log!(by, "update", format!("account:{}", acc.id), acc.email);
            Ok(Reply::success("Account updated!").with_id(acc.id))
        }
        CrudAction::Delete { id } => {
            let acc = state
                .store
                .transact(|db| accounts::delete(db, actor, &id))?;
            audit_log!(by, "delete", format!("account:{}", acc.id), acc.email);
            Ok(Reply::neutral("Account deleted.").with_id(acc.id))
        }
    }
}

pub fn department(
    state: &mut AppState,
    action: CrudAction<DepartmentInput, DepartmentInput>,
) -> AppResult<Reply> {
    let by = actor_email(state);
    let actor = state.session.current();
    let (reply, action, dept) = match action {
        CrudAction::Create(input) => {
            let dept = state
                .store
                .transact(|db| departments::create(db, actor, input))?;
            (Reply::success("Department added!"), "create", dept)
        }
        CrudAction::Update { id, data } => {
            let dept = state
                .store
                .transact(|db| departments::update(db, actor, &id, data))?;
            (Reply::success("Department updated!"), "update", dept)
        }
        CrudAction::Delete { id } => {
            let dept = state
                .store
                .transact(|db| departments::delete(db, actor, &id))?;
            (Reply::neutral("Department deleted."), "delete", dept)
        }
    };
    audit_log!(by, action, format!("department:{}", dept.id), dept.name);
    Ok(reply.with_id(dept.id))
}

pub fn employee(
    state: &mut AppState,
    action: CrudAction<EmployeeInput, EmployeeInput>,
) -> AppResult<Reply> {
    let by = actor_email(state);
    let actor = state.session.current();
    let (reply, action, emp) = match action {
        CrudAction::Create(input) => {
            let emp = state
                .store
                .transact(|db| employees::create(db, actor, input))?;
            (Reply::success("Employee added!"), "create", emp)
        }
        CrudAction::Update { id, data } => {
            let emp = state
                .store
                .transact(|db| employees::update(db, actor, &id, data))?;
            (Reply::success("Employee updated!"), "update", emp)
        }
        CrudAction::Delete { id } => {
            let emp = state
                .store
                .transact(|db| employees::delete(db, actor, &id))?;
            (Reply::neutral("Employee deleted."), "delete", emp)
        }
    };
    audit_log!(by, action, format!("employee:{}", emp.id), emp.emp_id);
    Ok(reply.with_id(emp.id))
}

/// Submitting always lands on the requests page
pub fn submit_request(state: &mut AppState, input: RequestSubmit) -> AppResult<Reply> {
    let actor = state.session.current();
    let req = state
        .store
        .transact(|db| requests::submit(db, actor, input))?;
    audit_log!(req.employee_email, "create", format!("request:{}", req.id), req.kind);
    Ok(Reply::success("Request submitted!")
        .then(Route::Requests)
        .with_id(req.id))
}

pub fn approve_request(state: &mut AppState, id: &str) -> AppResult<Reply> {
    let by = actor_email(state);
    let actor = state.session.current();
    let req = state
        .store
        .transact(|db| requests::approve(db, actor, id))?;
    audit_log!(by, "approve", format!("request:{}", req.id), req.employee_email);
    Ok(Reply::success("Request approved.").with_id(req.id))
}

pub fn reject_request(state: &mut AppState, id: &str) -> AppResult<Reply> {
    let by = actor_email(state);
    let actor = state.session.current();
    let req = state
        .store
        .transact(|db| requests::reject(db, actor, id))?;
    audit_log!(by, "reject", format!("request:{}", req.id), req.employee_email);
    Ok(Reply::success("Request rejected.").with_id(req.id))
}

pub fn delete_request(state: &mut AppState, id: &str) -> AppResult<Reply> {
    let by = actor_email(state);
    let actor = state.session.current();
    let req = state
        .store
        .transact(|db| requests::delete(db, actor, id))?;
    audit_log!(by, "delete", format!("request:{}", req.id), req.employee_email);
    Ok(Reply::neutral("Request deleted.").with_id(req.id))
}
