//! Intent module - user intents forwarded from the view layer
//!
//! Every button click or form submission in the UI becomes one [`Intent`].
//! The kernel dispatches it to the matching session or service call and answers
//! with an [`IntentOutcome`].

use serde::{Deserialize, Serialize};

use crate::error::{AppError, ErrorCode};
use crate::models::{
    AccountCreate, AccountUpdate, DepartmentInput, EmployeeInput, LoginInput, ProfileUpdate,
    RegisterInput, RequestSubmit,
};
use crate::route::Route;

/// Generic CRUD action
///
/// Type parameters:
/// - `C`: Create payload
/// - `U`: Update payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum CrudAction<C, U> {
    /// Create
    Create(C),
    /// Update (ID plus full payload)
    Update { id: String, data: U },
    /// Delete (ID only)
    Delete { id: String },
}

/// User intent - the single entry point from the view into the kernel
///
/// Uses `#[serde(tag = "kind", content = "payload")]` so the JSON reads:
///
/// ```json
/// {
///   "kind": "department",
///   "payload": { "type": "Create", "data": { "name": "Ops" } }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "snake_case")]
pub enum Intent {
    // ===== Auth =====
    Register(RegisterInput),
    /// Confirm the pending registration
    VerifyEmail,
    Login(LoginInput),
    Logout,
    UpdateProfile(ProfileUpdate),

    // ===== Navigation =====
    Navigate { route: Route },
    /// Search box text changed on a list page
    SearchChanged { route: Route, text: String },

    // ===== Admin CRUD =====
    Account(CrudAction<AccountCreate, AccountUpdate>),
    Department(CrudAction<DepartmentInput, DepartmentInput>),
    Employee(CrudAction<EmployeeInput, EmployeeInput>),

    // ===== Requests =====
    SubmitRequest(RequestSubmit),
    ApproveRequest { id: String },
    RejectRequest { id: String },
    DeleteRequest { id: String },
}

impl Intent {
    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Intent::Register(_) => "register",
            Intent::VerifyEmail => "verify_email",
            Intent::Login(_) => "login",
            Intent::Logout => "logout",
            Intent::UpdateProfile(_) => "update_profile",
            Intent::Navigate { .. } => "navigate",
            Intent::SearchChanged { .. } => "search_changed",
            Intent::Account(_) => "account",
            Intent::Department(_) => "department",
            Intent::Employee(_) => "employee",
            Intent::SubmitRequest(_) => "submit_request",
            Intent::ApproveRequest { .. } => "approve_request",
            Intent::RejectRequest { .. } => "reject_request",
            Intent::DeleteRequest { .. } => "delete_request",
        }
    }
}

/// Intent outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentOutcome {
    /// Whether the intent was applied
    pub success: bool,
    /// `Success` or the failure code
    pub code: ErrorCode,
    /// Message for the user
    pub message: String,
    /// Affected record ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl IntentOutcome {
    /// Successful outcome
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            code: ErrorCode::Success,
            message: message.into(),
            id: None,
        }
    }

    /// Successful outcome (with ID)
    pub fn ok_with_id(message: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            success: true,
            code: ErrorCode::Success,
            message: message.into(),
            id: Some(id.into()),
        }
    }

    /// Failed outcome
    pub fn err(err: &AppError) -> Self {
        Self {
            success: false,
            code: err.code,
            message: err.message.clone(),
            id: None,
        }
    }
}

impl From<AppError> for IntentOutcome {
    fn from(err: AppError) -> Self {
        Self::err(&err)
    }
}
