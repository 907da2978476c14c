//! Unified error codes for StaffDesk
//!
//! This module defines all error codes reported by the kernel to the view layer.
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Account errors
//! - 4xxx: Department errors
//! - 5xxx: Employee errors
//! - 6xxx: Request errors
//! - 9xxx: System / storage errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility with the view layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (email/password)
    InvalidCredentials = 1002,
    /// Email not verified yet
    EmailNotVerified = 1003,
    /// No account is waiting for verification
    NothingToVerify = 1004,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Admin role required
    AdminRequired = 2003,

    // ==================== 3xxx: Account ====================
    /// Account not found
    AccountNotFound = 3001,
    /// Email already registered to another account
    EmailExists = 3002,
    /// Password too short
    PasswordTooShort = 3003,
    /// Caller tried to delete the signed-in account
    CannotDeleteSelf = 3004,

    // ==================== 4xxx: Department ====================
    /// Department not found
    DepartmentNotFound = 4001,
    /// Department name already exists
    DepartmentNameExists = 4002,
    /// Department still referenced by an employee
    DepartmentInUse = 4003,

    // ==================== 5xxx: Employee ====================
    /// Employee not found
    EmployeeNotFound = 5001,
    /// Employee ID already exists
    EmployeeIdExists = 5002,
    /// Employee references an unknown account email
    EmployeeAccountMissing = 5003,

    // ==================== 6xxx: Request ====================
    /// Request not found
    RequestNotFound = 6001,
    /// Request has no items
    RequestEmpty = 6002,
    /// Request item has an invalid name or quantity
    RequestItemInvalid = 6003,

    // ==================== 9xxx: System ====================
    InternalError = 9001,

    // ==================== 94xx: Storage ====================
    StorageUnavailable = 9400,
    StorageFull = 9401,
    StorageCorrupted = 9403,
}

impl ErrorCode {
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",

            // Auth
            ErrorCode::NotAuthenticated => "Please login first",
            ErrorCode::InvalidCredentials => "Invalid login OR not verified.",
            ErrorCode::EmailNotVerified => "Invalid login OR not verified.",
            ErrorCode::NothingToVerify => "No account found to verify.",

            // Permission
            ErrorCode::PermissionDenied => "Permission denied",
            ErrorCode::AdminRequired => "Administrator role is required",

            // Account
            ErrorCode::AccountNotFound => "Account not found",
            ErrorCode::EmailExists => "Email already exists.",
            ErrorCode::PasswordTooShort => "Password must be at least 6 characters.",
            ErrorCode::CannotDeleteSelf => "You cannot delete your own account.",

            // Department
            ErrorCode::DepartmentNotFound => "Department not found.",
            ErrorCode::DepartmentNameExists => "Department name already exists.",
            ErrorCode::DepartmentInUse => "Cannot delete: department is used by an employee.",

            // Employee
            ErrorCode::EmployeeNotFound => "Employee not found",
            ErrorCode::EmployeeIdExists => "Employee ID already exists.",
            ErrorCode::EmployeeAccountMissing => "User Email must match an existing account.",

            // Request
            ErrorCode::RequestNotFound => "Request not found",
            ErrorCode::RequestEmpty => "Please add at least one item.",
            ErrorCode::RequestItemInvalid => "Each item needs a name and a quantity of at least 1.",

            // System
            ErrorCode::InternalError => "Internal error",

            // Storage
            ErrorCode::StorageUnavailable => "Storage is unavailable",
            ErrorCode::StorageFull => "Storage quota exceeded",
            ErrorCode::StorageCorrupted => "Stored data is corrupted, reseed required",
        }
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when converting an unknown u16 into an [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::InvalidCredentials),
            1003 => Ok(ErrorCode::EmailNotVerified),
            1004 => Ok(ErrorCode::NothingToVerify),

            // Permission
            2001 => Ok(ErrorCode::PermissionDenied),
            2003 => Ok(ErrorCode::AdminRequired),

            // Account
            3001 => Ok(ErrorCode::AccountNotFound),
            3002 => Ok(ErrorCode::EmailExists),
            3003 => Ok(ErrorCode::PasswordTooShort),
            3004 => Ok(ErrorCode::CannotDeleteSelf),

            // Department
            4001 => Ok(ErrorCode::DepartmentNotFound),
            4002 => Ok(ErrorCode::DepartmentNameExists),
            4003 => Ok(ErrorCode::DepartmentInUse),

            // Employee
            5001 => Ok(ErrorCode::EmployeeNotFound),
            5002 => Ok(ErrorCode::EmployeeIdExists),
            5003 => Ok(ErrorCode::EmployeeAccountMissing),

            // Request
            6001 => Ok(ErrorCode::RequestNotFound),
            6002 => Ok(ErrorCode::RequestEmpty),
            6003 => Ok(ErrorCode::RequestItemInvalid),

            // System
            9001 => Ok(ErrorCode::InternalError),

            // Storage
            9400 => Ok(ErrorCode::StorageUnavailable),
            9401 => Ok(ErrorCode::StorageFull),
            9403 => Ok(ErrorCode::StorageCorrupted),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
