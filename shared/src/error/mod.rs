//! Unified error system for StaffDesk
//!
//! This module provides the error handling system shared by the kernel
//! and any view layer embedding it:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`ErrorKind`]: How the caller should treat the failure
//! - [`AppError`]: Rich error type with codes, messages, and details
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Account errors
//! - 4xxx: Department errors
//! - 5xxx: Employee errors
//! - 6xxx: Request errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ErrorKind};
//!
//! let err = AppError::new(ErrorCode::EmailExists);
//! assert_eq!(err.message, "Email already exists.");
//! assert_eq!(err.kind(), ErrorKind::Validation);
//!
//! let err = AppError::validation("Missing required field")
//!     .with_detail("field", "email");
//! assert!(err.details.is_some());
//! ```

mod category;
mod codes;
mod types;

pub use category::{ErrorCategory, ErrorKind};
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};
