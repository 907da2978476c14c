//! Utility module
//!
//! - [`logger`] - tracing subscriber setup
//! - [`validation`] - text / email / password checks used by the services
//! - [`time`] - date parsing and formatting

pub mod logger;
pub mod time;
pub mod validation;

pub use shared::error::{AppError, AppResult, ErrorCategory, ErrorCode};
