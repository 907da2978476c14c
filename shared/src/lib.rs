//! Shared types for StaffDesk
//!
//! Record types, input payloads, intents, route tokens and the unified
//! error system used by the kernel and by any view layer embedding it.

pub mod error;
pub mod intent;
pub mod models;
pub mod route;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode, ErrorKind};
pub use intent::{CrudAction, Intent, IntentOutcome};
pub use route::Route;
