//! StaffDesk - employee management kernel
//!
//! # Overview
//!
//! Accounts with registration and a simulated email verification,
//! departments, employee records and an equipment/leave request workflow
//! with admin review. All records live in one blob in a key-value slot and
//! are written back after every successful change.
//!
//! The kernel does not render anything: a [`view::View`] receives page
//! data and result messages, and sends user actions back as
//! [`shared::Intent`]s through [`App::submit_intent`].
//!
//! # Module layout
//!
//! ```text
//! staffdesk/src/
//! ├── core/       # Config, AppState, App
//! ├── db/         # key-value storage, collections blob, Store
//! ├── auth/       # Session, role checks
//! ├── router/     # route guard, router state
//! ├── services/   # accounts, departments, employees, requests
//! ├── handler/    # intent dispatch, page payloads
//! ├── view.rs     # View trait
//! └── utils/      # logger, validation, time
//! ```

pub mod auth;
pub mod core;
pub mod db;
pub mod handler;
pub mod router;
pub mod services;
pub mod utils;
pub mod view;

pub use auth::Session;
pub use core::{App, AppState, Config};
pub use db::{FileStorage, KvStorage, MemoryStorage, Store};
pub use view::{PageData, Severity, View};

pub use shared::{AppError, AppResult, ErrorCategory, ErrorCode, Intent, IntentOutcome, Route};

// Re-export logger functions
pub use utils::logger::{cleanup_old_logs, init_logger, init_logger_with_file};

/// Audit log helper - records data mutations
///
/// Audit lines go to the `audit` target, which the file logger keeps in
/// its own never-deleted directory.
///
/// # Examples
/// ```no_run
/// # use staffdesk::audit_log;
/// audit_log!("admin@example.com", "create", "department:42");
/// audit_log!("admin@example.com", "delete", "account:7", "bob@x.com");
/// ```
#[macro_export]
macro_rules! audit_log {
    ($actor:expr, $action:expr, $resource:expr) => {
        tracing::info!(
            target: "audit",
            actor = %$actor,
            action = %$action,
            resource = %$resource,
            timestamp = %chrono::Local::now().to_rfc3339(),
            "AUDIT"
        );
    };
    ($actor:expr, $action:expr, $resource:expr, $details:expr) => {
        tracing::info!(
            target: "audit",
            actor = %$actor,
            action = %$action,
            resource = %$resource,
            details = %$details,
            timestamp = %chrono::Local::now().to_rfc3339(),
            "AUDIT"
        );
    };
}

/// Security log helper - records sign-in related events
///
/// # Examples
/// ```no_run
/// # use staffdesk::security_log;
/// security_log!(WARN, "login_failed", email = "bob@x.com");
/// security_log!(INFO, "logout", email = "bob@x.com");
/// ```
#[macro_export]
macro_rules! security_log {
    (WARN, $event:expr, $($arg:tt)*) => {
        tracing::warn!(
            target: "security",
            event = $event,
            timestamp = %chrono::Local::now().to_rfc3339(),
            level = "WARN",
            $($arg)*
        );
    };
    (ERROR, $event:expr, $($arg:tt)*) => {
        tracing::error!(
            target: "security",
            event = $event,
            timestamp = %chrono::Local::now().to_rfc3339(),
            level = "ERROR",
            $($arg)*
        );
    };
    (INFO, $event:expr, $($arg:tt)*) => {
        tracing::info!(
            target: "security",
            event = $event,
            timestamp = %chrono::Local::now().to_rfc3339(),
            level = "INFO",
            $($arg)*
        );
    };
}

/// Read `.env`, load [`Config`] and start logging
///
/// Call once at process start, before [`App::bootstrap`].
pub fn setup_environment() -> anyhow::Result<Config> {
    // a missing .env file is fine
    let _ = dotenv::dotenv();

    let config = Config::from_env();
    init_logger_with_file(&config.log_level, config.log_json, config.log_dir.as_deref())?;
    tracing::info!(
        environment = %config.environment,
        data_dir = %config.data_dir.display(),
        "Environment ready"
    );
    Ok(config)
}
