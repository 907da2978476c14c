//! Authentication module
//!
//! - [`Session`]: signed-in identity + remember-me token
//! - [`permissions`]: role checks used by the domain services

pub mod permissions;
pub mod session;

pub use permissions::{require_admin, require_authenticated};
pub use session::Session;
