//! Data models
//!
//! Record types persisted in the collections blob, plus the input payloads
//! the view layer sends for each of them. All IDs are UUID strings.

pub mod account;
pub mod department;
pub mod employee;
pub mod request;

// Re-exports
pub use account::*;
pub use department::*;
pub use employee::*;
pub use request::*;
